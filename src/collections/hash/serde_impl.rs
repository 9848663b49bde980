use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "chained")]
use super::ChainedHashMap;
#[cfg(feature = "open")]
use super::OpenHashMap;
use crate::persist::MAX_DECODED_LEN;

#[derive(Serialize, Deserialize)]
struct EntryRepr {
    key: i32,
    value: i32,
}

/// The self-describing representation shared by both maps: the capacity and the entries in an
/// order that reproduces the map when replayed through `insert`.
#[derive(Serialize, Deserialize)]
struct HashMapRepr {
    cap: usize,
    entries: Vec<EntryRepr>,
}

impl HashMapRepr {
    fn new(cap: usize, entries: impl Iterator<Item = (i32, i32)>) -> HashMapRepr {
        HashMapRepr {
            cap,
            entries: entries.map(|(key, value)| EntryRepr { key, value }).collect(),
        }
    }

    fn checked_cap<E: serde::de::Error>(&self) -> Result<usize, E> {
        match self.cap {
            0 => Err(E::custom("capacity must be non-zero")),
            cap if cap > MAX_DECODED_LEN => Err(E::custom(format_args!(
                "declared capacity of {cap} exceeds the limit of {MAX_DECODED_LEN}"
            ))),
            cap => Ok(cap),
        }
    }
}

#[cfg(feature = "open")]
impl Serialize for OpenHashMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HashMapRepr::new(self.cap(), self.iter()).serialize(serializer)
    }
}

#[cfg(feature = "open")]
impl<'de> Deserialize<'de> for OpenHashMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = HashMapRepr::deserialize(deserializer)?;
        let mut map = OpenHashMap::with_cap(repr.checked_cap::<D::Error>()?);
        for EntryRepr { key, value } in repr.entries {
            if map.insert(key, value).is_some() {
                Err(D::Error::custom(format_args!("duplicate key {key}")))?
            }
        }
        Ok(map)
    }
}

#[cfg(feature = "chained")]
impl Serialize for ChainedHashMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Each chain is written tail first, since replaying pushes every entry to the front.
        let entries = self.buckets.iter().flat_map(|chain| {
            let mut pairs: Vec<_> = chain.iter().collect();
            pairs.reverse();
            pairs
        });
        HashMapRepr::new(self.cap(), entries).serialize(serializer)
    }
}

#[cfg(feature = "chained")]
impl<'de> Deserialize<'de> for ChainedHashMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = HashMapRepr::deserialize(deserializer)?;
        let mut map = ChainedHashMap::with_cap(repr.checked_cap::<D::Error>()?);
        map.extend(repr.entries.into_iter().map(|EntryRepr { key, value }| (key, value)));
        Ok(map)
    }
}
