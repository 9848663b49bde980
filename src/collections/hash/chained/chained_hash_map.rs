use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{Read, Write};

use log::debug;

use super::{Chain, Iter};
use crate::collections::hash::bucket_index;
use crate::persist::{Decoder, DecodeError, EncodeError, Encoder, Persist, SizeMismatchError};
use crate::util::fmt::DebugRaw;

/// The capacity used by [`ChainedHashMap::new`].
pub const DEFAULT_CAP: usize = 8;

const MIN_ALLOCATED_CAP: usize = 1;

/// A map of `i32` keys to `i32` values, resolving collisions with a singly-linked chain per bucket.
///
/// The number of buckets is fixed when the map is created (or decoded) and never changes.
///
/// Insertion always adds a new node to the front of the key's chain, without looking for an
/// existing entry. Inserting the same key twice therefore leaves two entries: [`get`] sees the
/// most recent one and [`remove`] unlinks only that one, uncovering the older value.
///
/// [`get`]: ChainedHashMap::get
/// [`remove`]: ChainedHashMap::remove
///
/// # Persistence
/// The binary representation is `len: usize`, `cap: usize`, then for each bucket the chain length
/// as a `usize` followed by its `{key: i32, value: i32}` pairs from head to tail. Decoding
/// reproduces every chain in the same order.
#[derive(Clone)]
pub struct ChainedHashMap {
    pub(crate) buckets: Box<[Chain]>,
    pub(crate) len: usize,
}

impl ChainedHashMap {
    /// Creates a new ChainedHashMap with [`DEFAULT_CAP`] buckets.
    pub fn new() -> ChainedHashMap {
        ChainedHashMap::with_cap(DEFAULT_CAP)
    }

    /// Creates a new ChainedHashMap with `cap` buckets. A capacity of 0 is raised to 1.
    pub fn with_cap(cap: usize) -> ChainedHashMap {
        ChainedHashMap {
            buckets: empty_buckets(cmp::max(cap, MIN_ALLOCATED_CAP)),
            len: 0,
        }
    }

    /// Returns the number of entries in the map, counting every duplicate.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets.
    pub const fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Adds the provided `key`-`value` pair to the front of the key's chain.
    pub fn insert(&mut self, key: i32, value: i32) {
        let index = bucket_index(key, self.cap());
        self.buckets[index].push_front(key, value);
        self.len += 1;
    }

    /// Returns the most recently inserted value for `key`, if any.
    pub fn get(&self, key: i32) -> Option<i32> {
        self.bucket(key).get(key)
    }

    /// Returns true if there is at least one entry for `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Removes the most recently inserted entry for `key` and returns its value. Older entries
    /// for the same key are kept.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let index = bucket_index(key, self.cap());
        let value = self.buckets[index].remove(key)?;
        self.len -= 1;
        Some(value)
    }

    /// Returns an iterator over every entry, bucket by bucket, each from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    fn bucket(&self, key: i32) -> &Chain {
        &self.buckets[bucket_index(key, self.cap())]
    }
}

fn empty_buckets(cap: usize) -> Box<[Chain]> {
    (0..cap).map(|_| Chain::default()).collect()
}

impl Persist for ChainedHashMap {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), EncodeError> {
        let mut encoder = Encoder::new(writer);
        encoder.usize(self.len)?;
        encoder.usize(self.cap())?;
        for chain in &self.buckets {
            encoder.usize(chain.len())?;
            for (key, value) in chain.iter() {
                encoder.i32(key)?;
                encoder.i32(value)?;
            }
        }
        Ok(())
    }

    fn decode<R: Read>(reader: &mut R) -> Result<ChainedHashMap, DecodeError> {
        let mut decoder = Decoder::new(reader);
        let declared = decoder.usize()?;
        let cap = decoder.cap()?;

        let mut map = ChainedHashMap::with_cap(cap);
        let mut pairs = Vec::new();
        for _ in 0..cap {
            let chain_len = decoder.len("chain length")?;

            pairs.clear();
            for _ in 0..chain_len {
                pairs.push((decoder.i32()?, decoder.i32()?));
            }

            // Pushing to the front reverses, so the tail goes in first.
            for (key, value) in pairs.drain(..).rev() {
                map.insert(key, value);
            }
        }

        if map.len != declared {
            Err(SizeMismatchError {
                declared,
                actual: map.len,
            })?
        }

        debug!("decoded ChainedHashMap with {} entries in {cap} buckets", map.len);
        Ok(map)
    }

    fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }
}

impl Default for ChainedHashMap {
    fn default() -> Self {
        ChainedHashMap::new()
    }
}

impl FromIterator<(i32, i32)> for ChainedHashMap {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<(i32, i32)> for ChainedHashMap {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Debug for ChainedHashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field(
                "buckets",
                &self.buckets.iter().map(|chain| DebugRaw(chain.to_string())).collect::<Vec<_>>(),
            )
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for ChainedHashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
