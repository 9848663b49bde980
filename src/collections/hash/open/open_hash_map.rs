use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{Read, Write};
use std::mem;

use log::{debug, warn};

use super::{Entry, Iter, Slot};
use crate::collections::hash::bucket_index;
use crate::persist::{Decoder, DecodeError, EncodeError, Encoder, Persist, SizeMismatchError};
use crate::util::fmt::DebugRaw;

/// The capacity used by [`OpenHashMap::new`].
pub const DEFAULT_CAP: usize = 8;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// The outcome of probing for a key.
enum Probe {
    /// The key is live in the slot at this index.
    Found(usize),
    /// The key is absent and this is where it should be placed: the first tombstone along the
    /// probe sequence, or failing that, the empty slot that ended it.
    Vacant(usize),
    /// The key is absent and every slot holds some other live key.
    Full,
}

/// A map of `i32` keys to `i32` values, using open addressing with linear probing.
///
/// Removed entries leave a tombstone behind, so that lookups for keys further along the same
/// probe sequence don't stop early. Tombstones never count towards [`len`](OpenHashMap::len) and
/// are reused by insertions that pass over them.
///
/// The load factor is 7/10: if the map is at least 70% full when an insertion begins, the capacity
/// doubles and every live entry is rehashed (dropping all tombstones) before the new entry is
/// placed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the OpenHashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
///
/// \* Collisions and tombstones lengthen probe sequences, so these take additional time in
/// proportion to the length of the cluster the key falls into.
///
/// \** If the OpenHashMap has reached its load factor, `insert` will take `O(n)` to grow.
/// \* applies as well.
///
/// # Persistence
/// The binary representation is `len: usize`, `cap: usize`, then every slot in order as
/// `{key: i32, value: i32, occupied: bool, deleted: bool}`, including empty slots and tombstones.
#[derive(Clone)]
pub struct OpenHashMap {
    pub(crate) slots: Box<[Slot]>,
    pub(crate) len: usize,
}

impl OpenHashMap {
    /// Creates a new OpenHashMap with the default capacity of [`DEFAULT_CAP`].
    pub fn new() -> OpenHashMap {
        OpenHashMap::with_cap(DEFAULT_CAP)
    }

    /// Creates a new OpenHashMap with the provided `cap`acity. A capacity of 0 is raised to the
    /// smallest usable capacity.
    pub fn with_cap(cap: usize) -> OpenHashMap {
        OpenHashMap {
            slots: empty_slots(cmp::max(cap, MIN_ALLOCATED_CAP)),
            len: 0,
        }
    }

    /// Returns the number of live entries in the OpenHashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the OpenHashMap contains no live entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in the OpenHashMap.
    pub const fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Inserts the provided `key`-`value` pair, growing first if the load factor has been
    /// reached. If the key was already associated with a value, that value is replaced in place
    /// and returned.
    pub fn insert(&mut self, key: i32, value: i32) -> Option<i32> {
        if self.should_grow() {
            self.grow();
        }

        self.insert_unchecked(key, value)
    }

    /// Returns the value associated with `key`, if any.
    pub fn get(&self, key: i32) -> Option<i32> {
        match self.probe(key) {
            Probe::Found(index) => match self.slots[index] {
                Slot::Live(entry) => Some(entry.value),
                _ => None,
            },
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains(&self, key: i32) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Removes the entry associated with `key`, leaving a tombstone in its slot, and returns its
    /// value. Removing an absent key does nothing.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let Probe::Found(index) = self.probe(key) else {
            return None;
        };

        match self.slots[index] {
            Slot::Live(entry) => {
                self.slots[index] = Slot::Tombstone(entry);
                self.len -= 1;
                Some(entry.value)
            },
            Slot::Empty | Slot::Tombstone(_) => None,
        }
    }

    /// Returns an iterator over all live key-value pairs, in slot order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns the number of tombstones currently occupying slots.
    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_tombstone()).count()
    }
}

impl OpenHashMap {
    /// Determines whether the map has reached its load factor, meaning that it should grow
    /// before inserting another entry.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR >= self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Grows the map by the growth factor, rehashing every live entry into the new slots.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);
        debug!("growing OpenHashMap from {} to {new_cap} slots with {} entries", self.cap(), self.len);

        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));
        self.len = 0;

        for slot in old_slots {
            if let Slot::Live(entry) = slot {
                self.insert_unchecked(entry.key, entry.value);
            }
        }
    }

    /// Inserts without checking the load factor. If every slot holds a different live key, the
    /// entry is dropped.
    pub(crate) fn insert_unchecked(&mut self, key: i32, value: i32) -> Option<i32> {
        match self.probe(key) {
            Probe::Found(index) => match &mut self.slots[index] {
                Slot::Live(existing) => Some(mem::replace(&mut existing.value, value)),
                _ => None,
            },
            Probe::Vacant(index) => {
                self.slots[index] = Slot::Live(Entry { key, value });
                self.len += 1;
                None
            },
            Probe::Full => {
                warn!("dropped insertion of key {key}: all {} slots hold live entries", self.cap());
                None
            },
        }
    }

    /// Walks the probe sequence for `key`, starting at its bucket index and wrapping at the
    /// capacity. The walk ends at the live slot holding `key`, at an empty slot, or when it
    /// returns to where it started.
    fn probe(&self, key: i32) -> Probe {
        let start = bucket_index(key, self.cap());
        let mut index = start;
        let mut first_tombstone = None;

        loop {
            match &self.slots[index] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Slot::Live(entry) if entry.key == key => return Probe::Found(index),
                Slot::Live(_) => (),
                Slot::Tombstone(_) => {
                    first_tombstone.get_or_insert(index);
                },
            }

            index = (index + 1) % self.cap();
            if index == start {
                return first_tombstone.map_or(Probe::Full, Probe::Vacant);
            }
        }
    }
}

fn empty_slots(cap: usize) -> Box<[Slot]> {
    vec![Slot::Empty; cap].into_boxed_slice()
}

impl Persist for OpenHashMap {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), EncodeError> {
        let mut encoder = Encoder::new(writer);
        encoder.usize(self.len)?;
        encoder.usize(self.cap())?;
        for slot in &self.slots {
            slot.encode(&mut encoder)?;
        }
        Ok(())
    }

    fn decode<R: Read>(reader: &mut R) -> Result<OpenHashMap, DecodeError> {
        let mut decoder = Decoder::new(reader);
        let declared = decoder.usize()?;
        let cap = decoder.cap()?;

        let slots = (0..cap)
            .map(|index| Slot::decode(&mut decoder, index))
            .collect::<Result<Box<[Slot]>, _>>()?;

        let len = slots.iter().filter(|slot| slot.is_live()).count();
        if len != declared {
            Err(SizeMismatchError {
                declared,
                actual: len,
            })?
        }

        debug!("decoded OpenHashMap with {len} entries in {cap} slots");
        Ok(OpenHashMap { slots, len })
    }

    fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.len = 0;
    }
}

impl Default for OpenHashMap {
    fn default() -> Self {
        OpenHashMap::new()
    }
}

impl FromIterator<(i32, i32)> for OpenHashMap {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut map = OpenHashMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<(i32, i32)> for OpenHashMap {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Debug for OpenHashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHashMap")
            .field(
                "slots",
                &self.slots.iter().map(|slot| DebugRaw(slot.to_string())).collect::<Vec<_>>(),
            )
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for OpenHashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
