use std::fmt::{self, Debug, Display, Formatter};
use std::io::{Read, Write};

use log::debug;

use super::{Branch, Iter, KeyRange, NULL_MARKER};
use crate::persist::{Decoder, DecodeError, EncodeError, Encoder, Persist, ReservedKeyError};
use crate::util::fmt::DebugRaw;

/// An ordered set of `i32` keys, kept height-balanced by rotations so that every operation
/// descends at most `O(log n)` levels.
///
/// After every public operation, each node's cached height is `1 + max(left, right)` and its
/// balance factor (left height minus right height) is one of `-1`, `0` or `1`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the AvlTree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `find` | `O(log n)` |
/// | `first/last` | `O(log n)` |
/// | `encode/decode` | `O(n)` |
///
/// # Persistence
/// The binary representation is the pre-order sequence of keys as native-endian `i32`s, with
/// `-1` written for every absent child. Because of that marker, a tree containing the key `-1`
/// can't be encoded and [`Persist::encode`] returns a [`ReservedKeyError`] without writing
/// anything.
#[derive(Clone, Default)]
pub struct AvlTree {
    pub(crate) root: Branch,
    pub(crate) len: usize,
}

impl AvlTree {
    /// Creates a new, empty AvlTree.
    pub const fn new() -> AvlTree {
        AvlTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of keys in the AvlTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the AvlTree contains no keys.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree, which is 0 when empty.
    pub fn height(&self) -> u32 {
        self.root.height()
    }

    /// Inserts `key`, returning true if it wasn't already present. Inserting an existing key
    /// leaves the tree unchanged.
    pub fn insert(&mut self, key: i32) -> bool {
        let inserted = self.root.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key`, returning true if it was present. Removing an absent key leaves the tree
    /// unchanged.
    pub fn remove(&mut self, key: i32) -> bool {
        let removed = self.root.remove(key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if the AvlTree contains `key`.
    pub fn find(&self, key: i32) -> bool {
        self.root.contains(key)
    }

    /// An alias for [`AvlTree::find`].
    pub fn contains(&self, key: i32) -> bool {
        self.find(key)
    }

    /// Returns the smallest key, if any.
    pub fn first(&self) -> Option<i32> {
        self.root.first()
    }

    /// Returns the largest key, if any.
    pub fn last(&self) -> Option<i32> {
        self.root.last()
    }

    /// Returns the key at the root of the tree, if any.
    pub fn root(&self) -> Option<i32> {
        self.root.as_ref().map(|node| node.key)
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl Persist for AvlTree {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), EncodeError> {
        if self.find(NULL_MARKER) {
            Err(ReservedKeyError(NULL_MARKER))?
        }
        self.root.encode(&mut Encoder::new(writer))
    }

    fn decode<R: Read>(reader: &mut R) -> Result<AvlTree, DecodeError> {
        let mut len = 0;
        let root = Branch::decode(&mut Decoder::new(reader), KeyRange::default(), 0, &mut len)?;

        debug!("decoded AvlTree with {len} keys and height {}", root.height());
        Ok(AvlTree { root, len })
    }

    fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }
}

impl FromIterator<i32> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for AvlTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl PartialEq for AvlTree {
    /// Two trees are equal if they contain the same keys, regardless of shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for AvlTree {}

impl Debug for AvlTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl Display for AvlTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
