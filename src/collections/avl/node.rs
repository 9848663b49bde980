use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::io::{Read, Write};
use std::ops::{Deref, DerefMut};

use log::trace;

use crate::persist::{Decoder, DecodeError, EncodeError, Encoder, MalformedTreeError};
use crate::util::fmt::indent_lines;

/// The key written in place of an absent child.
pub(crate) const NULL_MARKER: i32 = -1;

/// A decoded tree deeper than this can't be balanced: an AVL tree of this height would need more
/// nodes than fit in memory. Rejecting it early bounds the recursion depth of decoding.
pub(crate) const MAX_DECODED_HEIGHT: u32 = 64;

#[derive(Default, Clone)]
pub(crate) struct Branch(pub Option<Box<Node>>);

#[derive(Clone)]
pub(crate) struct Node {
    pub left: Branch,
    pub right: Branch,
    pub key: i32,
    pub height: u32,
}

impl Node {
    pub const fn leaf(key: i32) -> Node {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            height: 1,
        }
    }

    pub fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    pub fn balance(&self) -> i64 {
        self.left.height() as i64 - self.right.height() as i64
    }
}

/// The exclusive range of keys that may appear in a subtree being decoded.
#[derive(Clone, Copy, Default)]
pub(crate) struct KeyRange {
    lower: Option<i32>,
    upper: Option<i32>,
}

impl KeyRange {
    fn contains(&self, key: i32) -> bool {
        self.lower.is_none_or(|l| l < key) && self.upper.is_none_or(|u| key < u)
    }

    const fn below(self, key: i32) -> KeyRange {
        KeyRange {
            upper: Some(key),
            ..self
        }
    }

    const fn above(self, key: i32) -> KeyRange {
        KeyRange {
            lower: Some(key),
            ..self
        }
    }
}

impl Branch {
    pub fn height(&self) -> u32 {
        self.as_ref().map_or(0, |node| node.height)
    }

    pub fn balance(&self) -> i64 {
        self.as_ref().map_or(0, |node| node.balance())
    }

    /// Inserts `key` into the subtree, returning false if it was already present. Every node on
    /// the path back up is rebalanced.
    pub fn insert(&mut self, key: i32) -> bool {
        let Some(node) = &mut self.0 else {
            self.0 = Some(Box::new(Node::leaf(key)));
            return true;
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => node.left.insert(key),
            Ordering::Greater => node.right.insert(key),
            Ordering::Equal => false,
        };

        // Nothing below changed height if the key was already present.
        if inserted {
            self.rebalance_after_insert(key);
        }
        inserted
    }

    /// Removes `key` from the subtree, returning false if it wasn't present. Every node on the
    /// path back up is rebalanced.
    pub fn remove(&mut self, key: i32) -> bool {
        let Some(node) = &mut self.0 else {
            return false;
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => node.left.remove(key),
            Ordering::Greater => node.right.remove(key),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // Splice the in-order successor out of the right subtree and move only its
                    // key into this node, which keeps its position and children.
                    if let Some(successor) = node.right.take_first() {
                        node.key = successor;
                    }
                } else {
                    let child = match node.left.take() {
                        Some(left) => Some(left),
                        None => node.right.take(),
                    };
                    self.0 = child;
                }
                true
            },
        };

        if removed {
            self.rebalance_after_remove();
        }
        removed
    }

    /// Detaches the leftmost node of the subtree, returning its key. The subtree is rebalanced
    /// on the way back up.
    pub fn take_first(&mut self) -> Option<i32> {
        let node = self.0.as_mut()?;

        if node.left.is_some() {
            let first = node.left.take_first();
            self.rebalance_after_remove();
            first
        } else {
            let key = node.key;
            let right = node.right.take();
            self.0 = right;
            Some(key)
        }
    }

    pub fn contains(&self, key: i32) -> bool {
        let mut current = &self.0;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => &node.left.0,
                Ordering::Greater => &node.right.0,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn first(&self) -> Option<i32> {
        let mut node = self.as_ref()?;
        while let Some(left) = node.left.as_ref() {
            node = left;
        }
        Some(node.key)
    }

    pub fn last(&self) -> Option<i32> {
        let mut node = self.as_ref()?;
        while let Some(right) = node.right.as_ref() {
            node = right;
        }
        Some(node.key)
    }

    /// Makes the left child the root of this subtree. The former root becomes the new root's
    /// right child and adopts the new root's former right subtree as its left.
    pub fn rotate_right(&mut self) {
        let Some(mut y) = self.0.take() else {
            return;
        };
        let Some(mut x) = y.left.take() else {
            self.0 = Some(y);
            return;
        };

        trace!("rotating right: {} becomes the parent of {}", x.key, y.key);
        y.left = Branch(x.right.take());
        y.update_height();
        x.right = Branch(Some(y));
        x.update_height();
        self.0 = Some(x);
    }

    /// The mirror of [`Branch::rotate_right`].
    pub fn rotate_left(&mut self) {
        let Some(mut x) = self.0.take() else {
            return;
        };
        let Some(mut y) = x.right.take() else {
            self.0 = Some(x);
            return;
        };

        trace!("rotating left: {} becomes the parent of {}", y.key, x.key);
        x.right = Branch(y.left.take());
        x.update_height();
        y.left = Branch(Some(x));
        y.update_height();
        self.0 = Some(y);
    }

    /// Restores balance at the root of this subtree after `key` was inserted somewhere below it.
    /// Whether the heavy side needs a double rotation is decided by which side of the heavy
    /// child the new key went to.
    fn rebalance_after_insert(&mut self, key: i32) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.update_height();
        let balance = node.balance();

        if balance > 1 {
            if node.left.as_ref().is_some_and(|left| key > left.key) {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.as_ref().is_some_and(|right| key < right.key) {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    /// Restores balance at the root of this subtree after a removal somewhere below it. The
    /// heavy child's own balance decides whether a double rotation is required.
    fn rebalance_after_remove(&mut self) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.update_height();
        let balance = node.balance();

        if balance > 1 {
            if node.left.balance() < 0 {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.balance() > 0 {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    /// Writes the subtree in pre-order, with [`NULL_MARKER`] standing in for absent children.
    pub fn encode<W: Write>(&self, encoder: &mut Encoder<'_, W>) -> Result<(), EncodeError> {
        match &self.0 {
            Some(node) => {
                encoder.i32(node.key)?;
                node.left.encode(encoder)?;
                node.right.encode(encoder)
            },
            None => Ok(encoder.i32(NULL_MARKER)?),
        }
    }

    /// Reads a subtree written by [`Branch::encode`], counting decoded nodes into `len`.
    ///
    /// Heights are recomputed bottom-up rather than trusted, and every node is checked against
    /// the ordering and balance invariants as soon as its children are complete.
    pub fn decode<R: Read>(
        decoder: &mut Decoder<'_, R>,
        range: KeyRange,
        depth: u32,
        len: &mut usize,
    ) -> Result<Branch, DecodeError> {
        let key = decoder.i32()?;
        if key == NULL_MARKER {
            return Ok(Branch(None));
        }
        if depth >= MAX_DECODED_HEIGHT || !range.contains(key) {
            Err(MalformedTreeError)?
        }

        let left = Branch::decode(decoder, range.below(key), depth + 1, len)?;
        let right = Branch::decode(decoder, range.above(key), depth + 1, len)?;

        let mut node = Node {
            left,
            right,
            key,
            height: 0,
        };
        node.update_height();
        if node.balance().abs() > 1 {
            Err(MalformedTreeError)?
        }

        *len += 1;
        Ok(Branch(Some(Box::new(node))))
    }
}

impl Deref for Branch {
    type Target = Option<Box<Node>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Branch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Debug for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({} h{})\n{}",
                indent_lines("┌    ", &format!("{:?}", node.left)),
                node.key,
                node.height,
                indent_lines("└    ", &format!("{:?}", node.right)),
            ),
            None => write!(f, "-"),
        }
    }
}
