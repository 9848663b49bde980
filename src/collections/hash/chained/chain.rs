use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;

type Link = Option<Box<ChainNode>>;

/// A node of a [`Chain`]. Chains are built by pushing to the front, so nodes are only ever
/// allocated in [`Chain::push_front`].
pub(crate) struct ChainNode {
    pub key: i32,
    pub value: i32,
    pub next: Link,
}

/// A singly-linked bucket of a [`ChainedHashMap`](super::ChainedHashMap), ordered from the most
/// recently inserted entry to the oldest.
#[derive(Default)]
pub(crate) struct Chain {
    head: Link,
    len: usize,
}

impl Chain {
    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn push_front(&mut self, key: i32, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(ChainNode { key, value, next }));
        self.len += 1;
    }

    /// Returns the value of the first node holding `key`.
    pub fn get(&self, key: i32) -> Option<i32> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Unlinks the first node holding `key` and returns its value.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let node = link.take()?;
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            curr: self.head.as_deref(),
            len: self.len,
        }
    }
}

impl Clone for Chain {
    fn clone(&self) -> Self {
        // Rebuilt back to front so that the clone has the same order.
        let mut pairs: Vec<_> = self.iter().collect();
        let mut chain = Chain::default();
        while let Some((key, value)) = pairs.pop() {
            chain.push_front(key, value);
        }
        chain
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Dropping the boxes recursively would overflow the stack for long chains.
        self.clear();
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.head.is_none() {
            return write!(f, "-");
        }

        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({key}: {value})")?;
            first = false;
        }
        Ok(())
    }
}

/// A borrowed iterator over a single [`Chain`], from head to tail.
pub(crate) struct ChainIter<'a> {
    curr: Option<&'a ChainNode>,
    len: usize,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next.as_deref();
        self.len -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for ChainIter<'_> {}

impl FusedIterator for ChainIter<'_> {}
