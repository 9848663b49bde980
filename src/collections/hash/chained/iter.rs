use std::iter::FusedIterator;
use std::slice;

use super::{Chain, ChainIter, ChainedHashMap};

/// A borrowed iterator over the entries of a [`ChainedHashMap`]. Buckets are visited in index
/// order and each chain from head to tail, so duplicates of a key appear newest first.
pub struct Iter<'a> {
    pub(crate) buckets: slice::Iter<'a, Chain>,
    pub(crate) chain: Option<ChainIter<'a>>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ChainedHashMap {
    type Item = (i32, i32);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len,
        }
    }
}
