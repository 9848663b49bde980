use std::iter::FusedIterator;
use std::slice;

use super::{OpenHashMap, Slot};

/// A borrowed iterator over the live entries of an [`OpenHashMap`], in slot order.
pub struct Iter<'a> {
    pub(crate) inner: slice::Iter<'a, Slot>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.inner.by_ref() {
            if let Slot::Live(entry) = slot {
                self.len -= 1;
                return Some((entry.key, entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OpenHashMap {
    type Item = (i32, i32);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.slots.iter(),
            len: self.len,
        }
    }
}
