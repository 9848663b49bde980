use std::iter::FusedIterator;

use super::{AvlTree, Branch, Node};

/// A borrowed iterator over the keys of an [`AvlTree`], in ascending order.
///
/// Holds the path of nodes whose left subtrees have been visited but which haven't been yielded
/// yet, so it never needs more than the height of the tree in extra space.
pub struct Iter<'a> {
    pub(crate) stack: Vec<&'a Node>,
    pub(crate) len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Branch, len: usize) -> Iter<'a> {
        let mut iter = Iter {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut branch: &'a Branch) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.len -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root, self.len)
    }
}
