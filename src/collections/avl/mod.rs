//! A module containing [`AvlTree`] and its borrowed iterator.
//!
//! [`AvlTree`] is also re-exported under the parent module.

mod avl_tree;
mod iter;
mod node;
mod proptests;
#[cfg(feature = "serde")]
mod serde_impl;
mod tests;

pub use avl_tree::*;
pub use iter::*;
pub(crate) use node::*;
