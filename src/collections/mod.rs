//! Keyed collections over `i32`s, each with a binary representation through
//! [`Persist`](crate::persist::Persist).
//!
//! # Purpose
//! These types exist to get the invariants right: balance factors after every rotation, probe
//! sequences that always terminate, tombstones that never count as entries, and chains that come
//! back from disk in the order they were written.

#[cfg(feature = "avl")]
pub mod avl;
#[cfg(any(feature = "open", feature = "chained"))]
pub mod hash;

#[doc(inline)]
#[cfg(feature = "avl")]
pub use avl::AvlTree;
