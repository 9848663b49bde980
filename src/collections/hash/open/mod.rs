//! A module containing [`OpenHashMap`], an open-addressing map with linear probing, and its
//! borrowed iterator.

mod iter;
mod open_hash_map;
mod proptests;
mod slot;

pub use iter::*;
pub use open_hash_map::*;
pub(crate) use slot::*;
