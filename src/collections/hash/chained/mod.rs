//! A module containing [`ChainedHashMap`], a separately chained map with a fixed number of
//! buckets, and its borrowed iterator.

mod chain;
mod chained_hash_map;
mod iter;
mod proptests;
mod tests;

pub(crate) use chain::*;
pub use chained_hash_map::*;
pub use iter::*;
