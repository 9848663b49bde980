//! Hash maps from `i32` keys to `i32` values, with two collision strategies.
//!
//! Both maps place a key in bucket `|key| % cap`. [`OpenHashMap`] probes linearly for a free slot
//! and grows past a load factor of 7/10, while [`ChainedHashMap`] keeps a linked chain per bucket
//! and never grows.

#[cfg(feature = "chained")]
pub mod chained;
mod index;
#[cfg(feature = "open")]
pub mod open;
#[cfg(feature = "serde")]
mod serde_impl;

pub(crate) use index::*;

#[doc(inline)]
#[cfg(feature = "chained")]
pub use chained::ChainedHashMap;
#[doc(inline)]
#[cfg(feature = "open")]
pub use open::OpenHashMap;
