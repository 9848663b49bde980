//! Keyed collections over `i32`s that can be written to disk and read back exactly.
//!
//! # Contents
//! - [`AvlTree`](collections::avl::AvlTree): an ordered key set, kept height-balanced by
//!   rotations.
//! - [`OpenHashMap`](collections::hash::open::OpenHashMap): a key-value map using open addressing
//!   with linear probing and tombstones, growing at a load factor of 7/10.
//! - [`ChainedHashMap`](collections::hash::chained::ChainedHashMap): a key-value map with a linked
//!   chain per bucket and a fixed bucket count. Inserting never replaces an older entry for the
//!   same key, it only shadows it.
//!
//! Every collection implements [`Persist`](persist::Persist), which reads and writes a compact,
//! native-endian binary representation.
//!
//! # Error Handling
//! Lookups and removals of absent keys aren't errors, they just return [`None`] or `false`. Only
//! persistence can fail, and when it does it reports errors in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Decoding never trusts its input: lengths are bounded before
//! allocating, and decoded structures are checked against their invariants.
//!
//! # Logging
//! Growth, decoding and file access are reported through the [`log`] facade. No logger is
//! installed here, that's left to the application.
//!
//! # Dependencies
//! The [`fs`] module of this crate relies on `libc` for its thin syscall wrappers, providing strong
//! typing over `errno`. It backs [`Persist::save`](persist::Persist::save) and
//! [`Persist::load`](persist::Persist::load) and is only available on Linux.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming. The optional `serde` feature adds self-describing
//! representations alongside the binary ones.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;
pub mod persist;

pub(crate) mod util;
