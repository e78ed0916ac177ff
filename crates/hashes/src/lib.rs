//! Fast non-cryptographic hashes.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the streamsum workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**): XXH32 and XXH64.
//!
//! # Example
//!
//! ```rust
//! use hashes::{
//!   FastHash,
//!   fast::{Xxh32, Xxh64},
//! };
//!
//! let h32 = Xxh32::hash_with_seed(7, b"hello");
//! let h64 = Xxh64::hash(b"hello");
//! assert_eq!(h32, hashes::fast::xxh32::xxh32(b"hello", 7));
//! assert_eq!(h64, hashes::fast::xxh64::xxh64(b"hello", 0));
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod fast;

mod util;

pub use traits::FastHash;
