//! Core digest traits for streamsum.
//!
//! This crate provides the contracts every streamsum algorithm conforms to. It
//! is `no_std` compatible; the `std` feature adds reader-based streaming and
//! the I/O adapters.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`IncrementalDigest`] | Stateful checksums folded across many calls | CRC-32, CRC-64 |
//! | [`FastHash`] | One-shot seeded non-cryptographic hashes | xxHash32, xxHash64 |
//!
//! # Error Types
//!
//! - [`DigestError`] - Argument errors (ranges, destination buffers, keys)
//! - [`StreamError`] - Argument or I/O errors from reader-based operations (`std`)
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
mod fast_hash;
#[cfg(feature = "std")]
pub mod io;

pub use digest::IncrementalDigest;
pub use error::DigestError;
#[cfg(feature = "std")]
pub use error::StreamError;
pub use fast_hash::FastHash;

/// Chunk size used when folding a reader into a digest.
///
/// Every reader-based operation in streamsum reads through a scratch buffer of
/// exactly this many bytes.
pub const STREAM_CHUNK_BYTES: usize = 4096;
