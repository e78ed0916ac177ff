//! Streaming checksums: CRC-32 (IEEE), CRC-64 (ECMA-182), XXH32 and XXH64.
//!
//! # Quick Start
//!
//! ```rust
//! // Free functions (pooled per thread)
//! assert_eq!(streamsum::crc32(b"123456789"), 0xCBF4_3926);
//! assert_eq!(streamsum::crc64(b"123456789"), 0x6C40_DF5F_0B49_7347);
//! assert_eq!(streamsum::xxhash32(b"abc"), 0x32D1_53FF);
//! assert_eq!(streamsum::xxhash64(b"abc"), 0x44BC_2CF5_AD77_0999);
//!
//! // Digest instances
//! use streamsum::{Crc32, IncrementalDigest};
//!
//! let mut crc = Crc32::new();
//! crc.append(b"1234");
//! crc.append(b"56789");
//! assert_eq!(crc.finalize_and_reset(), [0xCB, 0xF4, 0x39, 0x26]);
//! ```
//!
//! # Crate Organization
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `traits` | [`IncrementalDigest`], [`FastHash`], [`DigestError`] |
//! | `checksum` | [`Crc32`], [`Crc64`], kernel [`config`] and [`diag`], [`XorDecoder`] |
//! | `hashes` | [`Xxh32`], [`Xxh64`] |
//!
//! Everything is reachable from this crate; depend on the sub-crates directly
//! only for a smaller build.
//!
//! # Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Reader-based APIs and the free-function facade |
//!
//! Without `std` the digest types and one-shot hashes remain available.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
mod facade;

pub use checksum::{
  Crc32, Crc64, CrcConfig, CrcForce, CrcTunables, DigestError, IncrementalDigest, XorDecoder, config, diag,
};
#[cfg(feature = "std")]
pub use checksum::{DigestReader, DigestWriter, StreamError, append_xor_decoded, checksum_xor_decoded};
#[cfg(feature = "std")]
pub use facade::{
  crc32, crc32_bytes, crc32_decode_checksum, crc32_from_bytes, crc32_range, crc32_stream, crc64, crc64_bytes,
  crc64_stream, write_crc32_bytes, xxhash32, xxhash32_of, xxhash32_of_with_seed, xxhash32_str, xxhash32_str_with_seed,
  xxhash32_with_seed, xxhash64, xxhash64_of, xxhash64_of_with_seed, xxhash64_str, xxhash64_str_with_seed,
  xxhash64_with_seed,
};
pub use hashes::{
  FastHash,
  fast::{Xxh32, Xxh64},
};
