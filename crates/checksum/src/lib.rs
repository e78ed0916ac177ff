//! Table-driven CRC checksums.
//!
//! # Supported Algorithms
//!
//! | Type | Polynomial | Init / XorOut | Output | Use Cases |
//! |------|------------|---------------|--------|-----------|
//! | [`Crc32`] | 0x04C11DB7 (reflected) | `!0` / `!0` | `u32` | Ethernet, gzip, zip, PNG |
//! | [`Crc64`] | 0x42F0E1EBA9EA3693 | `0` / `0` | `u64` | ECMA-182 framing, DLT tapes |
//!
//! Digest bytes are big-endian for both.
//!
//! # Kernels
//!
//! | Kernel | Selected |
//! |--------|----------|
//! | `reference/bitwise` | Only when forced |
//! | `portable/bytewise` | Inputs shorter than the crossover (default 32 bytes) |
//! | `portable/slice8` | Everything else |
//!
//! All kernels produce identical results. See [`config`] for overrides and
//! [`diag`] for selection introspection.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Crc32, Crc64, IncrementalDigest};
//!
//! // One-shot computation
//! let crc = Crc32::checksum(b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc64::new();
//! hasher.append(b"1234");
//! hasher.append(b"56789");
//! assert_eq!(hasher.value(), 0x6C40_DF5F_0B49_7347);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod config;
mod crc32;
mod crc64;
pub mod diag;
mod xor;

/// Compile-time CRC tables and the generators that build them.
pub mod tables {
  pub use crate::common::tables::*;
}

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::{
    kernels::{Kernel, PORTABLE_BYTEWISE, PORTABLE_SLICE8, REFERENCE, select},
    portable::{bytewise_32_reflected, bytewise_64_msb, slice8_32_reflected, slice8_64_msb},
    reference::{crc32_bitwise, crc64_bitwise_msb},
  };
}

pub use config::{CrcConfig, CrcForce, CrcTunables};
pub use crc32::Crc32;
pub use crc64::Crc64;
// Re-export traits for convenience
pub use traits::{DigestError, IncrementalDigest};
#[cfg(feature = "std")]
pub use traits::{StreamError, io::DigestReader, io::DigestWriter};
pub use xor::XorDecoder;
#[cfg(feature = "std")]
pub use xor::{append_xor_decoded, checksum_xor_decoded};
