//! CRC-64/ECMA-182.
//!
//! Normal (MSB-first) polynomial `0x42F0E1EBA9EA3693`, init 0, no final XOR,
//! unreflected input and output. Byte output is big-endian, which gives the
//! residue property: appending the big-endian digest to a message yields a
//! CRC of zero.
//!
//! This is the plain ECMA-182 CRC, not the CRC-64/XZ variant (which reflects
//! and inverts).

use crate::common::{
  kernels::{self, Kernel},
  portable, reference,
  tables::{CRC64_ECMA_POLY, CRC64_ECMA_TABLES_8},
};

/// Fold `data` into a raw CRC-64 register with the configured kernel.
#[inline]
fn update_crc64(crc: u64, data: &[u8]) -> u64 {
  match kernels::select(crate::config::get(), data.len()).0 {
    Kernel::Reference => reference::crc64_bitwise_msb(CRC64_ECMA_POLY, crc, data),
    Kernel::Bytewise => portable::bytewise_64_msb(crc, data, &CRC64_ECMA_TABLES_8[0]),
    Kernel::Slice8 => portable::slice8_64_msb(crc, data, &CRC64_ECMA_TABLES_8),
  }
}

define_crc_type! {
  /// CRC-64/ECMA-182 checksum.
  ///
  /// # Example
  ///
  /// ```rust
  /// use checksum::{Crc64, IncrementalDigest};
  ///
  /// let mut crc = Crc64::new();
  /// crc.append(b"123456789");
  /// assert_eq!(crc.value(), 0x6C40_DF5F_0B49_7347);
  ///
  /// // Appending the digest drives the register to zero.
  /// crc.append(&crc.current_digest());
  /// assert_eq!(crc.value(), 0);
  /// ```
  pub struct Crc64 {
    state: u64,
    init: 0,
    xor_out: 0,
    update: update_crc64,
  }
}

impl Crc64 {
  /// Decode a big-endian 8-byte digest back into its integer form.
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; 8]) -> u64 {
    u64::from_be_bytes(bytes)
  }
}
