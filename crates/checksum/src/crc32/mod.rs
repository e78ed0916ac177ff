//! CRC-32/IEEE 802.3 (Ethernet, ZIP, PNG).
//!
//! Reflected polynomial `0xEDB88320`, init and final XOR `0xFFFFFFFF`. The
//! register is kept pre-inverted, so [`Crc32::resume`] is a single XOR.
//! Byte output is big-endian.

use traits::{DigestError, IncrementalDigest};

use crate::common::{
  kernels::{self, Kernel},
  portable, reference,
  tables::{CRC32_IEEE_POLY, CRC32_IEEE_TABLES_8},
};

/// Fold `data` into a raw CRC-32 register with the configured kernel.
#[inline]
fn update_crc32(crc: u32, data: &[u8]) -> u32 {
  match kernels::select(crate::config::get(), data.len()).0 {
    Kernel::Reference => reference::crc32_bitwise(CRC32_IEEE_POLY, crc, data),
    Kernel::Bytewise => portable::bytewise_32_reflected(crc, data, &CRC32_IEEE_TABLES_8[0]),
    Kernel::Slice8 => portable::slice8_32_reflected(crc, data, &CRC32_IEEE_TABLES_8),
  }
}

define_crc_type! {
  /// CRC-32/IEEE 802.3 checksum.
  ///
  /// # Example
  ///
  /// ```rust
  /// use checksum::{Crc32, IncrementalDigest};
  ///
  /// let mut crc = Crc32::new();
  /// crc.append(b"1234");
  /// crc.append(b"56789");
  /// assert_eq!(crc.value(), 0xCBF4_3926);
  /// assert_eq!(crc.current_digest(), [0xCB, 0xF4, 0x39, 0x26]);
  /// ```
  pub struct Crc32 {
    state: u32,
    init: !0,
    xor_out: !0,
    update: update_crc32,
  }
}

impl Crc32 {
  /// CRC-32 of `data[offset..offset + length]`.
  ///
  /// Fails with [`DigestError::InvalidRange`] when the range does not fit in
  /// `data` (including when `offset + length` overflows).
  ///
  /// ```rust
  /// use checksum::Crc32;
  ///
  /// assert_eq!(Crc32::checksum_range(b"xx123456789yy", 2, 9), Ok(0xCBF4_3926));
  /// assert!(Crc32::checksum_range(b"abc", 2, 2).is_err());
  /// ```
  pub fn checksum_range(data: &[u8], offset: usize, length: usize) -> Result<u32, DigestError> {
    let range = DigestError::check_range(offset, length, data.len())?;
    data
      .get(range)
      .map(Self::checksum)
      .ok_or(DigestError::InvalidRange { offset, length, len: data.len() })
  }

  /// CRC-32 of a stream whose first `limit` bytes are XOR-obfuscated with the
  /// repeating `key`.
  ///
  /// See [`checksum_xor_decoded`](crate::checksum_xor_decoded) for the exact
  /// semantics.
  #[cfg(feature = "std")]
  pub fn checksum_xor_decoded<R: std::io::Read + ?Sized>(
    reader: &mut R,
    key: &[u8],
    limit: Option<u64>,
  ) -> Result<u32, traits::StreamError> {
    crate::xor::checksum_xor_decoded::<Self, R>(reader, key, limit)
  }

  /// Decode a big-endian 4-byte digest back into its integer form.
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
  }
}
