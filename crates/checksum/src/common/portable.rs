//! Portable table-driven CRC kernels.
//!
//! Two table algorithms per bit order:
//!
//! | Kernel | Bytes/iter | Tables | Notes |
//! |--------|------------|--------|-------|
//! | bytewise | 1 | 1×256 | The classic fold; fastest for a handful of bytes |
//! | slice-by-8 | 8 | 8×256 | Eight independent lookups per word |
//!
//! Both process the same message into the same register; the slice-by-8 tail
//! (< 8 bytes) is finished with the bytewise fold.
//!
//! The functions here work on the raw register: init and final XOR are the
//! caller's job.

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - Table indices use `& 0xFF`, `>> (W - 8)` or a single byte, all < 256
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// Reflected CRC-32 (LSB-first)
// ─────────────────────────────────────────────────────────────────────────────

/// Fold `data` one byte at a time into a reflected 32-bit register.
#[inline]
pub fn bytewise_32_reflected(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    crc = table[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

/// Fold `data` eight bytes at a time into a reflected 32-bit register.
#[inline]
pub fn slice8_32_reflected(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a & 0xFF) as usize]
      ^ tables[6][((a >> 8) & 0xFF) as usize]
      ^ tables[5][((a >> 16) & 0xFF) as usize]
      ^ tables[4][(a >> 24) as usize]
      ^ tables[3][(b & 0xFF) as usize]
      ^ tables[2][((b >> 8) & 0xFF) as usize]
      ^ tables[1][((b >> 16) & 0xFF) as usize]
      ^ tables[0][(b >> 24) as usize];
  }

  bytewise_32_reflected(crc, remainder, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// MSB-first CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// Fold `data` one byte at a time into an MSB-first 64-bit register.
#[inline]
pub fn bytewise_64_msb(mut crc: u64, data: &[u8], table: &[u64; 256]) -> u64 {
  for &byte in data {
    let index = ((crc >> 56) ^ u64::from(byte)) as usize;
    crc = table[index] ^ (crc << 8);
  }
  crc
}

/// Fold `data` eight bytes at a time into an MSB-first 64-bit register.
///
/// The first byte of each word is the one furthest from the end, so it takes
/// the table with the most trailing zero bytes.
#[inline]
pub fn slice8_64_msb(mut crc: u64, data: &[u8], tables: &[[u64; 256]; 8]) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_be_bytes(*chunk) ^ crc;

    crc = tables[7][(val >> 56) as usize]
      ^ tables[6][((val >> 48) & 0xFF) as usize]
      ^ tables[5][((val >> 40) & 0xFF) as usize]
      ^ tables[4][((val >> 32) & 0xFF) as usize]
      ^ tables[3][((val >> 24) & 0xFF) as usize]
      ^ tables[2][((val >> 16) & 0xFF) as usize]
      ^ tables[1][((val >> 8) & 0xFF) as usize]
      ^ tables[0][(val & 0xFF) as usize];
  }

  bytewise_64_msb(crc, remainder, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
