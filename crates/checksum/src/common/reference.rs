//! Bitwise reference implementations.
//!
//! These process input one bit at a time and directly mirror the polynomial
//! division, so they are the source of truth every table kernel is checked
//! against. They are slow (~8 operations per bit) and selected only when
//! forced through configuration.
//!
//! # CRC Model
//!
//! | Parameter | CRC-32/IEEE | CRC-64/ECMA-182 |
//! |-----------|-------------|-----------------|
//! | `poly`    | 0xEDB88320 (reflected) | 0x42F0E1EBA9EA3693 (normal) |
//! | `init`    | 0xFFFFFFFF | 0 |
//! | `refin`/`refout` | true | false |
//! | `xorout`  | 0xFFFFFFFF | 0 |
//!
//! The functions return the raw register; the caller applies the final XOR.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use super::tables::{CRC32_IEEE_POLY, CRC64_ECMA_POLY};

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for CRC-32/IEEE)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-64 computation (normal, MSB-first).
///
/// Each byte enters at the top of the register.
///
/// # Arguments
///
/// * `poly` - Normal polynomial (e.g., 0x42F0E1EBA9EA3693 for CRC-64/ECMA-182)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc64_bitwise_msb(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u64) << 56;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & (1 << 63) != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/IEEE: init=0xFFFFFFFF, xorout=0xFFFFFFFF
const _: () = {
  let check = crc32_bitwise(CRC32_IEEE_POLY, !0u32, CHECK_INPUT) ^ !0u32;
  assert!(check == 0xCBF4_3926);
};

// CRC-64/ECMA-182: init=0, xorout=0
const _: () = {
  let check = crc64_bitwise_msb(CRC64_ECMA_POLY, 0, CHECK_INPUT);
  assert!(check == 0x6C40_DF5F_0B49_7347);
};
