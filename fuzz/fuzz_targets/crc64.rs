//! Fuzz target for CRC-64 (ECMA-182).
//!
//! Tests that:
//! - Incremental updates and resume match one-shot
//! - Appending the big-endian digest drives the checksum to zero
//! - Every kernel agrees with the bitwise reference

#![no_main]

use arbitrary::Arbitrary;
use checksum::{
  Crc64, IncrementalDigest,
  __internal::{bytewise_64_msb, crc64_bitwise_msb, slice8_64_msb},
  tables::{CRC64_ECMA_POLY, CRC64_ECMA_TABLES_8},
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let oneshot = Crc64::checksum(data);

  let (a, b) = data.split_at(split);
  let mut hasher = Crc64::new();
  hasher.append_vectored(&[a, b]);
  assert_eq!(hasher.value(), oneshot, "incremental mismatch");

  let mut resumed = Crc64::resume(Crc64::checksum(a));
  resumed.append(b);
  assert_eq!(resumed.value(), oneshot, "resume mismatch");

  // Residue
  hasher.append(&Crc64::digest(data));
  assert_eq!(hasher.value(), 0, "residue mismatch");

  assert_eq!(crc64_bitwise_msb(CRC64_ECMA_POLY, 0, data), oneshot, "reference mismatch");
  assert_eq!(bytewise_64_msb(0, data, &CRC64_ECMA_TABLES_8[0]), oneshot, "bytewise mismatch");
  assert_eq!(slice8_64_msb(0, data, &CRC64_ECMA_TABLES_8), oneshot, "slice8 mismatch");
});
