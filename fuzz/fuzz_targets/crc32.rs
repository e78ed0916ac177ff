//! Fuzz target for CRC-32 (IEEE).
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume produces correct results
//! - Every kernel agrees with the bitwise reference

#![no_main]

use arbitrary::Arbitrary;
use checksum::{
  Crc32, IncrementalDigest,
  __internal::{bytewise_32_reflected, crc32_bitwise, slice8_32_reflected},
  tables::{CRC32_IEEE_POLY, CRC32_IEEE_TABLES_8},
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

  // One-shot computation
  let oneshot = Crc32::checksum(data);

  // Incremental computation
  let (a, b) = data.split_at(split);
  let mut hasher = Crc32::new();
  hasher.append(a);
  hasher.append(b);
  assert_eq!(hasher.value(), oneshot, "incremental mismatch");
  assert_eq!(hasher.finalize_and_reset(), oneshot.to_be_bytes(), "byte form mismatch");
  assert_eq!(hasher, Crc32::new(), "reset mismatch");

  // Resume computation
  let mut resumed = Crc32::resume(Crc32::checksum(a));
  resumed.append(b);
  assert_eq!(resumed.value(), oneshot, "resume mismatch");

  // Kernels operate on the pre-xorout register
  let reference = crc32_bitwise(CRC32_IEEE_POLY, !0, data) ^ !0;
  let bytewise = bytewise_32_reflected(!0, data, &CRC32_IEEE_TABLES_8[0]) ^ !0;
  let slice8 = slice8_32_reflected(!0, data, &CRC32_IEEE_TABLES_8) ^ !0;
  assert_eq!(reference, oneshot, "reference mismatch");
  assert_eq!(bytewise, oneshot, "bytewise mismatch");
  assert_eq!(slice8, oneshot, "slice8 mismatch");
});
