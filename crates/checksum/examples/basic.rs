//! Basic checksum usage: one-shot, streaming, resume, and XOR decode.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Crc32, Crc64, IncrementalDigest};

fn main() -> Result<(), checksum::StreamError> {
  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
  xor_decode_example()?;
  introspection();
  Ok(())
}

/// One-shot computation: all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-32 (IEEE) - Ethernet, gzip, zip, PNG
  let crc32 = Crc32::checksum(data);
  println!("CRC-32 (IEEE):     0x{crc32:08X}  bytes {:02X?}", Crc32::digest(data));
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-64 (ECMA-182)
  let crc64 = Crc64::checksum(data);
  println!("CRC-64 (ECMA-182): 0x{crc64:016X}");
  assert_eq!(crc64, 0x6C40_DF5F_0B49_7347);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let mut hasher = Crc32::new();
  hasher.append(b"1234");
  hasher.append(b"56789");
  println!("Streaming CRC-32: 0x{:08X}", hasher.value());

  // Peeking is non-consuming: can continue after
  hasher.append(b"...");
  println!("Extended CRC-32:  0x{:08X}", hasher.value());

  // finalize_and_reset() hands back the bytes and clears state for reuse
  let bytes = hasher.finalize_and_reset();
  println!("Finalized bytes:  {bytes:02X?}");
  assert_eq!(hasher.value(), 0);

  println!();
}

/// Resume from a previously published checksum.
fn resume_example() {
  println!("--- Resume ---\n");

  let published = Crc64::checksum(b"first half, ");
  let mut resumed = Crc64::resume(published);
  resumed.append(b"second half");
  assert_eq!(resumed.value(), Crc64::checksum(b"first half, second half"));
  println!("Resumed CRC-64:   0x{:016X}\n", resumed.value());
}

/// Checksum an obfuscated payload without materializing the decoded bytes.
fn xor_decode_example() -> Result<(), checksum::StreamError> {
  println!("--- XOR Decode ---\n");

  let key = b"secret";
  let plain = b"payload that was shipped obfuscated";
  let encoded: Vec<u8> = plain.iter().zip(key.iter().cycle()).map(|(b, k)| b ^ k).collect();

  let crc = Crc32::checksum_xor_decoded(&mut encoded.as_slice(), key, None)?;
  println!("Decoded CRC-32:   0x{crc:08X}");
  assert_eq!(crc, Crc32::checksum(plain));
  println!();
  Ok(())
}

/// Which kernel runs, and why.
fn introspection() {
  println!("--- Kernel Selection ---\n");
  println!("config:  {:?}", Crc32::config());
  println!("backend: {}", Crc32::backend_name());
  for len in [8, 64, 4096] {
    let diag = checksum::diag::crc64(len);
    println!("crc64 len={len:>5}: {} ({:?})", diag.selected_kernel, diag.reason);
  }
}
