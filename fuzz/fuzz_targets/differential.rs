//! Differential fuzzing against reference implementations.
//!
//! Compares our checksums against well-established crates to catch any
//! discrepancies.

#![no_main]

use libfuzzer_sys::fuzz_target;

const CRC32_ORACLE: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC64_ORACLE: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_ECMA_182);

fuzz_target!(|data: &[u8]| {
  let ours = streamsum::crc32(data);
  let reference = CRC32_ORACLE.checksum(data);
  assert_eq!(ours, reference, "CRC-32 mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}", data.len());

  let ours = streamsum::crc64(data);
  let reference = CRC64_ORACLE.checksum(data);
  assert_eq!(ours, reference, "CRC-64 mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}", data.len());

  // Seed from the input itself so seeded paths get coverage too.
  let seed = data.iter().take(8).fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

  let ours = hashes::fast::xxh32::xxh32(data, seed as u32);
  let reference = xxhash_rust::xxh32::xxh32(data, seed as u32);
  assert_eq!(ours, reference, "XXH32 mismatch: seed={seed:#x}, len={}", data.len());

  let ours = hashes::fast::xxh64::xxh64(data, seed);
  let reference = xxhash_rust::xxh64::xxh64(data, seed);
  assert_eq!(ours, reference, "XXH64 mismatch: seed={seed:#x}, len={}", data.len());
});
