//! Free-function facade: vectors, oracles, error paths and instance reuse.

use std::io::{self, Cursor, Read};

use proptest::prelude::*;
use streamsum::{DigestError, StreamError};

const CRC32_ORACLE: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC64_ORACLE: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_ECMA_182);

fn xor_with(data: &[u8], key: &[u8], limit: usize) -> Vec<u8> {
  data
    .iter()
    .enumerate()
    .map(|(i, &b)| if i < limit { b ^ key[i % key.len()] } else { b })
    .collect()
}

/// Reader that counts how often it was called.
struct Counting<'a> {
  inner: &'a [u8],
  reads: usize,
}

impl Read for Counting<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    self.reads += 1;
    self.inner.read(buf)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Known vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_values() {
  assert_eq!(streamsum::crc32(b"123456789"), 0xCBF4_3926);
  assert_eq!(streamsum::crc64(b"123456789"), 0x6C40_DF5F_0B49_7347);
  assert_eq!(streamsum::xxhash32(b""), 0x02CC_5D05);
  assert_eq!(streamsum::xxhash64(b""), 0xEF46_DB37_51D8_E999);
  assert_eq!(streamsum::xxhash32_with_seed(0x9E37_79B1, b""), 0x36B7_8AE7);
  assert_eq!(streamsum::xxhash64_with_seed(0x9E37_79B1, b""), 0xAC75_FDA2_929B_17EF);
}

#[test]
fn empty_input_is_deterministic() {
  assert_eq!(streamsum::crc32(b""), 0);
  assert_eq!(streamsum::crc64(b""), 0);
  assert_eq!(streamsum::crc32_stream(&mut io::empty()).unwrap(), 0);
  assert_eq!(streamsum::crc64_stream(&mut io::empty()).unwrap(), 0);
}

#[test]
fn byte_forms_are_big_endian() {
  assert_eq!(streamsum::crc32_bytes(0xCBF4_3926), [0xCB, 0xF4, 0x39, 0x26]);
  assert_eq!(streamsum::crc64_bytes(0x6C40_DF5F_0B49_7347), [0x6C, 0x40, 0xDF, 0x5F, 0x0B, 0x49, 0x73, 0x47]);
}

#[test]
fn str_and_type_name_hashes() {
  assert_eq!(streamsum::xxhash32_str("abc"), 0x32D1_53FF);
  assert_eq!(streamsum::xxhash64_str("abc"), 0x44BC_2CF5_AD77_0999);
  assert_eq!(streamsum::xxhash32_of::<u64>(), streamsum::xxhash32(b"u64"));
  assert_eq!(streamsum::xxhash64_of::<str>(), streamsum::xxhash64(b"str"));
  assert_ne!(streamsum::xxhash64_of::<u32>(), streamsum::xxhash64_of::<i32>());
}

#[test]
fn seeded_str_and_type_name_hashes() {
  assert_eq!(streamsum::xxhash32_str_with_seed(0x9E37_79B1, ""), 0x36B7_8AE7);
  assert_eq!(streamsum::xxhash64_str_with_seed(0x9E37_79B1, ""), 0xAC75_FDA2_929B_17EF);
  assert_eq!(streamsum::xxhash32_str_with_seed(0, "abc"), streamsum::xxhash32_str("abc"));
  assert_eq!(streamsum::xxhash64_str_with_seed(7, "abc"), xxhash_rust::xxh64::xxh64(b"abc", 7));

  assert_eq!(streamsum::xxhash32_of_with_seed::<u64>(0), streamsum::xxhash32_of::<u64>());
  assert_eq!(streamsum::xxhash32_of_with_seed::<u64>(9), xxhash_rust::xxh32::xxh32(b"u64", 9));
  assert_eq!(streamsum::xxhash64_of_with_seed::<str>(9), streamsum::xxhash64_with_seed(9, b"str"));
  assert_ne!(streamsum::xxhash64_of_with_seed::<str>(9), streamsum::xxhash64_of::<str>());
}

// ─────────────────────────────────────────────────────────────────────────────
// Ranges and byte buffers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn crc32_range_matches_subslice() {
  let data = b"xx123456789yy";
  assert_eq!(streamsum::crc32_range(data, 2, 9), Ok(0xCBF4_3926));
  assert_eq!(streamsum::crc32_range(data, data.len(), 0), Ok(0));
}

#[test]
fn crc32_range_rejects_out_of_bounds() {
  let data = [0u8; 8];
  assert_eq!(
    streamsum::crc32_range(&data, 5, 4),
    Err(DigestError::InvalidRange { offset: 5, length: 4, len: 8 })
  );
  assert!(streamsum::crc32_range(&data, usize::MAX, 2).is_err());
  assert!(streamsum::crc32_range(&data, 9, 0).is_err());
}

#[test]
fn write_and_read_back_crc32_bytes() {
  let mut buf = [0u8; 6];
  streamsum::write_crc32_bytes(0xCBF4_3926, &mut buf, 1).unwrap();
  assert_eq!(buf, [0, 0xCB, 0xF4, 0x39, 0x26, 0]);
  assert_eq!(streamsum::crc32_from_bytes(&buf, 1), Ok(0xCBF4_3926));
}

#[test]
fn write_crc32_bytes_leaves_short_destination_untouched() {
  let mut buf = [0xAAu8; 5];
  assert_eq!(
    streamsum::write_crc32_bytes(1, &mut buf, 2),
    Err(DigestError::InvalidRange { offset: 2, length: 4, len: 5 })
  );
  assert_eq!(buf, [0xAA; 5]);
  assert!(streamsum::crc32_from_bytes(&buf, 2).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// XOR decode
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_negative_length_covers_whole_stream() {
  let plain = b"the quick brown fox";
  let key = b"k3y";
  let encoded = xor_with(plain, key, plain.len());
  let crc = streamsum::crc32_decode_checksum(&mut encoded.as_slice(), key, -1).unwrap();
  assert_eq!(crc, streamsum::crc32(plain));
}

#[test]
fn decode_stops_at_limit_and_keeps_reading() {
  let data = b"0123456789abcdef";
  let key = b"\x5A\xA5";
  for limit in [0usize, 1, 3, 15, 16, 40] {
    let expected = streamsum::crc32(&xor_with(data, key, limit));
    let got = streamsum::crc32_decode_checksum(&mut data.as_slice(), key, limit as i64).unwrap();
    assert_eq!(got, expected, "limit={limit}");
  }
}

#[test]
fn decode_key_position_carries_across_chunks() {
  let data: Vec<u8> = (0..10_000u32).map(|i| (i * 7) as u8).collect();
  let key = b"seven";
  let expected = CRC32_ORACLE.checksum(&xor_with(&data, key, 9_001));
  let got = streamsum::crc32_decode_checksum(&mut Cursor::new(&data), key, 9_001).unwrap();
  assert_eq!(got, expected);
}

#[test]
fn decode_empty_key_fails_before_reading() {
  let mut reader = Counting { inner: b"abc", reads: 0 };
  let err = streamsum::crc32_decode_checksum(&mut reader, b"", -1).unwrap_err();
  assert!(matches!(err, StreamError::Digest(DigestError::InvalidArgument(_))));
  assert_eq!(reader.reads, 0);
  assert_eq!(streamsum::crc32(b"123456789"), 0xCBF4_3926);
}

#[test]
fn decode_surfaces_io_errors() {
  struct Broken;
  impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::UnexpectedEof, "gone"))
    }
  }

  let err = streamsum::crc32_decode_checksum(&mut Broken, b"k", -1).unwrap_err();
  assert!(matches!(err, StreamError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
  assert_eq!(streamsum::crc32(b""), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Instance reuse
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reader_that_checksums_while_being_read() {
  /// Reader whose every call computes an unrelated CRC on the same thread.
  struct Nested<'a>(&'a [u8]);
  impl Read for Nested<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      assert_eq!(streamsum::crc32(b"123456789"), 0xCBF4_3926);
      let n = self.0.len().min(buf.len()).min(5);
      buf[..n].copy_from_slice(&self.0[..n]);
      self.0 = &self.0[n..];
      Ok(n)
    }
  }

  let data = b"nested facade calls must not interfere";
  assert_eq!(streamsum::crc32_stream(&mut Nested(data)).unwrap(), CRC32_ORACLE.checksum(data));
}

#[test]
fn threads_do_not_share_state() {
  let handles: Vec<_> = (0..4u8)
    .map(|t| {
      std::thread::spawn(move || {
        let data: Vec<u8> = (0..5_000u32).map(|i| (i as u8) ^ t).collect();
        for _ in 0..50 {
          assert_eq!(streamsum::crc64(&data), CRC64_ORACLE.checksum(&data));
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }
}

proptest! {
  #[test]
  fn crc32_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
    prop_assert_eq!(streamsum::crc32(&data), CRC32_ORACLE.checksum(&data));
    prop_assert_eq!(streamsum::crc32_stream(&mut data.as_slice()).unwrap(), CRC32_ORACLE.checksum(&data));
  }

  #[test]
  fn crc64_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
    prop_assert_eq!(streamsum::crc64(&data), CRC64_ORACLE.checksum(&data));
    prop_assert_eq!(streamsum::crc64_stream(&mut data.as_slice()).unwrap(), CRC64_ORACLE.checksum(&data));
  }

  #[test]
  fn xxhash_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..512), seed in any::<u64>()) {
    prop_assert_eq!(streamsum::xxhash32_with_seed(seed as u32, &data), xxhash_rust::xxh32::xxh32(&data, seed as u32));
    prop_assert_eq!(streamsum::xxhash64_with_seed(seed, &data), xxhash_rust::xxh64::xxh64(&data, seed));
  }

  #[test]
  fn sequential_calls_never_leak(a in proptest::collection::vec(any::<u8>(), 0..256),
                                 b in proptest::collection::vec(any::<u8>(), 0..256)) {
    let first = streamsum::crc32(&a);
    let second = streamsum::crc32(&b);
    prop_assert_eq!(second, CRC32_ORACLE.checksum(&b));
    prop_assert_eq!(streamsum::crc32(&a), first);
  }
}
