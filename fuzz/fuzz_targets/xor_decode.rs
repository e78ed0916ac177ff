//! Fuzz target for XOR decode-and-checksum.
//!
//! Checks the streaming decoder against decoding the whole buffer up front,
//! for every limit including none.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc32, Crc64, IncrementalDigest, XorDecoder, checksum_xor_decoded};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  key: Vec<u8>,
  limit: i64,
}

fuzz_target!(|input: Input| {
  let Input { data, key, limit } = input;

  let result = streamsum::crc32_decode_checksum(&mut data.as_slice(), &key, limit);
  if key.is_empty() {
    assert!(result.is_err(), "empty key accepted");
    return;
  }

  let decode_len = usize::try_from(limit).map_or(data.len(), |l| l.min(data.len()));
  let decoded: Vec<u8> = data
    .iter()
    .enumerate()
    .map(|(i, &b)| if i < decode_len { b ^ key[i % key.len()] } else { b })
    .collect();

  assert_eq!(result.expect("non-empty key"), Crc32::checksum(&decoded), "crc32 decode mismatch");

  let limit = u64::try_from(limit).ok();
  let crc64 = checksum_xor_decoded::<Crc64, _>(&mut data.as_slice(), &key, limit).expect("non-empty key");
  assert_eq!(crc64, Crc64::checksum(&decoded), "crc64 decode mismatch");

  // Splitting the buffer must not reset the key position.
  let mut split = data.clone();
  let mid = split.len() / 2;
  let mut decoder = XorDecoder::new(&key, limit).expect("non-empty key");
  let (head, tail) = split.split_at_mut(mid);
  decoder.decode_in_place(head);
  decoder.decode_in_place(tail);
  assert_eq!(split, decoded, "split decode mismatch");
});
