//! Fuzz target for the streaming APIs.
//!
//! Tests that arbitrary sequences of append calls, and readers returning
//! arbitrary short reads, produce the one-shot result.

#![no_main]

use std::io::Read;

use arbitrary::Arbitrary;
use checksum::{Crc32, Crc64, IncrementalDigest};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

/// Reader handing out the input in caller-chosen slices.
struct Chunked<'a> {
  data: &'a [u8],
  sizes: &'a [usize],
  idx: usize,
}

impl Read for Chunked<'_> {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let want = chunk_size(self.sizes, self.idx).min(buf.len()).min(self.data.len());
    self.idx += 1;
    let (head, tail) = self.data.split_at(want);
    buf[..want].copy_from_slice(head);
    self.data = tail;
    Ok(want)
  }
}

fn chunk_size(sizes: &[usize], idx: usize) -> usize {
  if sizes.is_empty() { 1 } else { (sizes[idx % sizes.len()] % 256).max(1) }
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  test_streaming::<Crc32>(data, &input.chunk_sizes);
  test_streaming::<Crc64>(data, &input.chunk_sizes);

  let mut reader = Chunked { data, sizes: &input.chunk_sizes, idx: 0 };
  let streamed = streamsum::crc32_stream(&mut reader).expect("in-memory reader");
  assert_eq!(streamed, streamsum::crc32(data), "crc32 reader mismatch");

  let mut reader = Chunked { data, sizes: &input.chunk_sizes, idx: 0 };
  let streamed = streamsum::crc64_stream(&mut reader).expect("in-memory reader");
  assert_eq!(streamed, streamsum::crc64(data), "crc64 reader mismatch");
});

fn test_streaming<D: IncrementalDigest>(data: &[u8], chunk_sizes: &[usize]) {
  let expected = D::checksum(data);

  let mut hasher = D::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let end = (offset + chunk_size(chunk_sizes, chunk_idx)).min(data.len());
    hasher.append(&data[offset..end]);
    // Peeking must not disturb the accumulator.
    let _ = hasher.value();
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.value_and_reset(), expected, "streaming mismatch");
  assert_eq!(hasher.value(), D::new().value(), "reset mismatch");
}
