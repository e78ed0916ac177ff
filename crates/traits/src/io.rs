//! I/O adapters for incremental digests.
//!
//! - [`DigestReader`] folds every byte read through it
//! - [`DigestWriter`] folds every byte written through it
//!
//! Both handle short reads and writes: only the bytes actually transferred are
//! folded.
//!
//! # Example
//!
//! ```rust
//! # use traits::IncrementalDigest;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl IncrementalDigest for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   type Bytes = [u8; 4];
//! #   fn new() -> Self { Self(0) }
//! #   fn append(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn value(&self) -> u32 { self.0 }
//! #   fn to_bytes(value: u32) -> [u8; 4] { value.to_be_bytes() }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.value(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Read, Write};

use crate::IncrementalDigest;

/// Read `reader` to end of stream through `buf`, handing each filled chunk to
/// `on_chunk`. Returns the total number of bytes read.
///
/// `Interrupted` reads are retried; any other error is returned as is.
pub fn drain<R>(reader: &mut R, buf: &mut [u8], mut on_chunk: impl FnMut(&mut [u8])) -> io::Result<u64>
where
  R: Read + ?Sized,
{
  let mut total = 0u64;
  loop {
    let n = match reader.read(buf) {
      Ok(0) => return Ok(total),
      Ok(n) => n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    };
    if let Some(chunk) = buf.get_mut(..n) {
      on_chunk(chunk);
    }
    total = total.wrapping_add(n as u64);
  }
}

/// Wraps a [`Read`] and folds a digest transparently.
#[derive(Clone, Debug)]
pub struct DigestReader<R, D: IncrementalDigest> {
  inner: R,
  digest: D,
}

impl<R, D: IncrementalDigest> DigestReader<R, D> {
  /// Create a new reader wrapper with a fresh digest.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, digest: D::new() }
  }

  /// Digest of the bytes read so far.
  #[inline]
  #[must_use]
  pub fn value(&self) -> D::Output {
    self.digest.value()
  }

  /// Mutable access to the digest (e.g. to reset it between records).
  #[inline]
  pub fn digest_mut(&mut self) -> &mut D {
    &mut self.digest
  }

  /// Unwrap, returning the inner reader and the digest value.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    (self.inner, self.digest.value())
  }

  /// Unwrap, discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }
}

impl<R: Read, D: IncrementalDigest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.digest.append(data);
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and folds a digest transparently.
///
/// Only the bytes the inner writer accepts are folded, so the digest always
/// matches what actually reached the sink.
#[derive(Clone, Debug)]
pub struct DigestWriter<W, D: IncrementalDigest> {
  inner: W,
  digest: D,
}

impl<W, D: IncrementalDigest> DigestWriter<W, D> {
  /// Create a new writer wrapper with a fresh digest.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, digest: D::new() }
  }

  /// Digest of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn value(&self) -> D::Output {
    self.digest.value()
  }

  /// Unwrap, returning the inner writer and the digest value.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    (self.inner, self.digest.value())
  }
}

impl<W: Write, D: IncrementalDigest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.digest.append(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{vec, vec::Vec};
  use std::io::Cursor;

  use super::*;

  #[derive(Clone, Debug, Default)]
  struct Xor(u8);

  impl IncrementalDigest for Xor {
    const OUTPUT_SIZE: usize = 1;
    type Output = u8;
    type Bytes = [u8; 1];

    fn new() -> Self {
      Self(0)
    }
    fn append(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
    }
    fn value(&self) -> u8 {
      self.0
    }
    fn to_bytes(value: u8) -> [u8; 1] {
      [value]
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Yields one byte per call and fails with `Interrupted` every other call.
  struct Stuttering {
    data: Vec<u8>,
    pos: usize,
    calls: usize,
  }

  impl Read for Stuttering {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      self.calls += 1;
      if self.calls % 2 == 0 {
        return Err(io::Error::from(io::ErrorKind::Interrupted));
      }
      match (self.data.get(self.pos), buf.first_mut()) {
        (Some(&b), Some(slot)) => {
          *slot = b;
          self.pos += 1;
          Ok(1)
        }
        _ => Ok(0),
      }
    }
  }

  #[test]
  fn drain_retries_interrupted_reads() {
    let mut reader = Stuttering { data: vec![1, 2, 4, 8], pos: 0, calls: 0 };
    let mut buf = [0u8; 16];
    let mut seen = Vec::new();
    let n = drain(&mut reader, &mut buf, |chunk| seen.extend_from_slice(chunk)).unwrap();
    assert_eq!(n, 4);
    assert_eq!(seen, [1, 2, 4, 8]);
  }

  #[test]
  fn drain_propagates_other_errors() {
    struct Broken;
    impl Read for Broken {
      fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("boom"))
      }
    }
    let mut buf = [0u8; 4];
    let err = drain(&mut Broken, &mut buf, |_| {}).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
  }

  #[test]
  fn reader_folds_bytes_read() {
    let mut reader = Xor::reader(Cursor::new(vec![0x0F, 0xF0, 0x01]));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, [0x0F, 0xF0, 0x01]);
    assert_eq!(reader.value(), 0xFE);

    reader.digest_mut().reset();
    let (_, value) = reader.into_parts();
    assert_eq!(value, 0);
  }

  #[test]
  fn writer_folds_only_accepted_bytes() {
    let mut sink = [0u8; 2];
    let mut writer = Xor::writer(&mut sink[..]);
    assert_eq!(writer.write(&[0x01, 0x02, 0x04]).unwrap(), 2);
    assert_eq!(writer.value(), 0x03);
    writer.flush().unwrap();
    let (_, value) = writer.into_parts();
    assert_eq!(value, 0x03);
    assert_eq!(sink, [0x01, 0x02]);
  }
}
