//! Incremental digest contract.
//!
//! One shape for every stateful checksum in streamsum:
//!
//! - **Associative**: any split of a message across `append` calls yields the
//!   same digest as a single `append` of the whole message
//! - **Peekable**: the current digest can be read any number of times without
//!   disturbing the accumulator
//! - **Reusable**: `finalize_and_reset` hands back the digest and leaves the
//!   instance as if freshly constructed

use core::fmt::Debug;

use crate::DigestError;

/// Stateful checksum folded incrementally over a message.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Crc64, IncrementalDigest};
///
/// // One-shot
/// let crc = Crc64::checksum(b"123456789");
///
/// // Incremental
/// let mut digest = Crc64::new();
/// digest.append(b"1234");
/// digest.append(b"56789");
/// assert_eq!(digest.value(), crc);
/// assert_eq!(digest.finalize_and_reset(), crc.to_be_bytes());
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `value()` must not mutate the accumulator
/// - `reset()` must restore the state `new()` returns
/// - `to_bytes()` must produce exactly `OUTPUT_SIZE` bytes
pub trait IncrementalDigest: Clone + Default {
  /// Output width in bytes.
  ///
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// Integer form of the digest (`u32` for CRC-32, `u64` for CRC-64).
  type Output: Copy + Eq + Debug + Default;

  /// Byte form of the digest, `OUTPUT_SIZE` long.
  type Bytes: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a digest in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Fold `data` into the accumulator.
  fn append(&mut self, data: &[u8]);

  /// Digest of everything appended so far, as an integer.
  #[must_use]
  fn value(&self) -> Self::Output;

  /// Encode an integer digest in this algorithm's byte order.
  #[must_use]
  fn to_bytes(value: Self::Output) -> Self::Bytes;

  /// Restore the initial state, discarding everything appended.
  fn reset(&mut self);

  /// Number of bytes the digest occupies.
  #[inline]
  #[must_use]
  fn output_width(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Fold several non-contiguous buffers, in order.
  #[inline]
  fn append_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.append(buf);
    }
  }

  /// Fold everything `reader` yields until end of stream.
  ///
  /// Reads through a [`STREAM_CHUNK_BYTES`](crate::STREAM_CHUNK_BYTES) scratch
  /// buffer and retries reads that fail with `Interrupted`. Returns the number
  /// of bytes folded.
  ///
  /// If the reader fails part way, the bytes read before the failure remain
  /// folded into the accumulator.
  #[cfg(feature = "std")]
  fn append_stream<R: std::io::Read + ?Sized>(&mut self, reader: &mut R) -> std::io::Result<u64> {
    let mut buf = [0u8; crate::STREAM_CHUNK_BYTES];
    crate::io::drain(reader, &mut buf, |chunk| self.append(chunk))
  }

  /// Digest of everything appended so far, as bytes.
  #[inline]
  #[must_use]
  fn current_digest(&self) -> Self::Bytes {
    Self::to_bytes(self.value())
  }

  /// Write the current digest into the front of `dst`.
  ///
  /// Returns the number of bytes written (`OUTPUT_SIZE`). Fails with
  /// [`DigestError::InsufficientBuffer`] when `dst` is too short, in which
  /// case `dst` is left untouched.
  fn write_current_digest(&self, dst: &mut [u8]) -> Result<usize, DigestError> {
    DigestError::check_destination(Self::OUTPUT_SIZE, dst.len())?;
    let bytes = self.current_digest();
    let src = bytes.as_ref();
    match dst.get_mut(..src.len()) {
      Some(head) => {
        head.copy_from_slice(src);
        Ok(src.len())
      }
      None => Err(DigestError::InsufficientBuffer { required: src.len(), actual: dst.len() }),
    }
  }

  /// Return the current digest and reset.
  #[inline]
  fn finalize_and_reset(&mut self) -> Self::Bytes {
    Self::to_bytes(self.value_and_reset())
  }

  /// Return the current digest as an integer and reset.
  #[inline]
  fn value_and_reset(&mut self) -> Self::Output {
    let value = self.value();
    self.reset();
    value
  }

  /// Write the current digest into `dst`, then reset.
  ///
  /// On error neither `dst` nor the accumulator change.
  fn write_digest_and_reset(&mut self, dst: &mut [u8]) -> Result<usize, DigestError> {
    let written = self.write_current_digest(dst)?;
    self.reset();
    Ok(written)
  }

  /// Compute the digest of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut d = Self::new();
    d.append(data);
    d.value()
  }

  /// Compute the byte digest of `data` in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Bytes {
    Self::to_bytes(Self::checksum(data))
  }

  /// Compute the digest of everything `reader` yields.
  #[cfg(feature = "std")]
  fn checksum_stream<R: std::io::Read + ?Sized>(reader: &mut R) -> std::io::Result<Self::Output> {
    let mut d = Self::new();
    d.append_stream(reader)?;
    Ok(d.value())
  }

  /// Wrap a reader to fold bytes transparently as they are read.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::{Crc32, IncrementalDigest};
  /// use std::fs::File;
  ///
  /// let mut reader = Crc32::reader(File::open("data.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.value());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to fold bytes transparently as they are written.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
