//! Decode-and-checksum for XOR-obfuscated streams.
//!
//! A stream's first `limit` bytes are XORed with a repeating key; the rest is
//! plain. Decoding and digesting happen in the same pass over a reusable
//! chunk buffer, so the decoded payload is never materialized.
//!
//! Byte `i` (0-based, counted from the start of the stream) decodes as
//! `encoded[i] ^ key[i % key.len()]` when `i < limit`. The key position keeps
//! running across chunk boundaries.

use traits::DigestError;

/// Stateful XOR decoder that tracks its position in the stream.
#[derive(Clone, Debug)]
pub struct XorDecoder<'k> {
  key: &'k [u8],
  position: u64,
  limit: Option<u64>,
}

impl<'k> XorDecoder<'k> {
  /// Create a decoder for the first `limit` bytes (`None` for every byte).
  ///
  /// Fails with [`DigestError::InvalidArgument`] when `key` is empty.
  pub fn new(key: &'k [u8], limit: Option<u64>) -> Result<Self, DigestError> {
    if key.is_empty() {
      return Err(DigestError::InvalidArgument("xor key must not be empty"));
    }
    Ok(Self { key, position: 0, limit })
  }

  /// Bytes seen so far.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> u64 {
    self.position
  }

  /// Bytes still to be decoded, or `None` when unbounded.
  #[inline]
  #[must_use]
  pub fn remaining(&self) -> Option<u64> {
    self.limit.map(|limit| limit.saturating_sub(self.position))
  }

  /// Decode the next chunk of the stream in place.
  pub fn decode_in_place(&mut self, chunk: &mut [u8]) {
    let decode_len = match self.remaining() {
      None => chunk.len(),
      Some(remaining) => usize::try_from(remaining).map_or(chunk.len(), |r| r.min(chunk.len())),
    };

    if decode_len > 0 {
      // Non-empty key is checked in `new`.
      let start = (self.position % self.key.len() as u64) as usize;
      let head = chunk.iter_mut().take(decode_len);
      for (byte, k) in head.zip(self.key.iter().cycle().skip(start)) {
        *byte ^= k;
      }
    }

    self.position = self.position.saturating_add(chunk.len() as u64);
  }
}

/// Fold everything `reader` yields into `digest`, XOR-decoding the first
/// `limit` bytes with `key` on the way. Returns the number of bytes folded.
///
/// The key is validated before anything is read. On an I/O error the bytes
/// read so far stay folded into `digest`.
#[cfg(feature = "std")]
pub fn append_xor_decoded<D, R>(
  digest: &mut D,
  reader: &mut R,
  key: &[u8],
  limit: Option<u64>,
) -> Result<u64, traits::StreamError>
where
  D: traits::IncrementalDigest,
  R: std::io::Read + ?Sized,
{
  let mut decoder = XorDecoder::new(key, limit)?;
  let mut buf = [0u8; traits::STREAM_CHUNK_BYTES];
  let total = traits::io::drain(reader, &mut buf, |chunk| {
    decoder.decode_in_place(chunk);
    digest.append(chunk);
  })?;
  Ok(total)
}

/// Digest of `reader`'s contents after XOR-decoding the first `limit` bytes
/// with the repeating `key`.
///
/// - `limit: None`, or a limit larger than the stream, decodes every byte
/// - `limit: Some(0)` digests the stream as is
/// - the stream is always read to its end; bytes past `limit` are folded
///   undecoded
///
/// # Errors
///
/// [`DigestError::InvalidArgument`] (wrapped) for an empty key, before any
/// read. I/O errors from `reader` are returned as they occur.
///
/// # Example
///
/// ```rust
/// use checksum::{Crc32, IncrementalDigest, checksum_xor_decoded};
///
/// let plain = b"123456789";
/// let key = [0x5A, 0xA5];
/// let encoded: Vec<u8> = plain.iter().zip(key.iter().cycle()).map(|(b, k)| b ^ k).collect();
///
/// let crc = checksum_xor_decoded::<Crc32, _>(&mut encoded.as_slice(), &key, None)?;
/// assert_eq!(crc, Crc32::checksum(plain));
/// # Ok::<(), checksum::StreamError>(())
/// ```
#[cfg(feature = "std")]
pub fn checksum_xor_decoded<D, R>(
  reader: &mut R,
  key: &[u8],
  limit: Option<u64>,
) -> Result<D::Output, traits::StreamError>
where
  D: traits::IncrementalDigest,
  R: std::io::Read + ?Sized,
{
  let mut digest = D::new();
  append_xor_decoded(&mut digest, reader, key, limit)?;
  Ok(digest.value())
}
