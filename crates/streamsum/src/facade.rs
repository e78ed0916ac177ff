//! Free-function checksum facade.
//!
//! Every CRC call borrows the calling thread's digest instance, resets it,
//! folds its input and hands the instance back reset. A nested call on the same
//! thread (for example from inside a reader) finds the slot empty and works on
//! a fresh instance instead, so calls never observe each other's state.
//!
//! CRC byte forms are big-endian throughout.

use core::cell::Cell;
use std::{io::Read, thread::LocalKey};

use checksum::{Crc32, Crc64, DigestError, IncrementalDigest, StreamError};
use hashes::{
  FastHash,
  fast::{Xxh32, Xxh64},
};

thread_local! {
  static CRC32: Cell<Option<Crc32>> = const { Cell::new(None) };
  static CRC64: Cell<Option<Crc64>> = const { Cell::new(None) };
}

/// Run `f` on this thread's pooled digest, or on a fresh one if the pooled
/// instance is in use or the thread is shutting down.
fn with_digest<D, T>(slot: &'static LocalKey<Cell<Option<D>>>, f: impl FnOnce(&mut D) -> T) -> T
where
  D: IncrementalDigest + 'static,
{
  let mut digest = slot.try_with(Cell::take).ok().flatten().unwrap_or_default();
  digest.reset();
  let out = f(&mut digest);
  digest.reset();
  // Ignoring failure: the thread is being torn down and the instance is dropped.
  let _ = slot.try_with(|cell| cell.set(Some(digest)));
  out
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/IEEE of `data`.
///
/// ```rust
/// assert_eq!(streamsum::crc32(b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  with_digest(&CRC32, |d| {
    d.append(data);
    d.value_and_reset()
  })
}

/// CRC-32/IEEE of `data[offset..offset + length]`.
///
/// # Errors
///
/// [`DigestError::InvalidRange`] when the range does not fit in `data`.
pub fn crc32_range(data: &[u8], offset: usize, length: usize) -> Result<u32, DigestError> {
  let range = DigestError::check_range(offset, length, data.len())?;
  let slice = data.get(range).ok_or(DigestError::InvalidRange { offset, length, len: data.len() })?;
  Ok(crc32(slice))
}

/// CRC-32/IEEE of everything `reader` yields, read in 4096-byte chunks.
///
/// # Errors
///
/// Any I/O error other than `Interrupted` from `reader`.
pub fn crc32_stream<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<u32> {
  with_digest(&CRC32, |d| {
    d.append_stream(reader)?;
    Ok(d.value_and_reset())
  })
}

/// Big-endian byte form of a CRC-32 value.
#[inline]
#[must_use]
pub const fn crc32_bytes(value: u32) -> [u8; 4] {
  value.to_be_bytes()
}

/// Write the big-endian form of `value` into `dst[offset..offset + 4]`.
///
/// # Errors
///
/// [`DigestError::InvalidRange`] when four bytes do not fit at `offset`;
/// `dst` is left untouched.
pub fn write_crc32_bytes(value: u32, dst: &mut [u8], offset: usize) -> Result<(), DigestError> {
  let len = dst.len();
  let range = DigestError::check_range(offset, 4, len)?;
  let slot = dst.get_mut(range).ok_or(DigestError::InvalidRange { offset, length: 4, len })?;
  slot.copy_from_slice(&value.to_be_bytes());
  Ok(())
}

/// Read a big-endian CRC-32 value from `src[offset..offset + 4]`.
///
/// # Errors
///
/// [`DigestError::InvalidRange`] when four bytes are not available at `offset`.
pub fn crc32_from_bytes(src: &[u8], offset: usize) -> Result<u32, DigestError> {
  let range = DigestError::check_range(offset, 4, src.len())?;
  src
    .get(range)
    .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
    .map(Crc32::from_bytes)
    .ok_or(DigestError::InvalidRange { offset, length: 4, len: src.len() })
}

/// CRC-32/IEEE of a stream whose first `max_decode_len` bytes are XORed with
/// the repeating `key`.
///
/// A negative `max_decode_len` decodes the whole stream, as does a length
/// larger than the stream. The reader is always drained to its end.
///
/// # Errors
///
/// - [`DigestError::InvalidArgument`] (wrapped) for an empty key, before any read
/// - I/O errors from `reader`
pub fn crc32_decode_checksum<R: Read + ?Sized>(
  reader: &mut R,
  key: &[u8],
  max_decode_len: i64,
) -> Result<u32, StreamError> {
  let limit = u64::try_from(max_decode_len).ok();
  with_digest(&CRC32, |d| {
    checksum::append_xor_decoded(d, reader, key, limit)?;
    Ok(d.value_and_reset())
  })
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64/ECMA-182 of `data`.
///
/// ```rust
/// assert_eq!(streamsum::crc64(b"123456789"), 0x6C40_DF5F_0B49_7347);
/// ```
#[must_use]
pub fn crc64(data: &[u8]) -> u64 {
  with_digest(&CRC64, |d| {
    d.append(data);
    d.value_and_reset()
  })
}

/// CRC-64/ECMA-182 of everything `reader` yields, read in 4096-byte chunks.
///
/// # Errors
///
/// Any I/O error other than `Interrupted` from `reader`.
pub fn crc64_stream<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<u64> {
  with_digest(&CRC64, |d| {
    d.append_stream(reader)?;
    Ok(d.value_and_reset())
  })
}

/// Big-endian byte form of a CRC-64 value.
#[inline]
#[must_use]
pub const fn crc64_bytes(value: u64) -> [u8; 8] {
  value.to_be_bytes()
}

// ─────────────────────────────────────────────────────────────────────────────
// xxHash
// ─────────────────────────────────────────────────────────────────────────────

// Seeded forms take the seed first, matching `FastHash::hash_with_seed`.

/// XXH32 of `data` with seed 0.
///
/// ```rust
/// assert_eq!(streamsum::xxhash32(b"abc"), 0x32D1_53FF);
/// ```
#[inline]
#[must_use]
pub fn xxhash32(data: &[u8]) -> u32 {
  Xxh32::hash(data)
}

/// XXH32 of `data` with `seed`.
#[inline]
#[must_use]
pub fn xxhash32_with_seed(seed: u32, data: &[u8]) -> u32 {
  Xxh32::hash_with_seed(seed, data)
}

/// XXH32 of the UTF-8 bytes of `text`.
#[inline]
#[must_use]
pub fn xxhash32_str(text: &str) -> u32 {
  Xxh32::hash_str(text)
}

/// XXH32 of the UTF-8 bytes of `text` with `seed`.
#[inline]
#[must_use]
pub fn xxhash32_str_with_seed(seed: u32, text: &str) -> u32 {
  Xxh32::hash_str_with_seed(seed, text)
}

/// XXH32 of the type name of `T` (see [`FastHash::hash_type_name`]).
#[inline]
#[must_use]
pub fn xxhash32_of<T: ?Sized>() -> u32 {
  Xxh32::hash_type_name::<T>()
}

/// XXH32 of the type name of `T` with `seed`.
#[inline]
#[must_use]
pub fn xxhash32_of_with_seed<T: ?Sized>(seed: u32) -> u32 {
  Xxh32::hash_type_name_with_seed::<T>(seed)
}

/// XXH64 of `data` with seed 0.
///
/// ```rust
/// assert_eq!(streamsum::xxhash64(b"abc"), 0x44BC_2CF5_AD77_0999);
/// ```
#[inline]
#[must_use]
pub fn xxhash64(data: &[u8]) -> u64 {
  Xxh64::hash(data)
}

/// XXH64 of `data` with `seed`.
#[inline]
#[must_use]
pub fn xxhash64_with_seed(seed: u64, data: &[u8]) -> u64 {
  Xxh64::hash_with_seed(seed, data)
}

/// XXH64 of the UTF-8 bytes of `text`.
#[inline]
#[must_use]
pub fn xxhash64_str(text: &str) -> u64 {
  Xxh64::hash_str(text)
}

/// XXH64 of the UTF-8 bytes of `text` with `seed`.
#[inline]
#[must_use]
pub fn xxhash64_str_with_seed(seed: u64, text: &str) -> u64 {
  Xxh64::hash_str_with_seed(seed, text)
}

/// XXH64 of the type name of `T` (see [`FastHash::hash_type_name`]).
#[inline]
#[must_use]
pub fn xxhash64_of<T: ?Sized>() -> u64 {
  Xxh64::hash_type_name::<T>()
}

/// XXH64 of the type name of `T` with `seed`.
#[inline]
#[must_use]
pub fn xxhash64_of_with_seed<T: ?Sized>(seed: u64) -> u64 {
  Xxh64::hash_type_name_with_seed::<T>(seed)
}
