//! Error types for digest operations.
//!
//! Argument errors are detected before any digest state is touched, so a failed
//! call leaves the accumulator exactly as it was. None of these are transient:
//! they signal a call that needs fixing, not one that needs retrying.

/// Argument error raised by a digest operation.
///
/// # Examples
///
/// ```
/// use traits::DigestError;
///
/// let err = DigestError::InsufficientBuffer { required: 8, actual: 4 };
/// assert_eq!(err.to_string(), "destination too short: need 8 bytes, got 4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum DigestError {
  /// `offset + length` does not fit inside a buffer of `len` bytes.
  #[error("range out of bounds: offset {offset} + length {length} exceeds buffer of {len} bytes")]
  InvalidRange {
    /// Requested start of the range.
    offset: usize,
    /// Requested length of the range.
    length: usize,
    /// Length of the buffer the range was applied to.
    len: usize,
  },

  /// Destination buffer is shorter than the digest width. Nothing was written.
  #[error("destination too short: need {required} bytes, got {actual}")]
  InsufficientBuffer {
    /// Bytes the digest needs.
    required: usize,
    /// Bytes the caller supplied.
    actual: usize,
  },

  /// A required argument was empty or otherwise unusable.
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
}

impl DigestError {
  /// Validate that `offset..offset + length` lies inside a buffer of `len` bytes.
  ///
  /// Overflow of `offset + length` counts as out of bounds.
  #[inline]
  pub const fn check_range(offset: usize, length: usize, len: usize) -> Result<core::ops::Range<usize>, Self> {
    match offset.checked_add(length) {
      Some(end) if end <= len => Ok(offset..end),
      _ => Err(Self::InvalidRange { offset, length, len }),
    }
  }

  /// Validate that a destination of `actual` bytes can hold `required` bytes.
  #[inline]
  pub const fn check_destination(required: usize, actual: usize) -> Result<(), Self> {
    if actual < required { Err(Self::InsufficientBuffer { required, actual }) } else { Ok(()) }
  }
}

/// Error raised by reader-based digest operations.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StreamError {
  /// The call was rejected before reading anything.
  #[error(transparent)]
  Digest(#[from] DigestError),

  /// The underlying reader failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
