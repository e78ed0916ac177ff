//! Kernel selection shared by both CRC widths.
//!
//! | Tier | Name | Description |
//! |------|------|-------------|
//! | 0 | Reference | Bitwise; only when forced |
//! | 1 | Bytewise | One table lookup per byte; short inputs |
//! | 2 | Slice-by-8 | Eight lookups per 8-byte word; everything else |
//!
//! Selection is a pure function of the configuration and the input length, so
//! the diagnostics and the hot path can never disagree.

use crate::{
  config::{CrcConfig, CrcForce},
  diag::SelectionReason,
};

/// Reference (bitwise) kernel name.
pub const REFERENCE: &str = "reference/bitwise";

/// Byte-at-a-time table kernel name.
pub const PORTABLE_BYTEWISE: &str = "portable/bytewise";

/// Slice-by-8 table kernel name.
pub const PORTABLE_SLICE8: &str = "portable/slice8";

/// Backend name reported when the selector picks per call.
pub const PORTABLE_AUTO: &str = "portable/auto";

/// One CRC kernel implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
  /// Bit-at-a-time polynomial division.
  Reference,
  /// One table lookup per byte.
  Bytewise,
  /// Eight table lookups per eight bytes.
  Slice8,
}

impl Kernel {
  /// Stable kernel name, as reported by diagnostics.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Reference => REFERENCE,
      Self::Bytewise => PORTABLE_BYTEWISE,
      Self::Slice8 => PORTABLE_SLICE8,
    }
  }
}

/// Pick the kernel for a `len`-byte update under `cfg`.
#[inline]
#[must_use]
pub const fn select(cfg: CrcConfig, len: usize) -> (Kernel, SelectionReason) {
  match cfg.force {
    CrcForce::Reference => (Kernel::Reference, SelectionReason::Forced),
    CrcForce::Bytewise => (Kernel::Bytewise, SelectionReason::Forced),
    CrcForce::Slice8 => (Kernel::Slice8, SelectionReason::Forced),
    CrcForce::Auto => {
      if len < cfg.tunables.bytewise_to_slice8 {
        (Kernel::Bytewise, SelectionReason::BelowSlice8Threshold)
      } else {
        (Kernel::Slice8, SelectionReason::Auto)
      }
    }
  }
}

/// Backend name for the whole process under `cfg`.
///
/// A forced kernel reports its own name; auto selection reports
/// [`PORTABLE_AUTO`] because the kernel varies with input length.
#[inline]
#[must_use]
pub const fn backend_name(cfg: CrcConfig) -> &'static str {
  match cfg.force {
    CrcForce::Auto => PORTABLE_AUTO,
    CrcForce::Reference => REFERENCE,
    CrcForce::Bytewise => PORTABLE_BYTEWISE,
    CrcForce::Slice8 => PORTABLE_SLICE8,
  }
}
