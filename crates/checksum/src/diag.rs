//! Diagnostics for kernel selection.
//!
//! Answers "which kernel runs for this length, and why" without allocating or
//! touching any digest state. Benchmarks print this; tests assert on it.

use crate::{
  common::kernels,
  config::{self, CrcForce},
};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active (length ignored).
  Forced,
  /// Below the bytewise → slice-by-8 crossover.
  BelowSlice8Threshold,
  /// Normal auto selection.
  Auto,
}

/// CRC algorithm a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcAlgorithm {
  /// CRC-32/IEEE 802.3.
  Crc32Ieee,
  /// CRC-64/ECMA-182.
  Crc64Ecma,
}

impl CrcAlgorithm {
  /// Stable lowercase name, e.g. `"crc32/ieee"`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Crc32Ieee => "crc32/ieee",
      Self::Crc64Ecma => "crc64/ecma-182",
    }
  }
}

/// Which kernel a call of a given length would run, and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcSelectionDiag {
  /// Algorithm the selection was made for.
  pub algorithm: CrcAlgorithm,
  /// Input length the selection was made for.
  pub len: usize,
  /// Why `selected_kernel` won.
  pub reason: SelectionReason,
  /// Force mode in effect (`STREAMSUM_CRC_FORCE`).
  pub force: CrcForce,
  /// Crossover length in effect (`STREAMSUM_CRC_THRESHOLD_BYTEWISE_TO_SLICE8`).
  pub bytewise_to_slice8: usize,
  /// Name of the kernel that would run.
  pub selected_kernel: &'static str,
}

fn diagnose(algorithm: CrcAlgorithm, len: usize) -> CrcSelectionDiag {
  let cfg = config::get();
  let (kernel, reason) = kernels::select(cfg, len);
  CrcSelectionDiag {
    algorithm,
    len,
    reason,
    force: cfg.force,
    bytewise_to_slice8: cfg.tunables.bytewise_to_slice8,
    selected_kernel: kernel.name(),
  }
}

/// Diagnose CRC-32 selection for `len`.
#[inline]
#[must_use]
pub fn crc32(len: usize) -> CrcSelectionDiag {
  diagnose(CrcAlgorithm::Crc32Ieee, len)
}

/// Diagnose CRC-64/ECMA-182 selection for `len`.
#[inline]
#[must_use]
pub fn crc64(len: usize) -> CrcSelectionDiag {
  diagnose(CrcAlgorithm::Crc64Ecma, len)
}
