//! Internal macros for CRC type generation.
//!
//! CRC-32 and CRC-64 share identical structure (a register, an init value, a
//! final XOR and a kernel-dispatched update); only the width, the parameters
//! and the update function differ.

/// Generate a CRC type with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: $ty` (the raw register)
/// - `resume()`, `backend_name()`, `config()`, `tunables()`, `kernel_name_for_len()` methods
/// - `Default` (equal to `new()`)
/// - `IncrementalDigest` trait implementation with big-endian byte output
///
/// # Arguments
///
/// - `$ty`: Register/output integer type
/// - `init`: Initial register value
/// - `xor_out`: Final XOR applied when reading the value
/// - `update`: `fn($ty, &[u8]) -> $ty` folding bytes into the register
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      state: $ty:ty,
      init: $init:expr,
      xor_out: $xor_out:expr,
      update: $update:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      state: $ty,
    }

    impl $name {
      /// Initial register value.
      const INIT: $ty = $init;
      /// Final XOR applied to the register.
      const XOR_OUT: $ty = $xor_out;

      /// Create a digest that continues from a previously published value.
      ///
      /// `resume(checksum(a))` followed by `append(b)` yields `checksum(a ++ b)`.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $ty) -> Self {
        Self { state: crc ^ Self::XOR_OUT }
      }

      /// Get the name of the currently selected backend.
      ///
      /// Returns a kernel name (e.g. "portable/slice8") when one is forced,
      /// "portable/auto" otherwise.
      #[must_use]
      pub fn backend_name() -> &'static str {
        $crate::common::kernels::backend_name($crate::config::get())
      }

      /// Get the effective CRC configuration (overrides + thresholds).
      #[must_use]
      pub fn config() -> $crate::CrcConfig {
        $crate::config::get()
      }

      /// Convenience accessor for the active tunables.
      #[must_use]
      pub fn tunables() -> $crate::CrcTunables {
        Self::config().tunables
      }

      /// Returns the kernel name that the selector would choose for `len`.
      ///
      /// This is intended for debugging/benchmarking and does not allocate.
      #[must_use]
      pub fn kernel_name_for_len(len: usize) -> &'static str {
        $crate::common::kernels::select($crate::config::get(), len).0.name()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::IncrementalDigest>::new()
      }
    }

    impl $crate::IncrementalDigest for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$ty>();
      type Output = $ty;
      type Bytes = [u8; core::mem::size_of::<$ty>()];

      #[inline]
      fn new() -> Self {
        Self { state: Self::INIT }
      }

      #[inline]
      fn append(&mut self, data: &[u8]) {
        self.state = $update(self.state, data);
      }

      #[inline]
      fn value(&self) -> $ty {
        self.state ^ Self::XOR_OUT
      }

      #[inline]
      fn to_bytes(value: $ty) -> Self::Bytes {
        value.to_be_bytes()
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::INIT;
      }
    }
  };
}
