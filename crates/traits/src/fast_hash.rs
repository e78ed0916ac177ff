//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot: callers hand over the complete message.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using the default (zero) seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;

  /// Hash the UTF-8 bytes of `text`.
  #[inline]
  #[must_use]
  fn hash_str(text: &str) -> Self::Output {
    Self::hash_str_with_seed(Self::Seed::default(), text)
  }

  /// Hash the UTF-8 bytes of `text` using `seed`.
  #[inline]
  #[must_use]
  fn hash_str_with_seed(seed: Self::Seed, text: &str) -> Self::Output {
    Self::hash_with_seed(seed, text.as_bytes())
  }

  /// Hash the fully-qualified name of `T`, as reported by
  /// [`core::any::type_name`].
  ///
  /// The name is only stable for a given compiler version; use it for
  /// in-process keys, not for persisted identifiers.
  #[inline]
  #[must_use]
  fn hash_type_name<T: ?Sized>() -> Self::Output {
    Self::hash_type_name_with_seed::<T>(Self::Seed::default())
  }

  /// [`hash_type_name`](Self::hash_type_name) using `seed`.
  #[inline]
  #[must_use]
  fn hash_type_name_with_seed<T: ?Sized>(seed: Self::Seed) -> Self::Output {
    Self::hash_str_with_seed(seed, core::any::type_name::<T>())
  }
}
