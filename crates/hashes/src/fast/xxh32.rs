//! XXH32 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the 32-bit xxHash, bit-identical with the
//! reference `XXH32`.

use traits::FastHash;

use crate::util::{PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5, rotl32};

/// XXH32 one-shot hasher.
///
/// ```rust
/// use hashes::{FastHash, fast::Xxh32};
///
/// assert_eq!(Xxh32::hash(b""), 0x02CC_5D05);
/// assert_eq!(Xxh32::hash(b"abc"), 0x32D1_53FF);
/// assert_eq!(Xxh32::hash_str("abc"), Xxh32::hash(b"abc"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh32;

/// Bulk stripe: four 4-byte lanes.
const STRIPE_LEN: usize = 16;

#[inline(always)]
const fn round(acc: u32, input: u32) -> u32 {
  rotl32(acc.wrapping_add(input.wrapping_mul(PRIME32_2)), 13).wrapping_mul(PRIME32_1)
}

#[inline(always)]
const fn avalanche(mut h: u32) -> u32 {
  h ^= h >> 15;
  h = h.wrapping_mul(PRIME32_2);
  h ^= h >> 13;
  h = h.wrapping_mul(PRIME32_3);
  h ^= h >> 16;
  h
}

/// Hash `data` with `seed`.
#[must_use]
pub fn xxh32(data: &[u8], seed: u32) -> u32 {
  let (mut h, tail) = if data.len() >= STRIPE_LEN {
    let (stripes, rest) = data.as_chunks::<STRIPE_LEN>();
    let mut lanes = [
      seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
      seed.wrapping_add(PRIME32_2),
      seed,
      seed.wrapping_sub(PRIME32_1),
    ];

    for stripe in stripes {
      let (words, _) = stripe.as_chunks::<4>();
      for (lane, word) in lanes.iter_mut().zip(words) {
        *lane = round(*lane, u32::from_le_bytes(*word));
      }
    }

    let [v1, v2, v3, v4] = lanes;
    let h = rotl32(v1, 1).wrapping_add(rotl32(v2, 7)).wrapping_add(rotl32(v3, 12)).wrapping_add(rotl32(v4, 18));
    (h, rest)
  } else {
    (seed.wrapping_add(PRIME32_5), data)
  };

  // Only the low 32 bits of the length participate.
  h = h.wrapping_add(data.len() as u32);

  let (words, bytes) = tail.as_chunks::<4>();
  for word in words {
    h = h.wrapping_add(u32::from_le_bytes(*word).wrapping_mul(PRIME32_3));
    h = rotl32(h, 17).wrapping_mul(PRIME32_4);
  }
  for &byte in bytes {
    h = h.wrapping_add(u32::from(byte).wrapping_mul(PRIME32_5));
    h = rotl32(h, 11).wrapping_mul(PRIME32_1);
  }

  avalanche(h)
}

impl FastHash for Xxh32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    xxh32(data, seed)
  }
}
