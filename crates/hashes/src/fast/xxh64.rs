//! XXH64 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the 64-bit xxHash, bit-identical with the
//! reference `XXH64`.

use traits::FastHash;

use crate::util::{PRIME64_1, PRIME64_2, PRIME64_3, PRIME64_4, PRIME64_5, rotl64};

/// XXH64 one-shot hasher.
///
/// ```rust
/// use hashes::{FastHash, fast::Xxh64};
///
/// assert_eq!(Xxh64::hash(b""), 0xEF46_DB37_51D8_E999);
/// assert_eq!(Xxh64::hash(b"abc"), 0x44BC_2CF5_AD77_0999);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh64;

/// Bulk stripe: four 8-byte lanes.
const STRIPE_LEN: usize = 32;

#[inline(always)]
const fn round(acc: u64, input: u64) -> u64 {
  rotl64(acc.wrapping_add(input.wrapping_mul(PRIME64_2)), 31).wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(acc: u64, lane: u64) -> u64 {
  (acc ^ round(0, lane)).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn avalanche(mut h: u64) -> u64 {
  h ^= h >> 33;
  h = h.wrapping_mul(PRIME64_2);
  h ^= h >> 29;
  h = h.wrapping_mul(PRIME64_3);
  h ^= h >> 32;
  h
}

/// Hash `data` with `seed`.
#[must_use]
pub fn xxh64(data: &[u8], seed: u64) -> u64 {
  let (mut h, tail) = if data.len() >= STRIPE_LEN {
    let (stripes, rest) = data.as_chunks::<STRIPE_LEN>();
    let mut lanes = [
      seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
      seed.wrapping_add(PRIME64_2),
      seed,
      seed.wrapping_sub(PRIME64_1),
    ];

    for stripe in stripes {
      let (words, _) = stripe.as_chunks::<8>();
      for (lane, word) in lanes.iter_mut().zip(words) {
        *lane = round(*lane, u64::from_le_bytes(*word));
      }
    }

    let [v1, v2, v3, v4] = lanes;
    let mut h = rotl64(v1, 1).wrapping_add(rotl64(v2, 7)).wrapping_add(rotl64(v3, 12)).wrapping_add(rotl64(v4, 18));
    for lane in lanes {
      h = merge_round(h, lane);
    }
    (h, rest)
  } else {
    (seed.wrapping_add(PRIME64_5), data)
  };

  h = h.wrapping_add(data.len() as u64);

  let (words, rest) = tail.as_chunks::<8>();
  for word in words {
    h ^= round(0, u64::from_le_bytes(*word));
    h = rotl64(h, 27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
  }

  // At most one 4-byte word remains.
  let (halves, bytes) = rest.as_chunks::<4>();
  for half in halves {
    h ^= u64::from(u32::from_le_bytes(*half)).wrapping_mul(PRIME64_1);
    h = rotl64(h, 23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
  }
  for &byte in bytes {
    h ^= u64::from(byte).wrapping_mul(PRIME64_5);
    h = rotl64(h, 11).wrapping_mul(PRIME64_1);
  }

  avalanche(h)
}

impl FastHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    xxh64(data, seed)
  }
}
