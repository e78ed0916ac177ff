//! Fixed-width mixing primitives shared by the xxHash family.

// xxh32 primes
pub const PRIME32_1: u32 = 0x9E37_79B1;
pub const PRIME32_2: u32 = 0x85EB_CA77;
pub const PRIME32_3: u32 = 0xC2B2_AE3D;
pub const PRIME32_4: u32 = 0x27D4_EB2F;
pub const PRIME32_5: u32 = 0x1656_67B1;

// xxh64 primes
pub const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
pub const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
pub const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
pub const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
pub const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

#[inline(always)]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

#[inline(always)]
pub const fn rotl64(x: u64, n: u32) -> u64 {
  x.rotate_left(n)
}
