//! Const-fn CRC lookup table generation.
//!
//! Tables are computed at compile time and embedded in the binary; nothing is
//! built or mutated at runtime, so every table is safe to share across threads.
//!
//! Both bit orders are generated for both widths from one macro:
//!
//! | Order | Seed value for byte `i` | Step | Used by |
//! |-------|-------------------------|------|---------|
//! | MSB-first | `i << (W - 8)` | shift left, XOR `poly` when the top bit was set | CRC-64/ECMA-182 |
//! | Reflected | `i` | shift right, XOR `poly` when the low bit was set | CRC-32/IEEE |
//!
//! Each width also gets a slice-by-8 set: table `k` holds the contribution of a
//! byte followed by `k` zero bytes, so eight input bytes can be folded with
//! eight independent lookups.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8)
// or a single byte extracted from a register. Clippy cannot prove this in const fn
// contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

macro_rules! define_table_generators {
  (
    $ty:ty, $bits:literal,
    entry: ($entry_msb:ident, $entry_reflected:ident),
    table: ($table_msb:ident, $table_reflected:ident),
    slice8: ($slice8_msb:ident, $slice8_reflected:ident) $(,)?
  ) => {
    #[doc = concat!("Single MSB-first ", stringify!($bits), "-bit table entry for `index`.")]
    #[must_use]
    pub const fn $entry_msb(poly: $ty, index: u8) -> $ty {
      let top: $ty = 1 << ($bits - 1);
      let mut crc = (index as $ty) << ($bits - 8);
      let mut i = 0;
      while i < 8 {
        crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
        i += 1;
      }
      crc
    }

    #[doc = concat!("Single reflected ", stringify!($bits), "-bit table entry for `index`.")]
    #[must_use]
    pub const fn $entry_reflected(poly: $ty, index: u8) -> $ty {
      let mut crc = index as $ty;
      let mut i = 0;
      while i < 8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
        i += 1;
      }
      crc
    }

    #[doc = concat!("256-entry MSB-first ", stringify!($bits), "-bit table.")]
    #[must_use]
    pub const fn $table_msb(poly: $ty) -> [$ty; 256] {
      let mut table = [0; 256];
      let mut i = 0usize;
      while i < 256 {
        table[i] = $entry_msb(poly, i as u8);
        i += 1;
      }
      table
    }

    #[doc = concat!("256-entry reflected ", stringify!($bits), "-bit table.")]
    #[must_use]
    pub const fn $table_reflected(poly: $ty) -> [$ty; 256] {
      let mut table = [0; 256];
      let mut i = 0usize;
      while i < 256 {
        table[i] = $entry_reflected(poly, i as u8);
        i += 1;
      }
      table
    }

    #[doc = concat!("Slice-by-8 MSB-first ", stringify!($bits), "-bit tables.")]
    #[must_use]
    pub const fn $slice8_msb(poly: $ty) -> [[$ty; 256]; 8] {
      let mut tables = [[0; 256]; 8];
      tables[0] = $table_msb(poly);

      let mut k = 1usize;
      while k < 8 {
        let mut i = 0usize;
        while i < 256 {
          let prev = tables[k - 1][i];
          tables[k][i] = tables[0][(prev >> ($bits - 8)) as usize] ^ (prev << 8);
          i += 1;
        }
        k += 1;
      }
      tables
    }

    #[doc = concat!("Slice-by-8 reflected ", stringify!($bits), "-bit tables.")]
    #[must_use]
    pub const fn $slice8_reflected(poly: $ty) -> [[$ty; 256]; 8] {
      let mut tables = [[0; 256]; 8];
      tables[0] = $table_reflected(poly);

      let mut k = 1usize;
      while k < 8 {
        let mut i = 0usize;
        while i < 256 {
          let prev = tables[k - 1][i];
          tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
          i += 1;
        }
        k += 1;
      }
      tables
    }
  };
}

define_table_generators! {
  u32, 32,
  entry: (crc32_table_entry_msb, crc32_table_entry_reflected),
  table: (generate_crc32_table_msb, generate_crc32_table_reflected),
  slice8: (generate_crc32_tables_8_msb, generate_crc32_tables_8_reflected),
}

define_table_generators! {
  u64, 64,
  entry: (crc64_table_entry_msb, crc64_table_entry_reflected),
  table: (generate_crc64_table_msb, generate_crc64_table_reflected),
  slice8: (generate_crc64_tables_8_msb, generate_crc64_tables_8_reflected),
}

// ─────────────────────────────────────────────────────────────────────────────
// Polynomials and embedded tables
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/IEEE 802.3 polynomial (0x04C11DB7) in reflected form.
/// Used by Ethernet, gzip, zip, PNG.
pub const CRC32_IEEE_POLY: u32 = 0xEDB8_8320;

/// CRC-64/ECMA-182 polynomial in normal (MSB-first) form.
pub const CRC64_ECMA_POLY: u64 = 0x42F0_E1EB_A9EA_3693;

/// CRC-32/IEEE slice-by-8 tables. Table 0 is the plain byte-at-a-time table.
pub static CRC32_IEEE_TABLES_8: [[u32; 256]; 8] = generate_crc32_tables_8_reflected(CRC32_IEEE_POLY);

/// CRC-64/ECMA-182 slice-by-8 tables. Table 0 is the plain byte-at-a-time table.
pub static CRC64_ECMA_TABLES_8: [[u64; 256]; 8] = generate_crc64_tables_8_msb(CRC64_ECMA_POLY);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn crc64_ecma_table_known_entries() {
    let t = &CRC64_ECMA_TABLES_8[0];
    assert_eq!(t[0], 0);
    assert_eq!(t[1], CRC64_ECMA_POLY);
    assert_eq!(t[2], 0x85E1_C3D7_53D4_6D26);
    assert_eq!(t[3], 0xC711_223C_FA3E_5BB5);
    // Table is linear over XOR.
    assert_eq!(t[3], t[1] ^ t[2]);
    assert_eq!(t[255], 0x9AFC_E626_CE85_B507);
  }

  #[test]
  fn crc32_ieee_table_known_entries() {
    let t = &CRC32_IEEE_TABLES_8[0];
    assert_eq!(t[0], 0);
    assert_eq!(t[1], 0x7707_3096);
    assert_eq!(t[128], CRC32_IEEE_POLY);
    assert_eq!(t[255], 0x2D02_EF8D);
  }

  #[test]
  fn crc64_slice8_tables_consistency() {
    let tables = &CRC64_ECMA_TABLES_8;
    for k in 1..8 {
      for i in 0..256 {
        let prev = tables[k - 1][i];
        assert_eq!(tables[k][i], tables[0][(prev >> 56) as usize] ^ (prev << 8));
      }
    }
  }

  #[test]
  fn crc32_slice8_tables_consistency() {
    let tables = &CRC32_IEEE_TABLES_8;
    for k in 1..8 {
      for i in 0..256 {
        let prev = tables[k - 1][i];
        assert_eq!(tables[k][i], tables[0][(prev & 0xFF) as usize] ^ (prev >> 8));
      }
    }
  }

  #[test]
  fn msb_and_reflected_generators_are_mirror_images() {
    // Reflecting the polynomial, the index and the entry maps one order onto the other.
    let msb = generate_crc32_table_msb(CRC32_IEEE_POLY.reverse_bits());
    let reflected = generate_crc32_table_reflected(CRC32_IEEE_POLY);
    for i in 0..=255u8 {
      assert_eq!(msb[i.reverse_bits() as usize].reverse_bits(), reflected[i as usize]);
    }

    let msb = generate_crc64_table_msb(CRC64_ECMA_POLY);
    let reflected = generate_crc64_table_reflected(CRC64_ECMA_POLY.reverse_bits());
    for i in 0..=255u8 {
      assert_eq!(msb[i.reverse_bits() as usize].reverse_bits(), reflected[i as usize]);
    }
  }

  #[test]
  fn slice8_msb_generator_matches_per_width_entry() {
    let tables = generate_crc32_tables_8_msb(0x04C1_1DB7);
    for i in 0..=255u8 {
      assert_eq!(tables[0][i as usize], crc32_table_entry_msb(0x04C1_1DB7, i));
    }
    let tables = generate_crc64_tables_8_reflected(CRC64_ECMA_POLY.reverse_bits());
    for i in 0..=255u8 {
      assert_eq!(tables[0][i as usize], crc64_table_entry_reflected(CRC64_ECMA_POLY.reverse_bits(), i));
    }
  }
}
