use hashes::{
  FastHash,
  fast::{Xxh32, Xxh64},
};

/// `(input, seed, xxh32, xxh64)`; seeds fit both widths.
const VECTORS: &[(&[u8], u32, u32, u64)] = &[
  (b"", 0, 0x02CC_5D05, 0xEF46_DB37_51D8_E999),
  (b"", 0x9E37_79B1, 0x36B7_8AE7, 0xAC75_FDA2_929B_17EF),
  (b"a", 0, 0x550D_7456, 0xD24E_C4F1_A98C_6E5B),
  (b"abc", 0, 0x32D1_53FF, 0x44BC_2CF5_AD77_0999),
  (b"Nobody inspects the spammish repetition", 0, 0xE229_3B2F, 0xFBCE_A83C_8A37_8BF1),
  (b"The quick brown fox jumps over the lazy dog", 0, 0xE85E_A4DE, 0x0B24_2D36_1FDA_71BC),
];

#[test]
fn xxh32_official_vectors() {
  for (i, &(input, seed, expected, _)) in VECTORS.iter().enumerate() {
    let actual = Xxh32::hash_with_seed(seed, input);
    assert_eq!(actual, expected, "xxh32 vector mismatch at case {i} (len={})", input.len());
  }
}

#[test]
fn xxh64_official_vectors() {
  for (i, &(input, seed, _, expected)) in VECTORS.iter().enumerate() {
    let actual = Xxh64::hash_with_seed(u64::from(seed), input);
    assert_eq!(actual, expected, "xxh64 vector mismatch at case {i} (len={})", input.len());
  }
}

#[test]
fn str_overloads_hash_utf8_bytes() {
  let text = "grüße, 世界";
  assert_eq!(Xxh32::hash_str(text), Xxh32::hash(text.as_bytes()));
  assert_eq!(Xxh64::hash_str(text), Xxh64::hash(text.as_bytes()));
  assert_eq!(Xxh32::hash_str(""), 0x02CC_5D05);
}

#[test]
fn type_name_overloads_hash_the_qualified_name() {
  struct Local;
  let name = core::any::type_name::<Local>();
  assert!(name.ends_with("Local"));
  assert_eq!(Xxh64::hash_type_name::<Local>(), Xxh64::hash_str(name));
  assert_eq!(Xxh32::hash_type_name::<Local>(), Xxh32::hash_str(name));
}
