//! CRC runtime configuration (overrides + thresholds).
//!
//! One configuration governs both CRC widths:
//! - Benchmarks/tests can force a specific kernel
//! - Introspection can report the active configuration without allocation
//!
//! Environment overrides (read once, when `std` is enabled):
//!
//! | Variable | Values |
//! |----------|--------|
//! | `STREAMSUM_CRC_FORCE` | `auto`, `reference`/`bitwise`, `bytewise`/`table`, `slice8`/`slicing` |
//! | `STREAMSUM_CRC_THRESHOLD_BYTEWISE_TO_SLICE8` | byte length where `auto` switches to slice-by-8 |
//!
//! Unparseable values are ignored and the default applies.

/// Environment variable that forces a kernel.
pub const FORCE_ENV: &str = "STREAMSUM_CRC_FORCE";

/// Environment variable that overrides the bytewise → slice-by-8 crossover.
pub const THRESHOLD_ENV: &str = "STREAMSUM_CRC_THRESHOLD_BYTEWISE_TO_SLICE8";

/// Default length (bytes) from which auto selection uses slice-by-8.
pub const DEFAULT_BYTEWISE_TO_SLICE8: usize = 32;

/// Forced kernel selection for CRC-32 and CRC-64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CrcForce {
  /// Pick by input length.
  #[default]
  Auto,
  /// Force the bitwise reference implementation.
  Reference,
  /// Force the byte-at-a-time table kernel.
  Bytewise,
  /// Force the slice-by-8 table kernel.
  Slice8,
}

impl CrcForce {
  /// Canonical lowercase name, as accepted by `STREAMSUM_CRC_FORCE`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
    }
  }

  /// Parse a force mode, case-insensitively, accepting the aliases listed in
  /// the module docs. Surrounding whitespace is ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("table") {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("slice8")
      || value.eq_ignore_ascii_case("slicing")
      || value.eq_ignore_ascii_case("slice-by-8")
    {
      return Some(Self::Slice8);
    }
    None
  }
}

/// CRC selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcTunables {
  /// Bytes where slice-by-8 becomes faster than bytewise.
  pub bytewise_to_slice8: usize,
}

impl Default for CrcTunables {
  fn default() -> Self {
    Self { bytewise_to_slice8: DEFAULT_BYTEWISE_TO_SLICE8 }
  }
}

/// Full CRC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CrcConfig {
  /// Requested force mode.
  pub force: CrcForce,
  /// Thresholds used by the auto selector.
  pub tunables: CrcTunables,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  force: Option<CrcForce>,
  bytewise_to_slice8: Option<usize>,
}

#[cfg(feature = "std")]
fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let var = |name: &str| std::env::var(name).ok();
  Overrides {
    force: var(FORCE_ENV).as_deref().and_then(CrcForce::parse),
    bytewise_to_slice8: var(THRESHOLD_ENV).as_deref().and_then(parse_usize),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
fn resolve(ov: Overrides) -> CrcConfig {
  let defaults = CrcTunables::default();
  CrcConfig {
    force: ov.force.unwrap_or_default(),
    tunables: CrcTunables { bytewise_to_slice8: ov.bytewise_to_slice8.unwrap_or(defaults.bytewise_to_slice8) },
  }
}

/// Cached process-wide CRC configuration.
///
/// Environment overrides are expected to be set before process start; later
/// changes are not observed.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<CrcConfig> = OnceLock::new();
    *CACHED.get_or_init(|| resolve(overrides()))
  }

  #[cfg(not(feature = "std"))]
  {
    resolve(overrides())
  }
}
