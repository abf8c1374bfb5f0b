//! Configuration system for the cache simulator.
//!
//! This module defines the structures used to parameterize a simulation run. It provides:
//! 1. **Defaults:** Baseline cache geometry constants.
//! 2. **Structures:** The `SimConfig` geometry triple `(set_bits, ways, block_bits)`.
//! 3. **Validation:** Boundary checks performed once, before any cache is built.
//!
//! Configuration is supplied via JSON (`serde_json`) or built from CLI flags; use
//! `SimConfig::default()` for a small direct-mapped baseline.

use serde::Deserialize;

use crate::error::ConfigError;

/// Width of a trace address in bits.
pub const ADDRESS_BITS: u32 = 64;

/// Default configuration constants for the simulator.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden in a JSON configuration or on the command line.
mod defaults {
    /// Default number of set-index bits (16 sets).
    pub const SET_BITS: u32 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const WAYS: usize = 1;

    /// Default number of block-offset bits (16-byte blocks).
    pub const BLOCK_BITS: u32 = 4;
}

/// Cache geometry configuration.
///
/// Holds the `(S, E, B)` triple: `set_bits` selects `2^S` sets, `ways` is the
/// associativity of each set, and `block_bits` is the number of low-order
/// address bits covered by one cache block.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim_core::config::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.set_bits, 4);
/// assert_eq!(config.ways, 1);
/// assert!(config.validate().is_ok());
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use cachesim_core::config::SimConfig;
///
/// let json = r#"{ "set_bits": 2, "ways": 4, "block_bits": 6 }"#;
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.num_sets(), 4);
/// assert_eq!(config.ways, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Number of set-index bits (the cache has `2^set_bits` sets).
    #[serde(default = "SimConfig::default_set_bits")]
    pub set_bits: u32,

    /// Associativity: lines per set. Must be at least 1.
    #[serde(default = "SimConfig::default_ways")]
    pub ways: usize,

    /// Number of block-offset bits below the set index.
    #[serde(default = "SimConfig::default_block_bits")]
    pub block_bits: u32,
}

impl SimConfig {
    /// Returns the default number of set-index bits.
    fn default_set_bits() -> u32 {
        defaults::SET_BITS
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default number of block-offset bits.
    fn default_block_bits() -> u32 {
        defaults::BLOCK_BITS
    }

    /// Number of sets selected by this geometry (`2^set_bits`).
    ///
    /// Meaningful only for geometries that pass [`Self::validate`], which
    /// guarantees the shift is in range.
    pub const fn num_sets(&self) -> usize {
        1 << self.set_bits
    }

    /// Checks the geometry against the simulator's boundary constraints.
    ///
    /// Fatal configuration errors are reported here, before any cache is
    /// constructed; the per-access path never validates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWays`] if `ways == 0`,
    /// [`ConfigError::GeometryOverflow`] if `set_bits + block_bits` exceeds
    /// the address width, or [`ConfigError::LineCountOverflow`] if the total
    /// line count `2^S * E` does not fit in a machine word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        if u64::from(self.set_bits) + u64::from(self.block_bits) > u64::from(ADDRESS_BITS) {
            return Err(ConfigError::GeometryOverflow {
                set_bits: self.set_bits,
                block_bits: self.block_bits,
            });
        }
        if 1usize
            .checked_shl(self.set_bits)
            .and_then(|sets| sets.checked_mul(self.ways))
            .is_none()
        {
            return Err(ConfigError::LineCountOverflow {
                set_bits: self.set_bits,
                ways: self.ways,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    /// Creates a default configuration: 16 sets, direct-mapped, 16-byte blocks.
    fn default() -> Self {
        Self {
            set_bits: defaults::SET_BITS,
            ways: defaults::WAYS,
            block_bits: defaults::BLOCK_BITS,
        }
    }
}
