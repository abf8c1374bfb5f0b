//! Address decoding for the configured cache geometry.
//!
//! This module splits a 64-bit trace address into its cache-indexing fields.
//! It provides the following:
//! 1. **Set extraction:** The `S` bits immediately above the block offset.
//! 2. **Tag extraction:** All remaining higher-order bits.
//! 3. **Purity:** No state and no side effects; safe to share between readers.

use crate::config::SimConfig;

/// Decoded cache geometry for a validated `(S, E, B)` triple.
///
/// Construct once from a [`SimConfig`] and reuse for every access; decoding
/// is read-only on the stored bit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    set_bits: u32,
    block_bits: u32,
    set_mask: u64,
}

impl Geometry {
    /// Creates a decoder for the given configuration.
    ///
    /// The configuration is assumed validated; out-of-range bit widths
    /// produce whatever bit pattern the shift formulas yield.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated geometry triple.
    pub const fn new(config: &SimConfig) -> Self {
        Self {
            set_bits: config.set_bits,
            block_bits: config.block_bits,
            set_mask: (1u64 << config.set_bits) - 1,
        }
    }

    /// Extracts the set index from an address.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 64-bit trace address.
    ///
    /// # Returns
    ///
    /// `(addr >> B) & ((1 << S) - 1)`: the `S` bits above the block offset.
    #[inline(always)]
    pub const fn set_index(&self, addr: u64) -> usize {
        ((addr >> self.block_bits) & self.set_mask) as usize
    }

    /// Extracts the tag from an address.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 64-bit trace address.
    ///
    /// # Returns
    ///
    /// `(addr >> B) >> S`: all bits above the set-index field.
    #[inline(always)]
    pub const fn tag(&self, addr: u64) -> u64 {
        (addr >> self.block_bits) >> self.set_bits
    }
}
