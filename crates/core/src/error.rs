//! Error types for the cache simulator.
//!
//! This module defines the fatal error taxonomy for a simulation run. It provides:
//! 1. **Configuration errors:** Invalid geometry, detected before any cache is built.
//! 2. **I/O errors:** A trace source that cannot be opened or read.
//!
//! There is no recoverable-error path inside the cache model itself: every
//! `(set, tag)` pair yields a defined classification given a valid
//! configuration, and malformed trace lines are skipped rather than reported.

use thiserror::Error;

use crate::config::ADDRESS_BITS;

/// Invalid cache geometry, reported before any access is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Associativity of zero leaves no slot to fill; the cache cannot exist.
    #[error("associativity must be at least 1")]
    ZeroWays,

    /// The set-index and block-offset fields together exceed the address width.
    #[error("set bits ({set_bits}) + block bits ({block_bits}) exceed the {ADDRESS_BITS}-bit address width")]
    GeometryOverflow {
        /// Configured number of set-index bits.
        set_bits: u32,
        /// Configured number of block-offset bits.
        block_bits: u32,
    },

    /// The total line count `2^S * E` cannot be represented in a machine
    /// word; such a cache cannot be allocated.
    #[error("cache geometry needs 2^{set_bits} * {ways} lines, which overflows the machine word")]
    LineCountOverflow {
        /// Configured number of set-index bits.
        set_bits: u32,
        /// Configured associativity.
        ways: usize,
    },
}

/// Fatal errors surfaced at the simulation boundary.
///
/// All fatal conditions are detected at configuration or I/O time, never
/// inside the per-access classification loop.
#[derive(Debug, Error)]
pub enum SimError {
    /// The supplied geometry failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The trace source could not be opened or read.
    #[error("trace I/O error: {0}")]
    Io(#[from] std::io::Error),
}
