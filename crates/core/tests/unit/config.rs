//! Configuration Validation Unit Tests.
//!
//! Verifies the geometry defaults, JSON deserialization, and the boundary
//! checks that must reject a configuration before any cache is built.

use pretty_assertions::assert_eq;

use cachesim_core::config::{ADDRESS_BITS, SimConfig};
use cachesim_core::error::ConfigError;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

/// The default geometry is a small direct-mapped cache and passes validation.
#[test]
fn default_config_is_valid() {
    let config = SimConfig::default();

    assert_eq!(config.set_bits, 4);
    assert_eq!(config.ways, 1);
    assert_eq!(config.block_bits, 4);
    assert!(config.validate().is_ok());
}

/// `num_sets` is `2^set_bits`.
#[test]
fn num_sets_is_power_of_two() {
    let config = SimConfig {
        set_bits: 3,
        ways: 2,
        block_bits: 5,
    };
    assert_eq!(config.num_sets(), 8);
}

// ══════════════════════════════════════════════════════════
// 2. Validation
// ══════════════════════════════════════════════════════════

/// Zero associativity leaves no slot to fill and must be rejected.
#[test]
fn zero_ways_is_rejected() {
    let config = SimConfig {
        set_bits: 4,
        ways: 0,
        block_bits: 4,
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroWays));
}

/// Set and block fields together must fit in the address width.
#[test]
fn geometry_overflow_is_rejected() {
    let config = SimConfig {
        set_bits: 40,
        ways: 1,
        block_bits: 30,
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::GeometryOverflow {
            set_bits: 40,
            block_bits: 30,
        })
    );
}

/// `S = 64` satisfies `S + B <= 64` but its set count cannot be represented
/// in a machine word; it must fail validation, not panic or silently wrap
/// at cache construction.
#[test]
fn unrepresentable_set_count_is_rejected() {
    let config = SimConfig {
        set_bits: 64,
        ways: 1,
        block_bits: 0,
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::LineCountOverflow {
            set_bits: 64,
            ways: 1,
        })
    );
}

/// A representable set count can still overflow once multiplied by the
/// associativity.
#[test]
fn unrepresentable_line_count_is_rejected() {
    let config = SimConfig {
        set_bits: 63,
        ways: 4,
        block_bits: 0,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::LineCountOverflow { .. })
    ));
}

/// The boundary case `S + B == 64` is still valid.
#[test]
fn geometry_at_address_width_is_valid() {
    let config = SimConfig {
        set_bits: 34,
        ways: 1,
        block_bits: ADDRESS_BITS - 34,
    };
    assert!(config.validate().is_ok());
}

// ══════════════════════════════════════════════════════════
// 3. JSON Deserialization
// ══════════════════════════════════════════════════════════

/// A full JSON object maps onto every field.
#[test]
fn deserializes_full_json() {
    let json = r#"{ "set_bits": 2, "ways": 4, "block_bits": 6 }"#;
    let config: SimConfig = serde_json::from_str(json).unwrap();

    assert_eq!(
        config,
        SimConfig {
            set_bits: 2,
            ways: 4,
            block_bits: 6,
        }
    );
}

/// Omitted fields fall back to the documented defaults.
#[test]
fn deserializes_partial_json_with_defaults() {
    let json = r#"{ "ways": 8 }"#;
    let config: SimConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.set_bits, 4);
    assert_eq!(config.ways, 8);
    assert_eq!(config.block_bits, 4);
}
