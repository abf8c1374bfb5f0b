//! Unit tests for the cache simulator components.

/// Configuration default and validation tests.
pub mod config;
/// Counter accumulation and summary formatting tests.
pub mod stats;
