//! Trace-driven set-associative cache simulator library.
//!
//! This crate models how a sequence of memory accesses performs against a
//! set-associative cache with LRU replacement. It provides:
//! 1. **Geometry:** Address decoding into `(set, tag)` from configurable bit widths.
//! 2. **Cache:** Arena-allocated set-associative storage with rank-based LRU eviction.
//! 3. **Trace:** Valgrind-style trace-line parsing and filtered record reading.
//! 4. **Simulation:** A deterministic fold of a trace into hit/miss/eviction counts.
//! 5. **Statistics:** Aggregate counters and summary reporting.

/// Set-associative cache storage and per-access classification.
pub mod cache;
/// Simulator configuration (defaults, geometry parameters, validation).
pub mod config;
/// Error types for configuration and trace I/O failures.
pub mod error;
/// Address decoding: set-index and tag extraction.
pub mod geometry;
/// Simulation session driving a trace through the cache.
pub mod sim;
/// Aggregate hit/miss/eviction counters and reporting.
pub mod stats;
/// Trace record parsing and reading.
pub mod trace;

/// Per-access classification; `Eviction` is a miss that displaced a valid line.
pub use crate::cache::Outcome;
/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Fatal boundary errors (configuration or trace I/O).
pub use crate::error::SimError;
/// Simulation session; construct with `Simulator::new` and fold a trace through it.
pub use crate::sim::Simulator;
/// Final report: hits, misses, and evictions for a run.
pub use crate::stats::SimStats;
