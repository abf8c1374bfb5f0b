//! Statistics Accumulation Unit Tests.
//!
//! Verifies outcome counting (evictions count as misses) and the canonical
//! summary line format.

use pretty_assertions::assert_eq;

use cachesim_core::cache::Outcome;
use cachesim_core::stats::SimStats;

/// A fresh accumulator reports all zeroes.
#[test]
fn starts_at_zero() {
    let stats = SimStats::new();

    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.evictions, 0);
    assert_eq!(stats.accesses(), 0);
}

/// Hits and misses each bump exactly one counter.
#[test]
fn hit_and_miss_count_once() {
    let mut stats = SimStats::new();
    stats.record(Outcome::Hit);
    stats.record(Outcome::Miss);
    stats.record(Outcome::Hit);

    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.evictions, 0);
}

/// An eviction is a kind of miss: it bumps both counters.
#[test]
fn eviction_counts_as_miss() {
    let mut stats = SimStats::new();
    stats.record(Outcome::Eviction);

    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.accesses(), 1);
}

/// The summary line matches the original reference format.
#[test]
fn summary_line_format() {
    let mut stats = SimStats::new();
    stats.record(Outcome::Miss);
    stats.record(Outcome::Hit);
    stats.record(Outcome::Hit);
    stats.record(Outcome::Eviction);

    assert_eq!(stats.to_string(), "hits:2 misses:2 evictions:1");
}
