//! Aggregate simulation statistics and reporting.
//!
//! This module accumulates the outcome of every classified sub-access. It provides:
//! 1. **Counters:** Hit, miss, and eviction totals, where every eviction also
//!    counts as a miss.
//! 2. **Reporting:** The canonical one-line summary plus a detailed aligned
//!    breakdown with derived rates.

use std::fmt;

use crate::cache::Outcome;

/// Final report for a run: non-negative hit, miss, and eviction counts.
///
/// Built by folding [`Outcome`] values through [`SimStats::record`]; there is
/// no shared mutable state across components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Sub-accesses whose tag was found valid in its set.
    pub hits: u64,
    /// Sub-accesses whose tag was absent (evictions included).
    pub misses: u64,
    /// Misses that additionally discarded a valid line.
    pub evictions: u64,
}

impl SimStats {
    /// Creates a zeroed statistics accumulator.
    pub const fn new() -> Self {
        Self {
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Folds one sub-access classification into the counters.
    ///
    /// An eviction is a kind of miss, so it increments both `misses` and
    /// `evictions`.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Miss => self.misses += 1,
            Outcome::Eviction => {
                self.misses += 1;
                self.evictions += 1;
            }
        }
    }

    /// Total number of classified sub-accesses.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Prints the detailed statistics block to stdout.
    ///
    /// Rates are guarded against division by zero for empty traces.
    pub fn print(&self) {
        let total = if self.accesses() == 0 {
            1
        } else {
            self.accesses()
        };
        let hit_rate = (self.hits as f64 / total as f64) * 100.0;

        println!("==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses());
        println!("hits                     {}", self.hits);
        println!("misses                   {}", self.misses);
        println!("evictions                {}", self.evictions);
        println!("hit_rate                 {hit_rate:.2}%");
        println!("==========================================================");
    }
}

impl fmt::Display for SimStats {
    /// Formats the canonical one-line summary: `hits:H misses:M evictions:E`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }
}
