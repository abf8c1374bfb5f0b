//! Simulation session: owns the cache and folds a trace through it.
//!
//! One record is fully classified and the cache mutated before the next is
//! read; the whole run is a deterministic sequential fold with a single
//! final report.

use std::io::BufRead;

use tracing::debug;

use crate::cache::{Cache, Outcome};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::geometry::Geometry;
use crate::stats::SimStats;
use crate::trace::{AccessKind, AccessRecord, TraceReader};

/// Outcome of one trace record: the first sub-access classification plus
/// whether a forced second hit followed (modify records only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Classification of the load (or only) sub-access.
    pub first: Outcome,
    /// True for modify records: the store sub-access always hits, because
    /// the load either found the line or just installed it.
    pub forced_hit: bool,
}

/// Simulation session: address decoder, cache state, and counters.
#[derive(Debug)]
pub struct Simulator {
    geometry: Geometry,
    cache: Cache,
    stats: SimStats,
}

impl Simulator {
    /// Creates a session for a validated configuration.
    ///
    /// The cache is sized `2^S * E` lines up front and never resized.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the geometry fails validation; no
    /// cache is constructed in that case.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        debug!(
            set_bits = config.set_bits,
            ways = config.ways,
            block_bits = config.block_bits,
            "building cache"
        );
        Ok(Self {
            geometry: Geometry::new(config),
            cache: Cache::new(config),
            stats: SimStats::new(),
        })
    }

    /// Applies one trace record to the cache and folds it into the counters.
    ///
    /// A modify record is a load immediately followed by a store to the same
    /// address; the second sub-access is a guaranteed hit and is counted as
    /// exactly one additional hit.
    pub fn step(&mut self, record: AccessRecord) -> RecordOutcome {
        let set = self.geometry.set_index(record.addr);
        let tag = self.geometry.tag(record.addr);

        let first = self.cache.access(set, tag);
        let forced_hit = record.kind == AccessKind::Modify;

        self.stats.record(first);
        if forced_hit {
            self.stats.record(Outcome::Hit);
        }

        RecordOutcome { first, forced_hit }
    }

    /// Consumes a trace source to exhaustion and returns the final report.
    ///
    /// Instruction fetches and malformed lines are skipped by the reader;
    /// the per-record path is infallible.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the underlying source fails mid-read.
    pub fn run<R: BufRead>(&mut self, source: R) -> Result<SimStats, SimError> {
        for record in TraceReader::new(source) {
            let _ = self.step(record?);
        }
        debug!(report = %self.stats, "trace exhausted");
        Ok(self.stats)
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> SimStats {
        self.stats
    }

    /// Read-only view of the cache state, for inspection and tests.
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// The address decoder for this session's geometry.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}
