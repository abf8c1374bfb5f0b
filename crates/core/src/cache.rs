//! Set-associative cache storage with rank-based LRU replacement.
//!
//! This module owns all cache lines and classifies one sub-access at a time.
//! It provides:
//! 1. **Arena storage:** One contiguous block of `2^S * E` lines, indexed by
//!    `set * ways + way` rather than pointer-chased per set.
//! 2. **Classification:** Each access is a hit, a miss into a free slot, or an
//!    eviction of the least-recently-used line.
//! 3. **Recency ranking:** Every line carries a dense rank in `[0, ways)`;
//!    rank 0 is most recent, `ways - 1` is the eviction victim.
//!
//! The rank array trades an O(E) per-access scan for a flat fixed-size layout,
//! which is the right trade at hardware associativities (typically E <= 16).

use crate::config::SimConfig;
use crate::geometry::Geometry;

/// Classification of a single sub-access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The requested tag was found in a valid line of its set.
    Hit,
    /// The tag was absent but a free slot took it without displacing anything.
    Miss,
    /// The tag was absent and the LRU line was discarded to make room.
    ///
    /// An eviction is a kind of miss; aggregate counting treats it as both.
    Eviction,
}

/// One cache line: validity, stored tag, and recency rank.
///
/// `recency` is a dense rank in `[0, ways)` where 0 is most-recently-used.
/// Within a set the ranks form a permutation of `0..ways` at all times;
/// invalid lines start with synthetic descending ranks so that first fills
/// claim slots in storage order.
#[derive(Debug, Clone)]
struct CacheLine {
    valid: bool,
    tag: u64,
    recency: usize,
}

/// Set-associative cache with LRU eviction.
///
/// Owns `2^S` sets of `E` lines each for the lifetime of a simulation run.
/// The storage is allocated once at construction and never resized.
#[derive(Debug)]
pub struct Cache {
    lines: Vec<CacheLine>,
    ways: usize,
}

impl Cache {
    /// Builds an empty cache for the given (validated) geometry.
    ///
    /// Every line starts invalid with rank `ways - 1 - way`, biasing the
    /// rank mechanism so the first `ways` fills of a set land in way order.
    pub fn new(config: &SimConfig) -> Self {
        let ways = config.ways;
        let lines = (0..config.num_sets() * ways)
            .map(|idx| CacheLine {
                valid: false,
                tag: 0,
                recency: ways - 1 - idx % ways,
            })
            .collect();
        Self { lines, ways }
    }

    /// Classifies one sub-access against one set and updates recency state.
    ///
    /// Ways are scanned in storage order: a valid line with a matching tag
    /// short-circuits to [`Outcome::Hit`]; the first invalid line encountered
    /// before any match short-circuits to [`Outcome::Miss`] (only filled
    /// slots can hit); a full scan with no match is [`Outcome::Eviction`].
    /// The just-used rank is then promoted to 0, every younger rank ages by
    /// one, and on a miss or eviction the new tag is installed into the line
    /// now holding rank 0.
    ///
    /// This operation cannot fail: `ways >= 1` guarantees a slot, and a full
    /// non-matching set evicts by design rather than erroring.
    ///
    /// # Arguments
    ///
    /// * `set` - Set index from the address decoder; must be `< 2^S`.
    /// * `tag` - Tag bits identifying the requested block.
    ///
    /// # Returns
    ///
    /// The classification of this sub-access.
    pub fn access(&mut self, set: usize, tag: u64) -> Outcome {
        let base = set * self.ways;
        let slots = &mut self.lines[base..base + self.ways];

        let mut outcome = Outcome::Eviction;
        let mut just_used = self.ways - 1;

        for line in slots.iter() {
            if line.valid {
                if line.tag == tag {
                    outcome = Outcome::Hit;
                    just_used = line.recency;
                    break;
                }
            } else {
                outcome = Outcome::Miss;
                break;
            }
        }

        // Promote the just-used rank to 0; everything younger ages by one.
        // Runs unconditionally so the rank permutation invariant holds even
        // across fills of invalid lines.
        for line in slots.iter_mut() {
            if line.recency < just_used {
                line.recency += 1;
            } else if line.recency == just_used {
                line.recency = 0;
            }
        }

        if outcome != Outcome::Hit {
            // Exactly one line holds rank 0 after the update.
            for line in slots.iter_mut() {
                if line.recency == 0 {
                    line.tag = tag;
                    line.valid = true;
                }
            }
        }

        outcome
    }

    /// Checks whether a block is currently resident, without touching
    /// recency state.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Decoder matching this cache's configuration.
    /// * `addr` - The 64-bit trace address to look up.
    pub fn contains(&self, geometry: &Geometry, addr: u64) -> bool {
        let base = geometry.set_index(addr) * self.ways;
        self.lines[base..base + self.ways]
            .iter()
            .any(|line| line.valid && line.tag == geometry.tag(addr))
    }
}
