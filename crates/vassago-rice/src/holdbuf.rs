//! Fallback hold buffer for decoded-but-not-yet-consumed results.
//!
//! A fixed arena of tagged option-slots, addressed by tag rather than by
//! arrival order. Producers that run ahead on the fast path park results
//! here; consumers drain any held tag whenever they are ready for it, so an
//! early insert never blocks a later one from being read first.
//!
//! This is a scoreboard, not a queue and not a cache: capacity is a hard
//! budget, there is no eviction, and a full buffer simply refuses inserts
//! until a read frees a slot. Overflow and misses are ordinary outcomes,
//! signalled as `bool`/`Option`.
//!
//! All methods take `&mut self`; a caller that needs shared access wraps the
//! buffer in a `Mutex`, which reproduces the one-operation-per-step
//! atomicity of the reference design.

use serde::{Deserialize, Serialize};
use tracing::trace;
use vassago_core::Tag;

/// Default number of slots.
pub const DEFAULT_SLOTS: usize = 4;

/// Configuration for the hold buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldBufferConfig {
    /// Number of slots. A hard capacity; the buffer never grows.
    pub slots: usize,
}

impl Default for HoldBufferConfig {
    fn default() -> Self {
        Self { slots: DEFAULT_SLOTS }
    }
}

/// Counters for buffer traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldBufferStats {
    /// Successful inserts.
    pub inserts: u64,
    /// Inserts refused because every slot was occupied.
    pub rejects: u64,
    /// Reads that found and drained their tag.
    pub hits: u64,
    /// Reads for a tag that was not held.
    pub misses: u64,
}

impl HoldBufferStats {
    /// Fraction of reads that hit.
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

/// One held entry. A slot is either empty or holds exactly one of these
/// from insert until the read that drains it.
#[derive(Debug, Clone)]
struct Held<P> {
    tag: Tag,
    payload: P,
}

/// Fixed-capacity, tag-addressed store of decode results.
#[derive(Debug, Clone)]
pub struct HoldBuffer<P> {
    slots: Vec<Option<Held<P>>>,
    live: usize,
    stats: HoldBufferStats,
}

impl<P> HoldBuffer<P> {
    /// Create a buffer with the given number of slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            live: 0,
            stats: HoldBufferStats::default(),
        }
    }

    /// Create a buffer from a configuration.
    pub fn with_config(config: &HoldBufferConfig) -> Self {
        Self::new(config.slots)
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// True when an insert would be refused.
    pub fn is_full(&self) -> bool {
        self.live == self.slots.len()
    }

    /// Traffic counters.
    pub fn stats(&self) -> HoldBufferStats {
        self.stats
    }

    /// Try to park a tagged payload in any free slot.
    ///
    /// Returns `false` without blocking when the buffer is full; retry and
    /// backoff policy belong to the caller. Inserting a tag that is already
    /// live violates the caller contract and is only checked in debug
    /// builds.
    pub fn try_insert(&mut self, tag: Tag, payload: P) -> bool {
        debug_assert!(
            self.find(tag).is_none(),
            "duplicate live tag {tag} inserted into hold buffer"
        );
        match self.slots.iter().position(Option::is_none) {
            Some(idx) => {
                self.slots[idx] = Some(Held { tag, payload });
                self.live += 1;
                self.stats.inserts += 1;
                trace!(tag, slot = idx, "hold buffer insert");
                true
            }
            None => {
                self.stats.rejects += 1;
                trace!(tag, "hold buffer full, insert refused");
                false
            }
        }
    }

    /// Non-destructive readiness probe for a tag.
    pub fn query(&self, tag: Tag) -> bool {
        self.find(tag).is_some()
    }

    /// Drain the entry for `tag`, freeing its slot in the same operation.
    ///
    /// Returns `None` for a tag that is not held. Reads are addressed by
    /// tag only; insertion order never constrains read order.
    pub fn try_read(&mut self, tag: Tag) -> Option<P> {
        match self.find(tag) {
            Some(idx) => {
                let held = self.slots[idx].take();
                self.live -= 1;
                self.stats.hits += 1;
                trace!(tag, slot = idx, "hold buffer read");
                held.map(|h| h.payload)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    fn find(&self, tag: Tag) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|held| held.tag == tag))
    }
}

impl<P> Default for HoldBuffer<P> {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}
