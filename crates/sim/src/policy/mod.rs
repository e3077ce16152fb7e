//! Page Replacement Policies.
//!
//! Implements the three simulated replacement strategies evaluated by the
//! experiment, each replaying an immutable reference trace through a
//! fixed-capacity working set and counting page faults.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Fifo`: First-In, First-Out.
//! - `Clock`: Second-chance (use-bit) FIFO.
//!
//! All three share the same warm-up rule: while the working set is below
//! capacity, reference `t` fills slot `t` directly and never counts as a
//! fault, even when the page is already resident. Once full, exactly one
//! resident page is evicted per fault.

/// First-In, First-Out replacement.
pub mod fifo;

/// Second-chance (Clock) replacement.
pub mod clock;

/// Least Recently Used replacement.
pub mod lru;

use crate::common::SimError;
use crate::common::constants::{WSS_MAX, WSS_MIN};
use crate::trace::PageId;

/// The replacement strategies evaluated by the experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Least Recently Used.
    Lru,
    /// First-In, First-Out.
    Fifo,
    /// Second-chance (Clock).
    Clock,
}

impl PolicyKind {
    /// All policies, in report order.
    pub const ALL: [Self; 3] = [Self::Lru, Self::Fifo, Self::Clock];

    /// The policy's report label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Fifo => "FIFO",
            Self::Clock => "Clock",
        }
    }

    /// Counts the page faults this policy produces replaying `trace` with a
    /// working set of `wss` slots.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::WorkingSetSize`] when `wss` is outside the
    /// supported range.
    pub fn fault_count(self, trace: &[PageId], wss: usize) -> Result<u64, SimError> {
        match self {
            Self::Lru => lru::fault_count(trace, wss),
            Self::Fifo => fifo::fault_count(trace, wss),
            Self::Clock => clock::fault_count(trace, wss),
        }
    }
}

/// Rejects working-set sizes the experiment does not support.
pub(crate) const fn validate_wss(wss: usize) -> Result<(), SimError> {
    if wss >= WSS_MIN && wss <= WSS_MAX {
        Ok(())
    } else {
        Err(SimError::WorkingSetSize { wss })
    }
}

/// Linear membership scan: the slot holding `page`, if resident.
pub(crate) fn find_slot(pages: &[PageId], page: PageId) -> Option<usize> {
    pages.iter().position(|&resident| resident == page)
}

/// First-minimum linear scan over recency stamps.
///
/// Ties break toward the lowest slot index. Only called on a full working
/// set, so `stamps` is never empty.
pub(crate) fn oldest_slot(stamps: &[u64]) -> usize {
    let mut slot = 0;
    let mut oldest = u64::MAX;
    for (index, &stamp) in stamps.iter().enumerate() {
        if stamp < oldest {
            oldest = stamp;
            slot = index;
        }
    }
    slot
}

/// Left-compacting shift-and-append: removes the element at `slot`, shifts
/// all later elements one position left, and appends `value` at the end.
pub(crate) fn shift_insert<T>(slots: &mut Vec<T>, slot: usize, value: T) {
    let _ = slots.remove(slot);
    slots.push(value);
}
