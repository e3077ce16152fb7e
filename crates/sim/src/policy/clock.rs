//! Second-Chance (Clock) Replacement.
//!
//! FIFO order with a per-slot use bit. A hit sets the resident page's bit; a
//! fault runs the clock hand from slot 0: every set bit it passes is
//! decremented to zero (granting that page a second chance) and the first
//! zero-bit slot it reaches is evicted. Both the page array and the bit
//! array are then shifted left past the victim and the new page is appended
//! with a clear bit, so array order keeps doubling as hand order.
//!
//! With all bits clear the policy degenerates to FIFO; with bits set it
//! defers eviction of recently-referenced pages, approximating LRU.
//!
//! # Performance
//!
//! - **Per reference:** O(k) membership scan; a fault adds at most two hand
//!   passes plus an O(k) shift.
//! - **Space:** O(k) pages + O(k) use bits.

use super::{find_slot, shift_insert, validate_wss};
use crate::common::SimError;
use crate::trace::PageId;

/// A fixed-capacity working set with per-slot use bits, kept in hand order.
struct ClockSet {
    pages: Vec<PageId>,
    use_bits: Vec<u8>,
}

impl ClockSet {
    fn with_capacity(wss: usize) -> Self {
        Self {
            pages: Vec::with_capacity(wss),
            use_bits: Vec::with_capacity(wss),
        }
    }

    fn find(&self, page: PageId) -> Option<usize> {
        find_slot(&self.pages, page)
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    /// Warm-up fill: the bit records whether the page was already resident
    /// before this reference (a warm-up duplicate counts as a reference).
    fn fill(&mut self, page: PageId, referenced: bool) {
        self.pages.push(page);
        self.use_bits.push(u8::from(referenced));
    }

    /// Hit: grants the resident page a fresh second chance.
    fn refresh(&mut self, slot: usize) {
        self.use_bits[slot] = 1;
    }

    /// Fault: runs the hand, evicts the victim, appends `page` with a clear
    /// bit at the last slot.
    fn evict_and_insert(&mut self, page: PageId) {
        let victim = self.run_hand();
        shift_insert(&mut self.pages, victim, page);
        shift_insert(&mut self.use_bits, victim, 0);
    }

    /// Advances the clock hand until it finds a zero bit.
    ///
    /// Every set bit is decremented exactly once per full pass, so a second
    /// pass always terminates at slot 0.
    fn run_hand(&mut self) -> usize {
        loop {
            for (slot, bit) in self.use_bits.iter_mut().enumerate() {
                if *bit == 0 {
                    return slot;
                }
                *bit -= 1;
            }
        }
    }
}

/// Counts the page faults Clock replacement produces replaying `trace` with
/// a working set of `wss` slots.
///
/// # Errors
///
/// Returns [`SimError::WorkingSetSize`] when `wss` is outside the supported
/// range.
pub fn fault_count(trace: &[PageId], wss: usize) -> Result<u64, SimError> {
    validate_wss(wss)?;

    let mut set = ClockSet::with_capacity(wss);
    let mut faults = 0;
    for &page in trace {
        let resident = set.find(page);
        if set.len() < wss {
            set.fill(page, resident.is_some());
        } else if let Some(slot) = resident {
            set.refresh(slot);
        } else {
            set.evict_and_insert(page);
            faults += 1;
        }
    }
    Ok(faults)
}
