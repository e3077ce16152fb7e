//! First-In, First-Out (FIFO) Replacement.
//!
//! Residency order *is* array order: slot 0 always holds the oldest
//! resident. A fault shifts every slot one position left (discarding slot 0)
//! and appends the new page at the end. Hits do nothing; FIFO ignores
//! recency of reference entirely, so a page repeatedly referenced just
//! before its turn is still evicted.
//!
//! # Performance
//!
//! - **Per reference:** O(k) membership scan, plus O(k) shift on a fault.
//! - **Space:** O(k) pages, no per-slot metadata.
//! - **Best Case:** Streaming accesses where all pages have equal importance.
//! - **Worst Case:** Strong temporal locality (evicts frequently-used pages).

use super::{find_slot, shift_insert, validate_wss};
use crate::common::SimError;
use crate::trace::PageId;

/// A fixed-capacity working set kept in insertion order.
struct FifoSet {
    pages: Vec<PageId>,
}

impl FifoSet {
    fn with_capacity(wss: usize) -> Self {
        Self {
            pages: Vec::with_capacity(wss),
        }
    }

    fn contains(&self, page: PageId) -> bool {
        find_slot(&self.pages, page).is_some()
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    /// Warm-up fill: appends without evicting.
    fn fill(&mut self, page: PageId) {
        self.pages.push(page);
    }

    /// Fault: evicts the oldest resident (slot 0) and appends the new page.
    fn evict_and_insert(&mut self, page: PageId) {
        shift_insert(&mut self.pages, 0, page);
    }
}

/// Counts the page faults FIFO replacement produces replaying `trace` with a
/// working set of `wss` slots.
///
/// # Errors
///
/// Returns [`SimError::WorkingSetSize`] when `wss` is outside the supported
/// range.
pub fn fault_count(trace: &[PageId], wss: usize) -> Result<u64, SimError> {
    validate_wss(wss)?;

    let mut set = FifoSet::with_capacity(wss);
    let mut faults = 0;
    for &page in trace {
        if set.len() < wss {
            set.fill(page);
        } else if !set.contains(page) {
            set.evict_and_insert(page);
            faults += 1;
        }
    }
    Ok(faults)
}
