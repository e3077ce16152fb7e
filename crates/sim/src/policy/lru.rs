//! Least Recently Used (LRU) Replacement.
//!
//! Every reference restamps its page with the current step number, so the
//! slot with the minimum stamp always holds the true least-recently-used
//! resident. On a fault, that slot is overwritten in place; the array order
//! itself carries no meaning.
//!
//! # Performance
//!
//! - **Per reference:** O(k) membership scan, plus O(k) minimum scan on a fault.
//! - **Space:** O(k) pages + O(k) stamps.
//! - **Best Case:** Workloads with strong temporal locality.
//! - **Worst Case:** Cyclic scans one page wider than the working set (thrashing).

use super::{find_slot, oldest_slot, validate_wss};
use crate::common::SimError;
use crate::trace::PageId;

/// A fixed-capacity working set with per-slot recency stamps.
///
/// Owning both arrays in one type keeps the pages and their metadata from
/// drifting out of sync.
struct LruSet {
    pages: Vec<PageId>,
    last_used: Vec<u64>,
}

impl LruSet {
    fn with_capacity(wss: usize) -> Self {
        Self {
            pages: Vec::with_capacity(wss),
            last_used: Vec::with_capacity(wss),
        }
    }

    fn find(&self, page: PageId) -> Option<usize> {
        find_slot(&self.pages, page)
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    /// Warm-up fill: appends without evicting.
    fn fill(&mut self, page: PageId, stamp: u64) {
        self.pages.push(page);
        self.last_used.push(stamp);
    }

    /// Hit: restamps the resident page.
    fn refresh(&mut self, slot: usize, stamp: u64) {
        self.last_used[slot] = stamp;
    }

    /// Fault: overwrites the least-recently-used slot.
    fn evict_and_insert(&mut self, page: PageId, stamp: u64) {
        let slot = oldest_slot(&self.last_used);
        self.pages[slot] = page;
        self.last_used[slot] = stamp;
    }
}

/// Counts the page faults LRU replacement produces replaying `trace` with a
/// working set of `wss` slots.
///
/// # Errors
///
/// Returns [`SimError::WorkingSetSize`] when `wss` is outside the supported
/// range.
pub fn fault_count(trace: &[PageId], wss: usize) -> Result<u64, SimError> {
    validate_wss(wss)?;

    let mut set = LruSet::with_capacity(wss);
    let mut faults = 0;
    for (step, &page) in trace.iter().enumerate() {
        let stamp = step as u64;
        if set.len() < wss {
            set.fill(page, stamp);
        } else if let Some(slot) = set.find(page) {
            set.refresh(slot, stamp);
        } else {
            set.evict_and_insert(page, stamp);
            faults += 1;
        }
    }
    Ok(faults)
}
