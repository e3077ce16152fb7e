//! Fault-Count Aggregation and Reporting.
//!
//! This module accumulates per-policy fault counts across Monte Carlo trials
//! and renders the experiment report. It provides:
//! 1. **Accumulation:** A results table indexed by (policy, working-set size), explicitly zero-initialized.
//! 2. **Reporting:** The literal text report, one `Working Set <k> - <POLICY> - <total>` line per pair.
//! 3. **Serialization:** `serde` support for machine-readable output.
//!
//! Totals are raw sums over all trials; they are deliberately not normalized
//! by the trial count, matching the reference report.

use std::fmt::Write;

use serde::Serialize;

use crate::policy::PolicyKind;

/// Accumulated fault counts for every (policy, working-set size) pair.
///
/// One row per policy, one column per working-set size in
/// `wss_min..=wss_max`. All accumulators start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultTable {
    wss_min: usize,
    wss_max: usize,
    lru: Vec<u64>,
    fifo: Vec<u64>,
    clock: Vec<u64>,
}

impl FaultTable {
    /// Creates an empty table covering `wss_min..=wss_max`.
    pub fn new(wss_min: usize, wss_max: usize) -> Self {
        let sizes = wss_max.saturating_sub(wss_min).saturating_add(1);
        Self {
            wss_min,
            wss_max,
            lru: vec![0; sizes],
            fifo: vec![0; sizes],
            clock: vec![0; sizes],
        }
    }

    /// The smallest working-set size covered by the table.
    pub const fn wss_min(&self) -> usize {
        self.wss_min
    }

    /// The largest working-set size covered by the table.
    pub const fn wss_max(&self) -> usize {
        self.wss_max
    }

    /// Maps a working-set size to its column, rejecting sizes the table
    /// does not cover before they can reach slice indexing.
    fn column(&self, wss: usize) -> usize {
        assert!(
            (self.wss_min..=self.wss_max).contains(&wss),
            "working-set size {wss} is outside the table range {}..={}",
            self.wss_min,
            self.wss_max
        );
        wss - self.wss_min
    }

    fn row(&self, kind: PolicyKind) -> &[u64] {
        match kind {
            PolicyKind::Lru => &self.lru,
            PolicyKind::Fifo => &self.fifo,
            PolicyKind::Clock => &self.clock,
        }
    }

    /// Adds one trial's fault count into the (policy, size) accumulator.
    ///
    /// # Panics
    ///
    /// Panics when `wss` is outside `wss_min..=wss_max`.
    pub fn record(&mut self, kind: PolicyKind, wss: usize, faults: u64) {
        let column = self.column(wss);
        let row = match kind {
            PolicyKind::Lru => &mut self.lru,
            PolicyKind::Fifo => &mut self.fifo,
            PolicyKind::Clock => &mut self.clock,
        };
        row[column] += faults;
    }

    /// The accumulated fault total for one (policy, size) pair.
    ///
    /// # Panics
    ///
    /// Panics when `wss` is outside `wss_min..=wss_max`.
    pub fn total(&self, kind: PolicyKind, wss: usize) -> u64 {
        self.row(kind)[self.column(wss)]
    }

    /// Renders the report: for each working-set size, one line per policy in
    /// LRU, FIFO, Clock order, followed by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for wss in self.wss_min..=self.wss_max {
            for kind in PolicyKind::ALL {
                let _ = writeln!(
                    out,
                    "Working Set {} - {} - {}",
                    wss,
                    kind.label(),
                    self.total(kind, wss)
                );
            }
            out.push('\n');
        }
        out
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}
