//! Experiment driving.
//!
//! This module owns the orchestration around the core: generating one trace
//! per trial and replaying it through every policy and working-set size,
//! accumulating fault totals into a [`crate::stats::FaultTable`].

/// The Monte Carlo experiment driver.
pub mod experiment;

pub use experiment::Experiment;
