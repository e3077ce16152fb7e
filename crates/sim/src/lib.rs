//! Monte Carlo page-replacement fault analysis library.
//!
//! This crate estimates, by simulation, the page faults produced by three
//! classical replacement policies over synthetic reference traces. It provides:
//! 1. **Variates:** A polar-method normal sampler with the reference design's two-call spare cache.
//! 2. **Traces:** Synthetic reference strings segmented into locality fields.
//! 3. **Policies:** LRU, FIFO, and Clock (second chance) working-set simulators.
//! 4. **Driving:** A trial loop accumulating fault totals per (policy, working-set size).
//! 5. **Reporting:** The fault table and its literal text report.

/// Common constants and error types.
pub mod common;
/// Experiment configuration (defaults, JSON deserialization).
pub mod config;
/// Replacement policies (LRU, FIFO, Clock) and their shared helpers.
pub mod policy;
/// Normal random variate generation.
pub mod rng;
/// Experiment driving (trials, accumulation).
pub mod sim;
/// Fault-count aggregation and reporting.
pub mod stats;
/// Synthetic reference trace generation.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Harness-wide error type.
pub use crate::common::SimError;
/// The Monte Carlo experiment driver.
pub use crate::sim::Experiment;
/// Accumulated fault counts and the text report.
pub use crate::stats::FaultTable;
