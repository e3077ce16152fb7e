//! Experiment-Wide Constants.
//!
//! This module defines the fixed parameters of the reference experiment. It includes:
//! 1. **Trace Geometry:** Reference-string length and locality-field layout.
//! 2. **Page Distribution:** Mean and spread of the per-field page numbers.
//! 3. **Experiment Bounds:** Working-set size range and Monte Carlo trial count.

/// Number of page references in one synthetic trace.
pub const TRACE_LENGTH: usize = 1000;

/// Number of consecutive references in one locality field.
pub const FIELD_LENGTH: usize = 100;

/// Page-number offset between consecutive locality fields.
pub const FIELD_STRIDE: i64 = 10;

/// Mean of the normal distribution a field's page numbers are drawn from.
pub const PAGE_MEAN: f64 = 10.0;

/// Standard deviation of the per-field page-number distribution.
pub const PAGE_STD_DEV: f64 = 2.0;

/// Smallest working-set size the policies accept.
pub const WSS_MIN: usize = 4;

/// Largest working-set size the policies accept.
pub const WSS_MAX: usize = 20;

/// Number of independent Monte Carlo trials in the full experiment.
pub const TRIALS: u64 = 1000;
