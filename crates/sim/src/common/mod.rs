//! Common constants and types shared across the fault analysis harness.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Constants:** Trace geometry, working-set bounds, and trial counts.
//! 2. **Error Handling:** The harness-wide error type.

/// Experiment-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use error::SimError;
