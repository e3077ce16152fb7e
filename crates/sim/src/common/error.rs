//! Error definitions for the fault analysis harness.
//!
//! All inputs to the core are internally generated, so the error surface is
//! deliberately small: the user-visible failure modes are a working-set size
//! outside the supported range, which each policy rejects up front rather
//! than producing out-of-range indexing, and a degenerate trace geometry,
//! which the experiment driver rejects before any trial runs.

use thiserror::Error;

use super::constants::{WSS_MAX, WSS_MIN};

/// Errors produced by the fault analysis core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The requested working-set size is outside `[WSS_MIN, WSS_MAX]`.
    #[error("working-set size {wss} is outside the supported range {min}..={max}", min = WSS_MIN, max = WSS_MAX)]
    WorkingSetSize {
        /// The rejected working-set size.
        wss: usize,
    },

    /// The configured locality-field length is zero, so references cannot
    /// be assigned to fields.
    #[error("locality-field length must be nonzero")]
    ZeroFieldLength,
}
