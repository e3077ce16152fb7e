//! # Replacement Policy Tests
//!
//! Hand-traced eviction scenarios for each policy, plus property tests
//! shared by all three.
