//! Test module for responsive-stack-router
//!
//! Unit tests for the state inspector, the structural rewriters and the
//! base router, plus property-based tests (proptest) for the rehydration
//! invariants.

#[cfg(test)]
pub mod helpers;


#[cfg(test)]
pub mod content_pane_tests;
