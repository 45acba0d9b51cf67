//! Engine-level tests that span several modules.
//!
//! - `scenarios.rs`: end-to-end walkthroughs of placement, swap and reset
//! - `properties.rs`: proptest checks of the bench/field invariants over
//!   random intent sequences
//! - `helpers.rs`: the shared test catalog and engine setup

mod helpers;
mod properties;
mod scenarios;

// Re-export for convenience
pub use helpers::*;
