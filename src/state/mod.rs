//! State management for the liver lobule simulation.
//!
//! Contains the mutable tissue state, the rounded snapshots handed to
//! callers, and the diagnostics derived from them.

mod diagnostics;
mod snapshot;
mod tissue;

pub use diagnostics::{FibrosisStage, TissueDiagnostics};
pub use snapshot::TissueSnapshot;
pub use tissue::{clamp_unit, Regime, TissueState};
