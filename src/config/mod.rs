//! Configuration module for loading simulation parameters.
//!
//! Reaction coefficients are tunable policy, so every one of them lives here
//! and can be overridden from JSON.

mod parameters;

pub use parameters::{GeneratorParameters, Parameters, ProgressionParameters, TreatmentParameters};
