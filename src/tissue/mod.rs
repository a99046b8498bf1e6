//! Agent-based liver lobule model.
//!
//! The model itself is stateless apart from its coefficients: it mutates a
//! caller-owned [`TissueState`] through two entry points.
//!
//! - [`TissueModel::apply_treatment`] injects one dose and then advances a step
//! - [`TissueModel::advance`] runs one step of natural progression
//!
//! Treatment is evaluated in a fixed order: pathology gate, receptor match,
//! affinity gate, receptor/action effect, toxicity, clamp, progression.
//! A dose that fails any gate is absorbed as a no-op; nothing here returns an
//! error.

mod progression;
mod treatment;

pub use treatment::{TreatmentOutcome, TreatmentReport};

use crate::config::{Parameters, ProgressionParameters, TreatmentParameters};
use crate::state::{TissueDiagnostics, TissueState};

/// Coefficients for treatment response and natural progression
#[derive(Debug, Clone, Default)]
pub struct TissueModel {
    pub treatment: TreatmentParameters,
    pub progression: ProgressionParameters,
}

impl TissueModel {
    pub fn new(params: &Parameters) -> Self {
        Self {
            treatment: params.treatment.clone(),
            progression: params.progression.clone(),
        }
    }

    pub fn with_parameters(treatment: TreatmentParameters, progression: ProgressionParameters) -> Self {
        Self {
            treatment,
            progression,
        }
    }

    pub fn diagnostics(&self, state: &TissueState) -> TissueDiagnostics {
        TissueDiagnostics::from_state(state, self.progression.driver_threshold)
    }
}
