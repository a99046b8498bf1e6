//! Display snapshots of the tissue state.

use serde::{Deserialize, Serialize};

use super::TissueState;

/// Status record returned by every update.
///
/// Fractions are rounded to 4 decimals for display; the live state keeps
/// full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TissueSnapshot {
    pub step: u64,
    pub fibrosis_index: f64,
    pub stellate_activation: f64,
    pub hepatocyte_viability: f64,
    pub epigenetic_driver: f64,
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl From<&TissueState> for TissueSnapshot {
    fn from(state: &TissueState) -> Self {
        Self {
            step: state.step,
            fibrosis_index: round4(state.fibrosis_index),
            stellate_activation: round4(state.stellate_activation),
            hepatocyte_viability: round4(state.hepatocyte_viability),
            epigenetic_driver: round4(state.epigenetic_driver),
        }
    }
}
