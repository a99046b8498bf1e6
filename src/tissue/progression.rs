//! Spontaneous disease drift and regeneration.

use super::TissueModel;
use crate::state::{Regime, TissueSnapshot, TissueState};

impl TissueModel {
    /// Advance the lobule by one step without intervention.
    ///
    /// While the epigenetic driver is above threshold, fibrosis grows in
    /// proportion to the driver. Once silenced, fibrosis recedes and
    /// hepatocytes regenerate at fixed rates.
    pub fn advance(&self, state: &mut TissueState) -> TissueSnapshot {
        let p = &self.progression;
        state.step = state.step.saturating_add(1);

        match state.regime(p.driver_threshold) {
            Regime::Progressing => {
                state.fibrosis_index += p.progression_rate * state.epigenetic_driver;
            }
            Regime::Recovering => {
                state.fibrosis_index -= p.recovery_rate;
                state.hepatocyte_viability += p.health_gain_rate;
            }
        }
        state.clamp();

        log::debug!(
            "Step {}: fibrosis={:.4} viability={:.4} driver={:.4}",
            state.step,
            state.fibrosis_index,
            state.hepatocyte_viability,
            state.epigenetic_driver
        );

        state.snapshot()
    }
}
