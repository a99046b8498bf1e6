//! Dose-response rules for injected interventions.

use serde::Serialize;

use super::TissueModel;
use crate::molecule::{Action, Intervention, KnownReceptor};
use crate::state::{TissueSnapshot, TissueState};

/// What a dose did to the tissue, before natural progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TreatmentOutcome {
    /// Fibrosis below the pathology gate; nothing to act on
    NoActivePathology,
    /// Receptor not in the tissue's receptor table
    UnknownReceptor,
    /// Affinity below the receptor's binding threshold
    InsufficientBinding { receptor: KnownReceptor, threshold: f64 },
    /// TGFBR2 blocked: stellate cells, driver and fibrosis reduced
    Inhibited { power: f64 },
    /// TGFBR2 agonised: fibrosis worsened
    Worsened { power: f64 },
    /// EGFR agonised: hepatocytes regenerated
    Regenerated { gain: f64 },
    /// Bound, but the receptor/action pair has no defined effect
    Neutral { receptor: KnownReceptor, action: Action },
}

impl TreatmentOutcome {
    /// True when the dose bound its receptor and changed the tissue
    pub fn is_effective(&self) -> bool {
        matches!(
            self,
            TreatmentOutcome::Inhibited { .. }
                | TreatmentOutcome::Worsened { .. }
                | TreatmentOutcome::Regenerated { .. }
        )
    }
}

/// Result of one `apply_treatment` call
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentReport {
    pub dose_id: String,
    pub outcome: TreatmentOutcome,
    /// Viability removed by immunogenic toxicity (0 when non-toxic)
    pub toxicity_penalty: f64,
    /// State after the dose and one progression step
    pub snapshot: TissueSnapshot,
}

impl TissueModel {
    /// Inject one dose, then advance one natural-progression step.
    ///
    /// The dose is consumed. Toxicity applies to every dose that passes the
    /// pathology gate, whether or not it bound its receptor.
    pub fn apply_treatment(&self, state: &mut TissueState, dose: Intervention) -> TreatmentReport {
        log::info!(
            "Injecting {} -> {} {} (affinity {:.2}, potency {:.2})",
            dose.id(),
            dose.target().receptor,
            dose.target().action,
            dose.predicted_affinity(),
            dose.instruction_potency()
        );

        let (outcome, toxicity_penalty) = if state.fibrosis_index < self.treatment.pathology_gate {
            (TreatmentOutcome::NoActivePathology, 0.0)
        } else {
            let outcome = self.dose_effect(state, &dose);
            let penalty = self.toxicity(state, &dose);
            (outcome, penalty)
        };

        match outcome {
            TreatmentOutcome::NoActivePathology => {
                log::info!("No active pathology, dose had no effect")
            }
            TreatmentOutcome::UnknownReceptor => {
                log::warn!("Receptor '{}' not expressed in lobule, dose wasted", dose.target().receptor)
            }
            TreatmentOutcome::InsufficientBinding { receptor, threshold } => log::warn!(
                "Affinity {:.2} below {} threshold {:.2}, failed to bind",
                dose.predicted_affinity(),
                receptor,
                threshold
            ),
            effective => log::info!("Dose outcome: {:?}", effective),
        }

        let snapshot = self.advance(state);

        TreatmentReport {
            dose_id: dose.id().to_string(),
            outcome,
            toxicity_penalty,
            snapshot,
        }
    }

    /// Receptor match, affinity gate and the receptor/action effect
    fn dose_effect(&self, state: &mut TissueState, dose: &Intervention) -> TreatmentOutcome {
        let p = &self.treatment;

        let Some(receptor) = dose.target().known_receptor() else {
            return TreatmentOutcome::UnknownReceptor;
        };

        let threshold = p.affinity_threshold(receptor);
        if dose.predicted_affinity() < threshold {
            return TreatmentOutcome::InsufficientBinding { receptor, threshold };
        }

        let power = dose.predicted_affinity() * dose.instruction_potency();
        let action = dose.target().action;

        let outcome = match (receptor, action) {
            (KnownReceptor::Tgfbr2, Action::Inhibit) => {
                state.stellate_activation -= power * p.stellate_inhibition;
                state.epigenetic_driver -= power * p.driver_inhibition;
                state.fibrosis_index -= power * p.fibrosis_reduction;
                TreatmentOutcome::Inhibited { power }
            }
            (KnownReceptor::Tgfbr2, Action::Activate) => {
                state.fibrosis_index += power * p.fibrosis_worsening;
                TreatmentOutcome::Worsened { power }
            }
            (KnownReceptor::Egfr, Action::Activate) => {
                let gain = dose.predicted_affinity() * p.regeneration_gain;
                state.hepatocyte_viability += gain;
                TreatmentOutcome::Regenerated { gain }
            }
            (KnownReceptor::Egfr, Action::Inhibit) => TreatmentOutcome::Neutral { receptor, action },
        };
        state.clamp();

        outcome
    }

    /// Immunogenic penalty on hepatocytes; returns the amount subtracted
    fn toxicity(&self, state: &mut TissueState, dose: &Intervention) -> f64 {
        let p = &self.treatment;
        let score = dose.immunogenicity_score();
        if score <= p.toxicity_threshold {
            return 0.0;
        }

        let penalty = score * p.toxicity_coefficient;
        state.hepatocyte_viability -= penalty;
        state.clamp();
        log::warn!("Immunogenicity {:.2}: hepatocyte viability -{:.4}", score, penalty);

        penalty
    }
}
