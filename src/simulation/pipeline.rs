//! Design, inject and read loop over a simulated patient.

use serde::Serialize;

use super::Simulation;
use crate::generator::{InterventionGenerator, StructurePredictor};
use crate::molecule::{Action, MoleculeStructure};
use crate::state::TissueSnapshot;
use crate::tissue::TreatmentOutcome;

/// Pipeline settings
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound on experimentation cycles
    pub max_cycles: usize,
    pub receptor: String,
    pub action: Action,
    /// Fibrosis index below which reversal counts as achieved
    pub success_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_cycles: 3,
            receptor: "TGFBR2".to_string(),
            action: Action::Inhibit,
            success_threshold: 0.7,
        }
    }
}

/// What happened in one cycle
#[derive(Debug, Clone, Serialize)]
pub struct CycleRecord {
    pub cycle: usize,
    pub dose_id: String,
    pub sequence: String,
    pub predicted_affinity: f64,
    pub structure: Option<MoleculeStructure>,
    pub outcome: TreatmentOutcome,
    pub toxicity_penalty: f64,
    pub snapshot: TissueSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub cycles: Vec<CycleRecord>,
    /// Fibrosis fell below the success threshold
    pub reversal_achieved: bool,
    pub initial: TissueSnapshot,
    pub last: TissueSnapshot,
}

pub struct DesignPipeline {
    pub config: PipelineConfig,
}

impl DesignPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run cycles until reversal or `max_cycles`.
    ///
    /// Each cycle requests one candidate, optionally folds it, injects it,
    /// and reads back the snapshot.
    pub fn run<G: InterventionGenerator + ?Sized>(
        &self,
        generator: &mut G,
        predictor: Option<&dyn StructurePredictor>,
        simulation: &mut Simulation,
    ) -> PipelineSummary {
        let initial = simulation.state().snapshot();
        log::info!(
            "Starting design pipeline: fibrosis {:.4}, up to {} cycles",
            initial.fibrosis_index,
            self.config.max_cycles
        );

        let mut cycles = Vec::with_capacity(self.config.max_cycles);
        let mut reversal_achieved = false;

        for cycle in 1..=self.config.max_cycles {
            let candidate = generator.request_intervention(&self.config.receptor, self.config.action);
            let structure = predictor.map(|p| p.predict_structure(&candidate));
            let sequence = candidate.sequence().to_string();
            let predicted_affinity = candidate.predicted_affinity();

            let report = simulation.inject(candidate);
            log::info!(
                "Cycle {}: {} -> fibrosis {:.4}",
                cycle,
                report.dose_id,
                report.snapshot.fibrosis_index
            );

            cycles.push(CycleRecord {
                cycle,
                dose_id: report.dose_id,
                sequence,
                predicted_affinity,
                structure,
                outcome: report.outcome,
                toxicity_penalty: report.toxicity_penalty,
                snapshot: report.snapshot,
            });

            if report.snapshot.fibrosis_index < self.config.success_threshold {
                log::info!("Significant fibrosis reversal observed after {} cycles", cycle);
                reversal_achieved = true;
                break;
            }
        }

        PipelineSummary {
            cycles,
            reversal_achieved,
            initial,
            last: simulation.state().snapshot(),
        }
    }
}
