//! BioTwin - agent-based digital twin of a fibrotic liver lobule
//!
//! Candidate "hormokine" molecules are designed by a generator, injected into
//! a simulated lobule, and the tissue response is tracked step by step.

pub mod config;
pub mod export;
pub mod generator;
pub mod molecule;
pub mod simulation;
pub mod state;
pub mod tissue;

pub use config::Parameters;
pub use generator::{InterventionGenerator, MockGenerator, MockStructurePredictor, StructurePredictor};
pub use molecule::{Action, Domain, DomainType, Intervention, KnownReceptor, MoleculeStructure, TargetProfile};
pub use simulation::{DesignPipeline, DosingSchedule, PipelineConfig, PipelineSummary, Simulation};
pub use state::{FibrosisStage, Regime, TissueDiagnostics, TissueSnapshot, TissueState};
pub use tissue::{TissueModel, TreatmentOutcome, TreatmentReport};
