//! Candidate molecule generation.
//!
//! The tissue model only ever sees [`Intervention`] values; where they come
//! from is behind [`InterventionGenerator`]. The shipped implementations are
//! randomized stand-ins for a generative protein-design service and never
//! touch the network.

mod mock;
mod structure;

pub use mock::{MockGenerator, AMINO_ACIDS};
pub use structure::MockStructurePredictor;

use crate::molecule::{Action, Intervention, MoleculeStructure};

/// Supplier of candidate treatments
pub trait InterventionGenerator {
    /// Design one candidate against `receptor` with the requested action
    fn request_intervention(&mut self, receptor: &str, action: Action) -> Intervention;
}

/// Folding predictor for designed candidates
pub trait StructurePredictor {
    fn predict_structure(&self, candidate: &Intervention) -> MoleculeStructure;
}
