//! Candidate molecule records.
//!
//! An [`Intervention`] is built once by a generator, validated on
//! construction, and handed by value to the tissue model that consumes it.

mod intervention;
mod receptor;
mod structure;

pub use intervention::{Action, Domain, DomainType, Intervention, TargetProfile};
pub use receptor::KnownReceptor;
pub use structure::MoleculeStructure;
