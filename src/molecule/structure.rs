//! Folding prediction results.

use serde::{Deserialize, Serialize};

/// Predicted 3D structure of a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeStructure {
    /// PDB-format text
    pub pdb_content: String,
    /// Per-residue confidence averaged over the chain (0-100)
    pub plddt_score: f64,
    /// Molecular weight (kDa)
    pub molecular_weight_kda: f64,
    pub is_folded: bool,
}

impl MoleculeStructure {
    /// pLDDT above which a prediction is usually trusted
    pub const CONFIDENT_PLDDT: f64 = 70.0;

    pub fn is_confident(&self) -> bool {
        self.is_folded && self.plddt_score >= Self::CONFIDENT_PLDDT
    }
}
