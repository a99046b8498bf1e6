//! Intervention (hormokine) record and its JSON schema export.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::KnownReceptor;
use crate::state::clamp_unit;

/// What the molecule does to its receptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Inhibit,
    Activate,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Inhibit => "INHIBIT",
            Action::Activate => "ACTIVATE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    /// Accepts `INHIBIT`/`ACTIVATE` and the `antagonist`/`agonist` synonyms
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inhibit" | "antagonist" => Ok(Action::Inhibit),
            "activate" | "agonist" => Ok(Action::Activate),
            other => bail!("unknown action '{}': expected INHIBIT or ACTIVATE", other),
        }
    }
}

/// Cell population, receptor and expected action of a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub cell_type: String,
    pub receptor: String,
    pub action: Action,
}

impl TargetProfile {
    pub fn new(cell_type: impl Into<String>, receptor: impl Into<String>, action: Action) -> Self {
        Self {
            cell_type: cell_type.into(),
            receptor: receptor.into(),
            action,
        }
    }

    /// Profile for a receptor, with the cell type filled from the receptor table
    pub fn for_receptor(receptor: &str, action: Action) -> Self {
        let cell_type = KnownReceptor::lookup(receptor)
            .map(KnownReceptor::cell_type)
            .unwrap_or("unknown");
        Self::new(cell_type, receptor, action)
    }

    /// Receptor table entry, if the tissue knows this receptor
    pub fn known_receptor(&self) -> Option<KnownReceptor> {
        KnownReceptor::lookup(&self.receptor)
    }
}

/// Functional segment of the designed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Addressing,
    Instruction,
    Timing,
    Penetration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub domain_type: DomainType,
    pub start_pos: usize,
    pub end_pos: usize,
    pub description: String,
}

/// A single candidate treatment molecule.
///
/// Score fields are clamped to [0, 1] as they are set and cannot change
/// afterwards. The tissue model takes the record by value, so a dose is
/// applied at most once.
#[derive(Debug)]
pub struct Intervention {
    id: String,
    sequence: String,
    target: TargetProfile,
    molecule_type: String,
    domains: Vec<Domain>,
    predicted_affinity: f64,
    instruction_potency: f64,
    immunogenicity_score: f64,
    created_at: String,
}

impl Intervention {
    /// Default potency for deep epigenetic reprogramming
    pub const DEFAULT_POTENCY: f64 = 0.8;

    pub fn new(sequence: impl Into<String>, target: TargetProfile) -> Self {
        Self {
            id: Self::generate_id(),
            sequence: sequence.into(),
            target,
            molecule_type: "protein".to_string(),
            domains: Vec::new(),
            predicted_affinity: 0.0,
            instruction_potency: Self::DEFAULT_POTENCY,
            immunogenicity_score: 0.0,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// `HK-` followed by eight upper-case hex digits
    fn generate_id() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("HK-{}", hex[..8].to_uppercase())
    }

    pub fn with_affinity(mut self, affinity: f64) -> Self {
        self.predicted_affinity = ingest("predicted_affinity", affinity);
        self
    }

    pub fn with_potency(mut self, potency: f64) -> Self {
        self.instruction_potency = ingest("instruction_potency", potency);
        self
    }

    pub fn with_immunogenicity(mut self, score: f64) -> Self {
        self.immunogenicity_score = ingest("immunogenicity_score", score);
        self
    }

    pub fn with_molecule_type(mut self, molecule_type: impl Into<String>) -> Self {
        self.molecule_type = molecule_type.into();
        self
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domains.push(domain);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn target(&self) -> &TargetProfile {
        &self.target
    }

    pub fn molecule_type(&self) -> &str {
        &self.molecule_type
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn predicted_affinity(&self) -> f64 {
        self.predicted_affinity
    }

    pub fn instruction_potency(&self) -> f64 {
        self.instruction_potency
    }

    pub fn immunogenicity_score(&self) -> f64 {
        self.immunogenicity_score
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Interchange document in the intervention schema layout
    pub fn schema_value(&self) -> serde_json::Value {
        json!({
            "intervention_id": self.id,
            "molecule_type": self.molecule_type,
            "sequence_data": { "primary_sequence": self.sequence },
            "target_profile": {
                "cell_type": self.target.cell_type,
                "receptor_target": self.target.receptor,
                "expected_action": self.target.action,
            },
            "predicted_properties": {
                "binding_affinity_kd": self.predicted_affinity,
                "instruction_potency": self.instruction_potency,
                "immunogenicity_score": self.immunogenicity_score,
            },
        })
    }

    /// Pretty-printed [`schema_value`](Self::schema_value)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.schema_value())?)
    }
}

fn ingest(field: &str, value: f64) -> f64 {
    let clamped = clamp_unit(value);
    if clamped != value {
        log::warn!("{} = {} outside [0, 1], clamped to {}", field, value, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tgfbr2_inhibitor() -> Intervention {
        Intervention::new(
            "ACDEFGHIKL",
            TargetProfile::for_receptor("TGFBR2", Action::Inhibit),
        )
    }

    #[test]
    fn test_defaults() {
        let dose = tgfbr2_inhibitor();
        assert_eq!(dose.predicted_affinity(), 0.0);
        assert!((dose.instruction_potency() - 0.8).abs() < 1e-12);
        assert_eq!(dose.immunogenicity_score(), 0.0);
        assert_eq!(dose.molecule_type(), "protein");
        assert!(dose.domains().is_empty());
    }

    #[test]
    fn test_id_format_and_uniqueness() {
        let a = tgfbr2_inhibitor();
        let b = tgfbr2_inhibitor();
        assert!(a.id().starts_with("HK-"));
        assert_eq!(a.id().len(), 11);
        assert!(a.id()[3..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let dose = tgfbr2_inhibitor()
            .with_affinity(1.7)
            .with_potency(-0.3)
            .with_immunogenicity(f64::NAN);
        assert_eq!(dose.predicted_affinity(), 1.0);
        assert_eq!(dose.instruction_potency(), 0.0);
        assert_eq!(dose.immunogenicity_score(), 0.0);
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("INHIBIT".parse::<Action>().unwrap(), Action::Inhibit);
        assert_eq!("activate".parse::<Action>().unwrap(), Action::Activate);
        assert_eq!("antagonist".parse::<Action>().unwrap(), Action::Inhibit);
        assert_eq!("Agonist".parse::<Action>().unwrap(), Action::Activate);
        assert!("modulate".parse::<Action>().is_err());
    }

    #[test]
    fn test_target_profile_cell_type() {
        let known = TargetProfile::for_receptor("EGFR", Action::Activate);
        assert_eq!(known.cell_type, "hepatocyte");
        assert_eq!(known.known_receptor(), Some(KnownReceptor::Egfr));

        let unknown = TargetProfile::for_receptor("DOPAMINE_R", Action::Activate);
        assert_eq!(unknown.cell_type, "unknown");
        assert_eq!(unknown.known_receptor(), None);
    }

    #[test]
    fn test_schema_layout() {
        let dose = tgfbr2_inhibitor()
            .with_affinity(0.91)
            .with_immunogenicity(0.1)
            .with_domain(Domain {
                domain_type: DomainType::Addressing,
                start_pos: 0,
                end_pos: 5,
                description: "stellate homing motif".to_string(),
            });
        let value = dose.schema_value();

        assert_eq!(value["intervention_id"], dose.id());
        assert_eq!(value["molecule_type"], "protein");
        assert_eq!(value["sequence_data"]["primary_sequence"], "ACDEFGHIKL");
        assert_eq!(value["target_profile"]["receptor_target"], "TGFBR2");
        assert_eq!(value["target_profile"]["expected_action"], "INHIBIT");
        assert_eq!(value["target_profile"]["cell_type"], "hepatic stellate cell");
        assert_eq!(value["predicted_properties"]["binding_affinity_kd"], 0.91);
        assert_eq!(value["predicted_properties"]["instruction_potency"], 0.8);

        let text = dose.to_json().unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, value);
    }
}
