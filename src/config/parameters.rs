//! Parameter structures for the tissue model and the candidate generator.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::molecule::KnownReceptor;

/// Top-level parameters container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Dose-response coefficients
    pub treatment: TreatmentParameters,
    /// Spontaneous drift coefficients
    pub progression: ProgressionParameters,
    /// Mock generator ranges
    pub generator: GeneratorParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        Self::load_from_dir("data/parameters")
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let treatment = TreatmentParameters::load_or_default(dir.join("treatment.json"));
        let progression = ProgressionParameters::load_or_default(dir.join("progression.json"));
        let generator = GeneratorParameters::load_or_default(dir.join("generator.json"));

        Self {
            treatment,
            progression,
            generator,
        }
    }
}

/// Read a JSON parameter file, falling back to `T::default()`.
fn load_json_or_default<T, P>(path: P, label: &str) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(params) => {
                log::info!("Loaded {} parameters from {:?}", label, path.as_ref());
                params
            }
            Err(e) => {
                log::warn!("Failed to parse {} parameters: {}, using defaults", label, e);
                T::default()
            }
        },
        Err(_) => {
            log::info!("{} parameters file not found, using defaults", label);
            T::default()
        }
    }
}

/// Dose-response coefficients for treatment application.
///
/// The three TGFBR2 inhibition coefficients are ordered
/// `stellate > driver > fibrosis`: the dose acts on the cells first, the
/// gene program second, and the scar tissue only weakly and directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentParameters {
    /// Fibrosis index below which there is no active pathology to treat
    pub pathology_gate: f64,
    /// Minimum predicted affinity for a TGFBR2 dose to bind
    pub tgfbr2_affinity_threshold: f64,
    /// Minimum predicted affinity for an EGFR dose to bind
    pub egfr_affinity_threshold: f64,
    /// k1: stellate activation drop per unit of inhibitory power
    pub stellate_inhibition: f64,
    /// k2: epigenetic driver drop per unit of inhibitory power
    pub driver_inhibition: f64,
    /// k3: direct fibrosis drop per unit of inhibitory power
    pub fibrosis_reduction: f64,
    /// Fibrosis increase per unit of power when TGFBR2 is activated
    pub fibrosis_worsening: f64,
    /// k4: hepatocyte viability gain per unit of EGFR affinity
    pub regeneration_gain: f64,
    /// Immunogenicity score above which the dose is toxic
    pub toxicity_threshold: f64,
    /// Viability lost per unit of immunogenicity once toxic
    pub toxicity_coefficient: f64,
}

impl TreatmentParameters {
    /// Affinity a dose needs to bind the given receptor
    pub fn affinity_threshold(&self, receptor: KnownReceptor) -> f64 {
        match receptor {
            KnownReceptor::Tgfbr2 => self.tgfbr2_affinity_threshold,
            KnownReceptor::Egfr => self.egfr_affinity_threshold,
        }
    }

    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        load_json_or_default(path, "treatment")
    }
}

impl Default for TreatmentParameters {
    fn default() -> Self {
        Self {
            pathology_gate: 0.3,
            tgfbr2_affinity_threshold: 0.8,
            egfr_affinity_threshold: 0.6,

            // k1 > k2 > k3
            stellate_inhibition: 0.6,
            driver_inhibition: 0.5,
            fibrosis_reduction: 0.2,

            fibrosis_worsening: 0.1,
            regeneration_gain: 0.2,

            toxicity_threshold: 0.4,
            toxicity_coefficient: 0.2,
        }
    }
}

/// Natural progression rates applied once per step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionParameters {
    /// Driver level above which the disease program is active
    pub driver_threshold: f64,
    /// Fibrosis gained per step, scaled by the driver level
    pub progression_rate: f64,
    /// Fibrosis lost per step while recovering
    pub recovery_rate: f64,
    /// Viability gained per step while recovering
    pub health_gain_rate: f64,
}

impl ProgressionParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        load_json_or_default(path, "progression")
    }
}

impl Default for ProgressionParameters {
    fn default() -> Self {
        Self {
            driver_threshold: 0.5,
            progression_rate: 0.02,
            recovery_rate: 0.04,
            health_gain_rate: 0.01,
        }
    }
}

/// Ranges for the mock candidate generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParameters {
    /// Number of residues in a generated sequence
    pub sequence_length: usize,
    pub affinity_min: f64,
    pub affinity_max: f64,
    pub potency_min: f64,
    pub potency_max: f64,
    pub immunogenicity_min: f64,
    pub immunogenicity_max: f64,
    /// Artificial inference latency (ms)
    pub latency_ms: u64,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl GeneratorParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        load_json_or_default(path, "generator")
    }
}

impl Default for GeneratorParameters {
    fn default() -> Self {
        Self {
            sequence_length: 25,
            affinity_min: 0.70,
            affinity_max: 0.99,
            potency_min: 0.60,
            potency_max: 1.00,
            immunogenicity_min: 0.0,
            immunogenicity_max: 0.5,
            latency_ms: 0,
            seed: None,
        }
    }
}
