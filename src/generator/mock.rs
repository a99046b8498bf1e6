//! Randomized hormokine designer.

use std::thread;
use std::time::Duration;

use rand::prelude::*;

use super::InterventionGenerator;
use crate::config::GeneratorParameters;
use crate::molecule::{Action, Intervention, TargetProfile};
use crate::state::clamp_unit;

/// The 20 standard amino acids, one-letter codes
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Generator drawing sequences and scores uniformly at random
pub struct MockGenerator {
    /// Ranges and latency, normalized on construction
    pub params: GeneratorParameters,
    rng: StdRng,
}

impl MockGenerator {
    /// Create a generator; seeded from `params.seed` when present
    pub fn new(params: GeneratorParameters) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            params: normalize(params),
            rng,
        }
    }

    /// Reproducible generator with default ranges
    pub fn seeded(seed: u64) -> Self {
        Self::new(GeneratorParameters {
            seed: Some(seed),
            ..Default::default()
        })
    }

    fn random_sequence(&mut self) -> String {
        (0..self.params.sequence_length)
            .map(|_| AMINO_ACIDS[self.rng.gen_range(0..AMINO_ACIDS.len())] as char)
            .collect()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(GeneratorParameters::default())
    }
}

impl InterventionGenerator for MockGenerator {
    fn request_intervention(&mut self, receptor: &str, action: Action) -> Intervention {
        log::info!("Designing hormokine for receptor {} ({})", receptor, action);

        if self.params.latency_ms > 0 {
            thread::sleep(Duration::from_millis(self.params.latency_ms));
        }

        let sequence = self.random_sequence();
        let p = &self.params;
        let affinity = self.rng.gen_range(p.affinity_min..=p.affinity_max);
        let potency = self.rng.gen_range(p.potency_min..=p.potency_max);
        let immunogenicity = self.rng.gen_range(p.immunogenicity_min..=p.immunogenicity_max);

        let candidate = Intervention::new(sequence, TargetProfile::for_receptor(receptor, action))
            .with_affinity(affinity)
            .with_potency(potency)
            .with_immunogenicity(immunogenicity);

        log::debug!(
            "Candidate {}: affinity={:.3} potency={:.3} immunogenicity={:.3}",
            candidate.id(),
            affinity,
            potency,
            immunogenicity
        );

        candidate
    }
}

/// Clamp every range into [0, 1] and order its bounds
fn normalize(mut params: GeneratorParameters) -> GeneratorParameters {
    fn range(lo: f64, hi: f64) -> (f64, f64) {
        let (lo, hi) = (clamp_unit(lo), clamp_unit(hi));
        if lo <= hi {
            (lo, hi)
        } else {
            (hi, lo)
        }
    }

    (params.affinity_min, params.affinity_max) = range(params.affinity_min, params.affinity_max);
    (params.potency_min, params.potency_max) = range(params.potency_min, params.potency_max);
    (params.immunogenicity_min, params.immunogenicity_max) =
        range(params.immunogenicity_min, params.immunogenicity_max);
    params
}
