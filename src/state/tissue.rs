//! Tissue state data structures.

use serde::Serialize;

use super::TissueSnapshot;

/// Clamp a fraction to [0, 1]. NaN collapses to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Macro-regime of the lobule, decided by the epigenetic driver alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Disease program active, fibrosis accumulates
    Progressing,
    /// Driver silenced, tissue regenerates
    Recovering,
}

impl Regime {
    pub fn from_driver(epigenetic_driver: f64, threshold: f64) -> Self {
        if epigenetic_driver > threshold {
            Regime::Progressing
        } else {
            Regime::Recovering
        }
    }
}

/// Complete state of one simulated liver lobule.
///
/// All four fractions stay in [0, 1]; only the tissue model mutates them and
/// it clamps before returning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TissueState {
    /// Updates applied so far
    pub(crate) step: u64,
    /// Scar-tissue accumulation, 0 healthy to 1 cirrhotic
    pub(crate) fibrosis_index: f64,
    /// Fraction of hepatic stellate cells in the collagen-producing state
    pub(crate) stellate_activation: f64,
    /// Functional health fraction of hepatocytes
    pub(crate) hepatocyte_viability: f64,
    /// Expression drive of the fibrotic gene program, 1 active to 0 silenced
    pub(crate) epigenetic_driver: f64,
}

impl Default for TissueState {
    /// Induced-fibrosis starting point
    fn default() -> Self {
        Self {
            step: 0,
            fibrosis_index: 0.90,
            stellate_activation: 1.0,
            hepatocyte_viability: 0.40,
            epigenetic_driver: 1.0,
        }
    }
}

impl TissueState {
    /// Create a state at step 0, clamping every fraction on ingestion
    pub fn new(
        fibrosis_index: f64,
        stellate_activation: f64,
        hepatocyte_viability: f64,
        epigenetic_driver: f64,
    ) -> Self {
        let mut state = Self {
            step: 0,
            fibrosis_index,
            stellate_activation,
            hepatocyte_viability,
            epigenetic_driver,
        };
        state.clamp();
        state
    }

    /// Default lobule with a chosen fibrosis level
    pub fn with_fibrosis(fibrosis_index: f64) -> Self {
        Self {
            fibrosis_index: clamp_unit(fibrosis_index),
            ..Self::default()
        }
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn fibrosis_index(&self) -> f64 {
        self.fibrosis_index
    }

    pub fn stellate_activation(&self) -> f64 {
        self.stellate_activation
    }

    pub fn hepatocyte_viability(&self) -> f64 {
        self.hepatocyte_viability
    }

    pub fn epigenetic_driver(&self) -> f64 {
        self.epigenetic_driver
    }

    pub fn regime(&self, driver_threshold: f64) -> Regime {
        Regime::from_driver(self.epigenetic_driver, driver_threshold)
    }

    pub fn snapshot(&self) -> TissueSnapshot {
        TissueSnapshot::from(self)
    }

    pub(crate) fn clamp(&mut self) {
        self.fibrosis_index = clamp_unit(self.fibrosis_index);
        self.stellate_activation = clamp_unit(self.stellate_activation);
        self.hepatocyte_viability = clamp_unit(self.hepatocyte_viability);
        self.epigenetic_driver = clamp_unit(self.epigenetic_driver);
    }

    /// True when every fraction is inside [0, 1]
    pub fn is_in_range(&self) -> bool {
        [
            self.fibrosis_index,
            self.stellate_activation,
            self.hepatocyte_viability,
            self.epigenetic_driver,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pathological() {
        let state = TissueState::default();
        assert_eq!(state.step(), 0);
        assert!((state.fibrosis_index() - 0.9).abs() < 1e-12);
        assert!((state.hepatocyte_viability() - 0.4).abs() < 1e-12);
        assert_eq!(state.regime(0.5), Regime::Progressing);
    }

    #[test]
    fn test_new_clamps_inputs() {
        let state = TissueState::new(1.4, -0.2, f64::NAN, 0.3);
        assert_eq!(state.fibrosis_index(), 1.0);
        assert_eq!(state.stellate_activation(), 0.0);
        assert_eq!(state.hepatocyte_viability(), 0.0);
        assert!((state.epigenetic_driver() - 0.3).abs() < 1e-12);
        assert!(state.is_in_range());
    }

    #[test]
    fn test_regime_boundary() {
        // Exactly at the threshold counts as recovering
        assert_eq!(Regime::from_driver(0.5, 0.5), Regime::Recovering);
        assert_eq!(Regime::from_driver(0.5001, 0.5), Regime::Progressing);
    }

    #[test]
    fn test_with_fibrosis() {
        let state = TissueState::with_fibrosis(0.8);
        assert!((state.fibrosis_index() - 0.8).abs() < 1e-12);
        assert!((state.stellate_activation() - 1.0).abs() < 1e-12);
    }
}
