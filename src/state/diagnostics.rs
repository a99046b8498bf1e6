//! Diagnostic reports for the simulated lobule.

use serde::Serialize;

use super::{Regime, TissueState};

/// Fibrosis severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FibrosisStage {
    Healthy,
    Mild,
    Moderate,
    Cirrhotic,
}

impl FibrosisStage {
    pub fn from_index(fibrosis_index: f64) -> Self {
        if fibrosis_index < 0.3 {
            FibrosisStage::Healthy
        } else if fibrosis_index < 0.5 {
            FibrosisStage::Mild
        } else if fibrosis_index < 0.8 {
            FibrosisStage::Moderate
        } else {
            FibrosisStage::Cirrhotic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FibrosisStage::Healthy => "No active fibrosis",
            FibrosisStage::Mild => "Mild fibrosis",
            FibrosisStage::Moderate => "Moderate fibrosis",
            FibrosisStage::Cirrhotic => "Cirrhotic range",
        }
    }
}

/// Structured report on the current tissue state.
#[derive(Debug, Clone, Serialize)]
pub struct TissueDiagnostics {
    pub step: u64,
    pub regime: Regime,
    pub stage: FibrosisStage,
    /// Overall severity (0.0 = healthy, 1.0 = cirrhotic)
    pub severity: f64,
    /// Named metrics for reporting
    pub metrics: Vec<(String, f64)>,
    pub status: Vec<String>,
    pub warnings: Vec<String>,
}

impl TissueDiagnostics {
    /// Viability below which the lobule is in hepatic failure territory
    pub const CRITICAL_VIABILITY: f64 = 0.3;

    pub fn from_state(state: &TissueState, driver_threshold: f64) -> Self {
        let regime = state.regime(driver_threshold);
        let stage = FibrosisStage::from_index(state.fibrosis_index());

        let mut diag = Self {
            step: state.step(),
            regime,
            stage,
            severity: state.fibrosis_index(),
            metrics: Vec::new(),
            status: Vec::new(),
            warnings: Vec::new(),
        };

        diag.add_metric("fibrosis_index", state.fibrosis_index());
        diag.add_metric("stellate_activation", state.stellate_activation());
        diag.add_metric("hepatocyte_viability", state.hepatocyte_viability());
        diag.add_metric("epigenetic_driver", state.epigenetic_driver());

        diag.add_status(stage.label());
        diag.add_status(match regime {
            Regime::Progressing => "Disease program active: fibrosis progressing",
            Regime::Recovering => "Driver silenced: regeneration under way",
        });

        if state.hepatocyte_viability() < Self::CRITICAL_VIABILITY {
            diag.add_warning("Hepatocyte viability critically low");
        }
        if stage == FibrosisStage::Cirrhotic {
            diag.add_warning("Fibrosis in cirrhotic range");
        }

        diag
    }

    /// Add a metric
    pub fn add_metric(&mut self, name: &str, value: f64) {
        self.metrics.push((name.to_string(), value));
    }

    /// Add a status message
    pub fn add_status(&mut self, msg: &str) {
        self.status.push(msg.to_string());
    }

    /// Add a warning
    pub fn add_warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    /// Print a formatted summary
    pub fn print_summary(&self) {
        println!("=== Liver Lobule: step {} ===", self.step);
        println!("Severity: {:.1}%", self.severity * 100.0);
        println!("Regime: {:?}", self.regime);
        println!();

        if !self.metrics.is_empty() {
            println!("Metrics:");
            for (name, value) in &self.metrics {
                println!("  {}: {:.4}", name, value);
            }
            println!();
        }

        if !self.status.is_empty() {
            println!("Status:");
            for msg in &self.status {
                println!("  {}", msg);
            }
            println!();
        }

        if !self.warnings.is_empty() {
            println!("Warnings:");
            for msg in &self.warnings {
                println!("  {}", msg);
            }
        }
    }
}
