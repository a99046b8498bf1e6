//! JSON state export for simulation snapshots.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::simulation::{PipelineSummary, Simulation};
use crate::state::{TissueDiagnostics, TissueSnapshot};
use crate::tissue::TreatmentReport;

/// Full state export structure
#[derive(Debug, Clone, Serialize)]
pub struct StateExport<'a> {
    /// Export timestamp
    pub exported_at: String,
    /// Export version for compatibility
    pub version: &'static str,
    pub snapshot: TissueSnapshot,
    pub diagnostics: TissueDiagnostics,
    pub treatments: &'a [TreatmentReport],
    pub history: &'a [TissueSnapshot],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<&'a PipelineSummary>,
}

impl<'a> StateExport<'a> {
    pub fn new(simulation: &'a Simulation, pipeline: Option<&'a PipelineSummary>) -> Self {
        Self {
            exported_at: Local::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            snapshot: simulation.state().snapshot(),
            diagnostics: simulation.diagnostics(),
            treatments: simulation.reports(),
            history: simulation.history(),
            pipeline,
        }
    }
}

/// Export current simulation state to JSON
///
/// Creates `dir` if it doesn't exist.
/// Filename is auto-generated with timestamp: `state_YYYYMMDD_HHMMSS.json`
///
/// Returns the path to the saved JSON file.
pub fn export_state_json<P: AsRef<Path>>(dir: P, simulation: &Simulation) -> Result<PathBuf> {
    let filename = format!("state_{}.json", Local::now().format("%Y%m%d_%H%M%S"));
    let path = dir.as_ref().join(filename);
    export_state_json_to(&path, simulation, None)?;
    Ok(path)
}

/// Export state to a specific file
pub fn export_state_json_to<P: AsRef<Path>>(
    path: P,
    simulation: &Simulation,
    pipeline: Option<&PipelineSummary>,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let export = StateExport::new(simulation, pipeline);

    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, &export)?;

    log::info!("JSON state exported: {}", path.display());
    Ok(())
}
