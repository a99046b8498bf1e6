//! CSV time-series export for tissue snapshots.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::state::TissueSnapshot;

/// Record for CSV time-series export
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesRecord {
    pub step: u64,
    pub fibrosis_index: f64,
    pub stellate_activation: f64,
    pub hepatocyte_viability: f64,
    pub epigenetic_driver: f64,
}

impl From<&TissueSnapshot> for TimeSeriesRecord {
    fn from(s: &TissueSnapshot) -> Self {
        Self {
            step: s.step,
            fibrosis_index: s.fibrosis_index,
            stellate_activation: s.stellate_activation,
            hepatocyte_viability: s.hepatocyte_viability,
            epigenetic_driver: s.epigenetic_driver,
        }
    }
}

/// CSV exporter for time-series data
pub struct CsvExporter {
    writer: csv::Writer<File>,
    /// Rows written so far
    rows: usize,
    /// Path to output file
    path: PathBuf,
}

impl CsvExporter {
    /// Create an exporter writing to `path`, creating parent directories
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let writer = csv::Writer::from_writer(file);

        log::info!("CSV export started: {}", path.display());

        Ok(Self {
            writer,
            rows: 0,
            path,
        })
    }

    /// Create an exporter in `dir` with a timestamped filename
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("timeseries_{}.csv", timestamp);
        Self::new(dir.as_ref().join(filename))
    }

    /// Write one snapshot row
    pub fn record(&mut self, snapshot: &TissueSnapshot) -> Result<()> {
        self.writer.serialize(TimeSeriesRecord::from(snapshot))?;
        self.rows += 1;
        Ok(())
    }

    /// Write every snapshot in order
    pub fn record_all(&mut self, history: &[TissueSnapshot]) -> Result<()> {
        for snapshot in history {
            self.record(snapshot)?;
        }
        Ok(())
    }

    /// Finish writing and return the output path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!("CSV export completed: {} ({} rows)", self.path.display(), self.rows);
        Ok(self.path)
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TissueState;

    #[test]
    fn test_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = CsvExporter::new(dir.path().join("run.csv")).unwrap();
        let snap = TissueState::default().snapshot();
        exporter.record_all(&[snap, snap]).unwrap();
        assert_eq!(exporter.rows(), 2);
        let path = exporter.finish().unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("step,fibrosis_index,stellate_activation,hepatocyte_viability,epigenetic_driver")
        );
        assert_eq!(lines.next(), Some("0,0.9,1.0,0.4,1.0"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_in_dir_creates_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::in_dir(dir.path().join("exports")).unwrap();
        let name = exporter.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("timeseries_") && name.ends_with(".csv"));
        exporter.finish().unwrap();
    }
}
