//! Simulation drivers.
//!
//! - [`Simulation`]: fixed-length run with a dosing schedule and history
//! - [`DesignPipeline`]: repeated design, inject and read cycles until the
//!   fibrosis target is reached

mod pipeline;
mod session;

pub use pipeline::{CycleRecord, DesignPipeline, PipelineConfig, PipelineSummary};
pub use session::{DosingSchedule, Simulation};
