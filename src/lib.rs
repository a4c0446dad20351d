// pagesim: page replacement simulator

pub mod common;
pub mod memory;
pub mod policy;
pub mod report;
pub mod simulation;
pub mod trace;

// Re-export key items for convenient access
pub use common::types::{FrameId, PageId};
pub use memory::FrameTable;
pub use policy::{PolicyKind, ReplacementPolicy};
pub use report::ReportFormat;
pub use simulation::{run, run_all, run_with_config, PolicyReport, SimulationConfig, SimulationError, StepEvent};
pub use trace::{Trace, TraceError, TraceOptions};
