use thiserror::Error;

use crate::common::types::StepIndex;
use crate::memory::FrameTableError;
use crate::policy::PolicyKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("At least one frame is required")]
    NoFrames,
    #[error("Frame table error: {0}")]
    FrameTable(#[from] FrameTableError),
    #[error("{policy} policy found no victim at step {step}")]
    NoVictim { policy: PolicyKind, step: StepIndex },
}

/// Result type for simulation runs
pub type Result<T> = std::result::Result<T, SimulationError>;
