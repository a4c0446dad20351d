use serde::Serialize;

use crate::common::types::{FrameId, PageId};
use crate::policy::PolicyKind;

/// Outcome of a single page reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepEvent {
    /// Page was already resident
    Hit { page: PageId, frame: FrameId },
    /// Page faulted and went into a free frame
    Load { page: PageId, frame: FrameId },
    /// Page faulted and took the frame of an evicted page
    Replace { evicted: PageId, loaded: PageId, frame: FrameId },
}

impl StepEvent {
    pub fn is_fault(&self) -> bool {
        !matches!(self, StepEvent::Hit { .. })
    }

    /// Page referenced by this step
    pub fn page(&self) -> PageId {
        match *self {
            StepEvent::Hit { page, .. } | StepEvent::Load { page, .. } => page,
            StepEvent::Replace { loaded, .. } => loaded,
        }
    }

    pub fn frame(&self) -> FrameId {
        match *self {
            StepEvent::Hit { frame, .. }
            | StepEvent::Load { frame, .. }
            | StepEvent::Replace { frame, .. } => frame,
        }
    }
}

/// Result of running one policy over a trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    pub policy: PolicyKind,
    pub faults: usize,
    pub events: Vec<StepEvent>,
}

impl PolicyReport {
    pub fn hits(&self) -> usize {
        self.events.iter().filter(|e| !e.is_fault()).count()
    }

    pub fn loads(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, StepEvent::Load { .. }))
            .count()
    }

    pub fn evictions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, StepEvent::Replace { .. }))
            .count()
    }
}
