// Page replacement policies
//
// Each policy keeps only its own bookkeeping; frame occupancy lives in the
// shared FrameTable owned by the simulation run.

pub mod fifo;
pub mod lru;
pub mod optimal;

use std::fmt;

use serde::Serialize;

use crate::common::types::{PageId, StepIndex};
use crate::memory::FrameTable;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// Interface every eviction policy implements
pub trait ReplacementPolicy {
    /// Record a reference to a page that is already resident
    fn record_access(&mut self, page_id: PageId, step: StepIndex);

    /// Record that a page was just loaded into a frame
    fn record_load(&mut self, page_id: PageId, step: StepIndex);

    /// Choose the resident page to evict for the fault at `step` and drop it
    /// from the policy's bookkeeping. Only called when `frames` is full.
    fn victim(&mut self, frames: &FrameTable, trace: &[PageId], step: StepIndex) -> Option<PageId>;
}

/// The policies a simulation can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum PolicyKind {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "Optimal")]
    Optimal,
    #[serde(rename = "LRU")]
    Lru,
}

impl PolicyKind {
    /// Fixed reporting order
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Optimal, PolicyKind::Lru];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::Lru => "LRU",
        }
    }

    /// Fresh policy state for one run, sized for `resident_hint` pages
    pub fn build(&self, resident_hint: usize) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new(resident_hint)),
            PolicyKind::Optimal => Box::new(OptimalPolicy::new()),
            PolicyKind::Lru => Box::new(LruPolicy::new(resident_hint)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
