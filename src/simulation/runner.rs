use log::{debug, info};

use crate::common::types::{PageId, StepIndex};
use crate::memory::FrameTable;
use crate::policy::{PolicyKind, ReplacementPolicy};
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::event::{PolicyReport, StepEvent};

/// State owned by a single policy run over a trace
///
/// Nothing here outlives the run, so separate runs never observe each
/// other's frames or counters.
pub struct Simulation<'a> {
    kind: PolicyKind,
    trace: &'a [PageId],
    frames: FrameTable,
    policy: Box<dyn ReplacementPolicy>,
    faults: usize,
}

impl<'a> Simulation<'a> {
    pub fn new(kind: PolicyKind, trace: &'a [PageId], num_frames: usize) -> Result<Self> {
        if num_frames == 0 {
            return Err(SimulationError::NoFrames);
        }

        // No more pages than references can ever be resident
        let resident_hint = num_frames.min(trace.len());

        Ok(Self {
            kind,
            trace,
            frames: FrameTable::new(num_frames),
            policy: kind.build(resident_hint),
            faults: 0,
        })
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Process the reference at position `step` of the trace
    pub fn step(&mut self, step: StepIndex) -> Result<StepEvent> {
        let page_id = self.trace[step];

        if let Some(frame) = self.frames.frame_of(page_id) {
            self.policy.record_access(page_id, step);
            return Ok(StepEvent::Hit { page: page_id, frame });
        }

        self.faults += 1;

        if !self.frames.is_full() {
            let frame = self.frames.insert(page_id)?;
            self.policy.record_load(page_id, step);
            return Ok(StepEvent::Load { page: page_id, frame });
        }

        let evicted = self
            .policy
            .victim(&self.frames, self.trace, step)
            .ok_or(SimulationError::NoVictim { policy: self.kind, step })?;
        let frame = self.frames.evict_and_replace(evicted, page_id)?;
        self.policy.record_load(page_id, step);

        debug!("{}: step {} evicted page {} from frame {} for page {}", self.kind, step, evicted, frame, page_id);

        Ok(StepEvent::Replace { evicted, loaded: page_id, frame })
    }

    /// Drive the whole trace and produce the report
    pub fn run(mut self) -> Result<PolicyReport> {
        let mut events = Vec::with_capacity(self.trace.len());
        for step in 0..self.trace.len() {
            events.push(self.step(step)?);
        }

        info!(
            "{}: {} references over {} frames, {} page faults",
            self.kind,
            self.trace.len(),
            self.frames.capacity(),
            self.faults
        );

        Ok(PolicyReport {
            policy: self.kind,
            faults: self.faults,
            events,
        })
    }
}

/// Run one policy over the full trace starting from empty frames
pub fn run(trace: &[PageId], num_frames: usize, kind: PolicyKind) -> Result<PolicyReport> {
    Simulation::new(kind, trace, num_frames)?.run()
}
