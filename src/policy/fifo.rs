use std::collections::VecDeque;

use crate::common::types::{PageId, StepIndex};
use crate::memory::FrameTable;
use crate::policy::ReplacementPolicy;

/// First-in-first-out replacement: evict the page loaded earliest
pub struct FifoPolicy {
    arrival_queue: VecDeque<PageId>,
}

impl FifoPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            arrival_queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Resident pages in load order, oldest first
    #[cfg(test)]
    fn arrival_order(&self) -> impl Iterator<Item = PageId> + '_ {
        self.arrival_queue.iter().copied()
    }
}

impl ReplacementPolicy for FifoPolicy {
    // Hits never change load order
    fn record_access(&mut self, _page_id: PageId, _step: StepIndex) {}

    fn record_load(&mut self, page_id: PageId, _step: StepIndex) {
        self.arrival_queue.push_back(page_id);
    }

    fn victim(&mut self, _frames: &FrameTable, _trace: &[PageId], _step: StepIndex) -> Option<PageId> {
        self.arrival_queue.pop_front()
    }
}
