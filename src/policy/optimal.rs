use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::types::{PageId, StepIndex};
use crate::memory::FrameTable;
use crate::policy::ReplacementPolicy;

/// Clairvoyant replacement: evict the page whose next use is farthest away
///
/// Pages that are never referenced again are evicted first. When several
/// resident pages are never referenced again, the lowest page id goes.
#[derive(Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Position of the next reference to each resident page strictly after `step`
    fn next_uses(frames: &FrameTable, trace: &[PageId], step: StepIndex) -> HashMap<PageId, StepIndex> {
        let mut next_use = HashMap::with_capacity(frames.len());

        for (index, &page_id) in trace.iter().enumerate().skip(step + 1) {
            if frames.contains(page_id) && !next_use.contains_key(&page_id) {
                next_use.insert(page_id, index);
                if next_use.len() == frames.len() {
                    break;
                }
            }
        }

        next_use
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn record_access(&mut self, _page_id: PageId, _step: StepIndex) {}

    fn record_load(&mut self, _page_id: PageId, _step: StepIndex) {}

    fn victim(&mut self, frames: &FrameTable, trace: &[PageId], step: StepIndex) -> Option<PageId> {
        let next_use = Self::next_uses(frames, trace, step);

        frames.pages().max_by_key(|page_id| {
            let distance = next_use.get(page_id).copied().unwrap_or(StepIndex::MAX);
            (distance, Reverse(*page_id))
        })
    }
}
