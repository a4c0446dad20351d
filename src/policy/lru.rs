use linked_hash_map::LinkedHashMap;

use crate::common::types::{PageId, StepIndex};
use crate::memory::FrameTable;
use crate::policy::ReplacementPolicy;

/// Least-recently-used replacement
///
/// The recency record maps each resident page to the trace position of its
/// last reference. Entries are kept in the order they were last touched, so
/// the front of the map always holds the smallest last-used position.
pub struct LruPolicy {
    last_used: LinkedHashMap<PageId, StepIndex>,
}

impl LruPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            last_used: LinkedHashMap::with_capacity(capacity),
        }
    }

    /// Trace position of the last reference to a resident page
    #[cfg(test)]
    fn last_used(&self, page_id: PageId) -> Option<StepIndex> {
        self.last_used.get(&page_id).copied()
    }

    fn touch(&mut self, page_id: PageId, step: StepIndex) {
        // Re-inserting moves the entry to the back
        self.last_used.remove(&page_id);
        self.last_used.insert(page_id, step);
    }
}

impl ReplacementPolicy for LruPolicy {
    fn record_access(&mut self, page_id: PageId, step: StepIndex) {
        self.touch(page_id, step);
    }

    fn record_load(&mut self, page_id: PageId, step: StepIndex) {
        self.touch(page_id, step);
    }

    fn victim(&mut self, _frames: &FrameTable, _trace: &[PageId], _step: StepIndex) -> Option<PageId> {
        self.last_used.pop_front().map(|(page_id, _)| page_id)
    }
}
