use std::collections::HashMap;

use crate::common::types::{FrameId, PageId};
use crate::memory::error::FrameTableError;

/// Mapping of resident pages to physical frames for a single simulation run.
///
/// Frames are handed out from a monotonic counter while the table fills up,
/// so frame storage grows with use rather than with capacity. Once full, a
/// frame only changes hands through [`FrameTable::evict_and_replace`], which
/// keeps the freed index for the incoming page.
#[derive(Debug, Clone)]
pub struct FrameTable {
    capacity: usize,
    page_table: HashMap<PageId, FrameId>,
    frames: Vec<Option<PageId>>,
    next_frame_id: FrameId,
}

impl FrameTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            page_table: HashMap::new(),
            frames: Vec::new(),
            next_frame_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.page_table.len() >= self.capacity
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.page_table.contains_key(&page_id)
    }

    /// Frame currently holding `page_id`, if it is resident
    pub fn frame_of(&self, page_id: PageId) -> Option<FrameId> {
        self.page_table.get(&page_id).copied()
    }

    /// Iterate over resident pages in no particular order
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.page_table.keys().copied()
    }

    /// Occupancy of every frame handed out so far, indexed by frame id
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.frames.clone()
    }

    /// Load a page into the next never-used frame
    pub fn insert(&mut self, page_id: PageId) -> Result<FrameId, FrameTableError> {
        if self.is_full() {
            return Err(FrameTableError::TableFull);
        }
        if self.contains(page_id) {
            return Err(FrameTableError::PageAlreadyResident(page_id));
        }

        let frame_id = self.next_frame_id;
        self.next_frame_id += 1;

        self.page_table.insert(page_id, frame_id);
        self.frames.push(Some(page_id));
        Ok(frame_id)
    }

    /// Evict `old_page` and load `new_page` into the frame it occupied
    pub fn evict_and_replace(
        &mut self,
        old_page: PageId,
        new_page: PageId,
    ) -> Result<FrameId, FrameTableError> {
        if !self.is_full() {
            return Err(FrameTableError::TableNotFull(old_page));
        }
        if self.contains(new_page) {
            return Err(FrameTableError::PageAlreadyResident(new_page));
        }
        let frame_id = self
            .page_table
            .remove(&old_page)
            .ok_or(FrameTableError::PageNotResident(old_page))?;

        self.page_table.insert(new_page, frame_id);
        self.frames[frame_id as usize] = Some(new_page);
        Ok(frame_id)
    }
}
