use thiserror::Error;
use crate::common::types::PageId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameTableError {
    #[error("Frame table is full")]
    TableFull,
    #[error("Frame table is not full, cannot replace page {0}")]
    TableNotFull(PageId),
    #[error("Page {0} is not resident")]
    PageNotResident(PageId),
    #[error("Page {0} is already resident")]
    PageAlreadyResident(PageId),
}
