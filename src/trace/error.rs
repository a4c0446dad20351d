use thiserror::Error;

use crate::common::types::PageId;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing header field: {0}")]
    MissingHeader(&'static str),
    #[error("Invalid token '{token}' at position {position}: expected a non-negative integer")]
    InvalidToken { position: usize, token: String },
    #[error("Number of frames must be at least 1")]
    NoFrames,
    #[error("Trace declares {expected} requests but only {found} were found")]
    Truncated { expected: usize, found: usize },
    #[error("Request {index} references page {page}, outside of [0, {num_pages})")]
    PageOutOfRange { index: usize, page: PageId, num_pages: usize },
}

/// Result type for trace loading
pub type Result<T> = std::result::Result<T, TraceError>;
