pub mod types;

pub use types::{FrameId, PageId, StepIndex};
