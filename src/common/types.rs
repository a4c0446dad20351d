/// Page identifier type
pub type PageId = u32;

/// Frame index type
pub type FrameId = u32;

/// Position of a reference within a trace
pub type StepIndex = usize;
