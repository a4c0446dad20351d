pub mod error;
pub mod frame_table;

pub use error::FrameTableError;
pub use frame_table::FrameTable;
