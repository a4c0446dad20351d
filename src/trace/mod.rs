pub mod error;
pub mod loader;

pub use error::TraceError;
pub use loader::{Trace, TraceOptions};
