pub mod driver;
pub mod error;
pub mod event;
pub mod runner;

pub use driver::{run_all, run_with_config, SimulationConfig};
pub use error::SimulationError;
pub use event::{PolicyReport, StepEvent};
pub use runner::{run, Simulation};
