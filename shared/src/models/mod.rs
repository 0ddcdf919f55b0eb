//! Domain models for the AquaCrop Planner

mod crop;
mod estimate;
mod log;
mod season;
mod soil;

pub use crop::*;
pub use estimate::*;
pub use log::*;
pub use season::*;
pub use soil::*;
