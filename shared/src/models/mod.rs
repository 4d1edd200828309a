//! Domain models for ParkPredict India

mod catalogue;
mod map;
mod prediction;
mod settings;

pub use catalogue::*;
pub use map::*;
pub use prediction::*;
pub use settings::*;
