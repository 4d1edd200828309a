//! Shared types and core logic for ParkPredict India
//!
//! This crate contains the domain models and the reproducible prediction
//! logic shared between the WASM frontend bindings and any other component
//! of the system: the probability adjuster, the display threshold policy,
//! catalogue search, and the client-side cache contract.

pub mod adjust;
pub mod error;
pub mod models;
pub mod policy;
pub mod search;
pub mod storage;
pub mod types;

pub use adjust::*;
pub use error::*;
pub use models::*;
pub use policy::*;
pub use search::*;
pub use storage::*;
pub use types::*;
