//! df-core: stable foundation for dikeflow.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (Real + float helpers guarding constructors and damage accounting)
//! - hydraulics (hydraulic time-step value type)

pub mod error;
pub mod hydraulics;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DfError, DfResult};
pub use hydraulics::TimeStep;
pub use numeric::*;
