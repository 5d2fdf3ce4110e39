//! df-engine: parallel damage calculation for dike revetments.
//!
//! Provides:
//! - `CalculationInput`: validated aggregate of time steps, locations and
//!   the cross-section profile
//! - `Calculator`: background run with queryable state, progress and
//!   cooperative cancellation
//! - `DataResult` / `CalculationOutput`: per-location outcomes plus the
//!   merged diagnostic events of the run

pub mod calculator;
pub mod input;
pub mod result;
pub mod state;

pub use calculator::Calculator;
pub use input::CalculationInput;
pub use result::{CalculationOutput, DataResult, LocationOutcome, LocationResult};
pub use state::CalculationState;
