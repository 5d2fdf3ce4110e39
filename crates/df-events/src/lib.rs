//! Validation findings and diagnostic events for dikeflow calculations.
//!
//! Provides:
//! - `ValidationIssue` / `Event` value types with a two-level severity model
//! - `EventCollector`: per-worker event accumulator, lock-free by ownership
//! - `register_validation_issues`: batch issue registration + pass/fail flag

pub mod collector;
pub mod event;
pub mod validation;

pub use collector::EventCollector;
pub use event::{Event, Severity, ValidationIssue};
pub use validation::register_validation_issues;
