//! df-physics: pure revetment physics functions for dikeflow.
//!
//! One module per revetment family, plus the shared hydraulic load helpers
//! and the input validators. All functions are pure; default coefficients
//! are documented constants. Strategy variants in df-revetment are the only
//! intended callers.

pub mod asphalt_wave_impact;
pub mod grass_cumulative_overload;
pub mod grass_wave_impact;
pub mod hydraulic_load;
pub mod natural_stone_wave_impact;
pub mod validators;
