//! df-revetment: revetment strategy variants for dikeflow.
//!
//! Provides:
//! - `RevetmentLocation`: the per-location calculation contract the engine
//!   dispatches on
//! - `Derived`: write-once cell for lazily computed location state
//! - the per-time-step and per-location output model with cumulative damage
//!   and time-of-failure derivation
//! - the five revetment variants (asphalt wave impact, grass wave impact,
//!   grass wave run-up, grass wave overtopping, natural stone wave impact)

pub mod asphalt_wave_impact;
pub mod derived;
pub mod grass_wave_impact;
pub mod grass_wave_overtopping;
pub mod grass_wave_runup;
pub mod location;
pub mod natural_stone_wave_impact;
pub mod output;

pub use asphalt_wave_impact::AsphaltWaveImpactLocation;
pub use derived::Derived;
pub use grass_wave_impact::GrassWaveImpactLocation;
pub use grass_wave_overtopping::GrassWaveOvertoppingLocation;
pub use grass_wave_runup::GrassWaveRunupLocation;
pub use location::RevetmentLocation;
pub use natural_stone_wave_impact::NaturalStoneWaveImpactLocation;
pub use output::{LocationDependentOutput, StepDetails, TimeDependentOutput};
