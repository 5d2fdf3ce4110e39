//! Pure input validators.
//!
//! One function per physical-plausibility rule; every function returns
//! `None` when the value is acceptable, or an issue whose severity says
//! whether the value is invalid (Error) or merely outside the recommended
//! range (Warning).

pub mod asphalt;
pub mod grass;
pub mod hydraulic_loads;
pub mod natural_stone;
pub mod revetment;
