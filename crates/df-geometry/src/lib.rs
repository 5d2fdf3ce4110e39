//! df-geometry: dike cross-section geometry for dikeflow.
//!
//! Provides the profile collaborator consumed during derived-input
//! initialization: vertical height interpolation along the cross-section and
//! characteristic-point lookups.

pub mod profile;

pub use profile::{CharacteristicPointKind, ProfileData, ProfilePoint};
