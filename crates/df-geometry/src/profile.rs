//! Dike profile data and interpolation.

use df_core::{DfError, DfResult, ensure_finite};

/// One point of the dike cross-section, x measured horizontally from the
/// seaward side, z vertically against the same datum as the water levels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePoint {
    pub x_m: f64,
    pub z_m: f64,
}

/// Characteristic points of a dike cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacteristicPointKind {
    OuterToe,
    CrestOuterBerm,
    NotchOuterBerm,
    OuterCrest,
    InnerCrest,
    InnerToe,
}

/// Geometry descriptor of the dike cross-section.
///
/// Profile points are ordered by strictly increasing x. Characteristic
/// points mark the transitions (toe, berm, crest) that the revetment
/// strategies compare location positions against.
#[derive(Debug, Clone)]
pub struct ProfileData {
    dike_orientation_deg: f64,
    points: Vec<ProfilePoint>,
    characteristic_points: Vec<(CharacteristicPointKind, ProfilePoint)>,
}

impl ProfileData {
    /// Build a profile, rejecting fewer than two points, non-finite
    /// coordinates, non-increasing x, or an orientation outside
    /// [0, 360) degrees.
    pub fn new(
        dike_orientation_deg: f64,
        points: Vec<ProfilePoint>,
        characteristic_points: Vec<(CharacteristicPointKind, ProfilePoint)>,
    ) -> DfResult<Self> {
        if !(0.0..360.0).contains(&dike_orientation_deg) {
            return Err(DfError::InvalidArg {
                what: "dike orientation must lie in [0, 360) degrees",
            });
        }
        if points.len() < 2 {
            return Err(DfError::InvalidArg {
                what: "profile needs at least two points",
            });
        }
        for point in points.iter().chain(characteristic_points.iter().map(|(_, p)| p)) {
            ensure_finite(point.x_m, "profile point x coordinate")?;
            ensure_finite(point.z_m, "profile point z coordinate")?;
        }
        if points.windows(2).any(|w| !(w[1].x_m > w[0].x_m)) {
            return Err(DfError::InvalidArg {
                what: "profile point x coordinates must be strictly increasing",
            });
        }
        Ok(Self {
            dike_orientation_deg,
            points,
            characteristic_points,
        })
    }

    /// Direction of the outward dike normal with respect to north (degrees).
    pub fn dike_orientation_deg(&self) -> f64 {
        self.dike_orientation_deg
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Look up a characteristic point.
    pub fn characteristic_point(&self, kind: CharacteristicPointKind) -> Option<ProfilePoint> {
        self.characteristic_points
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| *p)
    }

    /// Vertical height at horizontal position x, linearly interpolated
    /// between the surrounding profile points. NaN outside the profile.
    pub fn vertical_height_at(&self, x_m: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x_m < first.x_m || x_m > last.x_m || x_m.is_nan() {
            return f64::NAN;
        }
        for window in self.points.windows(2) {
            let (left, right) = (window[0], window[1]);
            if x_m <= right.x_m {
                let fraction = (x_m - left.x_m) / (right.x_m - left.x_m);
                return left.z_m + fraction * (right.z_m - left.z_m);
            }
        }
        last.z_m
    }

    /// Tangent of the profile slope of the segment containing x.
    ///
    /// At a shared point of two segments the seaward (left) segment wins.
    /// NaN outside the profile.
    pub fn slope_tan_at(&self, x_m: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x_m < first.x_m || x_m > last.x_m || x_m.is_nan() {
            return f64::NAN;
        }
        for window in self.points.windows(2) {
            let (left, right) = (window[0], window[1]);
            if x_m <= right.x_m {
                return (right.z_m - left.z_m) / (right.x_m - left.x_m);
            }
        }
        f64::NAN
    }
}
