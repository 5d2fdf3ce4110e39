//! Hydraulic boundary conditions for a single calculation interval.

use crate::error::{DfError, DfResult};
use crate::numeric::ensure_finite;

/// Gravitational acceleration (m/s^2) used by all revetment formulas.
pub const GRAVITY_M_PER_S2: f64 = 9.81;

/// Hydraulic loads over one time interval.
///
/// Values are constant over the interval. Instances are immutable after
/// construction; the calculation input owns them in chronological order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeStep {
    /// Interval begin time (s)
    pub begin_time_s: f64,
    /// Interval end time (s), strictly greater than begin
    pub end_time_s: f64,
    /// Still water level (m, same datum as the dike profile)
    pub water_level_m: f64,
    /// Significant wave height Hm0 (m)
    pub wave_height_hm0_m: f64,
    /// Spectral wave period Tm-1,0 (s)
    pub wave_period_tm10_s: f64,
    /// Wave direction with respect to north (degrees, [0, 360))
    pub wave_direction_deg: f64,
}

impl TimeStep {
    /// Create a time step, rejecting non-finite values and an empty or
    /// reversed interval.
    pub fn new(
        begin_time_s: f64,
        end_time_s: f64,
        water_level_m: f64,
        wave_height_hm0_m: f64,
        wave_period_tm10_s: f64,
        wave_direction_deg: f64,
    ) -> DfResult<Self> {
        ensure_finite(begin_time_s, "time step begin time")?;
        ensure_finite(end_time_s, "time step end time")?;
        ensure_finite(water_level_m, "water level")?;
        ensure_finite(wave_height_hm0_m, "wave height Hm0")?;
        ensure_finite(wave_period_tm10_s, "wave period Tm-1,0")?;
        ensure_finite(wave_direction_deg, "wave direction")?;
        if !(end_time_s > begin_time_s) {
            return Err(DfError::InvalidArg {
                what: "time step end time must be greater than begin time",
            });
        }
        Ok(Self {
            begin_time_s,
            end_time_s,
            water_level_m,
            wave_height_hm0_m,
            wave_period_tm10_s,
            wave_direction_deg,
        })
    }

    /// Interval duration (s).
    pub fn increment_time_s(&self) -> f64 {
        self.end_time_s - self.begin_time_s
    }
}
