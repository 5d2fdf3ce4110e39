//! Grass wave impact: damage from waves breaking on the grass cover.
//!
//! The strength of a grass cover is described by a wave-height time line
//! H(t) = a*e^(b*t) + c: the wave height that destroys the cover after a
//! loading duration t. A time step contributes its duration divided by the
//! failure time belonging to the step's (angle-corrected) wave height.

/// Wave-height time line coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for TimeLine {
    /// Closed sod defaults.
    fn default() -> Self {
        Self {
            a: 1.0,
            b: -0.000_009_722,
            c: 0.25,
        }
    }
}

/// Loading duration below which the time line is not considered valid (s).
pub const DEFAULT_TIME_LINE_TEMIN_S: f64 = 3.6;
/// Loading duration above which the cover is considered unloaded (s).
pub const DEFAULT_TIME_LINE_TEMAX_S: f64 = 3_600_000.0;
/// Default upper limit loading coefficient Aul.
pub const DEFAULT_UPPER_LIMIT_LOADING_AUL: f64 = 0.0;
/// Default lower limit loading coefficient All.
pub const DEFAULT_LOWER_LIMIT_LOADING_ALL: f64 = 0.5;
/// Default wave angle impact exponent.
pub const DEFAULT_WAVE_ANGLE_IMPACT_NWA: f64 = 2.0 / 3.0;

/// Wave height destroying the cover after loading duration t.
pub fn time_line_wave_height(time_line: TimeLine, duration_s: f64) -> f64 {
    time_line.a * (time_line.b * duration_s).exp() + time_line.c
}

/// Loading duration at which the given wave height destroys the cover.
///
/// Only defined for wave heights strictly between the time-line asymptote c
/// and a + c; NaN otherwise.
pub fn failure_time(time_line: TimeLine, wave_height_m: f64) -> f64 {
    ((wave_height_m - time_line.c) / time_line.a).ln() / time_line.b
}

/// Damage contributed by an interval of the given duration.
pub fn increment_damage(increment_time_s: f64, failure_time_s: f64) -> f64 {
    increment_time_s / failure_time_s
}

/// Impact reduction for oblique waves: cos(beta)^nwa, zero beyond 90 degrees.
pub fn wave_angle_impact(wave_angle_deg: f64, nwa: f64) -> f64 {
    let beta = wave_angle_deg.abs();
    if beta >= 90.0 {
        return 0.0;
    }
    beta.to_radians().cos().powf(nwa)
}

/// Smallest wave height the time line can resolve (at Temax).
pub fn minimum_wave_height(time_line: TimeLine, temax_s: f64) -> f64 {
    time_line_wave_height(time_line, temax_s)
}

/// Largest wave height the time line can resolve (at Temin).
pub fn maximum_wave_height(time_line: TimeLine, temin_s: f64) -> f64 {
    time_line_wave_height(time_line, temin_s)
}

/// Top of the loaded zone for this step.
pub fn upper_limit_loading(water_level_m: f64, wave_height_hm0_m: f64, aul: f64) -> f64 {
    water_level_m - aul * wave_height_hm0_m
}

/// Bottom of the loaded zone for this step.
pub fn lower_limit_loading(water_level_m: f64, wave_height_hm0_m: f64, all: f64) -> f64 {
    water_level_m - all * wave_height_hm0_m
}

/// Whether the revetment at elevation z is loaded during this step.
pub fn loading_revetment(z_m: f64, lower_limit_m: f64, upper_limit_m: f64) -> bool {
    lower_limit_m <= z_m && z_m <= upper_limit_m
}
