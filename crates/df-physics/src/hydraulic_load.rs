//! Wave parameters shared by all revetment families.

use df_core::hydraulics::GRAVITY_M_PER_S2;

/// Default ratio between the spectral wave period and the mean wave period,
/// used to derive the number of waves in an interval.
pub const DEFAULT_FACTOR_CTM: f64 = 0.92;

/// Deep-water wave steepness s = 2*pi*Hm0 / (g*T^2).
pub fn wave_steepness(wave_height_hm0_m: f64, wave_period_tm10_s: f64) -> f64 {
    2.0 * std::f64::consts::PI * wave_height_hm0_m
        / (GRAVITY_M_PER_S2 * wave_period_tm10_s * wave_period_tm10_s)
}

/// Surf similarity (Iribarren) number xi = tan(alpha) / sqrt(s).
pub fn surf_similarity(
    outer_slope_tan: f64,
    wave_height_hm0_m: f64,
    wave_period_tm10_s: f64,
) -> f64 {
    outer_slope_tan / wave_steepness(wave_height_hm0_m, wave_period_tm10_s).sqrt()
}

/// Wave angle relative to the outward dike normal, normalized to
/// (-180, 180] degrees.
pub fn relative_wave_angle(wave_direction_deg: f64, dike_orientation_deg: f64) -> f64 {
    let mut angle = wave_direction_deg - dike_orientation_deg;
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Average number of waves in an interval of the given duration.
pub fn average_number_of_waves(
    increment_time_s: f64,
    wave_period_tm10_s: f64,
    factor_ctm: f64,
) -> f64 {
    increment_time_s / (wave_period_tm10_s * factor_ctm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_steepness_reference() {
        let s = wave_steepness(1.5, 6.0);
        assert!((s - 0.0266869916207084).abs() < 1e-12);
    }

    #[test]
    fn surf_similarity_reference() {
        // 1:4 outer slope
        let xi = surf_similarity(0.25, 1.5, 6.0);
        assert!((xi - 1.5303479955870298).abs() < 1e-10);
    }

    #[test]
    fn surf_similarity_decreases_with_wave_height() {
        let low = surf_similarity(0.25, 1.0, 6.0);
        let high = surf_similarity(0.25, 2.0, 6.0);
        assert!(high < low);
    }

    #[test]
    fn relative_wave_angle_normalization() {
        assert_eq!(relative_wave_angle(30.0, 0.0), 30.0);
        assert_eq!(relative_wave_angle(350.0, 10.0), -20.0);
        assert_eq!(relative_wave_angle(10.0, 350.0), 20.0);
        assert_eq!(relative_wave_angle(180.0, 0.0), 180.0);
        assert!(relative_wave_angle(f64::NAN, 0.0).is_nan());
    }

    #[test]
    fn average_number_of_waves_reference() {
        let n = average_number_of_waves(3600.0, 6.0, DEFAULT_FACTOR_CTM);
        assert!((n - 652.1739130434783).abs() < 1e-9);
    }
}
