//! Plausibility of hydraulic time-step values.

use df_events::ValidationIssue;

/// Wave height must be positive; values outside [0.1, 10] m are advisory.
pub fn validate_wave_height(wave_height_hm0_m: f64) -> Option<ValidationIssue> {
    if !(wave_height_hm0_m > 0.0) {
        return Some(ValidationIssue::error("wave height Hm0 must be positive"));
    }
    if !(0.1..=10.0).contains(&wave_height_hm0_m) {
        return Some(ValidationIssue::warning(
            "wave height Hm0 outside the recommended range [0.1, 10] m",
        ));
    }
    None
}

/// Wave period must be positive; values outside [0.5, 25] s are advisory.
pub fn validate_wave_period(wave_period_tm10_s: f64) -> Option<ValidationIssue> {
    if !(wave_period_tm10_s > 0.0) {
        return Some(ValidationIssue::error(
            "wave period Tm-1,0 must be positive",
        ));
    }
    if !(0.5..=25.0).contains(&wave_period_tm10_s) {
        return Some(ValidationIssue::warning(
            "wave period Tm-1,0 outside the recommended range [0.5, 25] s",
        ));
    }
    None
}

/// Wave direction must lie in [0, 360) degrees.
pub fn validate_wave_direction(wave_direction_deg: f64) -> Option<ValidationIssue> {
    if !(0.0..360.0).contains(&wave_direction_deg) {
        return Some(ValidationIssue::error(
            "wave direction must lie in [0, 360) degrees",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_events::Severity;

    #[test]
    fn wave_height_ranges() {
        assert!(validate_wave_height(1.5).is_none());
        assert_eq!(
            validate_wave_height(0.05).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(
            validate_wave_height(12.0).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(validate_wave_height(0.0).unwrap().severity, Severity::Error);
        assert_eq!(
            validate_wave_height(f64::NAN).unwrap().severity,
            Severity::Error
        );
    }

    #[test]
    fn wave_period_ranges() {
        assert!(validate_wave_period(6.0).is_none());
        assert_eq!(
            validate_wave_period(0.3).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(
            validate_wave_period(-2.0).unwrap().severity,
            Severity::Error
        );
    }

    #[test]
    fn wave_direction_domain() {
        assert!(validate_wave_direction(0.0).is_none());
        assert!(validate_wave_direction(359.9).is_none());
        assert!(validate_wave_direction(360.0).is_some());
        assert!(validate_wave_direction(-1.0).is_some());
        assert!(validate_wave_direction(f64::NAN).is_some());
    }
}
