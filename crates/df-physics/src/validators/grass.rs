//! Grass revetment coefficient validators.

use df_events::ValidationIssue;

/// Critical cumulative overload must be positive.
pub fn validate_critical_cumulative_overload(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error(
            "critical cumulative overload must be positive",
        ));
    }
    None
}

/// Critical front velocity must be positive; sods above 10 m/s are advisory.
pub fn validate_critical_front_velocity(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error(
            "critical front velocity must be positive",
        ));
    }
    if value > 10.0 {
        return Some(ValidationIssue::warning(
            "critical front velocity above 10 m/s is outside the validated range",
        ));
    }
    None
}

/// Front velocity coefficient (cu / cwo) must be positive.
pub fn validate_front_velocity_coefficient(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error(
            "front velocity coefficient must be positive",
        ));
    }
    None
}

/// Load/strength increase factors must be positive.
pub fn validate_alpha_factor(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error(
            "alpha factors must be positive",
        ));
    }
    None
}

/// The evaluated Rayleigh population must not be empty.
pub fn validate_fixed_number_of_waves(value: usize) -> Option<ValidationIssue> {
    if value == 0 {
        return Some(ValidationIssue::error(
            "fixed number of waves must be positive",
        ));
    }
    None
}

/// Time line coefficients of the wave impact variant: a > 0, b < 0, c >= 0.
pub fn validate_time_line(a: f64, b: f64, c: f64) -> Option<ValidationIssue> {
    if !(a > 0.0) || !(b < 0.0) || !(c >= 0.0) {
        return Some(ValidationIssue::error(
            "time line coefficients must satisfy a > 0, b < 0, c >= 0",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_events::Severity;

    #[test]
    fn critical_front_velocity_ranges() {
        assert!(validate_critical_front_velocity(6.6).is_none());
        assert_eq!(
            validate_critical_front_velocity(12.0).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(
            validate_critical_front_velocity(0.0).unwrap().severity,
            Severity::Error
        );
    }

    #[test]
    fn overload_and_population() {
        assert!(validate_critical_cumulative_overload(7000.0).is_none());
        assert!(validate_critical_cumulative_overload(0.0).is_some());
        assert!(validate_fixed_number_of_waves(10_000).is_none());
        assert!(validate_fixed_number_of_waves(0).is_some());
    }

    #[test]
    fn time_line_signs() {
        assert!(validate_time_line(1.0, -1e-5, 0.25).is_none());
        assert!(validate_time_line(-1.0, -1e-5, 0.25).is_some());
        assert!(validate_time_line(1.0, 1e-5, 0.25).is_some());
        assert!(validate_time_line(1.0, -1e-5, -0.1).is_some());
        assert!(validate_time_line(f64::NAN, -1e-5, 0.25).is_some());
    }
}
