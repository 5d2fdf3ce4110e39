//! Natural stone revetment coefficient validators.

use df_events::ValidationIssue;

/// Relative density must be positive; outside [0.1, 10] is advisory.
pub fn validate_relative_density(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error(
            "relative density must be positive",
        ));
    }
    if !(0.1..=10.0).contains(&value) {
        return Some(ValidationIssue::warning(
            "relative density outside the recommended range [0.1, 10]",
        ));
    }
    None
}

/// Top layer thickness must be positive; outside [0.04, 0.6] m is advisory.
pub fn validate_thickness_top_layer(value_m: f64) -> Option<ValidationIssue> {
    if !(value_m > 0.0) {
        return Some(ValidationIssue::error(
            "top layer thickness must be positive",
        ));
    }
    if !(0.04..=0.6).contains(&value_m) {
        return Some(ValidationIssue::warning(
            "top layer thickness outside the recommended range [0.04, 0.6] m",
        ));
    }
    None
}

/// The critical surf similarity number must be positive.
pub fn validate_xi_crit(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error(
            "critical surf similarity number must be positive",
        ));
    }
    None
}
