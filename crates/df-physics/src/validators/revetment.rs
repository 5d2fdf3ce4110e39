//! Generic revetment invariants shared by every location type.

use df_events::ValidationIssue;

/// Initial damage must be zero or positive.
pub fn validate_initial_damage(initial_damage: f64) -> Option<ValidationIssue> {
    if !(initial_damage >= 0.0) {
        return Some(ValidationIssue::error(
            "initial damage must be zero or positive",
        ));
    }
    None
}

/// Failure number must be positive and not below the initial damage.
pub fn validate_failure_number(
    failure_number: f64,
    initial_damage: f64,
) -> Option<ValidationIssue> {
    if !(failure_number > 0.0) {
        return Some(ValidationIssue::error("failure number must be positive"));
    }
    if initial_damage > failure_number {
        return Some(ValidationIssue::error(
            "initial damage must not exceed the failure number",
        ));
    }
    None
}
