//! Asphalt revetment coefficient validators.

use df_events::ValidationIssue;

/// Flexural strength must be positive.
pub fn validate_flexural_strength(value_mpa: f64) -> Option<ValidationIssue> {
    if !(value_mpa > 0.0) {
        return Some(ValidationIssue::error(
            "flexural strength must be positive",
        ));
    }
    None
}

/// Fatigue exponents must be positive.
pub fn validate_fatigue_exponents(alpha: f64, beta: f64) -> Option<ValidationIssue> {
    if !(alpha > 0.0) || !(beta > 0.0) {
        return Some(ValidationIssue::error(
            "fatigue exponents alpha and beta must be positive",
        ));
    }
    None
}

/// Layer thickness must be positive; layers above 1 m are advisory.
pub fn validate_layer_thickness(value_m: f64) -> Option<ValidationIssue> {
    if !(value_m > 0.0) {
        return Some(ValidationIssue::error("layer thickness must be positive"));
    }
    if value_m > 1.0 {
        return Some(ValidationIssue::warning(
            "layer thickness above 1 m is outside the validated range",
        ));
    }
    None
}

/// Elastic moduli must be positive.
pub fn validate_elastic_modulus(value: f64) -> Option<ValidationIssue> {
    if !(value > 0.0) {
        return Some(ValidationIssue::error("elastic modulus must be positive"));
    }
    None
}

/// Density of water must be positive; outside [950, 1050] kg/m^3 is advisory.
pub fn validate_density_of_water(value_kg_per_m3: f64) -> Option<ValidationIssue> {
    if !(value_kg_per_m3 > 0.0) {
        return Some(ValidationIssue::error(
            "density of water must be positive",
        ));
    }
    if !(950.0..=1050.0).contains(&value_kg_per_m3) {
        return Some(ValidationIssue::warning(
            "density of water outside the recommended range [950, 1050] kg/m^3",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_events::Severity;

    #[test]
    fn strength_and_fatigue() {
        assert!(validate_flexural_strength(0.9).is_none());
        assert!(validate_flexural_strength(0.0).is_some());
        assert!(validate_fatigue_exponents(0.42, 4.76).is_none());
        assert!(validate_fatigue_exponents(0.0, 4.76).is_some());
    }

    #[test]
    fn thickness_ranges() {
        assert!(validate_layer_thickness(0.15).is_none());
        assert_eq!(
            validate_layer_thickness(1.5).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(
            validate_layer_thickness(0.0).unwrap().severity,
            Severity::Error
        );
    }

    #[test]
    fn density_ranges() {
        assert!(validate_density_of_water(1025.0).is_none());
        assert_eq!(
            validate_density_of_water(900.0).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(
            validate_density_of_water(-1.0).unwrap().severity,
            Severity::Error
        );
    }
}
