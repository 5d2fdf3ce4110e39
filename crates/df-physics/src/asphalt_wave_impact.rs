//! Asphalt wave impact: fatigue of an asphalt top layer under wave impacts.
//!
//! Each impact bends the plate-on-elastic-foundation asphalt layer; the
//! induced tension is compared against the flexural strength through a
//! fatigue relation. The per-step damage is the probability-weighted double
//! sum over the impact-factor and width-factor distributions, times the
//! number of impacts in the step.

use df_core::hydraulics::GRAVITY_M_PER_S2;

/// Default density of (sea) water (kg/m^3).
pub const DEFAULT_DENSITY_OF_WATER: f64 = 1025.0;
/// Default fatigue exponents of water-bound asphalt.
pub const DEFAULT_FATIGUE_ALPHA: f64 = 0.42;
pub const DEFAULT_FATIGUE_BETA: f64 = 4.76;
/// Default subsoil modulus of elasticity (MPa/m equivalent spring constant).
pub const DEFAULT_ELASTIC_MODULUS_SUBSOIL: f64 = 55.0;
/// Default impact-number coefficient: fraction of waves impacting the slope.
pub const DEFAULT_IMPACT_NUMBER_C: f64 = 1.0;
/// Default peak stress factor relating Hm0 to the maximum impact pressure.
pub const DEFAULT_STRESS_FACTOR: f64 = 0.35;

/// One entry of an impact- or width-factor distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorProbability {
    pub factor: f64,
    pub probability: f64,
}

/// Default impact-factor distribution (impact intensity multipliers).
pub fn default_impact_factors() -> Vec<FactorProbability> {
    vec![
        FactorProbability { factor: 2.0, probability: 0.04 },
        FactorProbability { factor: 2.5, probability: 0.18 },
        FactorProbability { factor: 3.0, probability: 0.40 },
        FactorProbability { factor: 3.5, probability: 0.30 },
        FactorProbability { factor: 4.0, probability: 0.08 },
    ]
}

/// Default width-factor distribution (impact position relative to the
/// water line, in wave heights).
pub fn default_width_factors() -> Vec<FactorProbability> {
    vec![
        FactorProbability { factor: 0.1, probability: 0.10 },
        FactorProbability { factor: 0.2, probability: 0.25 },
        FactorProbability { factor: 0.3, probability: 0.30 },
        FactorProbability { factor: 0.4, probability: 0.25 },
        FactorProbability { factor: 0.5, probability: 0.10 },
    ]
}

/// Maximum peak stress of an impact (MPa).
pub fn maximum_peak_stress(wave_height_hm0_m: f64, density_of_water: f64) -> f64 {
    DEFAULT_STRESS_FACTOR * density_of_water * GRAVITY_M_PER_S2 * wave_height_hm0_m / 1.0e6
}

/// Equivalent one-layer thickness of an upper layer on a sub layer.
pub fn computational_thickness(
    thickness_upper_layer_m: f64,
    thickness_sub_layer_m: f64,
    elastic_modulus_upper_layer: f64,
    elastic_modulus_sub_layer: f64,
) -> f64 {
    thickness_upper_layer_m
        + thickness_sub_layer_m
            * (elastic_modulus_sub_layer / elastic_modulus_upper_layer).powf(1.0 / 3.0)
}

/// Stiffness relation of the plate on its elastic foundation (1/m).
pub fn stiffness_relation(
    computational_thickness_m: f64,
    equivalent_elastic_modulus: f64,
    elastic_modulus_subsoil: f64,
) -> f64 {
    (3.0 * elastic_modulus_subsoil
        / (equivalent_elastic_modulus * computational_thickness_m.powi(3)))
    .powf(0.25)
}

/// Fatigue fraction consumed by one impact with the given tension.
pub fn fatigue(
    log10_tension: f64,
    log10_flexural_strength: f64,
    fatigue_alpha: f64,
    fatigue_beta: f64,
) -> f64 {
    let margin = (log10_flexural_strength - log10_tension).max(0.0);
    10.0_f64.powf(-fatigue_beta * margin.powf(fatigue_alpha))
}

/// Number of wave impacts at the location during the interval.
pub fn impact_number(increment_time_s: f64, wave_period_tm10_s: f64, impact_number_c: f64) -> f64 {
    increment_time_s / (wave_period_tm10_s * impact_number_c)
}

/// Inputs of one asphalt damage evaluation.
#[derive(Debug, Clone)]
pub struct AsphaltDamageInput {
    pub maximum_peak_stress_mpa: f64,
    pub stiffness_relation_per_m: f64,
    pub log10_flexural_strength: f64,
    pub fatigue_alpha: f64,
    pub fatigue_beta: f64,
    /// Elevation of the location (m).
    pub z_m: f64,
    pub water_level_m: f64,
    pub wave_height_hm0_m: f64,
    pub impact_factors: Vec<FactorProbability>,
    pub width_factors: Vec<FactorProbability>,
    pub impact_number: f64,
}

/// Damage contributed by one time step.
///
/// Every (impact factor, width factor) pair represents an impact class
/// hitting at `water_level - width * Hm0`; the tension decays exponentially
/// with the stiffness relation over the distance to the location.
pub fn increment_damage(input: &AsphaltDamageInput) -> f64 {
    let mut damage = 0.0;
    for width in &input.width_factors {
        let impact_level_m = input.water_level_m - width.factor * input.wave_height_hm0_m;
        let distance_m = (input.z_m - impact_level_m).abs();
        let attenuation = (-input.stiffness_relation_per_m * distance_m).exp();
        for impact in &input.impact_factors {
            let tension_mpa = input.maximum_peak_stress_mpa * impact.factor * attenuation;
            if tension_mpa <= 0.0 {
                continue;
            }
            let fatigue_fraction = fatigue(
                tension_mpa.log10(),
                input.log10_flexural_strength,
                input.fatigue_alpha,
                input.fatigue_beta,
            );
            damage += width.probability * impact.probability * input.impact_number * fatigue_fraction;
        }
    }
    damage
}
