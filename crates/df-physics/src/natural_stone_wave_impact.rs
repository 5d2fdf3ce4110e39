//! Natural stone wave impact: stability of a loose top layer under
//! breaking waves.
//!
//! The hydraulic load follows the surf similarity number with separate
//! plunging and surging branches; the strength is the resistance
//! delta * D of the top layer. Damage progresses through a degradation
//! function of loading duration, inverted each step against the damage
//! accumulated so far (reference time), so steps must be applied in
//! chronological order.

/// Surf similarity number separating plunging from surging waves.
pub const DEFAULT_XI_CRIT: f64 = 2.9;
/// Default plunging branch coefficients (load = Hm0 / (A*xi^N + B*xi + C)).
pub const DEFAULT_PLUNGING_A: f64 = 4.0;
pub const DEFAULT_PLUNGING_B: f64 = 0.0;
pub const DEFAULT_PLUNGING_C: f64 = 0.0;
pub const DEFAULT_PLUNGING_N: f64 = -0.9;
/// Default surging branch coefficients.
pub const DEFAULT_SURGING_A: f64 = 0.8;
pub const DEFAULT_SURGING_B: f64 = 0.0;
pub const DEFAULT_SURGING_C: f64 = 0.0;
pub const DEFAULT_SURGING_N: f64 = 0.6;
/// Default loading-zone coefficients relative to the water level.
pub const DEFAULT_UPPER_LIMIT_LOADING_AUL: f64 = 0.5;
pub const DEFAULT_LOWER_LIMIT_LOADING_ALL: f64 = 1.0;
/// Wave angle beyond which the impact no longer reduces (degrees).
pub const DEFAULT_WAVE_ANGLE_BETAMAX_DEG: f64 = 78.0;

/// Coefficients of one hydraulic load branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicLoadCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub n: f64,
}

impl HydraulicLoadCoefficients {
    pub fn plunging() -> Self {
        Self {
            a: DEFAULT_PLUNGING_A,
            b: DEFAULT_PLUNGING_B,
            c: DEFAULT_PLUNGING_C,
            n: DEFAULT_PLUNGING_N,
        }
    }

    pub fn surging() -> Self {
        Self {
            a: DEFAULT_SURGING_A,
            b: DEFAULT_SURGING_B,
            c: DEFAULT_SURGING_C,
            n: DEFAULT_SURGING_N,
        }
    }
}

/// Hydraulic load Hm0 / (A*xi^N + B*xi + C) for the branch that applies to
/// the given surf similarity number.
pub fn hydraulic_load(
    surf_similarity: f64,
    wave_height_hm0_m: f64,
    xi_crit: f64,
    plunging: HydraulicLoadCoefficients,
    surging: HydraulicLoadCoefficients,
) -> f64 {
    let coeffs = if surf_similarity < xi_crit {
        plunging
    } else {
        surging
    };
    wave_height_hm0_m
        / (coeffs.a * surf_similarity.powf(coeffs.n) + coeffs.b * surf_similarity + coeffs.c)
}

/// Strength of the top layer: relative density times stone thickness.
pub fn resistance(relative_density: f64, thickness_top_layer_m: f64) -> f64 {
    relative_density * thickness_top_layer_m
}

/// Degradation state equivalent to the damage accumulated so far.
pub fn reference_degradation(
    damage: f64,
    resistance_m: f64,
    hydraulic_load_m: f64,
    wave_angle_impact: f64,
) -> f64 {
    damage * resistance_m / (hydraulic_load_m * wave_angle_impact)
}

/// Loading duration equivalent to the given degradation state.
pub fn reference_time(reference_degradation: f64, wave_period_tm10_s: f64) -> f64 {
    1000.0 * wave_period_tm10_s * reference_degradation.powi(10)
}

/// Degradation gained over an interval starting from the reference time.
pub fn increment_degradation(
    reference_time_s: f64,
    increment_time_s: f64,
    wave_period_tm10_s: f64,
    reference_degradation: f64,
) -> f64 {
    ((reference_time_s + increment_time_s) / (1000.0 * wave_period_tm10_s)).powf(0.1)
        - reference_degradation
}

/// Damage contributed by one step.
pub fn increment_damage(
    hydraulic_load_m: f64,
    resistance_m: f64,
    increment_degradation: f64,
    wave_angle_impact: f64,
) -> f64 {
    hydraulic_load_m / resistance_m * increment_degradation * wave_angle_impact
}

/// Impact reduction for oblique waves: cos(beta)^(2/3), beta clamped to
/// betamax.
pub fn wave_angle_impact(wave_angle_deg: f64, betamax_deg: f64) -> f64 {
    let beta = wave_angle_deg.abs().min(betamax_deg);
    beta.to_radians().cos().powf(2.0 / 3.0)
}

/// Top of the loaded zone for this step.
pub fn upper_limit_loading(water_level_m: f64, wave_height_hm0_m: f64, aul: f64) -> f64 {
    water_level_m + aul * wave_height_hm0_m
}

/// Bottom of the loaded zone for this step.
pub fn lower_limit_loading(water_level_m: f64, wave_height_hm0_m: f64, all: f64) -> f64 {
    water_level_m - all * wave_height_hm0_m
}

/// Whether the stone layer at elevation z is loaded during this step.
pub fn loading_revetment(z_m: f64, lower_limit_m: f64, upper_limit_m: f64) -> bool {
    lower_limit_m <= z_m && z_m <= upper_limit_m
}
