//! Grass cumulative overload: damage from wave run-up and overtopping flow.
//!
//! Per time step a Rayleigh-distributed population of waves is evaluated
//! against the location. Each wave whose run-up exceeds the location's
//! elevation produces a front velocity; the squared-velocity surplus over
//! the critical front velocity accumulates into the cumulative overload,
//! which is compared against the sod's critical cumulative overload.

use df_core::hydraulics::GRAVITY_M_PER_S2;

/// Default critical cumulative overload of a closed sod (m^2/s^2).
pub const DEFAULT_CRITICAL_CUMULATIVE_OVERLOAD: f64 = 7000.0;
/// Default critical front velocity of a closed sod (m/s).
pub const DEFAULT_CRITICAL_FRONT_VELOCITY: f64 = 6.6;
/// Default front velocity coefficient for run-up loading.
pub const DEFAULT_FRONT_VELOCITY_CU: f64 = 1.1;
/// Default front velocity coefficient for overtopping flow.
pub const DEFAULT_FRONT_VELOCITY_CWO: f64 = 1.45;
/// Default load/strength increase factors.
pub const DEFAULT_INCREASED_LOAD_ALPHA_M: f64 = 1.0;
pub const DEFAULT_REDUCED_STRENGTH_ALPHA_S: f64 = 1.0;
/// Default flow acceleration on the crest and on the inner slope.
pub const DEFAULT_ACCELERATION_ALPHA_A_CREST: f64 = 1.0;
pub const DEFAULT_ACCELERATION_ALPHA_A_INNER_SLOPE: f64 = 1.4;
/// Default size of the evaluated Rayleigh wave population.
pub const DEFAULT_FIXED_NUMBER_OF_WAVES: usize = 10_000;
/// Default representative run-up coefficients.
pub const DEFAULT_REPRESENTATIVE_2P_C1: f64 = 1.65;
pub const DEFAULT_REPRESENTATIVE_2P_C2: f64 = 4.0;
pub const DEFAULT_REPRESENTATIVE_2P_C3: f64 = 1.5;

/// Run-up reduction for oblique waves: 1 - 0.0022*|beta|, capped at 80 deg.
pub fn wave_angle_impact(wave_angle_deg: f64) -> f64 {
    1.0 - 0.0022 * wave_angle_deg.abs().min(80.0)
}

/// Run-up level exceeded by 2 percent of the incoming waves.
pub fn representative_wave_runup_2p(
    surf_similarity: f64,
    wave_angle_impact: f64,
    wave_height_hm0_m: f64,
    c1: f64,
    c2: f64,
    c3: f64,
) -> f64 {
    if surf_similarity <= 0.0 {
        return 0.0;
    }
    let breaking = c1 * wave_angle_impact * surf_similarity;
    let non_breaking = wave_angle_impact * (c2 - c3 / surf_similarity.sqrt());
    wave_height_hm0_m * breaking.min(non_breaking).max(0.0)
}

/// Run-up level with the given exceedance probability, Rayleigh-scaled from
/// the representative 2 percent level.
pub fn rayleigh_runup(representative_2p_m: f64, exceedance_probability: f64) -> f64 {
    representative_2p_m * (exceedance_probability.ln() / 0.02_f64.ln()).sqrt()
}

/// Front velocity of one wave at a point `vertical_distance_m` above the
/// water level. Zero when the run-up does not reach the point.
pub fn front_velocity(
    runup_m: f64,
    vertical_distance_m: f64,
    velocity_coefficient: f64,
    acceleration_alpha_a: f64,
) -> f64 {
    let head_m = runup_m - vertical_distance_m;
    if head_m <= 0.0 {
        return 0.0;
    }
    velocity_coefficient * acceleration_alpha_a * (GRAVITY_M_PER_S2 * head_m).sqrt()
}

/// Inputs of one cumulative-overload evaluation.
#[derive(Debug, Clone, Copy)]
pub struct CumulativeOverloadInput {
    pub representative_2p_m: f64,
    /// Elevation of the location above the still water level (m).
    pub vertical_distance_m: f64,
    pub velocity_coefficient: f64,
    pub acceleration_alpha_a: f64,
    pub increased_load_alpha_m: f64,
    pub reduced_strength_alpha_s: f64,
    pub critical_front_velocity_m_per_s: f64,
    pub fixed_number_of_waves: usize,
    /// Number of waves actually occurring in the time step.
    pub average_number_of_waves: f64,
}

/// Cumulative overload of one time step (m^2/s^2).
///
/// The Rayleigh population is sampled at exceedance probabilities
/// i/(n+1), i = 1..=n; the per-population mean surplus is scaled by the
/// step's wave count.
pub fn cumulative_overload(input: &CumulativeOverloadInput) -> f64 {
    let n = input.fixed_number_of_waves;
    if n == 0 {
        return 0.0;
    }
    let critical = input.reduced_strength_alpha_s
        * input.critical_front_velocity_m_per_s
        * input.critical_front_velocity_m_per_s;
    let mut sum = 0.0;
    for i in 1..=n {
        let probability = i as f64 / (n + 1) as f64;
        let runup = rayleigh_runup(input.representative_2p_m, probability);
        let velocity = front_velocity(
            runup,
            input.vertical_distance_m,
            input.velocity_coefficient,
            input.acceleration_alpha_a,
        );
        sum += (input.increased_load_alpha_m * velocity * velocity - critical).max(0.0);
    }
    sum / n as f64 * input.average_number_of_waves
}

/// Damage contributed by one time step.
pub fn increment_damage(cumulative_overload: f64, critical_cumulative_overload: f64) -> f64 {
    cumulative_overload / critical_cumulative_overload
}
