//! Per-time-step and per-location calculation results.

use df_core::numeric::all_defined;

/// Type-specific diagnostics of one calculated time step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepDetails {
    AsphaltWaveImpact {
        z_m: f64,
        maximum_peak_stress_mpa: f64,
        stiffness_relation_per_m: f64,
        computational_thickness_m: f64,
        impact_number: f64,
    },
    GrassWaveImpact {
        z_m: f64,
        loading_revetment: bool,
        upper_limit_loading_m: f64,
        lower_limit_loading_m: f64,
        wave_angle_impact: f64,
        wave_height_impact_m: f64,
    },
    GrassWaveRunup {
        vertical_distance_m: f64,
        representative_wave_runup_2p_m: f64,
        wave_angle_impact: f64,
        cumulative_overload_m2_per_s2: f64,
    },
    GrassWaveOvertopping {
        vertical_distance_m: f64,
        acceleration_alpha_a: f64,
        representative_wave_runup_2p_m: f64,
        cumulative_overload_m2_per_s2: f64,
    },
    NaturalStoneWaveImpact {
        z_m: f64,
        resistance_m: f64,
        loading_revetment: bool,
        surf_similarity: f64,
        hydraulic_load_m: f64,
        wave_angle_impact: f64,
        reference_degradation: f64,
        reference_time_s: f64,
    },
}

/// Result of one (location, time step) pair. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDependentOutput {
    pub begin_time_s: f64,
    pub end_time_s: f64,
    /// Damage contributed by this step.
    pub increment_damage: f64,
    pub details: StepDetails,
}

/// Ordered per-time-step results of one location.
///
/// Created once after all time steps of the location are processed, then
/// read-only. The cumulative damage series and the time of failure are
/// derived on demand, not stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationDependentOutput {
    position_x_m: f64,
    initial_damage: f64,
    failure_number: f64,
    steps: Vec<TimeDependentOutput>,
}

impl LocationDependentOutput {
    pub fn new(
        position_x_m: f64,
        initial_damage: f64,
        failure_number: f64,
        steps: Vec<TimeDependentOutput>,
    ) -> Self {
        Self {
            position_x_m,
            initial_damage,
            failure_number,
            steps,
        }
    }

    pub fn position_x_m(&self) -> f64 {
        self.position_x_m
    }

    pub fn initial_damage(&self) -> f64 {
        self.initial_damage
    }

    pub fn failure_number(&self) -> f64 {
        self.failure_number
    }

    pub fn steps(&self) -> &[TimeDependentOutput] {
        &self.steps
    }

    /// Cumulative damage after each step: initial damage plus the running
    /// sum of increments, in chronological order.
    pub fn cumulative_damages(&self) -> Vec<f64> {
        self.steps
            .iter()
            .scan(self.initial_damage, |damage, step| {
                *damage += step.increment_damage;
                Some(*damage)
            })
            .collect()
    }

    /// Cumulative damage after the last step.
    pub fn final_damage(&self) -> f64 {
        self.initial_damage
            + self
                .steps
                .iter()
                .map(|step| step.increment_damage)
                .sum::<f64>()
    }

    /// End time of the first step whose cumulative damage reaches the
    /// failure number.
    ///
    /// `None` when the failure number is never reached, and `None` when any
    /// damage value in the series is NaN: an undefined increment makes the
    /// failure time unknowable regardless of later values.
    pub fn time_of_failure_s(&self) -> Option<f64> {
        let damages = self.cumulative_damages();
        if !all_defined(&damages) {
            return None;
        }
        damages
            .iter()
            .zip(&self.steps)
            .find(|(damage, _)| **damage >= self.failure_number)
            .map(|(_, step)| step.end_time_s)
    }
}
