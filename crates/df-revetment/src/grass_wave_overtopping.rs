//! Grass wave overtopping location.
//!
//! Loads the grass cover on the crest or the inner slope with the flow of
//! waves running over the dike. The cumulative overload mechanics follow
//! the run-up variant; the front velocity uses the overtopping coefficient
//! and a flow acceleration chosen from the location's position relative to
//! the crest.

use df_core::{DfError, DfResult, TimeStep};
use df_events::{EventCollector, register_validation_issues};
use df_geometry::{CharacteristicPointKind, ProfileData};
use df_physics::grass_cumulative_overload as physics;
use df_physics::hydraulic_load::{
    DEFAULT_FACTOR_CTM, average_number_of_waves, relative_wave_angle, surf_similarity,
};
use df_physics::validators;

use crate::derived::Derived;
use crate::location::{RevetmentLocation, common_validation_issues};
use crate::output::{StepDetails, TimeDependentOutput};

#[derive(Debug, Clone, Copy, PartialEq)]
struct GrassWaveOvertoppingDerived {
    z_m: f64,
    outer_slope_tan: f64,
    /// Flow acceleration: crest locations keep the crest coefficient,
    /// locations past the inner crest the (larger) inner slope one.
    acceleration_alpha_a: f64,
}

/// Grass cover behind the outer crest loaded by overtopping flow.
#[derive(Debug, Clone)]
pub struct GrassWaveOvertoppingLocation {
    position_x_m: f64,
    initial_damage: f64,
    failure_number: f64,
    critical_cumulative_overload: f64,
    critical_front_velocity_m_per_s: f64,
    front_velocity_cwo: f64,
    increased_load_alpha_m: f64,
    reduced_strength_alpha_s: f64,
    acceleration_alpha_a_crest: f64,
    acceleration_alpha_a_inner_slope: f64,
    fixed_number_of_waves: usize,
    factor_ctm: f64,
    representative_2p_c1: f64,
    representative_2p_c2: f64,
    representative_2p_c3: f64,
    derived: Derived<GrassWaveOvertoppingDerived>,
}

impl GrassWaveOvertoppingLocation {
    /// Create a location with closed sod defaults.
    pub fn new(position_x_m: f64, initial_damage: f64, failure_number: f64) -> Self {
        Self {
            position_x_m,
            initial_damage,
            failure_number,
            critical_cumulative_overload: physics::DEFAULT_CRITICAL_CUMULATIVE_OVERLOAD,
            critical_front_velocity_m_per_s: physics::DEFAULT_CRITICAL_FRONT_VELOCITY,
            front_velocity_cwo: physics::DEFAULT_FRONT_VELOCITY_CWO,
            increased_load_alpha_m: physics::DEFAULT_INCREASED_LOAD_ALPHA_M,
            reduced_strength_alpha_s: physics::DEFAULT_REDUCED_STRENGTH_ALPHA_S,
            acceleration_alpha_a_crest: physics::DEFAULT_ACCELERATION_ALPHA_A_CREST,
            acceleration_alpha_a_inner_slope: physics::DEFAULT_ACCELERATION_ALPHA_A_INNER_SLOPE,
            fixed_number_of_waves: physics::DEFAULT_FIXED_NUMBER_OF_WAVES,
            factor_ctm: DEFAULT_FACTOR_CTM,
            representative_2p_c1: physics::DEFAULT_REPRESENTATIVE_2P_C1,
            representative_2p_c2: physics::DEFAULT_REPRESENTATIVE_2P_C2,
            representative_2p_c3: physics::DEFAULT_REPRESENTATIVE_2P_C3,
            derived: Derived::Uninitialized,
        }
    }

    pub fn with_critical_front_velocity(mut self, velocity_m_per_s: f64) -> Self {
        self.critical_front_velocity_m_per_s = velocity_m_per_s;
        self
    }

    pub fn with_fixed_number_of_waves(mut self, waves: usize) -> Self {
        self.fixed_number_of_waves = waves;
        self
    }

    fn derive(&self, profile: &ProfileData) -> DfResult<GrassWaveOvertoppingDerived> {
        let outer_toe = profile
            .characteristic_point(CharacteristicPointKind::OuterToe)
            .ok_or(DfError::InvalidArg {
                what: "overtopping location requires an outer toe characteristic point",
            })?;
        let outer_crest = profile
            .characteristic_point(CharacteristicPointKind::OuterCrest)
            .ok_or(DfError::InvalidArg {
                what: "overtopping location requires an outer crest characteristic point",
            })?;
        let inner_crest = profile
            .characteristic_point(CharacteristicPointKind::InnerCrest)
            .ok_or(DfError::InvalidArg {
                what: "overtopping location requires an inner crest characteristic point",
            })?;

        let acceleration_alpha_a = if self.position_x_m <= inner_crest.x_m {
            self.acceleration_alpha_a_crest
        } else {
            self.acceleration_alpha_a_inner_slope
        };
        Ok(GrassWaveOvertoppingDerived {
            z_m: profile.vertical_height_at(self.position_x_m),
            outer_slope_tan: (outer_crest.z_m - outer_toe.z_m) / (outer_crest.x_m - outer_toe.x_m),
            acceleration_alpha_a,
        })
    }
}

impl RevetmentLocation for GrassWaveOvertoppingLocation {
    fn position_x_m(&self) -> f64 {
        self.position_x_m
    }

    fn initial_damage(&self) -> f64 {
        self.initial_damage
    }

    fn failure_number(&self) -> f64 {
        self.failure_number
    }

    fn validate(
        &self,
        time_steps: &[TimeStep],
        _profile: &ProfileData,
        collector: &mut EventCollector,
    ) -> bool {
        let mut issues =
            common_validation_issues(self.initial_damage, self.failure_number, time_steps);
        issues.push(validators::grass::validate_critical_cumulative_overload(
            self.critical_cumulative_overload,
        ));
        issues.push(validators::grass::validate_critical_front_velocity(
            self.critical_front_velocity_m_per_s,
        ));
        issues.push(validators::grass::validate_front_velocity_coefficient(
            self.front_velocity_cwo,
        ));
        issues.push(validators::grass::validate_alpha_factor(
            self.acceleration_alpha_a_crest,
        ));
        issues.push(validators::grass::validate_alpha_factor(
            self.acceleration_alpha_a_inner_slope,
        ));
        issues.push(validators::grass::validate_fixed_number_of_waves(
            self.fixed_number_of_waves,
        ));
        register_validation_issues(collector, &issues)
    }

    fn calculate_step(
        &mut self,
        _cumulative_damage: f64,
        time_step: &TimeStep,
        profile: &ProfileData,
    ) -> DfResult<TimeDependentOutput> {
        let config = self.clone();
        let derived = *self
            .derived
            .get_or_try_init(|| config.derive(profile))?;

        let wave_angle = relative_wave_angle(
            time_step.wave_direction_deg,
            profile.dike_orientation_deg(),
        );
        let wave_angle_impact = physics::wave_angle_impact(wave_angle);
        let xi = surf_similarity(
            derived.outer_slope_tan,
            time_step.wave_height_hm0_m,
            time_step.wave_period_tm10_s,
        );
        let representative_2p_m = physics::representative_wave_runup_2p(
            xi,
            wave_angle_impact,
            time_step.wave_height_hm0_m,
            self.representative_2p_c1,
            self.representative_2p_c2,
            self.representative_2p_c3,
        );

        let vertical_distance_m = derived.z_m - time_step.water_level_m;
        let cumulative_overload = if vertical_distance_m > 0.0 {
            physics::cumulative_overload(&physics::CumulativeOverloadInput {
                representative_2p_m,
                vertical_distance_m,
                velocity_coefficient: self.front_velocity_cwo,
                acceleration_alpha_a: derived.acceleration_alpha_a,
                increased_load_alpha_m: self.increased_load_alpha_m,
                reduced_strength_alpha_s: self.reduced_strength_alpha_s,
                critical_front_velocity_m_per_s: self.critical_front_velocity_m_per_s,
                fixed_number_of_waves: self.fixed_number_of_waves,
                average_number_of_waves: average_number_of_waves(
                    time_step.increment_time_s(),
                    time_step.wave_period_tm10_s,
                    self.factor_ctm,
                ),
            })
        } else {
            0.0
        };

        Ok(TimeDependentOutput {
            begin_time_s: time_step.begin_time_s,
            end_time_s: time_step.end_time_s,
            increment_damage: physics::increment_damage(
                cumulative_overload,
                self.critical_cumulative_overload,
            ),
            details: StepDetails::GrassWaveOvertopping {
                vertical_distance_m,
                acceleration_alpha_a: derived.acceleration_alpha_a,
                representative_wave_runup_2p_m: representative_2p_m,
                cumulative_overload_m2_per_s2: cumulative_overload,
            },
        })
    }
}
