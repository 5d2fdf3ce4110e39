//! Grass wave run-up location.

use df_core::{DfResult, TimeStep};
use df_events::{EventCollector, register_validation_issues};
use df_geometry::ProfileData;
use df_physics::grass_cumulative_overload as physics;
use df_physics::hydraulic_load::{
    DEFAULT_FACTOR_CTM, average_number_of_waves, relative_wave_angle, surf_similarity,
};
use df_physics::validators;

use crate::derived::Derived;
use crate::location::{RevetmentLocation, common_validation_issues};
use crate::output::{StepDetails, TimeDependentOutput};

#[derive(Debug, Clone, Copy, PartialEq)]
struct GrassWaveRunupDerived {
    z_m: f64,
    outer_slope_tan: f64,
}

/// Grass cover on the outer slope loaded by wave run-up.
#[derive(Debug, Clone)]
pub struct GrassWaveRunupLocation {
    position_x_m: f64,
    initial_damage: f64,
    failure_number: f64,
    critical_cumulative_overload: f64,
    critical_front_velocity_m_per_s: f64,
    front_velocity_cu: f64,
    increased_load_alpha_m: f64,
    reduced_strength_alpha_s: f64,
    fixed_number_of_waves: usize,
    factor_ctm: f64,
    representative_2p_c1: f64,
    representative_2p_c2: f64,
    representative_2p_c3: f64,
    derived: Derived<GrassWaveRunupDerived>,
}

impl GrassWaveRunupLocation {
    /// Create a location with closed sod defaults.
    pub fn new(position_x_m: f64, initial_damage: f64, failure_number: f64) -> Self {
        Self {
            position_x_m,
            initial_damage,
            failure_number,
            critical_cumulative_overload: physics::DEFAULT_CRITICAL_CUMULATIVE_OVERLOAD,
            critical_front_velocity_m_per_s: physics::DEFAULT_CRITICAL_FRONT_VELOCITY,
            front_velocity_cu: physics::DEFAULT_FRONT_VELOCITY_CU,
            increased_load_alpha_m: physics::DEFAULT_INCREASED_LOAD_ALPHA_M,
            reduced_strength_alpha_s: physics::DEFAULT_REDUCED_STRENGTH_ALPHA_S,
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

    pub fn with_critical_cumulative_overload(mut self, overload: f64) -> Self {
        self.critical_cumulative_overload = overload;
        self
    }

    pub fn with_fixed_number_of_waves(mut self, waves: usize) -> Self {
        self.fixed_number_of_waves = waves;
        self
    }
}

impl RevetmentLocation for GrassWaveRunupLocation {
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
            self.front_velocity_cu,
        ));
        issues.push(validators::grass::validate_alpha_factor(
            self.increased_load_alpha_m,
        ));
        issues.push(validators::grass::validate_alpha_factor(
            self.reduced_strength_alpha_s,
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
        let position_x_m = self.position_x_m;
        let derived = *self.derived.get_or_try_init(|| {
            Ok(GrassWaveRunupDerived {
                z_m: profile.vertical_height_at(position_x_m),
                outer_slope_tan: profile.slope_tan_at(position_x_m),
            })
        })?;

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

        // Run-up only loads the cover above the water line.
        let vertical_distance_m = derived.z_m - time_step.water_level_m;
        let cumulative_overload = if vertical_distance_m > 0.0 {
            physics::cumulative_overload(&physics::CumulativeOverloadInput {
                representative_2p_m,
                vertical_distance_m,
                velocity_coefficient: self.front_velocity_cu,
                acceleration_alpha_a: 1.0,
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
            details: StepDetails::GrassWaveRunup {
                vertical_distance_m,
                representative_wave_runup_2p_m: representative_2p_m,
                wave_angle_impact,
                cumulative_overload_m2_per_s2: cumulative_overload,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_geometry::{CharacteristicPointKind, ProfilePoint};

    fn profile() -> ProfileData {
        ProfileData::new(
            0.0,
            vec![
                ProfilePoint { x_m: 0.0, z_m: 0.0 },
                ProfilePoint { x_m: 16.0, z_m: 4.0 },
            ],
            vec![
                (
                    CharacteristicPointKind::OuterToe,
                    ProfilePoint { x_m: 0.0, z_m: 0.0 },
                ),
                (
                    CharacteristicPointKind::OuterCrest,
                    ProfilePoint { x_m: 16.0, z_m: 4.0 },
                ),
            ],
        )
        .unwrap()
    }

    fn storm_step() -> TimeStep {
        // Severe loading: high water, large waves, weak sod in tests below.
        TimeStep::new(0.0, 3600.0, 1.8, 1.5, 6.0, 0.0).unwrap()
    }

    #[test]
    fn derived_input_holds_elevation_and_slope() {
        let mut location = GrassWaveRunupLocation::new(8.0, 0.0, 1.0);
        location
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap();
        let derived = location.derived.get().unwrap();
        assert!((derived.z_m - 2.0).abs() < 1e-12);
        assert!((derived.outer_slope_tan - 0.25).abs() < 1e-12);
    }

    #[test]
    fn weak_sod_accumulates_overload() {
        let mut location = GrassWaveRunupLocation::new(8.0, 0.0, 1.0)
            .with_critical_front_velocity(1.0)
            .with_fixed_number_of_waves(500);
        let output = location
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap();
        assert!(output.increment_damage > 0.0);
    }

    #[test]
    fn submerged_location_takes_no_runup_damage() {
        let mut location = GrassWaveRunupLocation::new(4.0, 0.0, 1.0)
            .with_critical_front_velocity(1.0);
        // z = 1.0 m, water level 1.8 m.
        let output = location
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap();
        assert_eq!(output.increment_damage, 0.0);
    }

    #[test]
    fn strong_sod_survives_mild_step() {
        let mut location = GrassWaveRunupLocation::new(14.0, 0.0, 1.0);
        // z = 3.5 m, default critical front velocity 6.6 m/s; even the
        // largest Rayleigh wave stays below the critical velocity.
        let mild = TimeStep::new(0.0, 3600.0, 1.8, 0.5, 6.0, 0.0).unwrap();
        let output = location.calculate_step(0.0, &mild, &profile()).unwrap();
        assert_eq!(output.increment_damage, 0.0);
    }

    #[test]
    fn validation_flags_zero_wave_population() {
        let location = GrassWaveRunupLocation::new(8.0, 0.0, 1.0).with_fixed_number_of_waves(0);
        let mut collector = EventCollector::new();
        assert!(!location.validate(&[storm_step()], &profile(), &mut collector));
    }
}
