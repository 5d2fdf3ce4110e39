//! Natural stone wave impact location.
//!
//! The only variant whose step calculation reads the running cumulative
//! damage: the degradation function is inverted against it to find the
//! equivalent loading duration before the step's interval is applied.

use df_core::{DfResult, TimeStep};
use df_events::{EventCollector, register_validation_issues};
use df_geometry::ProfileData;
use df_physics::hydraulic_load::{relative_wave_angle, surf_similarity};
use df_physics::natural_stone_wave_impact as physics;
use df_physics::validators;

use crate::derived::Derived;
use crate::location::{RevetmentLocation, common_validation_issues};
use crate::output::{StepDetails, TimeDependentOutput};

#[derive(Debug, Clone, Copy, PartialEq)]
struct NaturalStoneDerived {
    z_m: f64,
    resistance_m: f64,
    outer_slope_tan: f64,
}

/// Loose stone top layer on the outer slope loaded by breaking waves.
#[derive(Debug, Clone)]
pub struct NaturalStoneWaveImpactLocation {
    position_x_m: f64,
    initial_damage: f64,
    failure_number: f64,
    relative_density: f64,
    thickness_top_layer_m: f64,
    xi_crit: f64,
    plunging: physics::HydraulicLoadCoefficients,
    surging: physics::HydraulicLoadCoefficients,
    upper_limit_aul: f64,
    lower_limit_all: f64,
    wave_angle_betamax_deg: f64,
    derived: Derived<NaturalStoneDerived>,
}

impl NaturalStoneWaveImpactLocation {
    pub fn new(
        position_x_m: f64,
        initial_damage: f64,
        failure_number: f64,
        relative_density: f64,
        thickness_top_layer_m: f64,
    ) -> Self {
        Self {
            position_x_m,
            initial_damage,
            failure_number,
            relative_density,
            thickness_top_layer_m,
            xi_crit: physics::DEFAULT_XI_CRIT,
            plunging: physics::HydraulicLoadCoefficients::plunging(),
            surging: physics::HydraulicLoadCoefficients::surging(),
            upper_limit_aul: physics::DEFAULT_UPPER_LIMIT_LOADING_AUL,
            lower_limit_all: physics::DEFAULT_LOWER_LIMIT_LOADING_ALL,
            wave_angle_betamax_deg: physics::DEFAULT_WAVE_ANGLE_BETAMAX_DEG,
            derived: Derived::Uninitialized,
        }
    }

    pub fn with_hydraulic_load_coefficients(
        mut self,
        xi_crit: f64,
        plunging: physics::HydraulicLoadCoefficients,
        surging: physics::HydraulicLoadCoefficients,
    ) -> Self {
        self.xi_crit = xi_crit;
        self.plunging = plunging;
        self.surging = surging;
        self
    }

    pub fn with_loading_limits(mut self, aul: f64, all: f64) -> Self {
        self.upper_limit_aul = aul;
        self.lower_limit_all = all;
        self
    }
}

impl RevetmentLocation for NaturalStoneWaveImpactLocation {
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
        issues.push(validators::natural_stone::validate_relative_density(
            self.relative_density,
        ));
        issues.push(validators::natural_stone::validate_thickness_top_layer(
            self.thickness_top_layer_m,
        ));
        issues.push(validators::natural_stone::validate_xi_crit(self.xi_crit));
        register_validation_issues(collector, &issues)
    }

    fn calculate_step(
        &mut self,
        cumulative_damage: f64,
        time_step: &TimeStep,
        profile: &ProfileData,
    ) -> DfResult<TimeDependentOutput> {
        let position_x_m = self.position_x_m;
        let (relative_density, thickness_m) = (self.relative_density, self.thickness_top_layer_m);
        let derived = *self.derived.get_or_try_init(|| {
            Ok(NaturalStoneDerived {
                z_m: profile.vertical_height_at(position_x_m),
                resistance_m: physics::resistance(relative_density, thickness_m),
                outer_slope_tan: profile.slope_tan_at(position_x_m),
            })
        })?;

        let upper_limit_m = physics::upper_limit_loading(
            time_step.water_level_m,
            time_step.wave_height_hm0_m,
            self.upper_limit_aul,
        );
        let lower_limit_m = physics::lower_limit_loading(
            time_step.water_level_m,
            time_step.wave_height_hm0_m,
            self.lower_limit_all,
        );
        let loading = physics::loading_revetment(derived.z_m, lower_limit_m, upper_limit_m);

        let xi = surf_similarity(
            derived.outer_slope_tan,
            time_step.wave_height_hm0_m,
            time_step.wave_period_tm10_s,
        );
        let wave_angle = relative_wave_angle(
            time_step.wave_direction_deg,
            profile.dike_orientation_deg(),
        );
        let wave_angle_impact =
            physics::wave_angle_impact(wave_angle, self.wave_angle_betamax_deg);

        let (increment_damage, hydraulic_load_m, reference_degradation, reference_time_s) =
            if loading {
                let hydraulic_load_m = physics::hydraulic_load(
                    xi,
                    time_step.wave_height_hm0_m,
                    self.xi_crit,
                    self.plunging,
                    self.surging,
                );
                let reference_degradation = physics::reference_degradation(
                    cumulative_damage,
                    derived.resistance_m,
                    hydraulic_load_m,
                    wave_angle_impact,
                );
                let reference_time_s = physics::reference_time(
                    reference_degradation,
                    time_step.wave_period_tm10_s,
                );
                let increment_degradation = physics::increment_degradation(
                    reference_time_s,
                    time_step.increment_time_s(),
                    time_step.wave_period_tm10_s,
                    reference_degradation,
                );
                let increment_damage = physics::increment_damage(
                    hydraulic_load_m,
                    derived.resistance_m,
                    increment_degradation,
                    wave_angle_impact,
                );
                (
                    increment_damage,
                    hydraulic_load_m,
                    reference_degradation,
                    reference_time_s,
                )
            } else {
                (0.0, 0.0, 0.0, 0.0)
            };

        Ok(TimeDependentOutput {
            begin_time_s: time_step.begin_time_s,
            end_time_s: time_step.end_time_s,
            increment_damage,
            details: StepDetails::NaturalStoneWaveImpact {
                z_m: derived.z_m,
                resistance_m: derived.resistance_m,
                loading_revetment: loading,
                surf_similarity: xi,
                hydraulic_load_m,
                wave_angle_impact,
                reference_degradation,
                reference_time_s,
            },
        })
    }
}
