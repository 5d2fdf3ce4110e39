//! Grass wave impact location.

use df_core::{DfResult, TimeStep};
use df_events::{EventCollector, register_validation_issues};
use df_geometry::ProfileData;
use df_physics::grass_wave_impact as physics;
use df_physics::hydraulic_load::relative_wave_angle;
use df_physics::validators;

use crate::derived::Derived;
use crate::location::{RevetmentLocation, common_validation_issues};
use crate::output::{StepDetails, TimeDependentOutput};

/// Geometry-derived state, computed on the first calculation call.
///
/// The wave-height extremes follow from the time line alone but are cached
/// with the elevation so every step reads one ready value.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GrassWaveImpactDerived {
    z_m: f64,
    minimum_wave_height_m: f64,
    maximum_wave_height_m: f64,
}

/// Grass cover loaded by waves breaking on the outer slope.
#[derive(Debug, Clone)]
pub struct GrassWaveImpactLocation {
    position_x_m: f64,
    initial_damage: f64,
    failure_number: f64,
    time_line: physics::TimeLine,
    wave_angle_nwa: f64,
    upper_limit_aul: f64,
    lower_limit_all: f64,
    temin_s: f64,
    temax_s: f64,
    derived: Derived<GrassWaveImpactDerived>,
}

impl GrassWaveImpactLocation {
    /// Create a location with closed sod defaults.
    pub fn new(position_x_m: f64, initial_damage: f64, failure_number: f64) -> Self {
        Self {
            position_x_m,
            initial_damage,
            failure_number,
            time_line: physics::TimeLine::default(),
            wave_angle_nwa: physics::DEFAULT_WAVE_ANGLE_IMPACT_NWA,
            upper_limit_aul: physics::DEFAULT_UPPER_LIMIT_LOADING_AUL,
            lower_limit_all: physics::DEFAULT_LOWER_LIMIT_LOADING_ALL,
            temin_s: physics::DEFAULT_TIME_LINE_TEMIN_S,
            temax_s: physics::DEFAULT_TIME_LINE_TEMAX_S,
            derived: Derived::Uninitialized,
        }
    }

    pub fn with_time_line(mut self, time_line: physics::TimeLine) -> Self {
        self.time_line = time_line;
        self
    }

    pub fn with_loading_limits(mut self, aul: f64, all: f64) -> Self {
        self.upper_limit_aul = aul;
        self.lower_limit_all = all;
        self
    }
}

impl RevetmentLocation for GrassWaveImpactLocation {
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
        issues.push(validators::grass::validate_time_line(
            self.time_line.a,
            self.time_line.b,
            self.time_line.c,
        ));
        register_validation_issues(collector, &issues)
    }

    fn calculate_step(
        &mut self,
        _cumulative_damage: f64,
        time_step: &TimeStep,
        profile: &ProfileData,
    ) -> DfResult<TimeDependentOutput> {
        let time_line = self.time_line;
        let (temin_s, temax_s) = (self.temin_s, self.temax_s);
        let position_x_m = self.position_x_m;
        let derived = *self.derived.get_or_try_init(|| {
            Ok(GrassWaveImpactDerived {
                z_m: profile.vertical_height_at(position_x_m),
                minimum_wave_height_m: physics::minimum_wave_height(time_line, temax_s),
                maximum_wave_height_m: physics::maximum_wave_height(time_line, temin_s),
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

        let wave_angle = relative_wave_angle(
            time_step.wave_direction_deg,
            profile.dike_orientation_deg(),
        );
        let wave_angle_impact = physics::wave_angle_impact(wave_angle, self.wave_angle_nwa);
        let wave_height_impact_m = wave_angle_impact * time_step.wave_height_hm0_m;

        let increment_damage = if loading
            && wave_height_impact_m > derived.minimum_wave_height_m
        {
            // Waves above the time-line maximum fail no faster than Temin.
            let effective_height_m = wave_height_impact_m.min(derived.maximum_wave_height_m);
            let failure_time_s = physics::failure_time(self.time_line, effective_height_m);
            physics::increment_damage(time_step.increment_time_s(), failure_time_s)
        } else {
            0.0
        };

        Ok(TimeDependentOutput {
            begin_time_s: time_step.begin_time_s,
            end_time_s: time_step.end_time_s,
            increment_damage,
            details: StepDetails::GrassWaveImpact {
                z_m: derived.z_m,
                loading_revetment: loading,
                upper_limit_loading_m: upper_limit_m,
                lower_limit_loading_m: lower_limit_m,
                wave_angle_impact,
                wave_height_impact_m,
            },
        })
    }
}
