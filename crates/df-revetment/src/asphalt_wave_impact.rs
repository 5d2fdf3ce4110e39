//! Asphalt wave impact location.

use df_core::{DfResult, TimeStep};
use df_events::{EventCollector, register_validation_issues};
use df_geometry::ProfileData;
use df_physics::asphalt_wave_impact as physics;
use df_physics::validators;

use crate::derived::Derived;
use crate::location::{RevetmentLocation, common_validation_issues};
use crate::output::{StepDetails, TimeDependentOutput};

/// Plate properties derived once from the layer build-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AsphaltDerived {
    z_m: f64,
    computational_thickness_m: f64,
    stiffness_relation_per_m: f64,
    log10_flexural_strength: f64,
}

/// Asphalt top layer on the outer slope loaded by breaking wave impacts.
#[derive(Debug, Clone)]
pub struct AsphaltWaveImpactLocation {
    position_x_m: f64,
    initial_damage: f64,
    failure_number: f64,
    flexural_strength_mpa: f64,
    density_of_water: f64,
    fatigue_alpha: f64,
    fatigue_beta: f64,
    thickness_upper_layer_m: f64,
    elastic_modulus_upper_layer: f64,
    thickness_sub_layer_m: f64,
    elastic_modulus_sub_layer: f64,
    elastic_modulus_subsoil: f64,
    impact_number_c: f64,
    impact_factors: Vec<physics::FactorProbability>,
    width_factors: Vec<physics::FactorProbability>,
    derived: Derived<AsphaltDerived>,
}

impl AsphaltWaveImpactLocation {
    /// Create a single-layer location; a sub layer is added with
    /// `with_sub_layer`.
    pub fn new(
        position_x_m: f64,
        initial_damage: f64,
        failure_number: f64,
        flexural_strength_mpa: f64,
        thickness_upper_layer_m: f64,
        elastic_modulus_upper_layer: f64,
    ) -> Self {
        Self {
            position_x_m,
            initial_damage,
            failure_number,
            flexural_strength_mpa,
            density_of_water: physics::DEFAULT_DENSITY_OF_WATER,
            fatigue_alpha: physics::DEFAULT_FATIGUE_ALPHA,
            fatigue_beta: physics::DEFAULT_FATIGUE_BETA,
            thickness_upper_layer_m,
            elastic_modulus_upper_layer,
            thickness_sub_layer_m: 0.0,
            elastic_modulus_sub_layer: elastic_modulus_upper_layer,
            elastic_modulus_subsoil: physics::DEFAULT_ELASTIC_MODULUS_SUBSOIL,
            impact_number_c: physics::DEFAULT_IMPACT_NUMBER_C,
            impact_factors: physics::default_impact_factors(),
            width_factors: physics::default_width_factors(),
            derived: Derived::Uninitialized,
        }
    }

    pub fn with_sub_layer(mut self, thickness_m: f64, elastic_modulus: f64) -> Self {
        self.thickness_sub_layer_m = thickness_m;
        self.elastic_modulus_sub_layer = elastic_modulus;
        self
    }

    pub fn with_fatigue(mut self, alpha: f64, beta: f64) -> Self {
        self.fatigue_alpha = alpha;
        self.fatigue_beta = beta;
        self
    }

    pub fn with_factors(
        mut self,
        impact_factors: Vec<physics::FactorProbability>,
        width_factors: Vec<physics::FactorProbability>,
    ) -> Self {
        self.impact_factors = impact_factors;
        self.width_factors = width_factors;
        self
    }

    fn derive(&self, profile: &ProfileData) -> AsphaltDerived {
        let computational_thickness_m = physics::computational_thickness(
            self.thickness_upper_layer_m,
            self.thickness_sub_layer_m,
            self.elastic_modulus_upper_layer,
            self.elastic_modulus_sub_layer,
        );
        AsphaltDerived {
            z_m: profile.vertical_height_at(self.position_x_m),
            computational_thickness_m,
            stiffness_relation_per_m: physics::stiffness_relation(
                computational_thickness_m,
                self.elastic_modulus_upper_layer,
                self.elastic_modulus_subsoil,
            ),
            log10_flexural_strength: self.flexural_strength_mpa.log10(),
        }
    }
}

impl RevetmentLocation for AsphaltWaveImpactLocation {
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
        issues.push(validators::asphalt::validate_flexural_strength(
            self.flexural_strength_mpa,
        ));
        issues.push(validators::asphalt::validate_fatigue_exponents(
            self.fatigue_alpha,
            self.fatigue_beta,
        ));
        issues.push(validators::asphalt::validate_layer_thickness(
            self.thickness_upper_layer_m,
        ));
        issues.push(validators::asphalt::validate_elastic_modulus(
            self.elastic_modulus_upper_layer,
        ));
        issues.push(validators::asphalt::validate_elastic_modulus(
            self.elastic_modulus_subsoil,
        ));
        issues.push(validators::asphalt::validate_density_of_water(
            self.density_of_water,
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
        let derived = *self.derived.get_or_try_init(|| Ok(config.derive(profile)))?;

        let maximum_peak_stress_mpa =
            physics::maximum_peak_stress(time_step.wave_height_hm0_m, self.density_of_water);
        let impact_number = physics::impact_number(
            time_step.increment_time_s(),
            time_step.wave_period_tm10_s,
            self.impact_number_c,
        );
        let increment_damage = physics::increment_damage(&physics::AsphaltDamageInput {
            maximum_peak_stress_mpa,
            stiffness_relation_per_m: derived.stiffness_relation_per_m,
            log10_flexural_strength: derived.log10_flexural_strength,
            fatigue_alpha: self.fatigue_alpha,
            fatigue_beta: self.fatigue_beta,
            z_m: derived.z_m,
            water_level_m: time_step.water_level_m,
            wave_height_hm0_m: time_step.wave_height_hm0_m,
            impact_factors: self.impact_factors.clone(),
            width_factors: self.width_factors.clone(),
            impact_number,
        });

        Ok(TimeDependentOutput {
            begin_time_s: time_step.begin_time_s,
            end_time_s: time_step.end_time_s,
            increment_damage,
            details: StepDetails::AsphaltWaveImpact {
                z_m: derived.z_m,
                maximum_peak_stress_mpa,
                stiffness_relation_per_m: derived.stiffness_relation_per_m,
                computational_thickness_m: derived.computational_thickness_m,
                impact_number,
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

    fn location() -> AsphaltWaveImpactLocation {
        AsphaltWaveImpactLocation::new(8.0, 0.0, 1.0, 0.9, 0.05, 18_000.0)
            .with_sub_layer(0.15, 15_000.0)
    }

    fn storm_step() -> TimeStep {
        TimeStep::new(0.0, 3600.0, 2.0, 1.5, 6.0, 0.0).unwrap()
    }

    #[test]
    fn derived_plate_properties() {
        let mut location = location();
        location
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap();
        let derived = location.derived.get().unwrap();
        assert!((derived.z_m - 2.0).abs() < 1e-12);
        assert!((derived.computational_thickness_m - 0.19115540433215428).abs() < 1e-12);
        assert!(derived.stiffness_relation_per_m > 0.0);
        assert!((derived.log10_flexural_strength - 0.9_f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn impacts_near_the_water_line_consume_fatigue_life() {
        let mut location = location();
        // z = 2.0 m coincides with the water level, inside the impact zone.
        let output = location
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap();
        assert!(output.increment_damage > 0.0);
    }

    #[test]
    fn damage_scales_with_step_duration() {
        let mut short = location();
        let mut long = location();
        let half = TimeStep::new(0.0, 1800.0, 2.0, 1.5, 6.0, 0.0).unwrap();
        let d_half = short
            .calculate_step(0.0, &half, &profile())
            .unwrap()
            .increment_damage;
        let d_full = long
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap()
            .increment_damage;
        assert!((d_full - 2.0 * d_half).abs() < 1e-12 * d_full.max(1.0));
    }

    #[test]
    fn location_far_above_the_impacts_is_barely_loaded() {
        let mut at_waterline = location();
        let mut high = AsphaltWaveImpactLocation::new(15.0, 0.0, 1.0, 0.9, 0.05, 18_000.0)
            .with_sub_layer(0.15, 15_000.0);
        let d_low = at_waterline
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap()
            .increment_damage;
        let d_high = high
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap()
            .increment_damage;
        assert!(d_high < d_low);
    }

    #[test]
    fn validation_flags_nonpositive_strength() {
        let location = AsphaltWaveImpactLocation::new(8.0, 0.0, 1.0, 0.0, 0.05, 18_000.0);
        let mut collector = EventCollector::new();
        assert!(!location.validate(&[storm_step()], &profile(), &mut collector));
        assert!(collector.has_pending_error());
    }

    #[test]
    fn stronger_asphalt_takes_less_damage() {
        let mut weak = location();
        let mut strong = AsphaltWaveImpactLocation::new(8.0, 0.0, 1.0, 1.8, 0.05, 18_000.0)
            .with_sub_layer(0.15, 15_000.0);
        let d_weak = weak
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap()
            .increment_damage;
        let d_strong = strong
            .calculate_step(0.0, &storm_step(), &profile())
            .unwrap()
            .increment_damage;
        assert!(d_strong < d_weak);
    }
}
