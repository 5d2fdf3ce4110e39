//! The per-location calculation contract dispatched by the engine.

use df_core::{DfResult, TimeStep};
use df_events::{EventCollector, ValidationIssue};
use df_geometry::ProfileData;
use df_physics::validators;

use crate::output::{LocationDependentOutput, TimeDependentOutput};

/// One revetment location along the cross-section.
///
/// Variants differ only in which physics functions and coefficient sets
/// they invoke; the engine treats every location through this contract.
/// `calculate_step` must be called with time steps in chronological order:
/// the cumulative-overload and degradation formulas depend on quantities
/// accumulated relative to prior steps. The only state a call mutates is
/// the location's own derived-input cell, initialized on the first call.
pub trait RevetmentLocation: Send {
    /// Horizontal position along the cross-section (m).
    fn position_x_m(&self) -> f64;

    /// Damage at the start of the calculation.
    fn initial_damage(&self) -> f64;

    /// Damage level at which the revetment is considered failed.
    fn failure_number(&self) -> f64;

    /// Check generic and type-specific invariants, registering every
    /// finding; returns false when any finding has Error severity.
    fn validate(
        &self,
        time_steps: &[TimeStep],
        profile: &ProfileData,
        collector: &mut EventCollector,
    ) -> bool;

    /// Compute one step from the caller-maintained running cumulative
    /// damage (not this location's original initial damage).
    fn calculate_step(
        &mut self,
        cumulative_damage: f64,
        time_step: &TimeStep,
        profile: &ProfileData,
    ) -> DfResult<TimeDependentOutput>;

    /// Assemble the per-location result container.
    fn assemble_output(&self, steps: Vec<TimeDependentOutput>) -> LocationDependentOutput {
        LocationDependentOutput::new(
            self.position_x_m(),
            self.initial_damage(),
            self.failure_number(),
            steps,
        )
    }
}

/// Issues every variant checks: generic revetment invariants plus the
/// plausibility of each hydraulic time step.
pub(crate) fn common_validation_issues(
    initial_damage: f64,
    failure_number: f64,
    time_steps: &[TimeStep],
) -> Vec<Option<ValidationIssue>> {
    let mut issues = vec![
        validators::revetment::validate_initial_damage(initial_damage),
        validators::revetment::validate_failure_number(failure_number, initial_damage),
    ];
    for step in time_steps {
        issues.push(validators::hydraulic_loads::validate_wave_height(
            step.wave_height_hm0_m,
        ));
        issues.push(validators::hydraulic_loads::validate_wave_period(
            step.wave_period_tm10_s,
        ));
        issues.push(validators::hydraulic_loads::validate_wave_direction(
            step.wave_direction_deg,
        ));
    }
    issues
}
