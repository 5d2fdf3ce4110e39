//! Integration test: the engine folds time steps strictly in order and
//! feeds each step the running cumulative damage, not the initial damage.

use std::sync::{Arc, Mutex};

use df_core::{DfResult, TimeStep};
use df_engine::{CalculationInput, Calculator};
use df_events::EventCollector;
use df_geometry::{ProfileData, ProfilePoint};
use df_revetment::{RevetmentLocation, StepDetails, TimeDependentOutput};

/// Returns scripted increments and records every cumulative damage value
/// the engine hands it.
struct RecordingLocation {
    position_x_m: f64,
    initial_damage: f64,
    increments: Vec<f64>,
    calls: usize,
    seen_damages: Arc<Mutex<Vec<f64>>>,
}

impl RevetmentLocation for RecordingLocation {
    fn position_x_m(&self) -> f64 {
        self.position_x_m
    }

    fn initial_damage(&self) -> f64 {
        self.initial_damage
    }

    fn failure_number(&self) -> f64 {
        1.0e9
    }

    fn validate(
        &self,
        _time_steps: &[TimeStep],
        _profile: &ProfileData,
        _collector: &mut EventCollector,
    ) -> bool {
        true
    }

    fn calculate_step(
        &mut self,
        cumulative_damage: f64,
        time_step: &TimeStep,
        _profile: &ProfileData,
    ) -> DfResult<TimeDependentOutput> {
        self.seen_damages.lock().unwrap().push(cumulative_damage);
        let increment_damage = self.increments[self.calls];
        self.calls += 1;
        Ok(TimeDependentOutput {
            begin_time_s: time_step.begin_time_s,
            end_time_s: time_step.end_time_s,
            increment_damage,
            details: StepDetails::GrassWaveImpact {
                z_m: 0.0,
                loading_revetment: false,
                upper_limit_loading_m: 0.0,
                lower_limit_loading_m: 0.0,
                wave_angle_impact: 1.0,
                wave_height_impact_m: 0.0,
            },
        })
    }
}

fn profile() -> ProfileData {
    ProfileData::new(
        0.0,
        vec![
            ProfilePoint { x_m: 0.0, z_m: 0.0 },
            ProfilePoint { x_m: 16.0, z_m: 4.0 },
        ],
        vec![],
    )
    .unwrap()
}

fn steps(count: usize) -> Vec<TimeStep> {
    (0..count)
        .map(|i| {
            TimeStep::new(
                i as f64 * 3600.0,
                (i + 1) as f64 * 3600.0,
                1.0,
                1.0,
                6.0,
                0.0,
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn fold_passes_running_cumulative_damage() {
    let seen_damages = Arc::new(Mutex::new(Vec::new()));
    let locations: Vec<Box<dyn RevetmentLocation>> = vec![Box::new(RecordingLocation {
        position_x_m: 8.0,
        initial_damage: 0.25,
        increments: vec![0.5, 0.25, 0.125],
        calls: 0,
        seen_damages: Arc::clone(&seen_damages),
    })];
    let input = CalculationInput::new(steps(3), locations, profile()).unwrap();
    let result = Calculator::run(input);

    assert!(result.successful);
    // Accumulator seeded with the initial damage, then the running sum.
    assert_eq!(*seen_damages.lock().unwrap(), vec![0.25, 0.75, 1.0]);

    let output = result.data.locations()[0].output().unwrap();
    assert_eq!(output.cumulative_damages(), vec![0.75, 1.0, 1.125]);
    assert!((output.final_damage() - 1.125).abs() < 1e-12);
}

#[test]
fn step_outputs_keep_chronological_order() {
    let seen_damages = Arc::new(Mutex::new(Vec::new()));
    let locations: Vec<Box<dyn RevetmentLocation>> = vec![Box::new(RecordingLocation {
        position_x_m: 8.0,
        initial_damage: 0.0,
        increments: vec![0.1; 5],
        calls: 0,
        seen_damages,
    })];
    let input = CalculationInput::new(steps(5), locations, profile()).unwrap();
    let result = Calculator::run(input);

    let output = result.data.locations()[0].output().unwrap();
    let begins: Vec<f64> = output.steps().iter().map(|s| s.begin_time_s).collect();
    assert_eq!(begins, vec![0.0, 3600.0, 7200.0, 10_800.0, 14_400.0]);
}
