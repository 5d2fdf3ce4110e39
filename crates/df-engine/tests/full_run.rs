//! Integration test: one storm over a dike with all five revetment types.
//!
//! Exercises:
//! - parallel per-location scheduling with a sequential time-step fold
//! - derived-input initialization against the shared profile
//! - cumulative damage and failure-time derivation on real physics output

use df_core::TimeStep;
use df_engine::{CalculationInput, CalculationState, Calculator, LocationOutcome};
use df_geometry::{CharacteristicPointKind, ProfileData, ProfilePoint};
use df_revetment::{
    AsphaltWaveImpactLocation, GrassWaveImpactLocation, GrassWaveOvertoppingLocation,
    GrassWaveRunupLocation, NaturalStoneWaveImpactLocation, RevetmentLocation,
};

fn dike_profile() -> ProfileData {
    ProfileData::new(
        0.0,
        vec![
            ProfilePoint { x_m: 0.0, z_m: 0.0 },
            ProfilePoint { x_m: 16.0, z_m: 4.0 },
            ProfilePoint { x_m: 20.0, z_m: 4.0 },
            ProfilePoint { x_m: 28.0, z_m: 0.5 },
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
            (
                CharacteristicPointKind::InnerCrest,
                ProfilePoint { x_m: 20.0, z_m: 4.0 },
            ),
            (
                CharacteristicPointKind::InnerToe,
                ProfilePoint { x_m: 28.0, z_m: 0.5 },
            ),
        ],
    )
    .unwrap()
}

fn storm() -> Vec<TimeStep> {
    vec![
        TimeStep::new(0.0, 3600.0, 1.6, 0.8, 5.0, 0.0).unwrap(),
        TimeStep::new(3600.0, 7200.0, 2.2, 1.2, 6.0, 10.0).unwrap(),
        TimeStep::new(7200.0, 10_800.0, 1.9, 1.0, 5.5, 350.0).unwrap(),
    ]
}

fn all_variants() -> Vec<Box<dyn RevetmentLocation>> {
    vec![
        Box::new(
            AsphaltWaveImpactLocation::new(8.0, 0.0, 1.0, 0.9, 0.05, 18_000.0)
                .with_sub_layer(0.15, 15_000.0),
        ),
        Box::new(GrassWaveImpactLocation::new(8.5, 0.0, 1.0)),
        Box::new(GrassWaveRunupLocation::new(12.0, 0.0, 1.0)),
        Box::new(GrassWaveOvertoppingLocation::new(18.0, 0.0, 1.0)),
        Box::new(NaturalStoneWaveImpactLocation::new(7.5, 0.0, 1.0, 1.65, 0.3)),
    ]
}

#[test]
fn storm_over_all_variants_completes() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let input = CalculationInput::new(storm(), all_variants(), dike_profile()).unwrap();
    let calculator = Calculator::spawn(input);

    while !calculator.state().is_finished() {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    assert_eq!(calculator.state(), CalculationState::FinishedSuccessfully);
    assert!((calculator.progress() - 1.0).abs() < 1e-12);

    let result = calculator.wait_for_completion();
    assert!(result.successful);
    assert!(result.events.is_empty());
    assert!(result.data.all_completed());
    assert_eq!(result.data.locations().len(), 5);

    for location in result.data.locations() {
        let output = location.output().unwrap();
        assert_eq!(output.steps().len(), 3);
        // Non-negative increments keep the cumulative series monotonic.
        let damages = output.cumulative_damages();
        for pair in damages.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((output.final_damage() - damages.last().unwrap()).abs() < 1e-12);
    }
}

#[test]
fn failure_time_reported_for_overloaded_stone() {
    // Thin stone layer under the full storm; damage passes 1.0 in the
    // first loaded step.
    let locations: Vec<Box<dyn RevetmentLocation>> = vec![Box::new(
        NaturalStoneWaveImpactLocation::new(7.5, 0.0, 1.0, 1.65, 0.15),
    )];
    let input = CalculationInput::new(storm(), locations, dike_profile()).unwrap();
    let result = Calculator::run(input);

    assert!(result.successful);
    let output = result.data.locations()[0].output().unwrap();
    assert!(output.final_damage() >= 1.0);
    let failure_s = output.time_of_failure_s().unwrap();
    assert!(failure_s > 0.0 && failure_s <= 10_800.0);
}

#[test]
fn run_order_of_locations_is_preserved_in_output() {
    let input = CalculationInput::new(storm(), all_variants(), dike_profile()).unwrap();
    let result = Calculator::run(input);
    let positions: Vec<f64> = result
        .data
        .locations()
        .iter()
        .map(|location| location.position_x_m)
        .collect();
    assert_eq!(positions, vec![8.0, 8.5, 12.0, 18.0, 7.5]);
    assert!(result
        .data
        .locations()
        .iter()
        .all(|location| matches!(location.outcome, LocationOutcome::Completed(_))));
}
