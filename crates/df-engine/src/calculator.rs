//! Parallel calculation driver.
//!
//! Runs every location of a `CalculationInput` on the rayon pool while the
//! owning thread keeps the calculation state queryable. Locations are
//! mutually independent; within one location the time steps are folded
//! strictly in chronological order because several damage formulas depend
//! on the damage accumulated in earlier steps.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::thread::JoinHandle;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use df_core::{DfError, DfResult, TimeStep};
use df_events::{Event, EventCollector, Severity};
use df_geometry::ProfileData;
use df_revetment::{LocationDependentOutput, RevetmentLocation};

use crate::input::CalculationInput;
use crate::result::{CalculationOutput, DataResult, LocationOutcome, LocationResult};
use crate::state::CalculationState;

struct Shared {
    state: AtomicU8,
    cancelled: AtomicBool,
    steps_done: AtomicUsize,
    steps_total: usize,
}

impl Shared {
    fn set_state(&self, state: CalculationState) {
        self.state.store(state.as_u8(), Ordering::Release);
    }
}

/// Runs one `CalculationInput` to completion on a background thread.
///
/// Single-use: `spawn` starts the run immediately and `wait_for_completion`
/// consumes the calculator. `state`, `progress` and `cancel` may be called
/// from any thread while the run is in flight.
pub struct Calculator {
    shared: Arc<Shared>,
    handle: JoinHandle<DataResult<CalculationOutput>>,
}

impl Calculator {
    /// Start calculating in the background.
    pub fn spawn(input: CalculationInput) -> Self {
        let shared = Arc::new(Shared {
            state: AtomicU8::new(CalculationState::Running.as_u8()),
            cancelled: AtomicBool::new(false),
            steps_done: AtomicUsize::new(0),
            steps_total: input.time_steps().len() * input.locations().len(),
        });
        let worker_shared = Arc::clone(&shared);
        let handle = std::thread::spawn(move || run_input(input, &worker_shared));
        Self { shared, handle }
    }

    /// Run to completion on the calling thread's schedule.
    pub fn run(input: CalculationInput) -> DataResult<CalculationOutput> {
        Self::spawn(input).wait_for_completion()
    }

    pub fn state(&self) -> CalculationState {
        CalculationState::from_u8(self.shared.state.load(Ordering::Acquire))
    }

    /// Fraction of (location, time step) pairs processed so far, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.shared.steps_total == 0 {
            return 1.0;
        }
        self.shared.steps_done.load(Ordering::Relaxed) as f64 / self.shared.steps_total as f64
    }

    /// Request cancellation; every location stops before its next time step.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::Release);
    }

    /// Block until the run finishes and return its result.
    pub fn wait_for_completion(self) -> DataResult<CalculationOutput> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => {
                // The run thread itself panicked outside any location fold.
                self.shared.set_state(CalculationState::FinishedInError);
                DataResult {
                    data: CalculationOutput::default(),
                    successful: false,
                    events: vec![Event::new(Severity::Error, "calculation thread panicked")],
                }
            }
        }
    }
}

struct LocationRun {
    position_x_m: f64,
    outcome: LocationOutcome,
    events: Vec<Event>,
}

fn run_input(input: CalculationInput, shared: &Shared) -> DataResult<CalculationOutput> {
    let (time_steps, mut locations, profile) = input.into_parts();
    info!(
        locations = locations.len(),
        time_steps = time_steps.len(),
        "calculation started"
    );

    let runs: Vec<LocationRun> = locations
        .par_iter_mut()
        .map(|location| run_location(location.as_mut(), &time_steps, &profile, shared))
        .collect();

    // Workers have joined; merge their collectors in location input order.
    let mut events = Vec::new();
    let mut results = Vec::with_capacity(runs.len());
    let mut successful = true;
    for run in runs {
        if matches!(run.outcome, LocationOutcome::Failed) {
            warn!(position_x_m = run.position_x_m, "location failed");
            successful = false;
        }
        events.extend(run.events);
        results.push(LocationResult {
            position_x_m: run.position_x_m,
            outcome: run.outcome,
        });
    }
    if shared.cancelled.load(Ordering::Acquire) {
        events.push(Event::new(Severity::Error, "calculation cancelled"));
        successful = false;
    }

    shared.set_state(if successful {
        CalculationState::FinishedSuccessfully
    } else {
        CalculationState::FinishedInError
    });
    info!(successful, events = events.len(), "calculation finished");
    DataResult {
        data: CalculationOutput::new(results),
        successful,
        events,
    }
}

fn run_location(
    location: &mut dyn RevetmentLocation,
    time_steps: &[TimeStep],
    profile: &ProfileData,
    shared: &Shared,
) -> LocationRun {
    let position_x_m = location.position_x_m();
    let mut collector = EventCollector::new();

    // Validation runs under the same unwind guard as the fold; a panicking
    // location impl must not take its siblings down.
    let caught = catch_unwind(AssertUnwindSafe(|| {
        if !location.validate(time_steps, profile, &mut collector) {
            return Ok(None);
        }
        fold_time_steps(location, time_steps, profile, shared).map(Some)
    }));
    let outcome = match caught {
        Ok(Ok(Some(output))) => {
            debug!(position_x_m, "location completed");
            LocationOutcome::Completed(output)
        }
        Ok(Ok(None)) => LocationOutcome::Failed,
        Ok(Err(error)) => {
            collector.register(Event::new(
                Severity::Error,
                format!("calculation at x = {position_x_m} m aborted: {error}"),
            ));
            LocationOutcome::Failed
        }
        Err(_) => {
            collector.register(Event::new(
                Severity::Error,
                format!("calculation at x = {position_x_m} m panicked"),
            ));
            LocationOutcome::Failed
        }
    };
    LocationRun {
        position_x_m,
        outcome,
        events: collector.flush(),
    }
}

/// Sequential left-fold over the time steps of one location. The running
/// cumulative damage is maintained here, not in the location.
fn fold_time_steps(
    location: &mut dyn RevetmentLocation,
    time_steps: &[TimeStep],
    profile: &ProfileData,
    shared: &Shared,
) -> DfResult<LocationDependentOutput> {
    let mut cumulative_damage = location.initial_damage();
    let mut steps = Vec::with_capacity(time_steps.len());
    for time_step in time_steps {
        if shared.cancelled.load(Ordering::Acquire) {
            return Err(DfError::Cancelled);
        }
        let output = location.calculate_step(cumulative_damage, time_step, profile)?;
        cumulative_damage += output.increment_damage;
        steps.push(output);
        shared.steps_done.fetch_add(1, Ordering::Relaxed);
    }
    Ok(location.assemble_output(steps))
}
