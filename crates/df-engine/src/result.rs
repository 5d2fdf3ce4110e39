//! Run results: per-location outcomes and the event-carrying wrapper.

use df_events::Event;
use df_revetment::LocationDependentOutput;

/// Payload of an operation together with its success flag and the events
/// collected while producing it.
///
/// `successful == false` never discards data: every location that completed
/// keeps its output, and the events explain what went wrong elsewhere.
#[derive(Debug)]
pub struct DataResult<T> {
    pub data: T,
    pub successful: bool,
    pub events: Vec<Event>,
}

/// How one location's calculation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Completed(LocationDependentOutput),
    /// Validation rejected the location, its fold returned an error, or its
    /// fold panicked. The accompanying events carry the reason.
    Failed,
}

/// Outcome of one location, tagged with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationResult {
    pub position_x_m: f64,
    pub outcome: LocationOutcome,
}

impl LocationResult {
    /// The completed output, if this location finished its fold.
    pub fn output(&self) -> Option<&LocationDependentOutput> {
        match &self.outcome {
            LocationOutcome::Completed(output) => Some(output),
            LocationOutcome::Failed => None,
        }
    }
}

/// Results of all locations, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationOutput {
    locations: Vec<LocationResult>,
}

impl CalculationOutput {
    pub(crate) fn new(locations: Vec<LocationResult>) -> Self {
        Self { locations }
    }

    pub fn locations(&self) -> &[LocationResult] {
        &self.locations
    }

    /// True when every location completed its fold.
    pub fn all_completed(&self) -> bool {
        self.locations
            .iter()
            .all(|result| matches!(result.outcome, LocationOutcome::Completed(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_location_has_no_output() {
        let result = LocationResult {
            position_x_m: 8.0,
            outcome: LocationOutcome::Failed,
        };
        assert!(result.output().is_none());
    }

    #[test]
    fn all_completed_requires_every_location() {
        let completed = LocationResult {
            position_x_m: 8.0,
            outcome: LocationOutcome::Completed(LocationDependentOutput::new(
                8.0,
                0.0,
                1.0,
                vec![],
            )),
        };
        let failed = LocationResult {
            position_x_m: 9.0,
            outcome: LocationOutcome::Failed,
        };
        assert!(CalculationOutput::new(vec![completed.clone()]).all_completed());
        assert!(!CalculationOutput::new(vec![completed, failed]).all_completed());
    }
}
