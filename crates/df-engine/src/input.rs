//! Validated calculation input aggregate.

use df_core::{DfError, DfResult, TimeStep};
use df_geometry::ProfileData;
use df_revetment::RevetmentLocation;

/// Everything one calculation run needs, validated on construction.
///
/// The time steps form a contiguous chronological sequence: each step
/// begins exactly where the previous one ends. The aggregate itself is
/// never mutated after construction; only the locations' internal derived
/// caches change during a run.
pub struct CalculationInput {
    time_steps: Vec<TimeStep>,
    locations: Vec<Box<dyn RevetmentLocation>>,
    profile: ProfileData,
}

impl CalculationInput {
    pub fn new(
        time_steps: Vec<TimeStep>,
        locations: Vec<Box<dyn RevetmentLocation>>,
        profile: ProfileData,
    ) -> DfResult<Self> {
        if time_steps.is_empty() {
            return Err(DfError::InvalidArg {
                what: "at least one time step is required",
            });
        }
        if locations.is_empty() {
            return Err(DfError::InvalidArg {
                what: "at least one location is required",
            });
        }
        // Each step ends strictly after it begins, so contiguity alone
        // makes the sequence strictly increasing.
        for pair in time_steps.windows(2) {
            if pair[1].begin_time_s != pair[0].end_time_s {
                return Err(DfError::InvalidArg {
                    what: "time steps must be contiguous",
                });
            }
        }
        Ok(Self {
            time_steps,
            locations,
            profile,
        })
    }

    pub fn time_steps(&self) -> &[TimeStep] {
        &self.time_steps
    }

    pub fn locations(&self) -> &[Box<dyn RevetmentLocation>] {
        &self.locations
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    pub(crate) fn into_parts(
        self,
    ) -> (Vec<TimeStep>, Vec<Box<dyn RevetmentLocation>>, ProfileData) {
        (self.time_steps, self.locations, self.profile)
    }
}
