//! Calculation state machine.

/// Lifecycle of one calculator instance.
///
/// Transitions are NotCalculated -> Running -> one of the two finished
/// states. Finished states are terminal; a calculator is single-use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CalculationState {
    NotCalculated = 0,
    Running = 1,
    FinishedSuccessfully = 2,
    FinishedInError = 3,
}

impl CalculationState {
    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::NotCalculated,
            1 => Self::Running,
            2 => Self::FinishedSuccessfully,
            _ => Self::FinishedInError,
        }
    }

    /// True for both finished states.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::FinishedSuccessfully | Self::FinishedInError)
    }
}
