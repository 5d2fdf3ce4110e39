use thiserror::Error;

pub type DfResult<T> = Result<T, DfError>;

#[derive(Error, Debug)]
pub enum DfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },

    #[error("Calculation cancelled")]
    Cancelled,
}
