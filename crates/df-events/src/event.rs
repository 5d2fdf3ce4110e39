//! Validation issue and event value types.

/// Severity of a validation finding or diagnostic event.
///
/// Warnings are recorded but never fail a calculation; errors abort the
/// affected location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    Error,
}

/// One validation finding produced by a pure validator function.
///
/// Validators return `None` when a value is acceptable, so batches of
/// findings are slices of `Option<ValidationIssue>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// A diagnostic event as stored in a collector and reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub severity: Severity,
    pub message: String,
}

impl Event {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl From<ValidationIssue> for Event {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            severity: issue.severity,
            message: issue.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_constructors_set_severity() {
        assert_eq!(ValidationIssue::warning("w").severity, Severity::Warning);
        assert_eq!(ValidationIssue::error("e").severity, Severity::Error);
    }

    #[test]
    fn event_from_issue_keeps_severity_and_message() {
        let event = Event::from(ValidationIssue::error("wave height out of range"));
        assert_eq!(event.severity, Severity::Error);
        assert_eq!(event.message, "wave height out of range");
    }
}
