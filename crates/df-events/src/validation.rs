//! Batch registration of validation issues.

use crate::collector::EventCollector;
use crate::event::{Event, Severity, ValidationIssue};

/// Register a batch of validator results and report overall pass/fail.
///
/// Every `Some` issue becomes an event of matching severity, registered in
/// input order; `None` entries (validator found nothing) are skipped.
/// Returns `false` iff any issue has Error severity. Warnings never fail
/// validation.
pub fn register_validation_issues(
    collector: &mut EventCollector,
    issues: &[Option<ValidationIssue>],
) -> bool {
    let mut valid = true;
    for issue in issues.iter().flatten() {
        if issue.severity == Severity::Error {
            valid = false;
        }
        collector.register(Event::from(issue.clone()));
    }
    valid
}
