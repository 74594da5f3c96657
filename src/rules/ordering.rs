//! Deterministic violation ordering.

use std::cmp::Ordering;

use crate::models::Violation;

/// Sorts violations by severity, then confidence, both descending.
///
/// The sort is stable: violations that tie keep the order in which their
/// checks produced them.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::{Severity, Violation};
/// use labor_rules_engine::rules::sort_violations;
///
/// let mut violations = vec![
///     Violation::processing_error("late"),
///     Violation { severity: Severity::High, ..Violation::processing_error("first") },
/// ];
/// sort_violations(&mut violations);
/// assert_eq!(violations[0].severity, Severity::High);
/// ```
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(compare);
}

fn compare(a: &Violation, b: &Violation) -> Ordering {
    b.severity
        .rank()
        .cmp(&a.severity.rank())
        .then_with(|| b.confidence.total_cmp(&a.confidence))
}
