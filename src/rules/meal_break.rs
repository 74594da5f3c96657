//! Meal break violation detection.
//!
//! Pay stubs carry no evidence of breaks taken or premiums paid, so crossing
//! an hour threshold is itself reported as a violation. At the second
//! threshold both meal breaks are reported.

use crate::config::MealBreakRules;
use crate::error::EngineResult;
use crate::models::{Severity, Violation, ViolationKind, WorkRecord};

use super::LABOR_CODE_MEAL_BREAKS;

/// Flags the first meal break for `hours >= first` and, additionally, the
/// second meal break for `hours >= second`.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::models::WorkRecord;
/// use labor_rules_engine::rules::check_meal_breaks;
/// use rust_decimal::Decimal;
///
/// let record = WorkRecord {
///     regular_hours: Decimal::from(6),
///     ..WorkRecord::default()
/// };
/// let violations = check_meal_breaks(&record, &RulesConfig::california().meal_breaks).unwrap();
/// assert_eq!(violations.len(), 1);
/// ```
pub fn check_meal_breaks(
    record: &WorkRecord,
    rules: &MealBreakRules,
) -> EngineResult<Vec<Violation>> {
    let total_hours = record.total_hours()?;
    let mut violations = Vec::new();

    if total_hours >= rules.first_threshold_hours {
        violations.push(Violation {
            violation_type: ViolationKind::MealBreak,
            description: format!(
                "Employee worked {} hours but may not have received the required 30-minute meal break. California law requires meal breaks for shifts over {} hours.",
                total_hours,
                rules.first_threshold_hours.normalize()
            ),
            severity: Severity::Medium,
            confidence: 0.85,
            labor_code: LABOR_CODE_MEAL_BREAKS.to_string(),
            actual_value: None,
            expected_value: None,
            recommendation: Some(format!(
                "Provide 30-minute meal breaks for shifts over {} hours or pay meal break premium of {} hour of pay",
                rules.first_threshold_hours.normalize(),
                rules.premium_hours.normalize()
            )),
        });
    }

    if total_hours >= rules.second_threshold_hours {
        violations.push(Violation {
            violation_type: ViolationKind::SecondMealBreak,
            description: format!(
                "Employee worked {} hours but may not have received the required second meal break. California law requires a second meal break for shifts over {} hours.",
                total_hours,
                rules.second_threshold_hours.normalize()
            ),
            severity: Severity::Medium,
            confidence: 0.90,
            labor_code: LABOR_CODE_MEAL_BREAKS.to_string(),
            actual_value: None,
            expected_value: None,
            recommendation: Some(format!(
                "Provide second 30-minute meal break for shifts over {} hours or pay additional meal break premium",
                rules.second_threshold_hours.normalize()
            )),
        });
    }

    Ok(violations)
}
