//! Rest break violation detection.

use rust_decimal::Decimal;

use crate::config::RestBreakRules;
use crate::error::EngineResult;
use crate::models::{Severity, Violation, ViolationKind, WorkRecord};

use super::{LABOR_CODE_WAGE_STATEMENTS, overflow};

const RULE: &str = "rest_break";
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Reports the paid rest break time owed for the hours worked.
///
/// One break of `duration_minutes` is owed per full `interval_hours`. The
/// expected value is that break time paid at the regular rate; the actual
/// value is always zero since pay stubs show no rest break pay.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::models::WorkRecord;
/// use labor_rules_engine::rules::check_rest_breaks;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = WorkRecord {
///     regular_hours: Decimal::from(8),
///     hourly_rate: Decimal::from(18),
///     ..WorkRecord::default()
/// };
/// let violations = check_rest_breaks(&record, &RulesConfig::california().rest_breaks).unwrap();
///
/// // Two 10-minute breaks = 20 minutes at $18/hr.
/// assert_eq!(violations[0].expected_value, Some(Decimal::from(6)));
/// ```
pub fn check_rest_breaks(
    record: &WorkRecord,
    rules: &RestBreakRules,
) -> EngineResult<Vec<Violation>> {
    let total_hours = record.total_hours()?;
    if total_hours < rules.interval_hours {
        return Ok(Vec::new());
    }

    let required_breaks = total_hours
        .checked_div(rules.interval_hours)
        .ok_or_else(|| overflow(RULE, "required breaks"))?
        .floor();
    if required_breaks <= Decimal::ZERO {
        return Ok(Vec::new());
    }

    let break_minutes = required_breaks
        .checked_mul(rules.duration_minutes)
        .ok_or_else(|| overflow(RULE, "break minutes"))?;
    let break_pay = break_minutes
        .checked_mul(record.hourly_rate)
        .and_then(|minute_pay| minute_pay.checked_div(MINUTES_PER_HOUR))
        .ok_or_else(|| overflow(RULE, "break pay"))?;

    Ok(vec![Violation {
        violation_type: ViolationKind::RestBreak,
        description: format!(
            "Employee worked {} hours and should receive {} rest breaks totaling {} minutes. Rest breaks must be paid.",
            total_hours, required_breaks, break_minutes
        ),
        severity: Severity::Medium,
        confidence: 0.80,
        labor_code: LABOR_CODE_WAGE_STATEMENTS.to_string(),
        actual_value: Some(Decimal::ZERO),
        expected_value: Some(break_pay),
        recommendation: Some(format!(
            "Provide paid {}-minute rest breaks for every {} hours worked",
            rules.duration_minutes.normalize(),
            rules.interval_hours.normalize()
        )),
    }])
}
