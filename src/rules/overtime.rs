//! Overtime violation detection.
//!
//! Compares the overtime and double-time hours actually paid against the
//! hours worked beyond each threshold, and the overtime rate actually paid
//! against the regular rate times the overtime multiplier.
//!
//! The daily and weekly checks run against the same total and can both fire
//! for one pay stub; they model distinct thresholds.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::OvertimeRules;
use crate::error::EngineResult;
use crate::models::{Severity, Violation, ViolationKind, WorkRecord};

use super::{LABOR_CODE_OVERTIME, overflow};

const RULE: &str = "overtime";

/// Detects overtime, double-time and overtime rate underpayment.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::models::{ViolationKind, WorkRecord};
/// use labor_rules_engine::rules::check_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = WorkRecord {
///     regular_hours: Decimal::from_str("45").unwrap(),
///     hourly_rate: Decimal::from_str("20").unwrap(),
///     ..WorkRecord::default()
/// };
///
/// let violations = check_overtime(&record, &RulesConfig::california().overtime).unwrap();
/// let weekly = violations
///     .iter()
///     .find(|v| v.violation_type == ViolationKind::WeeklyOvertime)
///     .unwrap();
/// assert_eq!(weekly.expected_value, Some(Decimal::from_str("5").unwrap()));
/// ```
pub fn check_overtime(record: &WorkRecord, rules: &OvertimeRules) -> EngineResult<Vec<Violation>> {
    let total_hours = record.total_hours()?;
    let mut violations = Vec::new();

    if total_hours > rules.daily_threshold_hours {
        let expected = (total_hours - rules.daily_threshold_hours).max(Decimal::ZERO);
        if record.overtime_hours < expected {
            violations.push(Violation {
                violation_type: ViolationKind::DailyOvertime,
                description: format!(
                    "Employee worked {} hours but was only paid for {} overtime hours. California law requires {}x regular rate for hours over {} per day.",
                    total_hours,
                    record.overtime_hours,
                    rules.overtime_multiplier.normalize(),
                    rules.daily_threshold_hours.normalize()
                ),
                severity: Severity::High,
                confidence: 0.95,
                labor_code: LABOR_CODE_OVERTIME.to_string(),
                actual_value: Some(record.overtime_hours),
                expected_value: Some(expected),
                recommendation: Some(format!(
                    "Pay overtime for all hours worked over {} hours per day at {}x regular rate",
                    rules.daily_threshold_hours.normalize(),
                    rules.overtime_multiplier.normalize()
                )),
            });
        }
    }

    if total_hours > rules.weekly_threshold_hours {
        let expected = (total_hours - rules.weekly_threshold_hours).max(Decimal::ZERO);
        if record.overtime_hours < expected {
            violations.push(Violation {
                violation_type: ViolationKind::WeeklyOvertime,
                description: format!(
                    "Employee worked {} hours in the week but was only paid for {} overtime hours. California law requires {}x regular rate for hours over {} per week.",
                    total_hours,
                    record.overtime_hours,
                    rules.overtime_multiplier.normalize(),
                    rules.weekly_threshold_hours.normalize()
                ),
                severity: Severity::High,
                confidence: 0.90,
                labor_code: LABOR_CODE_OVERTIME.to_string(),
                actual_value: Some(record.overtime_hours),
                expected_value: Some(expected),
                recommendation: Some(format!(
                    "Pay overtime for all hours worked over {} hours per week at {}x regular rate",
                    rules.weekly_threshold_hours.normalize(),
                    rules.overtime_multiplier.normalize()
                )),
            });
        }
    }

    if total_hours > rules.daily_double_time_threshold_hours {
        let expected = (total_hours - rules.daily_double_time_threshold_hours).max(Decimal::ZERO);
        if record.double_time_hours < expected {
            violations.push(Violation {
                violation_type: ViolationKind::DoubleTime,
                description: format!(
                    "Employee worked {} hours but was only paid for {} double time hours. California law requires {}x regular rate for hours over {} per day.",
                    total_hours,
                    record.double_time_hours,
                    rules.double_time_multiplier.normalize(),
                    rules.daily_double_time_threshold_hours.normalize()
                ),
                severity: Severity::High,
                confidence: 0.88,
                labor_code: LABOR_CODE_OVERTIME.to_string(),
                actual_value: Some(record.double_time_hours),
                expected_value: Some(expected),
                recommendation: Some(format!(
                    "Pay double time for all hours worked over {} hours per day at {}x regular rate",
                    rules.daily_double_time_threshold_hours.normalize(),
                    rules.double_time_multiplier.normalize()
                )),
            });
        }
    }

    let expected_rate = record
        .hourly_rate
        .checked_mul(rules.overtime_multiplier)
        .ok_or_else(|| overflow(RULE, "expected overtime rate"))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if record.overtime_rate > Decimal::ZERO && record.overtime_rate < expected_rate {
        violations.push(Violation {
            violation_type: ViolationKind::OvertimeRate,
            description: format!(
                "Overtime rate of ${}/hr is below California requirement of ${}/hr ({}x regular rate).",
                record.overtime_rate,
                expected_rate,
                rules.overtime_multiplier.normalize()
            ),
            severity: Severity::High,
            confidence: 0.95,
            labor_code: LABOR_CODE_OVERTIME.to_string(),
            actual_value: Some(record.overtime_rate),
            expected_value: Some(expected_rate),
            recommendation: Some(format!(
                "Pay proper overtime rate of {}x regular hourly rate",
                rules.overtime_multiplier.normalize()
            )),
        });
    }

    Ok(violations)
}
