//! Gross pay consistency check.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayCalculationRules;
use crate::error::EngineResult;
use crate::models::{Severity, Violation, ViolationKind, WorkRecord};

use super::{LABOR_CODE_WAGE_STATEMENTS, overflow};

const RULE: &str = "pay_calculation";

/// Compares gross pay with hours times rates.
///
/// Runs only when regular hours and the hourly rate are both positive. A
/// discrepancy larger than `tolerance` times the calculated total is
/// reported.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::models::WorkRecord;
/// use labor_rules_engine::rules::check_pay_calculation;
/// use rust_decimal::Decimal;
///
/// let record = WorkRecord {
///     gross_pay: Decimal::from(100),
///     regular_hours: Decimal::from(10),
///     hourly_rate: Decimal::from(8),
///     ..WorkRecord::default()
/// };
/// let violations =
///     check_pay_calculation(&record, &RulesConfig::california().pay_calculation).unwrap();
/// assert_eq!(violations[0].expected_value, Some(Decimal::from(80)));
/// ```
pub fn check_pay_calculation(
    record: &WorkRecord,
    rules: &PayCalculationRules,
) -> EngineResult<Vec<Violation>> {
    if record.regular_hours <= Decimal::ZERO || record.hourly_rate <= Decimal::ZERO {
        return Ok(Vec::new());
    }

    let calculated = calculated_gross(record)?;
    let tolerance = calculated
        .checked_mul(rules.tolerance)
        .ok_or_else(|| overflow(RULE, "tolerance"))?;
    let difference = record
        .gross_pay
        .checked_sub(calculated)
        .ok_or_else(|| overflow(RULE, "difference"))?
        .abs();

    if difference <= tolerance {
        return Ok(Vec::new());
    }

    let display = calculated.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);

    Ok(vec![Violation {
        violation_type: ViolationKind::PayCalculationDiscrepancy,
        description: format!(
            "Gross pay (${}) doesn't match calculated amount (${:.2}). There may be an error in pay calculations.",
            record.gross_pay, display
        ),
        severity: Severity::Medium,
        confidence: 0.85,
        labor_code: LABOR_CODE_WAGE_STATEMENTS.to_string(),
        actual_value: Some(record.gross_pay),
        expected_value: Some(calculated),
        recommendation: Some("Review and correct pay calculations to ensure accuracy".to_string()),
    }])
}

/// `regular x rate + overtime x overtime rate + double time x double-time rate`.
fn calculated_gross(record: &WorkRecord) -> EngineResult<Decimal> {
    let regular = record.regular_hours.checked_mul(record.hourly_rate);
    let overtime = record.overtime_hours.checked_mul(record.overtime_rate);
    let double_time = record.double_time_hours.checked_mul(record.double_time_rate);

    regular
        .zip(overtime)
        .and_then(|(regular, overtime)| regular.checked_add(overtime))
        .zip(double_time)
        .and_then(|(subtotal, double_time)| subtotal.checked_add(double_time))
        .ok_or_else(|| overflow(RULE, "calculated gross pay"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn check(record: &WorkRecord) -> Vec<Violation> {
        check_pay_calculation(record, &RulesConfig::california().pay_calculation).unwrap()
    }

    fn record(gross: &str, regular: &str, rate: &str) -> WorkRecord {
        WorkRecord {
            gross_pay: dec(gross),
            regular_hours: dec(regular),
            hourly_rate: dec(rate),
            ..WorkRecord::default()
        }
    }

    #[test]
    fn test_gross_pay_discrepancy() {
        let violations = check(&record("100", "10", "8"));

        assert_eq!(violations.len(), 1);
        let violation = &violations[0];
        assert_eq!(violation.violation_type, ViolationKind::PayCalculationDiscrepancy);
        assert_eq!(violation.severity, Severity::Medium);
        assert_eq!(violation.confidence, 0.85);
        assert_eq!(violation.labor_code, "CA Labor Code § 226");
        assert_eq!(violation.actual_value, Some(dec("100")));
        assert_eq!(violation.expected_value, Some(dec("80.00")));
        assert_eq!(
            violation.description,
            "Gross pay ($100) doesn't match calculated amount ($80.00). There may be an error in pay calculations."
        );
    }

    #[test]
    fn test_within_tolerance_no_violation() {
        // Calculated 80, tolerance 4.
        assert!(check(&record("84", "10", "8")).is_empty());
        assert!(check(&record("76", "10", "8")).is_empty());
    }

    #[test]
    fn test_just_outside_tolerance() {
        assert_eq!(check(&record("84.01", "10", "8")).len(), 1);
        assert_eq!(check(&record("75.99", "10", "8")).len(), 1);
    }

    #[test]
    fn test_overtime_and_double_time_included() {
        let record = WorkRecord {
            gross_pay: dec("560"),
            regular_hours: dec("8"),
            overtime_hours: dec("4"),
            double_time_hours: dec("1"),
            hourly_rate: dec("40"),
            overtime_rate: dec("60"),
            double_time_rate: dec("80"),
            ..WorkRecord::default()
        };
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_skipped_without_hours_or_rate() {
        assert!(check(&record("500", "0", "20")).is_empty());
        assert!(check(&record("500", "10", "0")).is_empty());
    }

    #[test]
    fn test_zero_gross_pay_is_a_discrepancy() {
        let violations = check(&record("0", "40", "16"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].expected_value, Some(dec("640")));
    }

    #[test]
    fn test_description_rounds_half_even() {
        // 3 x 16.335 = 49.005
        let violations = check(&record("100", "3", "16.335"));
        assert!(violations[0].description.contains("($49.00)"));
        assert_eq!(violations[0].expected_value, Some(dec("49.005")));

        // 3 x 16.345 = 49.035
        let violations = check(&record("100", "3", "16.345"));
        assert!(violations[0].description.contains("($49.04)"));
    }

    #[test]
    fn test_recommendation_text() {
        let violations = check(&record("0", "40", "16"));
        assert_eq!(
            violations[0].recommendation.as_deref(),
            Some("Review and correct pay calculations to ensure accuracy")
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let record = record("1", "2", &Decimal::MAX.to_string());
        assert!(
            check_pay_calculation(&record, &RulesConfig::california().pay_calculation).is_err()
        );
    }
}
