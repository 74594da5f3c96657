//! Catalog of the violations the engine can report.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::RulesConfig;
use crate::models::{Severity, ViolationKind};

use super::{
    LABOR_CODE_MEAL_BREAKS, LABOR_CODE_MINIMUM_WAGE, LABOR_CODE_OVERTIME,
    LABOR_CODE_WAGE_STATEMENTS,
};

/// Description of one supported violation kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDescriptor {
    /// Violation kind, serialized as its label.
    pub violation_type: ViolationKind,
    /// What triggers the violation, with the configured thresholds.
    pub description: String,
    /// Statute citation.
    pub labor_code: &'static str,
    /// Severity assigned when the violation fires.
    pub severity: Severity,
}

/// Lists every rule-produced violation kind in evaluation order.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::rules::rule_catalog;
///
/// let catalog = rule_catalog(&RulesConfig::california());
/// assert_eq!(catalog.len(), 11);
/// assert_eq!(catalog[0].labor_code, "CA Labor Code § 510");
/// ```
pub fn rule_catalog(config: &RulesConfig) -> Vec<RuleDescriptor> {
    let overtime = &config.overtime;
    let meal = &config.meal_breaks;
    let rest = &config.rest_breaks;
    let entry = |violation_type, description: String, labor_code, severity| RuleDescriptor {
        violation_type,
        description,
        labor_code,
        severity,
    };

    vec![
        entry(
            ViolationKind::DailyOvertime,
            format!(
                "Overtime hours below hours worked over {} in a day",
                overtime.daily_threshold_hours.normalize()
            ),
            LABOR_CODE_OVERTIME,
            Severity::High,
        ),
        entry(
            ViolationKind::WeeklyOvertime,
            format!(
                "Overtime hours below hours worked over {} in a week",
                overtime.weekly_threshold_hours.normalize()
            ),
            LABOR_CODE_OVERTIME,
            Severity::High,
        ),
        entry(
            ViolationKind::DoubleTime,
            format!(
                "Double-time hours below hours worked over {} in a day",
                overtime.daily_double_time_threshold_hours.normalize()
            ),
            LABOR_CODE_OVERTIME,
            Severity::High,
        ),
        entry(
            ViolationKind::OvertimeRate,
            format!(
                "Overtime rate below {}x the regular rate",
                overtime.overtime_multiplier.normalize()
            ),
            LABOR_CODE_OVERTIME,
            Severity::High,
        ),
        entry(
            ViolationKind::MealBreak,
            format!(
                "Meal break required after {} hours worked",
                meal.first_threshold_hours.normalize()
            ),
            LABOR_CODE_MEAL_BREAKS,
            Severity::Medium,
        ),
        entry(
            ViolationKind::SecondMealBreak,
            format!(
                "Second meal break required after {} hours worked",
                meal.second_threshold_hours.normalize()
            ),
            LABOR_CODE_MEAL_BREAKS,
            Severity::Medium,
        ),
        entry(
            ViolationKind::RestBreak,
            format!(
                "Paid {}-minute rest break required per {} hours worked",
                rest.duration_minutes.normalize(),
                rest.interval_hours.normalize()
            ),
            LABOR_CODE_WAGE_STATEMENTS,
            Severity::Medium,
        ),
        entry(
            ViolationKind::MinimumWage,
            format!(
                "Hourly rate below the state ({}) or local minimum wage",
                config.minimum_wage.state_rate
            ),
            LABOR_CODE_MINIMUM_WAGE,
            Severity::High,
        ),
        entry(
            ViolationKind::PayStubRequirements,
            "Required itemized wage statement fields missing".to_string(),
            LABOR_CODE_WAGE_STATEMENTS,
            Severity::Medium,
        ),
        entry(
            ViolationKind::PayStubReadability,
            format!(
                "Required fields extracted with confidence below {}",
                config.pay_stub.low_confidence_threshold
            ),
            LABOR_CODE_WAGE_STATEMENTS,
            Severity::Low,
        ),
        entry(
            ViolationKind::PayCalculationDiscrepancy,
            format!(
                "Gross pay differs from hours times rates by more than {}%",
                (config.pay_calculation.tolerance * Decimal::ONE_HUNDRED).normalize()
            ),
            LABOR_CODE_WAGE_STATEMENTS,
            Severity::Medium,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_rule_kind() {
        let catalog = rule_catalog(&RulesConfig::california());
        assert!(
            catalog
                .iter()
                .all(|rule| rule.violation_type != ViolationKind::ProcessingError)
        );
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn test_catalog_reflects_configured_thresholds() {
        let catalog = rule_catalog(&RulesConfig::california());
        assert_eq!(
            catalog[0].description,
            "Overtime hours below hours worked over 8 in a day"
        );
        assert_eq!(
            catalog[6].description,
            "Paid 10-minute rest break required per 4 hours worked"
        );
        assert_eq!(
            catalog[10].description,
            "Gross pay differs from hours times rates by more than 5%"
        );
    }

    #[test]
    fn test_catalog_serializes_labels() {
        let catalog = rule_catalog(&RulesConfig::california());
        let json = serde_json::to_value(&catalog[7]).unwrap();
        assert_eq!(json["violationType"], "Minimum Wage Violation");
        assert_eq!(json["laborCode"], "CA Labor Code § 1182.12");
        assert_eq!(json["severity"], "high");
    }
}
