//! Configuration types for the labor rules engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the built-in
//! California constants they default to.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the jurisdiction whose law is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct JurisdictionMetadata {
    /// State code (e.g., "CA").
    pub code: String,
    /// Human-readable name of the jurisdiction.
    pub name: String,
}

/// Overtime and double-time thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OvertimeRules {
    /// Hours per day after which overtime is owed.
    pub daily_threshold_hours: Decimal,
    /// Hours per week after which overtime is owed.
    pub weekly_threshold_hours: Decimal,
    /// Hours per day after which double time is owed.
    pub daily_double_time_threshold_hours: Decimal,
    /// Overtime rate as a multiple of the regular rate.
    pub overtime_multiplier: Decimal,
    /// Double-time rate as a multiple of the regular rate.
    pub double_time_multiplier: Decimal,
}

/// Meal break thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MealBreakRules {
    /// Hours worked at which the first meal break is required.
    pub first_threshold_hours: Decimal,
    /// Hours worked at which the second meal break is required.
    pub second_threshold_hours: Decimal,
    /// Length of a meal break in hours.
    pub duration_hours: Decimal,
    /// Hours of pay owed as premium for a missed meal break.
    pub premium_hours: Decimal,
}

/// Rest break requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RestBreakRules {
    /// Hours worked per required rest break.
    pub interval_hours: Decimal,
    /// Length of a rest break in minutes.
    pub duration_minutes: Decimal,
}

/// A field an itemized wage statement must show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RequiredField {
    /// Field name in the extracted field map (e.g., "grossPay").
    pub field: String,
    /// Description used in violation text (e.g., "Gross wages earned").
    pub description: String,
}

/// Pay stub completeness requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PayStubRules {
    /// Extraction confidence below which a present field is flagged.
    pub low_confidence_threshold: f64,
    /// Required fields in reporting order.
    pub required_fields: Vec<RequiredField>,
}

/// Gross pay consistency tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PayCalculationRules {
    /// Allowed discrepancy as a fraction of the calculated total.
    pub tolerance: Decimal,
}

/// Contents of `rules.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesFile {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// Overtime thresholds.
    pub overtime: OvertimeRules,
    /// Meal break thresholds.
    pub meal_breaks: MealBreakRules,
    /// Rest break requirements.
    pub rest_breaks: RestBreakRules,
    /// Pay stub completeness requirements.
    pub pay_stub: PayStubRules,
    /// Pay calculation tolerance.
    pub pay_calculation: PayCalculationRules,
}

/// A local jurisdiction with its own minimum wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LocalMinimumWage {
    /// Upper-case, underscore-separated code matched against the city (e.g., "SAN_FRANCISCO").
    pub code: String,
    /// Human-readable name (e.g., "San Francisco").
    pub name: String,
    /// Hourly minimum wage.
    pub rate: Decimal,
}

/// Contents of `minimum_wage.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MinimumWageTable {
    /// Date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Statewide hourly minimum wage.
    pub state_rate: Decimal,
    /// Local rates, searched in order; the first match wins.
    pub local_rates: Vec<LocalMinimumWage>,
}

/// The complete rule configuration.
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = RulesConfig::california();
/// assert_eq!(config.overtime.daily_threshold_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(config.minimum_wage.state_rate, Decimal::from_str("16.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RulesConfig {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// Overtime thresholds.
    pub overtime: OvertimeRules,
    /// Meal break thresholds.
    pub meal_breaks: MealBreakRules,
    /// Rest break requirements.
    pub rest_breaks: RestBreakRules,
    /// Pay stub completeness requirements.
    pub pay_stub: PayStubRules,
    /// Pay calculation tolerance.
    pub pay_calculation: PayCalculationRules,
    /// Minimum wage table.
    pub minimum_wage: MinimumWageTable,
}

const fn decimal(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

impl RulesConfig {
    /// Combines the two configuration files.
    pub fn new(rules: RulesFile, minimum_wage: MinimumWageTable) -> Self {
        Self {
            jurisdiction: rules.jurisdiction,
            overtime: rules.overtime,
            meal_breaks: rules.meal_breaks,
            rest_breaks: rules.rest_breaks,
            pay_stub: rules.pay_stub,
            pay_calculation: rules.pay_calculation,
            minimum_wage,
        }
    }

    /// California wage-and-hour constants (2024 minimum wage table).
    pub fn california() -> Self {
        let required = |field: &str, description: &str| RequiredField {
            field: field.to_string(),
            description: description.to_string(),
        };
        let local = |code: &str, name: &str, rate: Decimal| LocalMinimumWage {
            code: code.to_string(),
            name: name.to_string(),
            rate,
        };

        Self {
            jurisdiction: JurisdictionMetadata {
                code: "CA".to_string(),
                name: "California".to_string(),
            },
            overtime: OvertimeRules {
                daily_threshold_hours: decimal(80, 1),
                weekly_threshold_hours: decimal(400, 1),
                daily_double_time_threshold_hours: decimal(120, 1),
                overtime_multiplier: decimal(15, 1),
                double_time_multiplier: decimal(20, 1),
            },
            meal_breaks: MealBreakRules {
                first_threshold_hours: decimal(50, 1),
                second_threshold_hours: decimal(100, 1),
                duration_hours: decimal(5, 1),
                premium_hours: decimal(10, 1),
            },
            rest_breaks: RestBreakRules {
                interval_hours: decimal(40, 1),
                duration_minutes: decimal(10, 0),
            },
            pay_stub: PayStubRules {
                low_confidence_threshold: 0.70,
                required_fields: vec![
                    required("employeeName", "Employee name"),
                    required("employerName", "Employer name"),
                    required("payPeriod", "Pay period dates"),
                    required("grossPay", "Gross wages earned"),
                    required("netPay", "Net wages earned"),
                    required("regularHours", "Hours worked"),
                    required("hourlyRate", "Hourly rate of pay"),
                ],
            },
            pay_calculation: PayCalculationRules {
                tolerance: decimal(5, 2),
            },
            minimum_wage: MinimumWageTable {
                effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
                state_rate: decimal(1600, 2),
                local_rates: vec![
                    local("LOS_ANGELES", "Los Angeles", decimal(1678, 2)),
                    local("SAN_FRANCISCO", "San Francisco", decimal(1807, 2)),
                    local("SAN_DIEGO", "San Diego", decimal(1630, 2)),
                    local("SANTA_CLARA", "Santa Clara", decimal(1720, 2)),
                    local("OAKLAND", "Oakland", decimal(1694, 2)),
                ],
            },
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::california()
    }
}
