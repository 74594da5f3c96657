//! Violation models.
//!
//! This module contains the [`Violation`] type produced by every rule check,
//! together with its [`Severity`] and [`ViolationKind`] labels.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How serious a detected violation is.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::Severity;
///
/// assert!(Severity::High.rank() > Severity::Medium.rank());
/// assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"low\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Direct underpayment of wages.
    High,
    /// Break or record-keeping issue.
    Medium,
    /// Readability or processing issue.
    Low,
}

impl Severity {
    /// Ordinal used for sorting: high = 3, medium = 2, low = 1.
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    /// Returns the lowercase label, e.g. `"high"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of violation, serialized as its human-readable label.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::ViolationKind;
///
/// let json = serde_json::to_string(&ViolationKind::DailyOvertime).unwrap();
/// assert_eq!(json, "\"Daily Overtime Violation\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Overtime hours below hours worked over the daily threshold.
    #[serde(rename = "Daily Overtime Violation")]
    DailyOvertime,
    /// Overtime hours below hours worked over the weekly threshold.
    #[serde(rename = "Weekly Overtime Violation")]
    WeeklyOvertime,
    /// Double-time hours below hours worked over the double-time threshold.
    #[serde(rename = "Double Time Violation")]
    DoubleTime,
    /// Overtime rate below 1.5x the regular rate.
    #[serde(rename = "Overtime Rate Violation")]
    OvertimeRate,
    /// First meal break required.
    #[serde(rename = "Meal Break Violation")]
    MealBreak,
    /// Second meal break required.
    #[serde(rename = "Second Meal Break Violation")]
    SecondMealBreak,
    /// Paid rest breaks required.
    #[serde(rename = "Rest Break Violation")]
    RestBreak,
    /// Hourly rate below the applicable minimum wage.
    #[serde(rename = "Minimum Wage Violation")]
    MinimumWage,
    /// Required itemized wage statement fields are missing.
    #[serde(rename = "Pay Stub Requirements Violation")]
    PayStubRequirements,
    /// Required fields were extracted with low confidence.
    #[serde(rename = "Pay Stub Readability Issue")]
    PayStubReadability,
    /// Gross pay disagrees with hours times rates.
    #[serde(rename = "Pay Calculation Discrepancy")]
    PayCalculationDiscrepancy,
    /// A rule check failed to run to completion.
    #[serde(rename = "Processing Error")]
    ProcessingError,
}

impl ViolationKind {
    /// Returns the label used on the wire and in reports.
    pub fn label(self) -> &'static str {
        match self {
            ViolationKind::DailyOvertime => "Daily Overtime Violation",
            ViolationKind::WeeklyOvertime => "Weekly Overtime Violation",
            ViolationKind::DoubleTime => "Double Time Violation",
            ViolationKind::OvertimeRate => "Overtime Rate Violation",
            ViolationKind::MealBreak => "Meal Break Violation",
            ViolationKind::SecondMealBreak => "Second Meal Break Violation",
            ViolationKind::RestBreak => "Rest Break Violation",
            ViolationKind::MinimumWage => "Minimum Wage Violation",
            ViolationKind::PayStubRequirements => "Pay Stub Requirements Violation",
            ViolationKind::PayStubReadability => "Pay Stub Readability Issue",
            ViolationKind::PayCalculationDiscrepancy => "Pay Calculation Discrepancy",
            ViolationKind::ProcessingError => "Processing Error",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single detected labor law violation.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::{Severity, Violation, ViolationKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let violation = Violation {
///     violation_type: ViolationKind::MinimumWage,
///     description: "Hourly rate of $10/hr is below the applicable minimum wage of $16.00/hr.".to_string(),
///     severity: Severity::High,
///     confidence: 0.98,
///     labor_code: "CA Labor Code § 1182.12".to_string(),
///     actual_value: Some(Decimal::from_str("10").unwrap()),
///     expected_value: Some(Decimal::from_str("16.00").unwrap()),
///     recommendation: Some("Increase hourly rate to meet minimum wage of $16.00/hr".to_string()),
/// };
///
/// let json = serde_json::to_value(&violation).unwrap();
/// assert_eq!(json["violationType"], "Minimum Wage Violation");
/// assert_eq!(json["expectedValue"], "16.00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Short label of the violation.
    pub violation_type: ViolationKind,
    /// Self-contained explanation including the numbers that triggered it.
    pub description: String,
    /// How serious the violation is.
    pub severity: Severity,
    /// The rule's own certainty in `[0, 1]`.
    pub confidence: f64,
    /// Statute citation, e.g. `"CA Labor Code § 510"`.
    pub labor_code: String,
    /// The observed quantity, when the violation is quantifiable.
    pub actual_value: Option<Decimal>,
    /// The required quantity, when the violation is quantifiable.
    pub expected_value: Option<Decimal>,
    /// Remediation guidance.
    pub recommendation: Option<String>,
}

impl Violation {
    /// Builds the synthetic violation reported when a rule check fails.
    pub fn processing_error(message: impl fmt::Display) -> Self {
        Violation {
            violation_type: ViolationKind::ProcessingError,
            description: format!("Error during analysis: {}", message),
            severity: Severity::Low,
            confidence: 1.0,
            labor_code: "N/A".to_string(),
            actual_value: None,
            expected_value: None,
            recommendation: None,
        }
    }
}
