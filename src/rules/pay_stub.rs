//! Itemized wage statement completeness.
//!
//! Works on the raw field map rather than the normalized record, since a
//! defaulted zero or empty string cannot be told apart from a field that
//! was never printed.

use crate::config::PayStubRules;
use crate::models::{ExtractedField, FieldMap, Severity, Violation, ViolationKind};

use super::LABOR_CODE_WAGE_STATEMENTS;

/// Confidence assumed for a pair that omits its score.
const UNREPORTED_CONFIDENCE: f64 = 0.0;

/// Reports required fields that are missing or were extracted with low
/// confidence.
///
/// A field is missing when it is absent from the map or is a bare scalar
/// with an empty value (see [`FieldValue::is_empty`]). Every
/// `{value, confidence}` pair is present, whatever its value, and is checked
/// for low confidence instead, so the two lists are disjoint. Each non-empty
/// list yields one violation.
///
/// [`FieldValue::is_empty`]: crate::models::FieldValue::is_empty
///
/// # Example
///
/// ```
/// use labor_rules_engine::config::RulesConfig;
/// use labor_rules_engine::models::{FieldMap, ViolationKind};
/// use labor_rules_engine::rules::check_pay_stub_requirements;
///
/// let violations = check_pay_stub_requirements(&FieldMap::new(), &RulesConfig::california().pay_stub);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].violation_type, ViolationKind::PayStubRequirements);
/// ```
pub fn check_pay_stub_requirements(fields: &FieldMap, rules: &PayStubRules) -> Vec<Violation> {
    let mut missing = Vec::new();
    let mut unclear = Vec::new();

    for required in &rules.required_fields {
        match fields.get(&required.field) {
            None => missing.push(required.description.as_str()),
            Some(ExtractedField::Scalar(value)) => {
                if value.is_empty() {
                    missing.push(required.description.as_str());
                }
            }
            Some(ExtractedField::Confident { confidence, .. }) => {
                if confidence.unwrap_or(UNREPORTED_CONFIDENCE) < rules.low_confidence_threshold {
                    unclear.push(required.description.as_str());
                }
            }
        }
    }

    let mut violations = Vec::new();

    if !missing.is_empty() {
        violations.push(Violation {
            violation_type: ViolationKind::PayStubRequirements,
            description: format!(
                "Missing required information on pay stub: {}. California law requires specific itemized wage statements.",
                missing.join(", ")
            ),
            severity: Severity::Medium,
            confidence: 0.95,
            labor_code: LABOR_CODE_WAGE_STATEMENTS.to_string(),
            actual_value: None,
            expected_value: None,
            recommendation: Some("Include all required information on pay stubs".to_string()),
        });
    }

    if !unclear.is_empty() {
        violations.push(Violation {
            violation_type: ViolationKind::PayStubReadability,
            description: format!(
                "Low confidence extraction for: {}. Pay stub may be unclear or missing required information.",
                unclear.join(", ")
            ),
            severity: Severity::Low,
            confidence: 0.75,
            labor_code: LABOR_CODE_WAGE_STATEMENTS.to_string(),
            actual_value: None,
            expected_value: None,
            recommendation: Some(
                "Ensure pay stub information is clearly legible and complete".to_string(),
            ),
        });
    }

    violations
}
