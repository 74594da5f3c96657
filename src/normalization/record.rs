//! Work record normalization.
//!
//! Turns the loosely typed [`FieldMap`] from the extractor into a
//! [`WorkRecord`]. Every field falls back to its default on bad input, so
//! this is a total function.

use rust_decimal::Decimal;

use crate::models::{ExtractedField, FieldMap, FieldValue, WorkRecord};

use super::fields;
use super::numeric::parse_decimal;
use super::pay_period::parse_pay_period;

/// Converts an extracted field into a string, `""` when absent or blank.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::ExtractedField;
/// use labor_rules_engine::normalization::parse_text;
///
/// let field = ExtractedField::text_with_confidence("John Doe", 0.95);
/// assert_eq!(parse_text(Some(&field)), "John Doe");
/// assert_eq!(parse_text(None), "");
/// ```
pub fn parse_text(field: Option<&ExtractedField>) -> String {
    match field.map(ExtractedField::value) {
        Some(FieldValue::Text(text)) => text.trim().to_string(),
        Some(FieldValue::Number(number)) => number.to_string(),
        Some(FieldValue::Bool(flag)) => flag.to_string(),
        Some(FieldValue::Null) | Some(FieldValue::Other(_)) | None => String::new(),
    }
}

/// Builds a [`WorkRecord`] from extracted fields.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::{ExtractedField, FieldMap};
/// use labor_rules_engine::normalization::normalize_fields;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut fields = FieldMap::new();
/// fields.insert("regularHours".to_string(), ExtractedField::text("40"));
/// fields.insert("hourlyRate".to_string(), ExtractedField::text_with_confidence("$16.00", 0.98));
/// fields.insert("payPeriod".to_string(), ExtractedField::text("01/01/2024 - 01/15/2024"));
///
/// let record = normalize_fields(&fields);
/// assert_eq!(record.regular_hours, Decimal::from_str("40").unwrap());
/// assert_eq!(record.hourly_rate, Decimal::from_str("16.00").unwrap());
/// assert!(record.has_pay_period());
/// assert_eq!(record.employee_name, "");
/// ```
pub fn normalize_fields(fields: &FieldMap) -> WorkRecord {
    let decimal = |name: &str| parse_decimal(fields.get(name), Decimal::ZERO);
    let text = |name: &str| parse_text(fields.get(name));

    let pay_period = parse_pay_period(&text(fields::PAY_PERIOD));

    WorkRecord {
        regular_hours: decimal(fields::REGULAR_HOURS),
        overtime_hours: decimal(fields::OVERTIME_HOURS),
        double_time_hours: decimal(fields::DOUBLE_TIME_HOURS),
        hourly_rate: decimal(fields::HOURLY_RATE),
        overtime_rate: decimal(fields::OVERTIME_RATE),
        double_time_rate: decimal(fields::DOUBLE_TIME_RATE),
        gross_pay: decimal(fields::GROSS_PAY),
        net_pay: decimal(fields::NET_PAY),
        pay_period_start: pay_period.map(|(start, _)| start),
        pay_period_end: pay_period.map(|(_, end)| end),
        employee_name: text(fields::EMPLOYEE_NAME),
        employer_name: text(fields::EMPLOYER_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_fields() -> FieldMap {
        serde_json::from_value(serde_json::json!({
            "employeeName": {"value": "John Doe", "confidence": 0.95},
            "employerName": {"value": "ABC Manufacturing Inc.", "confidence": 0.98},
            "payPeriod": {"value": "01/01/2024 - 01/15/2024", "confidence": 0.92},
            "grossPay": {"value": 1280.00, "confidence": 0.97},
            "netPay": {"value": 1024.32, "confidence": 0.96},
            "regularHours": {"value": 40.0, "confidence": 0.94},
            "overtimeHours": {"value": 8.0, "confidence": 0.96},
            "hourlyRate": {"value": 16.00, "confidence": 0.98},
            "overtimeRate": {"value": 24.00, "confidence": 0.97}
        }))
        .unwrap()
    }

    #[test]
    fn test_normalizes_full_pay_stub() {
        let record = normalize_fields(&sample_fields());

        assert_eq!(record.employee_name, "John Doe");
        assert_eq!(record.employer_name, "ABC Manufacturing Inc.");
        assert_eq!(record.pay_period_start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(record.pay_period_end, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(record.gross_pay, dec("1280"));
        assert_eq!(record.net_pay, dec("1024.32"));
        assert_eq!(record.regular_hours, dec("40"));
        assert_eq!(record.overtime_hours, dec("8"));
        assert_eq!(record.double_time_hours, Decimal::ZERO);
        assert_eq!(record.hourly_rate, dec("16"));
        assert_eq!(record.overtime_rate, dec("24"));
        assert_eq!(record.double_time_rate, Decimal::ZERO);
    }

    #[test]
    fn test_empty_map_yields_default_record() {
        assert_eq!(normalize_fields(&FieldMap::new()), WorkRecord::default());
    }

    #[test]
    fn test_malformed_values_fall_back_to_defaults() {
        let fields: FieldMap = serde_json::from_value(serde_json::json!({
            "regularHours": "forty",
            "hourlyRate": true,
            "grossPay": [1, 2, 3],
            "netPay": {"value": null, "confidence": 0.2},
            "employeeName": null,
            "payPeriod": "last week"
        }))
        .unwrap();

        let record = normalize_fields(&fields);
        assert_eq!(record.regular_hours, Decimal::ZERO);
        assert_eq!(record.hourly_rate, Decimal::ZERO);
        assert_eq!(record.gross_pay, Decimal::ZERO);
        assert_eq!(record.net_pay, Decimal::ZERO);
        assert_eq!(record.employee_name, "");
        assert!(!record.has_pay_period());
    }

    #[test]
    fn test_numeric_pay_period_is_unset() {
        let fields: FieldMap =
            serde_json::from_value(serde_json::json!({ "payPeriod": 20240101 })).unwrap();
        let record = normalize_fields(&fields);
        assert_eq!(record.pay_period_start, None);
        assert_eq!(record.pay_period_end, None);
    }

    #[test]
    fn test_parse_text_variants() {
        assert_eq!(parse_text(Some(&ExtractedField::text("  Jane  "))), "Jane");
        assert_eq!(
            parse_text(Some(&ExtractedField::Scalar(FieldValue::Number(
                serde_json::Number::from(42)
            )))),
            "42"
        );
        assert_eq!(
            parse_text(Some(&ExtractedField::Scalar(FieldValue::Other(
                serde_json::json!({"first": "Jane"})
            )))),
            ""
        );
    }
}
