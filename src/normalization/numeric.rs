//! Numeric coercion of extracted fields.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{ExtractedField, FieldValue};

/// Converts an extracted field into a non-negative exact decimal.
///
/// Pairs are unwrapped to their value, `$` and `,` are stripped from text,
/// and anything that does not parse (booleans, blank text, negative or
/// out-of-range numbers, arrays) yields `default`. Never fails.
///
/// # Examples
///
/// ```
/// use labor_rules_engine::models::ExtractedField;
/// use labor_rules_engine::normalization::parse_decimal;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let field = ExtractedField::text_with_confidence("$1,280.00", 0.97);
/// assert_eq!(parse_decimal(Some(&field), Decimal::ZERO), Decimal::from_str("1280.00").unwrap());
///
/// let field = ExtractedField::text("Not Found");
/// assert_eq!(parse_decimal(Some(&field), Decimal::ZERO), Decimal::ZERO);
///
/// assert_eq!(parse_decimal(None, Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn parse_decimal(field: Option<&ExtractedField>, default: Decimal) -> Decimal {
    field
        .and_then(|field| decimal_from_value(field.value()))
        .unwrap_or(default)
}

/// Parses a scalar into a non-negative decimal, `None` when it cannot.
pub fn decimal_from_value(value: &FieldValue) -> Option<Decimal> {
    let parsed = match value {
        FieldValue::Number(number) => parse_numeric_text(&number.to_string()),
        FieldValue::Text(text) => parse_numeric_text(text),
        FieldValue::Null | FieldValue::Bool(_) | FieldValue::Other(_) => None,
    }?;

    if parsed.is_sign_negative() && !parsed.is_zero() {
        return None;
    }
    if parsed.is_zero() {
        // Drops a "-0" sign while keeping the scale of "0.00".
        return Some(parsed.abs());
    }
    Some(parsed)
}

fn parse_numeric_text(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}
