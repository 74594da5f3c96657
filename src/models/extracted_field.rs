//! Extracted field models.
//!
//! The document-extraction service hands over each pay-stub field either as
//! a bare scalar or as a `{value, confidence}` pair. Both shapes, and any
//! mis-typed value, deserialize into [`ExtractedField`] so that nothing at
//! the boundary can reject a request for data-quality reasons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from camelCase field name (e.g. `"grossPay"`) to extracted field.
///
/// Ordered so that everything derived from it iterates deterministically.
pub type FieldMap = BTreeMap<String, ExtractedField>;

/// A loosely typed scalar as produced by the extraction service.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::FieldValue;
///
/// let value: FieldValue = serde_json::from_str("\"$1,234.56\"").unwrap();
/// assert_eq!(value, FieldValue::Text("$1,234.56".to_string()));
///
/// let value: FieldValue = serde_json::from_str("null").unwrap();
/// assert!(value.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON `null`.
    Null,
    /// A boolean, which never coerces to a number.
    Bool(bool),
    /// A JSON number.
    Number(serde_json::Number),
    /// A string, possibly with currency symbols or thousands separators.
    Text(String),
    /// Arrays, objects and anything else the extractor produced.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Returns `true` when the value carries nothing: `null`, `false`, zero,
    /// a string that is empty after trimming, or an empty array or object.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Bool(flag) => !flag,
            FieldValue::Number(number) => number.as_f64() == Some(0.0),
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Other(serde_json::Value::Array(items)) => items.is_empty(),
            FieldValue::Other(serde_json::Value::Object(entries)) => entries.is_empty(),
            FieldValue::Other(_) => false,
        }
    }
}

/// A single extracted field.
///
/// Object-shaped input is tried first, so `{"value": 12, "confidence": 0.9}`
/// becomes [`ExtractedField::Confident`] while `12` becomes
/// [`ExtractedField::Scalar`].
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::{ExtractedField, FieldValue};
///
/// let field: ExtractedField =
///     serde_json::from_str(r#"{"value": "John Doe", "confidence": 0.95}"#).unwrap();
/// assert_eq!(field.confidence(), Some(0.95));
/// assert_eq!(field.value(), &FieldValue::Text("John Doe".to_string()));
///
/// let field: ExtractedField = serde_json::from_str("40").unwrap();
/// assert_eq!(field.confidence(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedField {
    /// A value reported together with an extraction confidence.
    Confident {
        /// The extracted value.
        value: FieldValue,
        /// Extraction confidence in `[0, 1]`, when the extractor reported one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confidence: Option<f64>,
    },
    /// A bare value with no confidence information.
    Scalar(FieldValue),
}

impl ExtractedField {
    /// Creates a bare scalar field from a string.
    pub fn text(value: impl Into<String>) -> Self {
        ExtractedField::Scalar(FieldValue::Text(value.into()))
    }

    /// Creates a confidence-bearing field from a string.
    pub fn text_with_confidence(value: impl Into<String>, confidence: f64) -> Self {
        ExtractedField::Confident {
            value: FieldValue::Text(value.into()),
            confidence: Some(confidence),
        }
    }

    /// Returns the wrapped value regardless of shape.
    pub fn value(&self) -> &FieldValue {
        match self {
            ExtractedField::Confident { value, .. } => value,
            ExtractedField::Scalar(value) => value,
        }
    }

    /// Returns the reported confidence, if this is a pair that carries one.
    pub fn confidence(&self) -> Option<f64> {
        match self {
            ExtractedField::Confident { confidence, .. } => *confidence,
            ExtractedField::Scalar(_) => None,
        }
    }

    /// Returns `true` when the field arrived as a `{value, confidence}` pair.
    pub fn is_confidence_bearing(&self) -> bool {
        matches!(self, ExtractedField::Confident { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pair_with_confidence() {
        let field: ExtractedField =
            serde_json::from_str(r#"{"value": 1280.0, "confidence": 0.97}"#).unwrap();
        assert!(field.is_confidence_bearing());
        assert_eq!(field.confidence(), Some(0.97));
        assert!(matches!(field.value(), FieldValue::Number(_)));
    }

    #[test]
    fn test_deserialize_pair_without_confidence() {
        let field: ExtractedField = serde_json::from_str(r#"{"value": "16.00"}"#).unwrap();
        assert!(field.is_confidence_bearing());
        assert_eq!(field.confidence(), None);
    }

    #[test]
    fn test_deserialize_bare_scalars() {
        let number: ExtractedField = serde_json::from_str("40").unwrap();
        let text: ExtractedField = serde_json::from_str(r#""$16.00""#).unwrap();
        let null: ExtractedField = serde_json::from_str("null").unwrap();
        let boolean: ExtractedField = serde_json::from_str("true").unwrap();

        assert!(matches!(number, ExtractedField::Scalar(FieldValue::Number(_))));
        assert_eq!(text, ExtractedField::text("$16.00"));
        assert_eq!(null, ExtractedField::Scalar(FieldValue::Null));
        assert_eq!(boolean, ExtractedField::Scalar(FieldValue::Bool(true)));
    }

    #[test]
    fn test_deserialize_mistyped_values_does_not_fail() {
        let array: ExtractedField = serde_json::from_str("[1, 2, 3]").unwrap();
        assert!(matches!(array, ExtractedField::Scalar(FieldValue::Other(_))));

        let object: ExtractedField = serde_json::from_str(r#"{"amount": 12}"#).unwrap();
        assert!(matches!(object, ExtractedField::Scalar(FieldValue::Other(_))));
    }

    #[test]
    fn test_deserialize_field_map() {
        let json = r#"{
            "employeeName": {"value": "John Doe", "confidence": 0.95},
            "regularHours": 40,
            "hourlyRate": "$16.00"
        }"#;
        let fields: FieldMap = serde_json::from_str(json).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields["employeeName"],
            ExtractedField::text_with_confidence("John Doe", 0.95)
        );
    }

    #[test]
    fn test_is_empty() {
        let value = |json: &str| serde_json::from_str::<FieldValue>(json).unwrap();

        assert!(value("null").is_empty());
        assert!(value("false").is_empty());
        assert!(value("0").is_empty());
        assert!(value("0.0").is_empty());
        assert!(value(r#""   ""#).is_empty());
        assert!(value("[]").is_empty());
        assert!(value("{}").is_empty());

        assert!(!value("true").is_empty());
        assert!(!value("12.5").is_empty());
        assert!(!value(r#""0""#).is_empty());
        assert!(!value("[0]").is_empty());
    }

    #[test]
    fn test_serialization_round_trip_keeps_shape() {
        let field = ExtractedField::text_with_confidence("ABC Manufacturing Inc.", 0.98);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"value":"ABC Manufacturing Inc.","confidence":0.98}"#);
    }
}
