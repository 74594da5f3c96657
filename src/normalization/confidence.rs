//! Extraction confidence scoring.

use std::collections::BTreeMap;

use crate::models::{ExtractionConfidence, FieldMap};

/// Confidence assumed for a `{value, confidence}` pair that omits the score.
pub const DEFAULT_FIELD_CONFIDENCE: f64 = 0.5;

/// Collects the confidence of every confidence-bearing field and their mean.
///
/// Bare scalars carry no confidence and are skipped. Reported scores are
/// clamped into `[0, 1]`.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::{ExtractedField, FieldMap};
/// use labor_rules_engine::normalization::extraction_confidence;
///
/// let mut fields = FieldMap::new();
/// fields.insert("grossPay".to_string(), ExtractedField::text_with_confidence("100", 0.9));
/// fields.insert("netPay".to_string(), ExtractedField::text_with_confidence("80", 0.7));
/// fields.insert("regularHours".to_string(), ExtractedField::text("10"));
///
/// let scores = extraction_confidence(&fields);
/// assert_eq!(scores.fields.len(), 2);
/// assert!((scores.overall - 0.8).abs() < 1e-12);
/// ```
pub fn extraction_confidence(fields: &FieldMap) -> ExtractionConfidence {
    let scores: BTreeMap<String, f64> = fields
        .iter()
        .filter(|(_, field)| field.is_confidence_bearing())
        .map(|(name, field)| {
            let confidence = field
                .confidence()
                .unwrap_or(DEFAULT_FIELD_CONFIDENCE)
                .clamp(0.0, 1.0);
            (name.clone(), confidence)
        })
        .collect();

    let overall = if scores.is_empty() {
        0.0
    } else {
        scores.values().sum::<f64>() / scores.len() as f64
    };

    ExtractionConfidence {
        fields: scores,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractedField, FieldValue};

    #[test]
    fn test_no_confidence_bearing_fields() {
        let mut fields = FieldMap::new();
        fields.insert("regularHours".to_string(), ExtractedField::text("40"));

        let scores = extraction_confidence(&fields);
        assert!(scores.fields.is_empty());
        assert_eq!(scores.overall, 0.0);
    }

    #[test]
    fn test_missing_confidence_defaults_to_half() {
        let mut fields = FieldMap::new();
        fields.insert(
            "hourlyRate".to_string(),
            ExtractedField::Confident {
                value: FieldValue::Text("16.00".to_string()),
                confidence: None,
            },
        );

        let scores = extraction_confidence(&fields);
        assert_eq!(scores.fields["hourlyRate"], DEFAULT_FIELD_CONFIDENCE);
        assert_eq!(scores.overall, DEFAULT_FIELD_CONFIDENCE);
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let mut fields = FieldMap::new();
        fields.insert("grossPay".to_string(), ExtractedField::text_with_confidence("1", 1.7));
        fields.insert("netPay".to_string(), ExtractedField::text_with_confidence("1", -0.3));

        let scores = extraction_confidence(&fields);
        assert_eq!(scores.fields["grossPay"], 1.0);
        assert_eq!(scores.fields["netPay"], 0.0);
        assert_eq!(scores.overall, 0.5);
    }
}
