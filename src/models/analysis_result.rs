//! Analysis result models.
//!
//! This module contains the [`AnalysisResult`] type returned by the rules
//! engine and the aggregates attached to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Severity, Violation};

/// Counts and average confidence over a violation list.
///
/// # Example
///
/// ```
/// use labor_rules_engine::models::Summary;
///
/// let summary = Summary::from_violations(&[]);
/// assert_eq!(summary.total_violations, 0);
/// assert_eq!(summary.average_confidence, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of violations.
    pub total_violations: usize,
    /// Number of high-severity violations.
    pub high_severity: usize,
    /// Number of medium-severity violations.
    pub medium_severity: usize,
    /// Number of low-severity violations.
    pub low_severity: usize,
    /// Mean of every violation's confidence, `0.0` for an empty list.
    pub average_confidence: f64,
}

impl Summary {
    /// Aggregates a violation list in its given order.
    pub fn from_violations(violations: &[Violation]) -> Self {
        let count = |severity: Severity| {
            violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };

        let average_confidence = if violations.is_empty() {
            0.0
        } else {
            violations.iter().map(|v| v.confidence).sum::<f64>() / violations.len() as f64
        };

        Summary {
            total_violations: violations.len(),
            high_severity: count(Severity::High),
            medium_severity: count(Severity::Medium),
            low_severity: count(Severity::Low),
            average_confidence,
        }
    }
}

/// Extraction confidence reported by the upstream extractor.
///
/// Only confidence-bearing fields are listed; a pair without a reported
/// confidence counts as `0.5`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionConfidence {
    /// Confidence per field name.
    pub fields: BTreeMap<String, f64>,
    /// Mean over `fields`, `0.0` when there are none.
    pub overall: f64,
}

/// The complete result of analyzing one pay stub.
///
/// Contains no timestamps or identifiers, so analyzing the same input twice
/// yields equal results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Violations ordered by severity then confidence, both descending.
    pub violations: Vec<Violation>,
    /// Aggregates over `violations`.
    pub summary: Summary,
    /// Confidence of the extracted input fields.
    pub extraction_confidence: ExtractionConfidence,
    /// Version of the rules engine that produced the result.
    pub rules_engine_version: String,
}
