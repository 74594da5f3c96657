//! Core data models for the labor rules engine.
//!
//! This module contains the input boundary types, the normalized
//! [`WorkRecord`], and the violation and result types.

mod analysis_result;
mod extracted_field;
mod location;
mod violation;
mod work_record;

pub use analysis_result::{AnalysisResult, ExtractionConfidence, Summary};
pub use extracted_field::{ExtractedField, FieldMap, FieldValue};
pub use location::LocationInfo;
pub use violation::{Severity, Violation, ViolationKind};
pub use work_record::WorkRecord;
