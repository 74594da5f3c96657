//! Request types for the labor rules engine API.
//!
//! This module defines the JSON request structure for the `/rules/analyze`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{FieldMap, LocationInfo};

/// Request body for the `/rules/analyze` endpoint.
///
/// Both members are optional at the JSON level so that a missing `ocrData`
/// can be reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Fields extracted from the pay stub by the document-extraction service.
    #[serde(default)]
    pub ocr_data: Option<FieldMap>,
    /// Where the work was performed.
    #[serde(default)]
    pub location_info: Option<LocationInfo>,
}

impl AnalyzeRequest {
    /// Returns the extracted fields when at least one is present.
    pub fn fields(&self) -> Option<&FieldMap> {
        self.ocr_data.as_ref().filter(|fields| !fields.is_empty())
    }
}
