//! Response types for the labor rules engine API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{
    JurisdictionMetadata, MealBreakRules, MinimumWageTable, OvertimeRules, PayCalculationRules,
    PayStubRules, RestBreakRules,
};
use crate::models::AnalysisResult;
use crate::rules::RuleDescriptor;

/// Response body for the `/rules/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Unique identifier of this analysis.
    pub analysis_id: Uuid,
    /// When the analysis ran.
    pub analysis_timestamp: DateTime<Utc>,
    /// The engine's result.
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl AnalyzeResponse {
    /// Stamps an engine result with a fresh id and the current time.
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analysis_timestamp: Utc::now(),
            result,
        }
    }
}

/// Response body for the `/rules/info` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesInfo {
    /// Engine name.
    pub name: &'static str,
    /// Engine version.
    pub version: &'static str,
    /// What the engine checks.
    pub description: &'static str,
    /// Jurisdiction whose law is encoded.
    pub jurisdiction: JurisdictionMetadata,
    /// Every violation kind the engine can report.
    pub rules: Vec<RuleDescriptor>,
    /// Minimum wage table, local rates in lookup order.
    pub minimum_wage: MinimumWageTable,
    /// Thresholds and multipliers in force.
    pub constants: RuleConstants,
}

/// Rule thresholds reported by `/rules/info`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConstants {
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

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates the error returned when no extracted fields were supplied.
    pub fn missing_ocr_data() -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            "OCR data is required",
            "Request body must contain a non-empty 'ocrData' object",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps an error as a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}
