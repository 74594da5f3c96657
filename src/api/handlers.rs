//! HTTP request handlers for the labor rules engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::rules::RULES_ENGINE_VERSION;

use super::request::AnalyzeRequest;
use super::response::{AnalyzeResponse, ApiError, ApiErrorResponse, RuleConstants, RulesInfo};
use super::state::AppState;

const ENGINE_NAME: &str = "California Labor Rules Engine";
const ENGINE_DESCRIPTION: &str = "Detects California wage-and-hour violations in extracted pay stub data: overtime, meal and rest breaks, minimum wage, wage statement completeness and pay calculation consistency";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rules/analyze", post(analyze_handler))
        .route("/rules/info", get(info_handler))
        .with_state(state)
}

/// Handler for POST /rules/analyze.
///
/// Normalizes the extracted fields, runs every rule check and returns the
/// stamped result.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let Some(fields) = request.fields() else {
        warn!(correlation_id = %correlation_id, "Request has no OCR data");
        return ApiErrorResponse::bad_request(ApiError::missing_ocr_data()).into_response();
    };

    let start_time = Instant::now();
    let result = state
        .engine()
        .analyze(fields, request.location_info.as_ref());
    let response = AnalyzeResponse::new(result);

    info!(
        correlation_id = %correlation_id,
        analysis_id = %response.analysis_id,
        fields = fields.len(),
        total_violations = response.result.summary.total_violations,
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /rules/info.
///
/// Describes the engine, the violations it reports and the constants in
/// force.
async fn info_handler(State(state): State<AppState>) -> Json<RulesInfo> {
    let engine = state.engine();
    let config = engine.config();

    Json(RulesInfo {
        name: ENGINE_NAME,
        version: RULES_ENGINE_VERSION,
        description: ENGINE_DESCRIPTION,
        jurisdiction: config.jurisdiction.clone(),
        rules: engine.catalog(),
        minimum_wage: config.minimum_wage.clone(),
        constants: RuleConstants {
            overtime: config.overtime.clone(),
            meal_breaks: config.meal_breaks.clone(),
            rest_breaks: config.rest_breaks.clone(),
            pay_stub: config.pay_stub.clone(),
            pay_calculation: config.pay_calculation.clone(),
        },
    })
}

fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
