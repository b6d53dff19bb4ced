//! HTTP request handlers for the Benefit Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::EmploymentInputs;

use super::request::CalculationRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ENGINE_VERSION, JurisdictionListResponse,
    JurisdictionResponse, JurisdictionSummary,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/jurisdictions", get(list_jurisdictions_handler))
        .route("/jurisdictions/:code", get(get_jurisdiction_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Converts the request into [`EmploymentInputs`], runs the facade, and
/// wraps the result in a [`CalculationResponse`].
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let inputs = match EmploymentInputs::try_from(&request) {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected request inputs");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    match state
        .facade()
        .calculate(&request.jurisdiction_code, request.benefit_type, &inputs)
    {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                jurisdiction = %request.jurisdiction_code,
                resolved_jurisdiction = %result.jurisdiction_code,
                fallback_applied = result.fallback_applied,
                benefit_type = %request.benefit_type,
                amount = %result.amount,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let response = CalculationResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: ENGINE_VERSION.to_string(),
                result,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                benefit_type = %request.benefit_type,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /jurisdictions.
async fn list_jurisdictions_handler(State(state): State<AppState>) -> Json<JurisdictionListResponse> {
    let registry = state.registry();
    Json(JurisdictionListResponse {
        default_code: registry.default_rule_set().code().to_string(),
        jurisdictions: registry
            .rule_sets()
            .into_iter()
            .map(JurisdictionSummary::from)
            .collect(),
    })
}

/// Handler for GET /jurisdictions/{code}.
///
/// Resolution is total, so unknown codes return the default rule set with
/// `fallback_applied` set rather than a 404.
async fn get_jurisdiction_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<JurisdictionResponse> {
    let resolution = state.registry().resolve(&code);
    Json(JurisdictionResponse {
        requested_code: code,
        fallback_applied: resolution.fallback_applied,
        rule_set: resolution.rule_set.clone(),
    })
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
