//! Response types for the Benefit Engine API.
//!
//! This module defines the success envelopes, the error response structure,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EmploymentRuleSet;
use crate::error::EngineError;
use crate::models::CalculationResult;

/// The version reported in every calculation response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Success envelope for the `/calculate` endpoint.
///
/// The identifier and timestamp belong to the request, not the result, so
/// the embedded [`CalculationResult`] stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Correlation identifier, also written to the logs.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The calculation result.
    pub result: CalculationResult,
}

/// Summary of one jurisdiction for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionSummary {
    /// Jurisdiction code.
    pub code: String,
    /// Jurisdiction name.
    pub name: String,
    /// Rule set version.
    pub version: String,
    /// Currency code.
    pub currency_code: String,
}

impl From<&EmploymentRuleSet> for JurisdictionSummary {
    fn from(rules: &EmploymentRuleSet) -> Self {
        Self {
            code: rules.code().to_string(),
            name: rules.jurisdiction.name.clone(),
            version: rules.jurisdiction.version.clone(),
            currency_code: rules.currency_code().to_string(),
        }
    }
}

/// Response for `GET /jurisdictions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionListResponse {
    /// Code of the rule set unknown jurisdictions resolve to.
    pub default_code: String,
    /// All jurisdictions, sorted by code.
    pub jurisdictions: Vec<JurisdictionSummary>,
}

/// Response for `GET /jurisdictions/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionResponse {
    /// The code as requested.
    pub requested_code: String,
    /// True when the requested code was unknown and the default is shown.
    pub fallback_applied: bool,
    /// The resolved rule set.
    pub rule_set: EmploymentRuleSet,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    "The calculation cannot be performed with the supplied values",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRuleSet { code, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid rule set",
                    format!("Rule set '{}': {}", code, message),
                ),
            },
        }
    }
}
