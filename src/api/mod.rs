//! HTTP API module for the Benefit Engine.
//!
//! This module exposes the calculation facade and the jurisdiction registry
//! as a JSON REST API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ServicePeriodRequest};
pub use response::{
    ApiError, CalculationResponse, ENGINE_VERSION, JurisdictionListResponse, JurisdictionResponse,
    JurisdictionSummary,
};
pub use state::AppState;
