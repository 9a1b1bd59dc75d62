//! HTTP API module for the wage engine.
//!
//! This module provides the REST API endpoints the contract forms call to
//! calculate monthly pay and to read the policy in force.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PolicyQuery};
pub use response::{ApiError, ApiErrorResponse, PolicyResponse};
pub use state::AppState;
