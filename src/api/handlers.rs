//! HTTP request handlers for the wage engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_pay, check_minimum_wage};
use crate::config::{MinimumWageRate, WagePolicy};
use crate::error::EngineResult;
use crate::models::{CalculationResult, WorkSchedule};

use super::request::{CalculationRequest, PolicyQuery};
use super::response::{ApiError, ApiErrorResponse, PolicyResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a schedule and returns the monthly pay breakdown with its audit
/// trail.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    match missing_field_name(&body_text) {
                        Some(field) => ApiError::missing_field(field),
                        None => ApiError::validation_error(body_text),
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
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let reference_date = request.reference_date.unwrap_or_else(today);
    let config = state.config();

    let minimum = match config.get_minimum_wage(reference_date) {
        Ok(minimum) => minimum,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                reference_date = %reference_date,
                "Minimum wage not found"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match perform_calculation(request.schedule, reference_date, config.policy(), minimum) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                hourly_wage = result.schedule.hourly_wage,
                days_per_week = result.schedule.days_per_week(),
                total_pay = result.calculation.breakdown.total_pay,
                warnings = result.calculation.audit_trace.warnings.len(),
                duration_us = result.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /policy endpoint.
///
/// Reports the calculation constants and the minimum wage in force on the
/// requested date.
async fn policy_handler(
    State(state): State<AppState>,
    query: Result<Query<PolicyQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Invalid policy query");
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    let reference_date = query.date.unwrap_or_else(today);
    let config = state.config();

    match config.get_minimum_wage(reference_date) {
        Ok(minimum) => Json(PolicyResponse {
            metadata: config.metadata().clone(),
            policy: config.policy().clone(),
            reference_date,
            minimum_wage: minimum.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        })
        .into_response(),
        Err(err) => {
            warn!(reference_date = %reference_date, "Minimum wage not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Prices a schedule and appends the minimum wage check to its audit trail.
fn perform_calculation(
    schedule: WorkSchedule,
    reference_date: NaiveDate,
    policy: &WagePolicy,
    minimum: &MinimumWageRate,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();

    let mut calculation = calculate_pay(&schedule, policy)?;

    let step_number = calculation.audit_trace.steps.len() as u32 + 1;
    let check = check_minimum_wage(schedule.hourly_wage, minimum, step_number);
    calculation.audit_trace.steps.push(check.audit_step);
    calculation.audit_trace.warnings.extend(check.warning);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        reference_date,
        schedule,
        calculation,
        duration_us,
    })
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Pulls the field name out of serde's "missing field `name`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.split("missing field `").nth(1)?;
    rest.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::BELOW_MINIMUM_WAGE;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/kr_lsa").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            schedule: WorkSchedule::default(),
            reference_date: Some(make_date("2026-03-01")),
        }
    }

    async fn post_calculate(body: impl Into<Body>) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_error(response: Response) -> ApiError {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_missing_field_name_extraction() {
        assert_eq!(
            missing_field_name("schedule: missing field `hourlyWage` at line 1 column 20"),
            Some("hourlyWage")
        );
        assert_eq!(missing_field_name("invalid type: string"), None);
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = post_calculate(body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.reference_date, make_date("2026-03-01"));
        assert_eq!(result.calculation.breakdown.base_pay, 1_800_568);
        assert_eq!(result.calculation.breakdown.total_pay, 2_160_682);
        assert_eq!(result.calculation.audit_trace.steps.len(), 9);
        assert_eq!(
            result.calculation.audit_trace.steps[8].rule_id,
            "minimum_wage_check"
        );
        assert!(result.calculation.audit_trace.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_below_minimum_wage_warns_but_calculates() {
        let mut request = create_valid_request();
        request.schedule.hourly_wage = 9_860;
        let body = serde_json::to_string(&request).unwrap();

        let response = post_calculate(body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        assert!(result.calculation.breakdown.total_pay > 0);
        let warnings = &result.calculation.audit_trace.warnings;
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, BELOW_MINIMUM_WAGE);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_calculate("{invalid json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(read_error(response).await.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_hourly_wage_returns_400() {
        let body = r#"{
            "schedule": {
                "workDays": ["월"],
                "workStartTime": "09:00",
                "workEndTime": "18:00"
            }
        }"#;
        let response = post_calculate(body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = read_error(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("hourlyWage"));
    }

    #[tokio::test]
    async fn test_negative_wage_returns_400() {
        let body = r#"{
            "schedule": {
                "hourlyWage": -100,
                "workDays": ["월"],
                "workStartTime": "09:00",
                "workEndTime": "18:00"
            }
        }"#;
        let response = post_calculate(body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_time_returns_400() {
        let mut request = create_valid_request();
        request.schedule.work_end_time = "18시".to_string();
        let body = serde_json::to_string(&request).unwrap();

        let response = post_calculate(body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = read_error(response).await;
        assert_eq!(error.code, "INVALID_TIME");
        assert!(error.message.contains("workEndTime"));
    }

    #[tokio::test]
    async fn test_reference_date_before_any_table_returns_400() {
        let mut request = create_valid_request();
        request.reference_date = Some(make_date("2019-12-31"));
        let body = serde_json::to_string(&request).unwrap();

        let response = post_calculate(body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "MINIMUM_WAGE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_policy_returns_minimum_wage_for_date() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/policy?date=2025-07-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["minimumWage"]["hourly"], 10_030);
        assert_eq!(json["referenceDate"], "2025-07-01");
        assert_eq!(json["metadata"]["code"], "KR-LSA");
        assert_eq!(json["policy"]["premiumRate"], "0.5");
    }

    #[tokio::test]
    async fn test_policy_rejects_bad_date() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/policy?date=not-a-date")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "VALIDATION_ERROR");
    }
}
