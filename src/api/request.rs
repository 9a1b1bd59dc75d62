//! Request types for the wage engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint and the query string of the `/policy` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::WorkSchedule;

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use wage_engine::api::CalculationRequest;
///
/// let body = r#"{
///     "schedule": {
///         "hourlyWage": 10360,
///         "workDays": ["월", "화", "수", "목", "금"],
///         "workStartTime": "09:00",
///         "workEndTime": "18:00",
///         "breakMinutes": 60
///     },
///     "referenceDate": "2026-03-01"
/// }"#;
///
/// let request: CalculationRequest = serde_json::from_str(body).unwrap();
/// assert_eq!(request.schedule.days_per_week(), 5);
/// assert!(request.reference_date.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The working schedule to price.
    pub schedule: WorkSchedule,
    /// The date used to select the minimum wage table; today when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

/// Query string for the `/policy` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyQuery {
    /// The date whose minimum wage should be reported; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
