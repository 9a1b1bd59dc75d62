//! Calculation result models for the wage engine.
//!
//! This module contains the [`PayBreakdown`] value returned by every pay
//! calculation, the [`HoursSummary`] and audit structures the audited
//! calculation adds, and the [`CalculationResult`] envelope served by the API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::WorkSchedule;

/// The four monthly pay components and their total, in KRW.
///
/// Each component is rounded on its own, and `total_pay` is always the exact
/// sum of the rounded components so that line items shown to the user add up
/// to the displayed total.
///
/// # Example
///
/// ```
/// use wage_engine::models::PayBreakdown;
///
/// let breakdown = PayBreakdown::from_components(1_800_568, 360_114, 0, 0).unwrap();
/// assert_eq!(breakdown.total_pay, 2_160_682);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    /// 기본급: pay for the scheduled hours.
    pub base_pay: u64,
    /// 주휴수당: paid weekly rest day allowance.
    pub weekly_holiday_pay: u64,
    /// 연장근로수당: premium for hours past the daily threshold.
    pub overtime_pay: u64,
    /// 야간근로수당: premium for hours inside the night window.
    pub night_pay: u64,
    /// Sum of the four components.
    pub total_pay: u64,
}

impl PayBreakdown {
    /// Builds a breakdown from already-rounded components, computing the total.
    ///
    /// Fails only if the total does not fit in a `u64`.
    pub fn from_components(
        base_pay: u64,
        weekly_holiday_pay: u64,
        overtime_pay: u64,
        night_pay: u64,
    ) -> EngineResult<Self> {
        let total_pay = base_pay
            .checked_add(weekly_holiday_pay)
            .and_then(|sum| sum.checked_add(overtime_pay))
            .and_then(|sum| sum.checked_add(night_pay))
            .ok_or_else(|| EngineError::CalculationError {
                message: "total pay exceeds the representable range".to_string(),
            })?;

        Ok(Self {
            base_pay,
            weekly_holiday_pay,
            overtime_pay,
            night_pay,
            total_pay,
        })
    }
}

/// Intermediate hour figures behind a [`PayBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursSummary {
    /// Net paid hours per working day.
    pub daily_hours: Decimal,
    /// `daily_hours` times scheduled days per week.
    pub weekly_hours: Decimal,
    /// Scheduled days per week projected to a month.
    pub monthly_work_days: Decimal,
    /// `daily_hours` projected to a month.
    pub monthly_hours: Decimal,
    /// Hours per day beyond the daily overtime threshold.
    pub daily_overtime_hours: Decimal,
    /// Hours per day inside the night window.
    pub daily_night_hours: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute article for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use wage_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A pay breakdown together with the hours and audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayCalculation {
    /// The monthly pay components.
    pub breakdown: PayBreakdown,
    /// The hour figures used to compute the components.
    pub hours: HoursSummary,
    /// Every rule applied, in order.
    pub audit_trace: AuditTrace,
}

/// The response envelope for one API calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The date used to select the minimum wage table.
    pub reference_date: NaiveDate,
    /// The schedule the calculation was run for.
    pub schedule: WorkSchedule,
    /// The calculated pay.
    pub calculation: PayCalculation,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
