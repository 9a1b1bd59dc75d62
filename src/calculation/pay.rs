//! Monthly pay aggregation.
//!
//! This module runs the whole pipeline for a [`WorkSchedule`]: parse the
//! times, measure daily and night hours, project them to a month, and price
//! the four pay components.

use tracing::debug;

use crate::config::WagePolicy;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, HoursSummary, PayBreakdown, PayCalculation, WorkSchedule, format_won,
};

use super::base_pay::calculate_base_pay;
use super::clock_time::ShiftSpan;
use super::duration::calculate_daily_hours;
use super::monthly_projection::project_monthly;
use super::night_hours::calculate_night_hours;
use super::night_pay::calculate_night_pay;
use super::overtime::calculate_overtime_pay;
use super::weekly_holiday::calculate_weekly_holiday_pay;

/// Computes the monthly pay components for a schedule under the statutory
/// policy.
///
/// Pure: the same schedule always yields the same breakdown.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`](crate::error::EngineError::InvalidTime)
/// naming the field if either time is not a valid `HH:MM` string.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::compute_pay;
/// use wage_engine::models::WorkSchedule;
///
/// // 10,360원, 월-금, 09:00-18:00, 60 minute break
/// let breakdown = compute_pay(&WorkSchedule::default()).unwrap();
///
/// assert_eq!(breakdown.base_pay, 1_800_568);
/// assert_eq!(breakdown.weekly_holiday_pay, 360_114);
/// assert_eq!(breakdown.overtime_pay, 0);
/// assert_eq!(breakdown.night_pay, 0);
/// assert_eq!(breakdown.total_pay, 2_160_682);
/// ```
pub fn compute_pay(schedule: &WorkSchedule) -> EngineResult<PayBreakdown> {
    Ok(calculate_pay(schedule, &WagePolicy::statutory())?.breakdown)
}

/// Computes the monthly pay components for a schedule, along with the hour
/// figures and an audit step for every rule applied.
///
/// Components are rounded to whole won one at a time and the total is the
/// sum of the rounded components.
///
/// # Arguments
///
/// * `schedule` - The working schedule
/// * `policy` - The constants the rules are parameterized by
pub fn calculate_pay(schedule: &WorkSchedule, policy: &WagePolicy) -> EngineResult<PayCalculation> {
    let span = ShiftSpan::from_schedule(schedule)?;
    let wage = schedule.hourly_wage;
    let mut steps: Vec<AuditStep> = Vec::with_capacity(8);

    let daily = calculate_daily_hours(&span, schedule.break_minutes, 1);
    steps.push(daily.audit_step);

    let night = calculate_night_hours(&span, &policy.night_window, 2);
    steps.push(night.audit_step);

    let projection = project_monthly(daily.hours, schedule.days_per_week(), policy, 3);
    steps.push(projection.audit_step);

    let base = calculate_base_pay(wage, projection.monthly_hours, 4)?;
    steps.push(base.audit_step);

    let holiday = calculate_weekly_holiday_pay(wage, projection.weekly_hours, policy, 5)?;
    steps.push(holiday.audit_step);

    let overtime = calculate_overtime_pay(
        wage,
        daily.hours,
        projection.monthly_work_days,
        policy,
        6,
    )?;
    steps.push(overtime.audit_step);

    let night_pay = calculate_night_pay(
        wage,
        night.hours,
        projection.monthly_work_days,
        policy,
        7,
    )?;
    steps.push(night_pay.audit_step);

    let breakdown = PayBreakdown::from_components(
        base.amount,
        holiday.amount,
        overtime.amount,
        night_pay.amount,
    )?;

    steps.push(AuditStep {
        step_number: 8,
        rule_id: "pay_total".to_string(),
        rule_name: "Monthly Pay Total".to_string(),
        clause_ref: "LSA 17".to_string(),
        input: serde_json::json!({
            "base_pay": breakdown.base_pay,
            "weekly_holiday_pay": breakdown.weekly_holiday_pay,
            "overtime_pay": breakdown.overtime_pay,
            "night_pay": breakdown.night_pay
        }),
        output: serde_json::json!({
            "total_pay": breakdown.total_pay
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            format_won(breakdown.base_pay),
            format_won(breakdown.weekly_holiday_pay),
            format_won(breakdown.overtime_pay),
            format_won(breakdown.night_pay),
            format_won(breakdown.total_pay)
        ),
    });

    debug!(
        hourly_wage = wage,
        days_per_week = schedule.days_per_week(),
        daily_hours = %daily.hours.normalize(),
        night_hours = %night.hours.normalize(),
        total_pay = breakdown.total_pay,
        "Pay calculated"
    );

    Ok(PayCalculation {
        breakdown,
        hours: HoursSummary {
            daily_hours: daily.hours.normalize(),
            weekly_hours: projection.weekly_hours.normalize(),
            monthly_work_days: projection.monthly_work_days.normalize(),
            monthly_hours: projection.monthly_hours.normalize(),
            daily_overtime_hours: overtime.split.overtime_hours.normalize(),
            daily_night_hours: night.hours.normalize(),
        },
        audit_trace: AuditTrace {
            steps,
            warnings: Vec::new(),
        },
    })
}
