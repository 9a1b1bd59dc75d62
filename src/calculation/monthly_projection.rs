//! Projection of a representative working day to weekly and monthly figures.

use rust_decimal::Decimal;

use crate::config::WagePolicy;
use crate::models::AuditStep;

/// Weekly and monthly hour figures derived from one working day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyProjection {
    /// Daily hours times scheduled days per week.
    pub weekly_hours: Decimal,
    /// Scheduled days per week times the average weeks per month.
    pub monthly_work_days: Decimal,
    /// Daily hours times monthly work days.
    pub monthly_hours: Decimal,
    /// The audit step recording this projection.
    pub audit_step: AuditStep,
}

/// Projects daily hours onto a week and an average month.
///
/// # Arguments
///
/// * `daily_hours` - Net paid hours per working day
/// * `days_per_week` - Number of scheduled days per week
/// * `policy` - Supplies the average weeks per month
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use wage_engine::calculation::project_monthly;
/// use wage_engine::config::WagePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let projection = project_monthly(Decimal::from(8), 5, &WagePolicy::statutory(), 3);
///
/// assert_eq!(projection.weekly_hours, Decimal::from(40));
/// assert_eq!(projection.monthly_work_days, Decimal::from_str("21.725").unwrap());
/// assert_eq!(projection.monthly_hours, Decimal::from_str("173.8").unwrap());
/// ```
pub fn project_monthly(
    daily_hours: Decimal,
    days_per_week: u32,
    policy: &WagePolicy,
    step_number: u32,
) -> MonthlyProjection {
    let days = Decimal::from(days_per_week);
    let weekly_hours = daily_hours * days;
    let monthly_work_days = days * policy.average_weeks_per_month;
    let monthly_hours = daily_hours * monthly_work_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_projection".to_string(),
        rule_name: "Monthly Hours Projection".to_string(),
        clause_ref: "MWA Decree 5(1)".to_string(),
        input: serde_json::json!({
            "daily_hours": daily_hours.normalize().to_string(),
            "days_per_week": days_per_week,
            "average_weeks_per_month": policy.average_weeks_per_month.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_hours": weekly_hours.normalize().to_string(),
            "monthly_work_days": monthly_work_days.normalize().to_string(),
            "monthly_hours": monthly_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} days per week x {} weeks = {} days per month; {} hours per day = {} hours per month",
            days_per_week,
            policy.average_weeks_per_month.normalize(),
            monthly_work_days.normalize(),
            daily_hours.normalize(),
            monthly_hours.normalize()
        ),
    };

    MonthlyProjection {
        weekly_hours,
        monthly_work_days,
        monthly_hours,
        audit_step,
    }
}
