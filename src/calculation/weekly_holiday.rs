//! Weekly holiday pay calculation.
//!
//! A worker averaging at least 15 hours a week is owed one paid rest day a
//! week (주휴수당). The paid hours of that day are proportional to the
//! weekly hours, up to the 8 hours a full-time (40 hour) worker receives.

use rust_decimal::Decimal;

use crate::config::WagePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, format_won};

use super::rounding::round_to_won;

/// The result of a weekly holiday pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyHolidayPayResult {
    /// Whether the weekly hours meet the eligibility threshold.
    pub eligible: bool,
    /// Paid hours of the weekly rest day (zero when not eligible).
    pub holiday_hours: Decimal,
    /// Monthly weekly holiday pay in KRW.
    pub amount: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly weekly holiday pay.
///
/// # Arguments
///
/// * `hourly_wage` - Hourly wage in KRW
/// * `weekly_hours` - Net paid hours per week
/// * `policy` - Supplies the eligibility threshold, full-time reference and
///   weeks per month
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// - LSA Art. 55(1): one paid rest day per week
/// - LSA Art. 18(3): not applicable below 15 hours per week
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_weekly_holiday_pay;
/// use wage_engine::config::WagePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = WagePolicy::statutory();
///
/// // Full time: 8 hours x 4.345 weeks
/// let result = calculate_weekly_holiday_pay(10_360, Decimal::from(40), &policy, 5).unwrap();
/// assert_eq!(result.amount, 360_114);
///
/// // Below 15 hours: nothing
/// let result = calculate_weekly_holiday_pay(10_360, Decimal::from(14), &policy, 5).unwrap();
/// assert!(!result.eligible);
/// assert_eq!(result.amount, 0);
/// ```
pub fn calculate_weekly_holiday_pay(
    hourly_wage: u64,
    weekly_hours: Decimal,
    policy: &WagePolicy,
    step_number: u32,
) -> EngineResult<WeeklyHolidayPayResult> {
    let eligible = weekly_hours >= policy.weekly_holiday_eligibility_hours;

    let holiday_hours = if eligible {
        weekly_hours
            .min(policy.standard_weekly_hours)
            .checked_div(policy.standard_weekly_hours)
            .ok_or_else(|| EngineError::CalculationError {
                message: "standard weekly hours must be greater than zero".to_string(),
            })?
            * policy.weekly_holiday_reference_hours
    } else {
        Decimal::ZERO
    };

    let amount = round_to_won(
        Decimal::from(hourly_wage) * holiday_hours * policy.average_weeks_per_month,
    )?;

    let reasoning = if eligible {
        format!(
            "{} hours per week meets the {} hour threshold: {} paid rest hours x {} weeks = {}",
            weekly_hours.normalize(),
            policy.weekly_holiday_eligibility_hours.normalize(),
            holiday_hours.normalize(),
            policy.average_weeks_per_month.normalize(),
            format_won(amount)
        )
    } else {
        format!(
            "{} hours per week is under the {} hour threshold, no weekly holiday pay",
            weekly_hours.normalize(),
            policy.weekly_holiday_eligibility_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_holiday_pay".to_string(),
        rule_name: "Weekly Holiday Pay".to_string(),
        clause_ref: "LSA 55(1), 18(3)".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage,
            "weekly_hours": weekly_hours.normalize().to_string(),
            "eligibility_hours": policy.weekly_holiday_eligibility_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "holiday_hours": holiday_hours.normalize().to_string(),
            "weekly_holiday_pay": amount
        }),
        reasoning,
    };

    Ok(WeeklyHolidayPayResult {
        eligible,
        holiday_hours,
        amount,
        audit_step,
    })
}
