//! Overtime pay calculation.
//!
//! This module splits a working day into ordinary hours and hours beyond the
//! daily overtime threshold, and prices the excess at the statutory premium.
//! Only the daily threshold is applied; a week whose days each stay within
//! it is not checked against the 40 hour weekly limit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WagePolicy;
use crate::error::EngineResult;
use crate::models::{AuditStep, format_won};

use super::rounding::round_to_won;

/// The split of a day's hours at the overtime threshold.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{DailyOvertimeSplit, split_daily_overtime};
/// use rust_decimal::Decimal;
///
/// let split = split_daily_overtime(Decimal::from(10), Decimal::from(8));
/// assert_eq!(split, DailyOvertimeSplit {
///     ordinary_hours: Decimal::from(8),
///     overtime_hours: Decimal::from(2),
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeSplit {
    /// Hours up to the threshold.
    pub ordinary_hours: Decimal,
    /// Hours beyond the threshold (can be zero).
    pub overtime_hours: Decimal,
}

/// Splits daily worked hours into ordinary and overtime portions.
pub fn split_daily_overtime(worked_hours: Decimal, threshold: Decimal) -> DailyOvertimeSplit {
    if worked_hours > threshold {
        DailyOvertimeSplit {
            ordinary_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    } else {
        DailyOvertimeSplit {
            ordinary_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

/// The result of an overtime pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimePayResult {
    /// The day's hours split at the threshold.
    pub split: DailyOvertimeSplit,
    /// Overtime hours projected to a month.
    pub monthly_overtime_hours: Decimal,
    /// Monthly overtime premium in KRW.
    pub amount: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly overtime premium.
///
/// Base pay already covers every worked hour at the ordinary rate, so only
/// the premium (`policy.premium_rate`, 50% by statute) is added here.
///
/// # Arguments
///
/// * `hourly_wage` - Hourly wage in KRW
/// * `daily_hours` - Net paid hours per working day
/// * `monthly_work_days` - Working days per month
/// * `policy` - Supplies the daily threshold and premium rate
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// - LSA Art. 50(2): 8 hours per day
/// - LSA Art. 56(1): 50% premium for extended work
///
/// # Examples
///
/// ## Day at the threshold (no overtime)
///
/// ```
/// use wage_engine::calculation::calculate_overtime_pay;
/// use wage_engine::config::WagePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let days = Decimal::from_str("21.725").unwrap();
/// let result = calculate_overtime_pay(10_000, Decimal::from(8), days, &WagePolicy::statutory(), 6).unwrap();
///
/// assert_eq!(result.split.overtime_hours, Decimal::ZERO);
/// assert_eq!(result.amount, 0);
/// ```
///
/// ## Day exceeding the threshold
///
/// ```
/// use wage_engine::calculation::calculate_overtime_pay;
/// use wage_engine::config::WagePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let days = Decimal::from_str("21.725").unwrap();
/// let result = calculate_overtime_pay(10_000, Decimal::from(11), days, &WagePolicy::statutory(), 6).unwrap();
///
/// // 3h x 21.725 days x 10,000 x 0.5
/// assert_eq!(result.split.overtime_hours, Decimal::from(3));
/// assert_eq!(result.amount, 325_875);
/// ```
pub fn calculate_overtime_pay(
    hourly_wage: u64,
    daily_hours: Decimal,
    monthly_work_days: Decimal,
    policy: &WagePolicy,
    step_number: u32,
) -> EngineResult<OvertimePayResult> {
    let threshold = policy.daily_overtime_threshold_hours;
    let split = split_daily_overtime(daily_hours, threshold);
    let monthly_overtime_hours = split.overtime_hours * monthly_work_days;

    let amount = round_to_won(
        Decimal::from(hourly_wage) * policy.premium_rate * monthly_overtime_hours,
    )?;

    let reasoning = if split.overtime_hours > Decimal::ZERO {
        format!(
            "{} hours per day exceeds {} hour threshold by {} hours; {} overtime hours per month at {} premium = {}",
            daily_hours.normalize(),
            threshold.normalize(),
            split.overtime_hours.normalize(),
            monthly_overtime_hours.normalize(),
            policy.premium_rate.normalize(),
            format_won(amount)
        )
    } else if daily_hours == threshold {
        format!(
            "{} hours per day equals {} hour threshold, no overtime triggered",
            daily_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours per day is under {} hour threshold, no overtime triggered",
            daily_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        clause_ref: "LSA 50(2), 56(1)".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage,
            "daily_hours": daily_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string(),
            "monthly_work_days": monthly_work_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "ordinary_hours": split.ordinary_hours.normalize().to_string(),
            "overtime_hours": split.overtime_hours.normalize().to_string(),
            "monthly_overtime_hours": monthly_overtime_hours.normalize().to_string(),
            "overtime_pay": amount
        }),
        reasoning,
    };

    Ok(OvertimePayResult {
        split,
        monthly_overtime_hours,
        amount,
        audit_step,
    })
}
