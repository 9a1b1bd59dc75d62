//! Night pay calculation.
//!
//! Every hour inside the night window earns the premium, however few there
//! are; unlike weekly holiday pay there is no eligibility threshold.

use rust_decimal::Decimal;

use crate::config::WagePolicy;
use crate::error::EngineResult;
use crate::models::{AuditStep, format_won};

use super::rounding::round_to_won;

/// The result of a night pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightPayResult {
    /// Night-window hours projected to a month.
    pub monthly_night_hours: Decimal,
    /// Monthly night premium in KRW.
    pub amount: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly night work premium.
///
/// # Arguments
///
/// * `hourly_wage` - Hourly wage in KRW
/// * `daily_night_hours` - Hours per working day inside the night window
/// * `monthly_work_days` - Working days per month
/// * `policy` - Supplies the premium rate
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use wage_engine::calculation::calculate_night_pay;
/// use wage_engine::config::WagePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let days = Decimal::from_str("21.725").unwrap();
/// let result = calculate_night_pay(10_000, Decimal::from(8), days, &WagePolicy::statutory(), 7).unwrap();
///
/// // 8h x 21.725 days x 10,000 x 0.5
/// assert_eq!(result.amount, 869_000);
/// ```
pub fn calculate_night_pay(
    hourly_wage: u64,
    daily_night_hours: Decimal,
    monthly_work_days: Decimal,
    policy: &WagePolicy,
    step_number: u32,
) -> EngineResult<NightPayResult> {
    let monthly_night_hours = daily_night_hours * monthly_work_days;
    let amount = round_to_won(
        Decimal::from(hourly_wage) * policy.premium_rate * monthly_night_hours,
    )?;

    let reasoning = if monthly_night_hours > Decimal::ZERO {
        format!(
            "{} night hours per month at {} premium = {}",
            monthly_night_hours.normalize(),
            policy.premium_rate.normalize(),
            format_won(amount)
        )
    } else {
        "No hours inside the night window".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_pay".to_string(),
        rule_name: "Night Work Pay".to_string(),
        clause_ref: "LSA 56(3)".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage,
            "daily_night_hours": daily_night_hours.normalize().to_string(),
            "monthly_work_days": monthly_work_days.normalize().to_string(),
            "premium_rate": policy.premium_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_night_hours": monthly_night_hours.normalize().to_string(),
            "night_pay": amount
        }),
        reasoning,
    };

    Ok(NightPayResult {
        monthly_night_hours,
        amount,
        audit_step,
    })
}
