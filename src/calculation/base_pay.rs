//! Base pay calculation.
//!
//! Base pay (기본급) is the hourly wage times the projected monthly hours.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, format_won};

use super::rounding::round_to_won;

/// The result of a base pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePayResult {
    /// Monthly base pay in KRW.
    pub amount: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly base pay.
///
/// # Arguments
///
/// * `hourly_wage` - Hourly wage in KRW
/// * `monthly_hours` - Projected paid hours per month
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use wage_engine::calculation::calculate_base_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_base_pay(10_360, Decimal::from_str("173.8").unwrap(), 4).unwrap();
/// assert_eq!(result.amount, 1_800_568);
/// ```
pub fn calculate_base_pay(
    hourly_wage: u64,
    monthly_hours: Decimal,
    step_number: u32,
) -> EngineResult<BasePayResult> {
    let amount = round_to_won(Decimal::from(hourly_wage) * monthly_hours)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        clause_ref: "LSA 2(1)".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage,
            "monthly_hours": monthly_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_pay": amount
        }),
        reasoning: format!(
            "{} x {} hours = {}",
            format_won(hourly_wage),
            monthly_hours.normalize(),
            format_won(amount)
        ),
    };

    Ok(BasePayResult { amount, audit_step })
}
