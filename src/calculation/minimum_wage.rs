//! Minimum wage check.
//!
//! A wage below the statutory minimum does not stop the calculation; it is
//! reported as a warning so the contract form can flag it.

use crate::config::MinimumWageRate;
use crate::models::{AuditStep, AuditWarning, format_won};

/// Warning code raised when the hourly wage is below the minimum.
pub const BELOW_MINIMUM_WAGE: &str = "BELOW_MINIMUM_WAGE";

/// The result of comparing an hourly wage with the minimum wage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumWageCheck {
    /// Whether the wage is at or above the minimum.
    pub meets_minimum: bool,
    /// How far below the minimum the wage is, in KRW per hour.
    pub shortfall: u64,
    /// Set when the wage is below the minimum.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Checks an hourly wage against the minimum wage in force.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::check_minimum_wage;
/// use wage_engine::config::MinimumWageRate;
/// use chrono::NaiveDate;
///
/// let minimum = MinimumWageRate {
///     effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     hourly: 10_320,
///     monthly_reference: 2_156_880,
/// };
///
/// let check = check_minimum_wage(10_000, &minimum, 9);
/// assert!(!check.meets_minimum);
/// assert_eq!(check.shortfall, 320);
/// assert!(check.warning.is_some());
/// ```
pub fn check_minimum_wage(
    hourly_wage: u64,
    minimum: &MinimumWageRate,
    step_number: u32,
) -> MinimumWageCheck {
    let meets_minimum = hourly_wage >= minimum.hourly;
    let shortfall = minimum.hourly.saturating_sub(hourly_wage);

    let warning = (!meets_minimum).then(|| AuditWarning {
        code: BELOW_MINIMUM_WAGE.to_string(),
        message: format!(
            "Hourly wage {} is {} below the minimum wage of {} effective {}",
            format_won(hourly_wage),
            format_won(shortfall),
            format_won(minimum.hourly),
            minimum.effective_date
        ),
        severity: "high".to_string(),
    });

    let reasoning = if meets_minimum {
        format!(
            "{} meets the {} minimum wage effective {}",
            format_won(hourly_wage),
            format_won(minimum.hourly),
            minimum.effective_date
        )
    } else {
        format!(
            "{} is below the {} minimum wage effective {}",
            format_won(hourly_wage),
            format_won(minimum.hourly),
            minimum.effective_date
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_wage_check".to_string(),
        rule_name: "Minimum Wage Check".to_string(),
        clause_ref: "MWA 6(1)".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage,
            "minimum_hourly": minimum.hourly,
            "effective_date": minimum.effective_date.to_string()
        }),
        output: serde_json::json!({
            "meets_minimum": meets_minimum,
            "shortfall": shortfall
        }),
        reasoning,
    };

    MinimumWageCheck {
        meets_minimum,
        shortfall,
        warning,
        audit_step,
    }
}
