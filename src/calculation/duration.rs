//! Daily worked hours calculation.
//!
//! This module computes the net paid hours of one working day: the gross
//! span of the shift less the unpaid break, floored at zero.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::clock_time::ShiftSpan;

/// The result of calculating the net hours worked in one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyHoursResult {
    /// Minutes between start and end, before breaks.
    pub gross_minutes: u32,
    /// Paid minutes after the unpaid break (never negative).
    pub net_minutes: u32,
    /// `net_minutes` expressed in hours.
    pub hours: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the net paid hours of one working day.
///
/// The unpaid break is subtracted from the gross span. A break longer than
/// the span yields zero hours, never a negative figure.
///
/// # Arguments
///
/// * `span` - The shift laid out on the minute timeline
/// * `break_minutes` - Unpaid break minutes
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{ShiftSpan, calculate_daily_hours};
/// use rust_decimal::Decimal;
///
/// let span = ShiftSpan::parse("09:00", "18:00").unwrap();
/// let result = calculate_daily_hours(&span, 60, 1);
///
/// assert_eq!(result.hours, Decimal::from(8));
/// assert_eq!(result.gross_minutes, 540);
/// ```
pub fn calculate_daily_hours(
    span: &ShiftSpan,
    break_minutes: u32,
    step_number: u32,
) -> DailyHoursResult {
    let gross_minutes = span.gross_minutes();
    let net_minutes = gross_minutes.saturating_sub(break_minutes);
    let hours = minutes_to_hours(net_minutes);

    let reasoning = if break_minutes > gross_minutes {
        format!(
            "{} minute break exceeds the {} minute shift, no paid hours",
            break_minutes, gross_minutes
        )
    } else if span.is_overnight() {
        format!(
            "Overnight shift of {} minutes less {} minute break = {} hours",
            gross_minutes,
            break_minutes,
            hours.normalize()
        )
    } else {
        format!(
            "{} minute shift less {} minute break = {} hours",
            gross_minutes,
            break_minutes,
            hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_hours".to_string(),
        rule_name: "Daily Worked Hours".to_string(),
        clause_ref: "LSA 50, 54".to_string(),
        input: serde_json::json!({
            "start_minutes": span.start_minutes(),
            "end_minutes": span.end_minutes(),
            "break_minutes": break_minutes
        }),
        output: serde_json::json!({
            "gross_minutes": gross_minutes,
            "net_minutes": net_minutes,
            "daily_hours": hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyHoursResult {
        gross_minutes,
        net_minutes,
        hours,
        audit_step,
    }
}

/// Net paid hours for one day given `HH:MM` start and end times.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::duration;
/// use rust_decimal::Decimal;
///
/// // Overnight: 8 gross hours less a one hour break
/// assert_eq!(duration("22:00", "06:00", 60).unwrap(), Decimal::from(7));
///
/// // Break longer than the shift floors at zero
/// assert_eq!(duration("09:00", "09:10", 60).unwrap(), Decimal::ZERO);
/// ```
pub fn duration(start: &str, end: &str, break_minutes: u32) -> EngineResult<Decimal> {
    let span = ShiftSpan::parse(start, end)?;
    Ok(calculate_daily_hours(&span, break_minutes, 1).hours)
}

pub(crate) fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_day_with_lunch_break() {
        assert_eq!(duration("09:00", "18:00", 60).unwrap(), dec("8"));
    }

    #[test]
    fn test_overnight_shift_wraps_past_midnight() {
        assert_eq!(duration("22:00", "06:00", 60).unwrap(), dec("7"));
    }

    #[test]
    fn test_break_exceeding_span_floors_at_zero() {
        assert_eq!(duration("09:00", "09:10", 60).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_break_equal_to_span_is_zero() {
        assert_eq!(duration("09:00", "10:00", 60).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_hours() {
        assert_eq!(duration("09:00", "13:30", 0).unwrap(), dec("4.5"));
        assert_eq!(duration("10:00", "10:45", 0).unwrap(), dec("0.75"));
    }

    #[test]
    fn test_equal_times_is_full_day() {
        assert_eq!(duration("08:00", "08:00", 0).unwrap(), dec("24"));
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        assert!(matches!(
            duration("9-00", "18:00", 60),
            Err(EngineError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_audit_step_for_day_shift() {
        let span = ShiftSpan::parse("09:00", "18:00").unwrap();
        let result = calculate_daily_hours(&span, 60, 1);

        assert_eq!(result.net_minutes, 480);
        assert_eq!(result.audit_step.step_number, 1);
        assert_eq!(result.audit_step.rule_id, "daily_hours");
        assert_eq!(result.audit_step.output["daily_hours"].as_str().unwrap(), "8");
        assert_eq!(result.audit_step.input["break_minutes"], 60);
        assert!(result.audit_step.reasoning.starts_with("540 minute shift"));
    }

    #[test]
    fn test_audit_reasoning_for_overnight_shift() {
        let span = ShiftSpan::parse("22:00", "06:00").unwrap();
        let result = calculate_daily_hours(&span, 60, 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.starts_with("Overnight shift"));
        assert_eq!(result.audit_step.input["end_minutes"], 1800);
    }

    #[test]
    fn test_audit_reasoning_when_break_exceeds_shift() {
        let span = ShiftSpan::parse("09:00", "09:10").unwrap();
        let result = calculate_daily_hours(&span, 60, 1);

        assert_eq!(result.net_minutes, 0);
        assert!(result.audit_step.reasoning.contains("no paid hours"));
    }
}
