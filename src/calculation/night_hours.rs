//! Night-window hours calculation.
//!
//! This module measures how much of a shift falls inside the night premium
//! window (22:00-06:00 by statute). The window straddles midnight while the
//! shift may or may not, so the window is split at midnight and each part is
//! intersected with the shift's minute timeline:
//!
//! - window A, the evening part `[22:00, 24:00)`, i.e. `[1320, 1440)`;
//! - window B, the next day's `00:00-06:00`, i.e. `[1440, 1800)`. Since a
//!   shift always starts before 1440 this contributes
//!   `min(end - 1440, 360)` minutes when the shift ends past midnight.
//!
//! Only these two parts are counted. A shift that starts and ends between
//! midnight and 06:00 on the same day (e.g. 01:00-05:00) does not reach
//! either part and earns no night hours.

use rust_decimal::Decimal;

use crate::config::NightWindow;
use crate::error::EngineResult;
use crate::models::AuditStep;

use super::clock_time::{MINUTES_PER_DAY, ShiftSpan};
use super::duration::minutes_to_hours;

/// The result of measuring night-window hours for one working day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightHoursResult {
    /// Minutes of the shift inside the night window.
    pub night_minutes: u32,
    /// `night_minutes` expressed in hours.
    pub hours: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the hours of a shift that fall inside the night window.
///
/// Unpaid breaks are not subtracted: the premium is measured on the gross
/// overlap with the window.
///
/// # Arguments
///
/// * `span` - The shift laid out on the minute timeline
/// * `window` - The night premium window
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{ShiftSpan, calculate_night_hours};
/// use wage_engine::config::NightWindow;
/// use rust_decimal::Decimal;
///
/// // 21:00 -> 07:00: 22:00-24:00 (2h) + 00:00-06:00 (6h)
/// let span = ShiftSpan::parse("21:00", "07:00").unwrap();
/// let result = calculate_night_hours(&span, &NightWindow::statutory(), 1);
///
/// assert_eq!(result.night_minutes, 480);
/// assert_eq!(result.hours, Decimal::from(8));
/// ```
pub fn calculate_night_hours(
    span: &ShiftSpan,
    window: &NightWindow,
    step_number: u32,
) -> NightHoursResult {
    let segments: Vec<(i64, i64, u32)> = night_windows(window)
        .into_iter()
        .map(|(from, to)| (from, to, span.overlap_minutes(from, to)))
        .filter(|(_, _, minutes)| *minutes > 0)
        .collect();

    let night_minutes: u32 = segments.iter().map(|(_, _, minutes)| minutes).sum();
    let hours = minutes_to_hours(night_minutes);

    let reasoning = if segments.is_empty() {
        format!(
            "Shift does not overlap the {}-{} night window",
            window.start, window.end
        )
    } else {
        format!(
            "Shift overlaps the {}-{} night window for {} minutes ({} hours)",
            window.start,
            window.end,
            night_minutes,
            hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_hours".to_string(),
        rule_name: "Night Window Hours".to_string(),
        clause_ref: "LSA 56(3)".to_string(),
        input: serde_json::json!({
            "start_minutes": span.start_minutes(),
            "end_minutes": span.end_minutes(),
            "window_start": window.start.to_string(),
            "window_end": window.end.to_string()
        }),
        output: serde_json::json!({
            "overlaps": segments
                .iter()
                .map(|(from, to, minutes)| serde_json::json!({
                    "from": from,
                    "to": to,
                    "minutes": minutes
                }))
                .collect::<Vec<_>>(),
            "night_minutes": night_minutes,
            "night_hours": hours.normalize().to_string()
        }),
        reasoning,
    };

    NightHoursResult {
        night_minutes,
        hours,
        audit_step,
    }
}

/// Night-window hours for one day given `HH:MM` start and end times, using
/// the statutory 22:00–06:00 window.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::night_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(night_hours("21:00", "07:00").unwrap(), Decimal::from(8));
/// assert_eq!(night_hours("09:00", "18:00").unwrap(), Decimal::ZERO);
/// ```
pub fn night_hours(start: &str, end: &str) -> EngineResult<Decimal> {
    let span = ShiftSpan::parse(start, end)?;
    Ok(calculate_night_hours(&span, &NightWindow::statutory(), 1).hours)
}

/// Window A and window B on the timeline of a shift starting on day 0.
///
/// A window that wraps midnight splits into `[start, 24:00)` and the next
/// day's `[24:00, 24:00 + end)`. A window that does not wrap is counted on
/// the shift's own day and again on the next day.
fn night_windows(window: &NightWindow) -> [(i64, i64); 2] {
    let day = i64::from(MINUTES_PER_DAY);
    let start = i64::from(window.start.minutes());
    let end = i64::from(window.end.minutes());

    if end <= start {
        [(start, day), (day, day + end)]
    } else {
        [(start, end), (day + start, day + end)]
    }
}
