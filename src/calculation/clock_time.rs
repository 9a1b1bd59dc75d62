//! Wall-clock time parsing and shift span arithmetic.
//!
//! This module converts `HH:MM` strings into minute-of-day offsets and lays a
//! working day out on a single minute timeline, moving the end past midnight
//! when the shift wraps.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkSchedule;

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Schedule field name used in errors for the start time.
pub const START_TIME_FIELD: &str = "workStartTime";

/// Schedule field name used in errors for the end time.
pub const END_TIME_FIELD: &str = "workEndTime";

/// A validated wall-clock time, stored as minutes after midnight.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::ClockTime;
///
/// let time = ClockTime::parse("workStartTime", "22:30").unwrap();
/// assert_eq!(time.minutes(), 1350);
/// assert_eq!(time.to_string(), "22:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Parses an `HH:MM` (24h) string.
    ///
    /// `field` names the input the value came from and is carried in the
    /// error so callers can point at the offending form field.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] if the value is not a one or two
    /// digit hour and a two digit minute separated by a single `:`, or if the
    /// hour or minute is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_engine::calculation::ClockTime;
    /// use wage_engine::error::EngineError;
    ///
    /// assert_eq!(ClockTime::parse("workEndTime", "9:05").unwrap().minutes(), 545);
    ///
    /// let err = ClockTime::parse("workEndTime", "24:00").unwrap_err();
    /// assert!(matches!(err, EngineError::InvalidTime { ref field, .. } if field == "workEndTime"));
    /// ```
    pub fn parse(field: &str, value: &str) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidTime {
            field: field.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        };

        let (hour, minute) = value
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;

        let hour = parse_digits(hour, 1..=2)
            .ok_or_else(|| invalid("hour must be 1-2 digits"))?;
        let minute = parse_digits(minute, 2..=2)
            .ok_or_else(|| invalid("minute must be 2 digits"))?;

        if hour > 23 {
            return Err(invalid("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(invalid("minute must be between 0 and 59"));
        }

        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Builds a time from a minute offset known to be below 1440.
    pub(crate) const fn from_minutes_unchecked(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Minutes after midnight (0..1440).
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// The hour component (0..24).
    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    /// The minute component (0..60).
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }
}

fn parse_digits(s: &str, len: RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("time", &value).map_err(|e| e.to_string())
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A working day laid out on one minute timeline.
///
/// `start_minutes` is the start's minute-of-day. When the end is at or
/// before the start the shift wraps past midnight and `end_minutes` is moved
/// forward a day, so `end_minutes > start_minutes` always holds.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{ClockTime, ShiftSpan};
///
/// let start = ClockTime::parse("workStartTime", "22:00").unwrap();
/// let end = ClockTime::parse("workEndTime", "06:00").unwrap();
/// let span = ShiftSpan::new(start, end);
///
/// assert!(span.is_overnight());
/// assert_eq!(span.start_minutes(), 1320);
/// assert_eq!(span.end_minutes(), 1800);
/// assert_eq!(span.gross_minutes(), 480);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftSpan {
    start_minutes: u32,
    end_minutes: u32,
}

impl ShiftSpan {
    /// Lays out a shift, wrapping the end past midnight when `end <= start`.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        let start_minutes = start.minutes();
        let end_minutes = if end.minutes() <= start_minutes {
            end.minutes() + MINUTES_PER_DAY
        } else {
            end.minutes()
        };

        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Parses the start and end times of a schedule into a span.
    pub fn from_schedule(schedule: &WorkSchedule) -> EngineResult<Self> {
        Self::parse(&schedule.work_start_time, &schedule.work_end_time)
    }

    /// Parses `HH:MM` start and end strings into a span.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        let start = ClockTime::parse(START_TIME_FIELD, start)?;
        let end = ClockTime::parse(END_TIME_FIELD, end)?;
        Ok(Self::new(start, end))
    }

    /// Start offset in minutes.
    pub fn start_minutes(&self) -> u32 {
        self.start_minutes
    }

    /// End offset in minutes, past 1440 for overnight shifts.
    pub fn end_minutes(&self) -> u32 {
        self.end_minutes
    }

    /// Length of the shift before breaks, in minutes.
    pub fn gross_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }

    /// Whether the shift ends on the following day.
    pub fn is_overnight(&self) -> bool {
        self.end_minutes > MINUTES_PER_DAY
    }

    /// Minutes of the shift falling inside `[from, to)` on the same timeline.
    pub fn overlap_minutes(&self, from: i64, to: i64) -> u32 {
        let start = i64::from(self.start_minutes).max(from);
        let end = i64::from(self.end_minutes).min(to);
        (end - start).max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ClockTime {
        ClockTime::parse("test", s).unwrap()
    }

    fn invalid_message(value: &str) -> String {
        match ClockTime::parse("workStartTime", value) {
            Err(EngineError::InvalidTime { field, message, .. }) => {
                assert_eq!(field, "workStartTime");
                message
            }
            other => panic!("Expected InvalidTime for {:?}, got {:?}", value, other),
        }
    }

    #[test]
    fn test_parse_minute_of_day() {
        assert_eq!(time("00:00").minutes(), 0);
        assert_eq!(time("09:00").minutes(), 540);
        assert_eq!(time("18:30").minutes(), 1110);
        assert_eq!(time("23:59").minutes(), 1439);
    }

    #[test]
    fn test_parse_accepts_single_digit_hour_and_whitespace() {
        assert_eq!(time("9:00").minutes(), 540);
        assert_eq!(time(" 07:15 ").minutes(), 435);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(invalid_message("0900"), "expected HH:MM");
        assert_eq!(invalid_message(""), "expected HH:MM");
    }

    #[test]
    fn test_parse_rejects_non_numeric_components() {
        assert_eq!(invalid_message("ab:00"), "hour must be 1-2 digits");
        assert_eq!(invalid_message("09:xx"), "minute must be 2 digits");
        assert_eq!(invalid_message("09:00:00"), "minute must be 2 digits");
        assert_eq!(invalid_message("-1:00"), "hour must be 1-2 digits");
        assert_eq!(invalid_message(":30"), "hour must be 1-2 digits");
    }

    #[test]
    fn test_parse_requires_two_digit_minutes() {
        assert_eq!(invalid_message("6:5"), "minute must be 2 digits");
        assert_eq!(invalid_message("09:5"), "minute must be 2 digits");
        assert_eq!(invalid_message("09:"), "minute must be 2 digits");
        assert_eq!(time("6:05").minutes(), 365);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(invalid_message("24:00"), "hour must be between 0 and 23");
        assert_eq!(invalid_message("12:60"), "minute must be between 0 and 59");
    }

    #[test]
    fn test_display_pads_components() {
        assert_eq!(time("6:05").to_string(), "06:05");
        assert_eq!(time("22:00").to_string(), "22:00");
    }

    #[test]
    fn test_clock_time_serde_uses_hh_mm_strings() {
        let json = serde_json::to_string(&time("06:00")).unwrap();
        assert_eq!(json, "\"06:00\"");

        let parsed: ClockTime = serde_json::from_str("\"22:00\"").unwrap();
        assert_eq!(parsed.minutes(), 1320);

        assert!(serde_json::from_str::<ClockTime>("\"22시\"").is_err());
    }

    #[test]
    fn test_day_shift_does_not_wrap() {
        let span = ShiftSpan::new(time("09:00"), time("18:00"));
        assert!(!span.is_overnight());
        assert_eq!(span.end_minutes(), 1080);
        assert_eq!(span.gross_minutes(), 540);
    }

    #[test]
    fn test_end_before_start_wraps() {
        let span = ShiftSpan::new(time("21:00"), time("07:00"));
        assert!(span.is_overnight());
        assert_eq!(span.start_minutes(), 1260);
        assert_eq!(span.end_minutes(), 1860);
        assert_eq!(span.gross_minutes(), 600);
    }

    #[test]
    fn test_equal_start_and_end_is_a_full_day() {
        let span = ShiftSpan::new(time("09:00"), time("09:00"));
        assert_eq!(span.gross_minutes(), MINUTES_PER_DAY);
    }

    #[test]
    fn test_every_span_ends_after_it_starts() {
        for start in (0..MINUTES_PER_DAY).step_by(15) {
            for end in (0..MINUTES_PER_DAY).step_by(15) {
                let span = ShiftSpan::new(
                    ClockTime::from_minutes_unchecked(start),
                    ClockTime::from_minutes_unchecked(end),
                );
                assert!(span.end_minutes() > span.start_minutes());
                assert!(span.gross_minutes() <= MINUTES_PER_DAY);
            }
        }
    }

    #[test]
    fn test_end_at_midnight_wraps_to_1440() {
        let span = ShiftSpan::new(time("18:00"), time("00:00"));
        assert_eq!(span.end_minutes(), 1440);
        assert_eq!(span.gross_minutes(), 360);
        assert!(!span.is_overnight());
    }

    #[test]
    fn test_parse_reports_offending_field() {
        match ShiftSpan::parse("09:00", "6pm") {
            Err(EngineError::InvalidTime { field, value, .. }) => {
                assert_eq!(field, END_TIME_FIELD);
                assert_eq!(value, "6pm");
            }
            other => panic!("Expected InvalidTime, got {:?}", other),
        }

        match ShiftSpan::parse("nine", "18:00") {
            Err(EngineError::InvalidTime { field, .. }) => assert_eq!(field, START_TIME_FIELD),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_from_schedule() {
        let schedule = WorkSchedule::default();
        let span = ShiftSpan::from_schedule(&schedule).unwrap();
        assert_eq!(span.start_minutes(), 540);
        assert_eq!(span.end_minutes(), 1080);
    }

    #[test]
    fn test_overlap_minutes() {
        let span = ShiftSpan::new(time("21:00"), time("07:00"));
        assert_eq!(span.overlap_minutes(1320, 1440), 120);
        assert_eq!(span.overlap_minutes(1440, 1800), 360);
        assert_eq!(span.overlap_minutes(-120, 360), 0);
        assert_eq!(span.overlap_minutes(0, 1260), 0);
    }
}
