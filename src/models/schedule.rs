//! Work schedule model and related types.
//!
//! This module defines the [`WorkSchedule`] struct describing one
//! representative working day of a standard labor contract, and the
//! [`WorkDay`] weekday vocabulary it is built from.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A day of the week on which the worker is scheduled.
///
/// Serialized using the Korean single-character labels the contract forms
/// use (`"월"` through `"일"`).
///
/// # Example
///
/// ```
/// use wage_engine::models::WorkDay;
///
/// let day: WorkDay = "토".parse().unwrap();
/// assert_eq!(day, WorkDay::Saturday);
/// assert_eq!(day.to_string(), "토");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkDay {
    /// 월요일
    #[serde(rename = "월")]
    Monday,
    /// 화요일
    #[serde(rename = "화")]
    Tuesday,
    /// 수요일
    #[serde(rename = "수")]
    Wednesday,
    /// 목요일
    #[serde(rename = "목")]
    Thursday,
    /// 금요일
    #[serde(rename = "금")]
    Friday,
    /// 토요일
    #[serde(rename = "토")]
    Saturday,
    /// 일요일
    #[serde(rename = "일")]
    Sunday,
}

impl WorkDay {
    /// All seven days, Monday first.
    pub const ALL: [WorkDay; 7] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
        WorkDay::Saturday,
        WorkDay::Sunday,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [WorkDay; 5] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
    ];

    /// Returns the Korean label for this day.
    pub fn label(&self) -> &'static str {
        match self {
            WorkDay::Monday => "월",
            WorkDay::Tuesday => "화",
            WorkDay::Wednesday => "수",
            WorkDay::Thursday => "목",
            WorkDay::Friday => "금",
            WorkDay::Saturday => "토",
            WorkDay::Sunday => "일",
        }
    }
}

impl fmt::Display for WorkDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkDay::ALL
            .iter()
            .copied()
            .find(|day| day.label() == s.trim())
            .ok_or_else(|| format!("Unknown work day label: {}", s))
    }
}

/// The input to a pay calculation: one representative day of work,
/// repeated on each of `work_days`.
///
/// Times are kept as the `HH:MM` strings the contract form produces; they
/// are validated when the calculation parses them, so a malformed value is
/// reported against the field it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    /// Hourly wage in KRW.
    pub hourly_wage: u64,
    /// Days of the week the worker is scheduled. Duplicates collapse.
    pub work_days: BTreeSet<WorkDay>,
    /// Start of the working day, `HH:MM` (24h).
    pub work_start_time: String,
    /// End of the working day, `HH:MM` (24h). At or before the start means
    /// the shift runs past midnight.
    pub work_end_time: String,
    /// Unpaid break minutes taken during the day.
    #[serde(default)]
    pub break_minutes: u32,
}

impl WorkSchedule {
    /// Number of scheduled days per week.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_engine::models::WorkSchedule;
    ///
    /// let schedule = WorkSchedule::default();
    /// assert_eq!(schedule.days_per_week(), 5);
    /// ```
    pub fn days_per_week(&self) -> u32 {
        self.work_days.len() as u32
    }
}

impl Default for WorkSchedule {
    /// The contract form's starting values: 10,360원, 월–금, 09:00–18:00 with
    /// a one hour break.
    fn default() -> Self {
        Self {
            hourly_wage: 10_360,
            work_days: WorkDay::WEEKDAYS.into_iter().collect(),
            work_start_time: "09:00".to_string(),
            work_end_time: "18:00".to_string(),
            break_minutes: 60,
        }
    }
}
