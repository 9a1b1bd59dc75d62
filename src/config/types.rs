//! Configuration types for wage calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the statutory
//! defaults used when no configuration is supplied.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ClockTime;

/// Average number of weeks in a month (365.25 / 7 / 12, rounded to 3 places).
pub const AVERAGE_WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4345, 0, 0, false, 3);

/// Full-time weekly hours (LSA Art. 50(1)).
pub const STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Daily hours after which work counts as overtime (LSA Art. 50(2)).
pub const DAILY_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Minimum average weekly hours for weekly holiday pay (LSA Art. 18(3)).
pub const WEEKLY_HOLIDAY_ELIGIBILITY_HOURS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Paid hours of a full-time weekly rest day.
pub const WEEKLY_HOLIDAY_REFERENCE_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Additional rate paid on top of ordinary pay for overtime and night work
/// (LSA Art. 56).
pub const PREMIUM_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Metadata about the statute the policy encodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PolicyMetadata {
    /// Short identifier for the policy (e.g., "KR-LSA").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

/// The wall-clock window in which night premiums apply.
///
/// `start` after `end` means the window runs past midnight, as the
/// statutory 22:00–06:00 window does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Start of the night window.
    pub start: ClockTime,
    /// End of the night window.
    pub end: ClockTime,
}

impl NightWindow {
    /// The statutory 22:00–06:00 window (LSA Art. 56(3)).
    pub const fn statutory() -> Self {
        Self {
            start: ClockTime::from_minutes_unchecked(22 * 60),
            end: ClockTime::from_minutes_unchecked(6 * 60),
        }
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::statutory()
    }
}

/// The constants the pay rules are parameterized by.
///
/// Read from snake_case YAML keys and served to API clients in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WagePolicy {
    /// Weeks per month used to project weekly figures to a month.
    pub average_weeks_per_month: Decimal,
    /// Full-time weekly hours; the weekly holiday allowance is proportional
    /// to this.
    pub standard_weekly_hours: Decimal,
    /// Daily hours before overtime starts.
    pub daily_overtime_threshold_hours: Decimal,
    /// Weekly hours needed to earn weekly holiday pay.
    pub weekly_holiday_eligibility_hours: Decimal,
    /// Paid hours of a full-time weekly rest day.
    pub weekly_holiday_reference_hours: Decimal,
    /// Premium added on top of ordinary pay (0.5 for 150% total).
    pub premium_rate: Decimal,
    /// The night premium window.
    #[serde(default)]
    pub night_window: NightWindow,
}

impl WagePolicy {
    /// The policy encoded by the Labor Standards Act.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::config::WagePolicy;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let policy = WagePolicy::statutory();
    /// assert_eq!(policy.average_weeks_per_month, Decimal::from_str("4.345").unwrap());
    /// assert_eq!(policy.premium_rate, Decimal::from_str("0.5").unwrap());
    /// ```
    pub fn statutory() -> Self {
        Self {
            average_weeks_per_month: AVERAGE_WEEKS_PER_MONTH,
            standard_weekly_hours: STANDARD_WEEKLY_HOURS,
            daily_overtime_threshold_hours: DAILY_OVERTIME_THRESHOLD_HOURS,
            weekly_holiday_eligibility_hours: WEEKLY_HOLIDAY_ELIGIBILITY_HOURS,
            weekly_holiday_reference_hours: WEEKLY_HOLIDAY_REFERENCE_HOURS,
            premium_rate: PREMIUM_RATE,
            night_window: NightWindow::statutory(),
        }
    }
}

impl Default for WagePolicy {
    fn default() -> Self {
        Self::statutory()
    }
}

/// Policy configuration file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Statute metadata.
    pub metadata: PolicyMetadata,
    /// Calculation constants.
    pub policy: WagePolicy,
}

/// The statutory minimum wage in force from a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MinimumWageRate {
    /// The date from which this rate applies.
    pub effective_date: NaiveDate,
    /// Minimum hourly wage in KRW.
    pub hourly: u64,
    /// Published monthly equivalent (209 hours) in KRW.
    pub monthly_reference: u64,
}

/// The complete wage configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct WageConfig {
    /// Statute metadata.
    metadata: PolicyMetadata,
    /// Calculation constants.
    policy: WagePolicy,
    /// Minimum wage tables by effective date (sorted oldest first).
    minimum_wages: Vec<MinimumWageRate>,
}

impl WageConfig {
    /// Creates a new WageConfig from its component parts.
    pub fn new(
        metadata: PolicyMetadata,
        policy: WagePolicy,
        minimum_wages: Vec<MinimumWageRate>,
    ) -> Self {
        let mut sorted = minimum_wages;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            policy,
            minimum_wages: sorted,
        }
    }

    /// Returns the statute metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the calculation constants.
    pub fn policy(&self) -> &WagePolicy {
        &self.policy
    }

    /// Returns all minimum wage tables, oldest first.
    pub fn minimum_wages(&self) -> &[MinimumWageRate] {
        &self.minimum_wages
    }
}
