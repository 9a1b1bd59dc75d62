//! Calculation logic for the wage engine.
//!
//! This module contains all the calculation functions for determining
//! monthly pay from a work schedule: `HH:MM` parsing and overnight span
//! handling, net daily hours, night-window hours, projection to a month,
//! base pay, weekly holiday pay, overtime pay, night pay, and the minimum
//! wage check.

mod base_pay;
mod clock_time;
mod duration;
mod minimum_wage;
mod monthly_projection;
mod night_hours;
mod night_pay;
mod overtime;
mod pay;
mod rounding;
mod weekly_holiday;

pub use base_pay::{BasePayResult, calculate_base_pay};
pub use clock_time::{ClockTime, END_TIME_FIELD, MINUTES_PER_DAY, START_TIME_FIELD, ShiftSpan};
pub use duration::{DailyHoursResult, calculate_daily_hours, duration};
pub use minimum_wage::{BELOW_MINIMUM_WAGE, MinimumWageCheck, check_minimum_wage};
pub use monthly_projection::{MonthlyProjection, project_monthly};
pub use night_hours::{NightHoursResult, calculate_night_hours, night_hours};
pub use night_pay::{NightPayResult, calculate_night_pay};
pub use overtime::{
    DailyOvertimeSplit, OvertimePayResult, calculate_overtime_pay, split_daily_overtime,
};
pub use pay::{calculate_pay, compute_pay};
pub use rounding::round_to_won;
pub use weekly_holiday::{WeeklyHolidayPayResult, calculate_weekly_holiday_pay};
