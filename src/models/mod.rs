//! Core data models for the wage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod currency;
mod schedule;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, HoursSummary, PayBreakdown,
    PayCalculation,
};
pub use currency::format_won;
pub use schedule::{WorkDay, WorkSchedule};
