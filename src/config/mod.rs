//! Configuration loading and management for the wage engine.
//!
//! This module provides functionality to load the wage policy and the dated
//! minimum wage tables from YAML files, and the statutory defaults used when
//! no configuration directory is involved.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr_lsa").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AVERAGE_WEEKS_PER_MONTH, DAILY_OVERTIME_THRESHOLD_HOURS, MinimumWageRate, NightWindow,
    PREMIUM_RATE, PolicyConfig, PolicyMetadata, STANDARD_WEEKLY_HOURS,
    WEEKLY_HOLIDAY_ELIGIBILITY_HOURS, WEEKLY_HOLIDAY_REFERENCE_HOURS, WageConfig, WagePolicy,
};
