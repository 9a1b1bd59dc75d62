//! Error types for the wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the wage engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     field: "work_start_time".to_string(),
///     value: "9시".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time for 'work_start_time' ('9시'): expected HH:MM"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wall-clock time string could not be parsed as `HH:MM`.
    #[error("Invalid time for '{field}' ('{value}'): {message}")]
    InvalidTime {
        /// The schedule field holding the bad value.
        field: String,
        /// The rejected input.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// No minimum wage table is in force on the given date.
    #[error("Minimum wage not found for date {date}")]
    MinimumWageNotFound {
        /// The date for which the minimum wage was requested.
        date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_time_names_field_and_value() {
        let error = EngineError::InvalidTime {
            field: "work_end_time".to_string(),
            value: "25:00".to_string(),
            message: "hour must be between 0 and 23".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time for 'work_end_time' ('25:00'): hour must be between 0 and 23"
        );
    }

    #[test]
    fn test_minimum_wage_not_found_displays_date() {
        let error = EngineError::MinimumWageNotFound {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Minimum wage not found for date 2020-01-01"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "pay overflowed".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: pay overflowed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> EngineResult<()> {
            Err(EngineError::InvalidTime {
                field: "work_start_time".to_string(),
                value: "".to_string(),
                message: "empty".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
