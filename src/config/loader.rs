//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the wage
//! policy and minimum wage tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{MinimumWageRate, PolicyConfig, PolicyMetadata, WageConfig, WagePolicy};

/// Loads and provides access to wage configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the policy constants and minimum wages.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kr_lsa/
/// ├── policy.yaml          # Statute metadata and calculation constants
/// └── minimum_wages/
///     └── 2026-01-01.yaml  # Minimum wage effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kr_lsa").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let minimum = loader.get_minimum_wage(date).unwrap();
/// println!("Minimum wage: {}원", minimum.hourly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WageConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kr_lsa")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wage_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/kr_lsa")?;
    /// # Ok::<(), wage_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_config = Self::load_yaml::<PolicyConfig>(&policy_path)?;

        let minimum_wages_dir = path.join("minimum_wages");
        let minimum_wages = Self::load_minimum_wages(&minimum_wages_dir)?;

        let config = WageConfig::new(
            policy_config.metadata,
            policy_config.policy,
            minimum_wages,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all minimum wage files from the minimum wages directory.
    fn load_minimum_wages(dir: &Path) -> EngineResult<Vec<MinimumWageRate>> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<MinimumWageRate>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no minimum wage files found)", dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying wage configuration.
    pub fn config(&self) -> &WageConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the calculation constants.
    pub fn policy(&self) -> &WagePolicy {
        self.config.policy()
    }

    /// Gets the minimum wage in force on a given date.
    ///
    /// The method finds the most recent minimum wage table that is effective
    /// on or before the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wage_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/kr_lsa")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    /// let minimum = loader.get_minimum_wage(date)?;
    /// assert_eq!(minimum.hourly, 10_030);
    /// # Ok::<(), wage_engine::error::EngineError>(())
    /// ```
    pub fn get_minimum_wage(&self, date: NaiveDate) -> EngineResult<&MinimumWageRate> {
        self.config
            .minimum_wages()
            .iter()
            .rev()
            .find(|rate| rate.effective_date <= date)
            .ok_or(EngineError::MinimumWageNotFound { date })
    }
}
