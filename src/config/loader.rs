//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{MinimumWageTable, RulesConfig, RulesFile};

/// Loads and validates rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/california/
/// ├── rules.yaml         # Thresholds, multipliers, required pay stub fields
/// └── minimum_wage.yaml  # State and local minimum wage table
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_rules_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/california").unwrap();
/// println!("Loaded rules for: {}", loader.config().jurisdiction.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RulesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or is invalid YAML, or if a
    /// value fails validation (see [`ConfigLoader::validate`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RulesFile>(&path.join("rules.yaml"))?;
        let minimum_wage = Self::load_yaml::<MinimumWageTable>(&path.join("minimum_wage.yaml"))?;

        let config = RulesConfig::new(rules, minimum_wage);
        Self::validate(&config)?;

        Ok(Self { config })
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: RulesConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
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

    /// Checks that every value is usable by the rule checks.
    ///
    /// Thresholds and rates must be positive, multipliers at least 1,
    /// fractions within `[0, 1]`, and local jurisdiction codes unique.
    pub fn validate(config: &RulesConfig) -> EngineResult<()> {
        let overtime = &config.overtime;
        require_positive("overtime.daily_threshold_hours", overtime.daily_threshold_hours)?;
        require_positive("overtime.weekly_threshold_hours", overtime.weekly_threshold_hours)?;
        require_positive(
            "overtime.daily_double_time_threshold_hours",
            overtime.daily_double_time_threshold_hours,
        )?;
        require_multiplier("overtime.overtime_multiplier", overtime.overtime_multiplier)?;
        require_multiplier("overtime.double_time_multiplier", overtime.double_time_multiplier)?;

        let meal = &config.meal_breaks;
        require_positive("meal_breaks.first_threshold_hours", meal.first_threshold_hours)?;
        require_positive("meal_breaks.second_threshold_hours", meal.second_threshold_hours)?;
        if meal.second_threshold_hours <= meal.first_threshold_hours {
            return Err(invalid(
                "meal_breaks.second_threshold_hours",
                "must be greater than first_threshold_hours",
            ));
        }

        require_positive("rest_breaks.interval_hours", config.rest_breaks.interval_hours)?;
        require_positive("rest_breaks.duration_minutes", config.rest_breaks.duration_minutes)?;

        let threshold = config.pay_stub.low_confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(invalid(
                "pay_stub.low_confidence_threshold",
                "must be between 0 and 1",
            ));
        }
        if config.pay_stub.required_fields.is_empty() {
            return Err(invalid("pay_stub.required_fields", "must not be empty"));
        }

        let tolerance = config.pay_calculation.tolerance;
        if tolerance < Decimal::ZERO || tolerance > Decimal::ONE {
            return Err(invalid("pay_calculation.tolerance", "must be between 0 and 1"));
        }

        require_positive("minimum_wage.state_rate", config.minimum_wage.state_rate)?;
        let mut seen = HashSet::new();
        for local in &config.minimum_wage.local_rates {
            require_positive("minimum_wage.local_rates.rate", local.rate)?;
            if local.code.trim().is_empty() {
                return Err(invalid("minimum_wage.local_rates.code", "must not be empty"));
            }
            if !seen.insert(local.code.as_str()) {
                return Err(invalid(
                    "minimum_wage.local_rates.code",
                    format!("duplicate jurisdiction code {}", local.code),
                ));
            }
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RulesConfig {
        self.config
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn require_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(invalid(field, format!("must be greater than zero (got {})", value)))
    }
}

fn require_multiplier(field: &str, value: Decimal) -> EngineResult<()> {
    if value >= Decimal::ONE {
        Ok(())
    } else {
        Err(invalid(field, format!("must be at least 1 (got {})", value)))
    }
}
