//! Configuration loading and management for the labor rules engine.
//!
//! This module provides functionality to load rule configurations from YAML
//! files: overtime and break thresholds, required pay stub fields, the
//! pay calculation tolerance, and the minimum wage table.
//!
//! # Example
//!
//! ```no_run
//! use labor_rules_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/california").unwrap();
//! println!("Loaded rules for: {}", config.config().jurisdiction.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    JurisdictionMetadata, LocalMinimumWage, MealBreakRules, MinimumWageTable, OvertimeRules,
    PayCalculationRules, PayStubRules, RequiredField, RestBreakRules, RulesConfig, RulesFile,
};
