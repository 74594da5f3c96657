//! California Labor Rules Engine
//!
//! This crate analyzes payroll fields extracted from a pay stub and reports
//! likely violations of California wage-and-hour law: overtime and double
//! time, meal and rest breaks, minimum wage, itemized wage statement
//! completeness, and gross pay consistency.
//!
//! # Example
//!
//! ```
//! use labor_rules_engine::models::{ExtractedField, FieldMap, LocationInfo};
//! use labor_rules_engine::rules::RulesEngine;
//!
//! let mut fields = FieldMap::new();
//! fields.insert("regularHours".to_string(), ExtractedField::text("40"));
//! fields.insert("hourlyRate".to_string(), ExtractedField::text("$17.50"));
//!
//! let engine = RulesEngine::default();
//! let result = engine.analyze(&fields, Some(&LocationInfo::city("San Francisco")));
//! assert!(result.summary.high_severity > 0);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalization;
pub mod rules;
