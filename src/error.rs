//! Error types for the labor rules engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Malformed payroll fields are never errors (they are defaulted during
//! normalization); these variants cover configuration problems and
//! arithmetic that leaves the representable decimal range.

use thiserror::Error;

/// The main error type for the labor rules engine.
///
/// # Example
///
/// ```
/// use labor_rules_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
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

    /// A configuration value was parsed but is not usable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that failed validation.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A decimal operation inside a rule check overflowed.
    #[error("Arithmetic overflow in {rule} while computing {operation}")]
    ArithmeticOverflow {
        /// The rule check that was running.
        rule: &'static str,
        /// The quantity being computed.
        operation: &'static str,
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
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
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
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "overtime.daily_threshold_hours".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'overtime.daily_threshold_hours': must be greater than zero"
        );
    }

    #[test]
    fn test_arithmetic_overflow_displays_rule_and_operation() {
        let error = EngineError::ArithmeticOverflow {
            rule: "overtime",
            operation: "total hours",
        };
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow in overtime while computing total hours"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_overflow() -> EngineResult<()> {
            Err(EngineError::ArithmeticOverflow {
                rule: "pay_calculation",
                operation: "calculated total",
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_overflow()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
