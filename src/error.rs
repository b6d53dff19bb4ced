//! Error types for the Benefit Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rule sets or
//! computing a benefit.

use thiserror::Error;

/// The main error type for the Benefit Engine.
///
/// Calculators, the registry loader and the facade all return this type, so
/// callers branch on a single `Result` regardless of where a failure arose.
/// An unknown jurisdiction code is deliberately absent: lookups fall back to
/// the default rule set instead of failing.
///
/// # Example
///
/// ```
/// use benefit_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "monthly_salary".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'monthly_salary': must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A calculation input was missing, out of range, or produced an
    /// arithmetic overflow.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// Configuration file or directory was not found at the specified path.
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

    /// A rule set was structurally valid YAML but violates a rule-set invariant.
    #[error("Invalid rule set '{code}': {message}")]
    InvalidRuleSet {
        /// The jurisdiction code of the offending rule set.
        code: String,
        /// A description of the violated invariant.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by caller-supplied inputs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("overtime_hours", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid input 'overtime_hours': must be greater than zero"
        );
        assert!(error.is_invalid_input());
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/dir".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration file not found: /missing/dir");
        assert!(!error.is_invalid_input());
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/ae.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/ae.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rule_set_displays_code_and_message() {
        let error = EngineError::InvalidRuleSet {
            code: "AE".to_string(),
            message: "normal_rate must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rule set 'AE': normal_rate must be at least 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn rejects() -> EngineResult<()> {
            Err(EngineError::invalid_input("monthly_salary", "must be greater than zero"))
        }

        fn propagates() -> EngineResult<()> {
            rejects()?;
            Ok(())
        }

        assert!(propagates().unwrap_err().is_invalid_input());
    }
}
