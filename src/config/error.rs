//! Configuration error types.

use thiserror::Error;

/// A single rule a configuration broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("max_digits must be at least 1")]
    ZeroMaxDigits,

    #[error("max_display_length must be at least 1")]
    ZeroDisplayLength,

    #[error("rounding_precision must be within 1..=17 (got {value})")]
    RoundingPrecisionOutOfRange { value: usize },

    #[error("exponential_fraction_digits must be at most 17 (got {value})")]
    FractionDigitsOutOfRange { value: usize },

    #[error("exponential thresholds must satisfy 0 < lower < upper (got lower={lower}, upper={upper})")]
    InvalidThresholds { lower: f64, upper: f64 },
}

/// Errors that can occur when building or loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more values broke a rule; every violation is listed
    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
