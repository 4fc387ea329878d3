//! Calculator limits and display rules.
//!
//! A configuration is a plain value. It can be built fluently, loaded from a
//! TOML document, or taken from `Default`. Fields are private, so every
//! configuration a calculator sees has passed validation. Validation uses Stillwater's
//! `Validation` type so that every broken rule is reported together rather
//! than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use reckoner::config::CalculatorConfig;
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     max_digits = 10
//!     exponential_upper = 1e8
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.max_digits(), 10);
//! assert_eq!(config.exponential_upper(), 1e8);
//! assert_eq!(config.rounding_precision(), 10);
//! ```

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Limits and display rules for one calculator.
///
/// Deserializing goes through the same validation as the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct CalculatorConfig {
    max_digits: usize,
    max_display_length: usize,
    exponential_upper: f64,
    exponential_lower: f64,
    exponential_fraction_digits: usize,
    rounding_precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        ConfigFile::default().into_config()
    }
}

/// Unvalidated configuration as written in a file. Missing keys take their
/// defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    max_digits: usize,
    max_display_length: usize,
    exponential_upper: f64,
    exponential_lower: f64,
    exponential_fraction_digits: usize,
    rounding_precision: usize,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            max_digits: 15,
            max_display_length: 15,
            exponential_upper: 1e10,
            exponential_lower: 1e-6,
            exponential_fraction_digits: 6,
            rounding_precision: 10,
        }
    }
}

impl ConfigFile {
    fn into_config(self) -> CalculatorConfig {
        CalculatorConfig {
            max_digits: self.max_digits,
            max_display_length: self.max_display_length,
            exponential_upper: self.exponential_upper,
            exponential_lower: self.exponential_lower,
            exponential_fraction_digits: self.exponential_fraction_digits,
            rounding_precision: self.rounding_precision,
        }
    }
}

impl TryFrom<ConfigFile> for CalculatorConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        file.into_config().checked()
    }
}

impl CalculatorConfig {
    /// Start a builder from the default configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(input)?;
        file.into_config().checked()
    }

    /// Maximum digit characters in one entry
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Longest plain decimal string shown before rounding
    pub fn max_display_length(&self) -> usize {
        self.max_display_length
    }

    /// Magnitude at and above which exponential notation is used
    pub fn exponential_upper(&self) -> f64 {
        self.exponential_upper
    }

    /// Nonzero magnitude below which exponential notation is used
    pub fn exponential_lower(&self) -> f64 {
        self.exponential_lower
    }

    /// Mantissa digits after the point in exponential notation
    pub fn exponential_fraction_digits(&self) -> usize {
        self.exponential_fraction_digits
    }

    /// Significant digits kept when a plain result is too long
    pub fn rounding_precision(&self) -> usize {
        self.rounding_precision
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if self.max_digits == 0 {
            checks.push(Validation::fail(ConfigViolation::ZeroMaxDigits));
        }

        if self.max_display_length == 0 {
            checks.push(Validation::fail(ConfigViolation::ZeroDisplayLength));
        }

        if !(1..=17).contains(&self.rounding_precision) {
            checks.push(Validation::fail(
                ConfigViolation::RoundingPrecisionOutOfRange {
                    value: self.rounding_precision,
                },
            ));
        }

        if self.exponential_fraction_digits > 17 {
            checks.push(Validation::fail(ConfigViolation::FractionDigitsOutOfRange {
                value: self.exponential_fraction_digits,
            }));
        }

        let lower = self.exponential_lower;
        let upper = self.exponential_upper;
        if !(lower.is_finite() && upper.is_finite() && 0.0 < lower && lower < upper) {
            checks.push(Validation::fail(ConfigViolation::InvalidThresholds {
                lower,
                upper,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub(crate) fn checked(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
