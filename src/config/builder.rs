//! Builder API for calculator configurations.

use crate::config::error::ConfigError;
use crate::config::CalculatorConfig;

/// Fluent builder for [`CalculatorConfig`].
///
/// Starts from the defaults; `build` validates the result and reports every
/// broken rule at once.
///
/// # Example
///
/// ```rust
/// use reckoner::config::CalculatorConfig;
///
/// let config = CalculatorConfig::builder()
///     .max_digits(12)
///     .rounding_precision(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_digits(), 12);
/// assert_eq!(config.max_display_length(), 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: CalculatorConfig,
}

impl ConfigBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum digits a single entry accepts
    pub fn max_digits(mut self, n: usize) -> Self {
        self.config.max_digits = n;
        self
    }

    /// Longest plain decimal string shown before rounding kicks in
    pub fn max_display_length(mut self, n: usize) -> Self {
        self.config.max_display_length = n;
        self
    }

    /// Magnitude at and above which results switch to exponential notation
    pub fn exponential_upper(mut self, threshold: f64) -> Self {
        self.config.exponential_upper = threshold;
        self
    }

    /// Nonzero magnitude below which results switch to exponential notation
    pub fn exponential_lower(mut self, threshold: f64) -> Self {
        self.config.exponential_lower = threshold;
        self
    }

    /// Mantissa digits after the point in exponential notation
    pub fn exponential_fraction_digits(mut self, n: usize) -> Self {
        self.config.exponential_fraction_digits = n;
        self
    }

    /// Significant digits kept when a plain result is too long
    pub fn rounding_precision(mut self, n: usize) -> Self {
        self.config.rounding_precision = n;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<CalculatorConfig, ConfigError> {
        self.config.checked()
    }
}
