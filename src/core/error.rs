//! Calculation error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while evaluating a pending operation.
///
/// The `Display` output is the exact message the calculator shows while it
/// sits in the error state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcError {
    /// The divisor of a division was zero.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The result was NaN, infinite, or outside the safe integer range.
    #[error("Number too large")]
    NumberTooLarge,

    /// Any other failure. Also the classification of unknown error codes.
    #[error("Calculation error")]
    Calculation,
}

impl CalcError {
    /// Classify a symbolic error code.
    ///
    /// Unknown codes classify as [`CalcError::Calculation`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::core::CalcError;
    ///
    /// assert_eq!(CalcError::from_code("DIVIDE_BY_ZERO"), CalcError::DivideByZero);
    /// assert_eq!(CalcError::from_code("UNKNOWN_ERROR"), CalcError::Calculation);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code {
            "DIVIDE_BY_ZERO" => Self::DivideByZero,
            "NUMBER_TOO_LARGE" => Self::NumberTooLarge,
            _ => Self::Calculation,
        }
    }

    /// Symbolic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivideByZero => "DIVIDE_BY_ZERO",
            Self::NumberTooLarge => "NUMBER_TOO_LARGE",
            Self::Calculation => "CALCULATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_display_text() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::NumberTooLarge.to_string(), "Number too large");
        assert_eq!(CalcError::Calculation.to_string(), "Calculation error");
    }

    #[test]
    fn codes_round_trip() {
        for err in [
            CalcError::DivideByZero,
            CalcError::NumberTooLarge,
            CalcError::Calculation,
        ] {
            assert_eq!(CalcError::from_code(err.code()), err);
        }
    }

    #[test]
    fn unknown_codes_are_calculation_errors() {
        assert_eq!(CalcError::from_code("UNKNOWN_ERROR"), CalcError::Calculation);
        assert_eq!(CalcError::from_code("INVALID_NUMBER"), CalcError::Calculation);
        assert_eq!(CalcError::from_code(""), CalcError::Calculation);
    }
}
