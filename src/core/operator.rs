//! Binary arithmetic operators.
//!
//! Operators are plain values; applying one is a pure function of its two
//! operands under IEEE double-precision semantics.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four keypad operators.
///
/// # Example
///
/// ```rust
/// use reckoner::core::Operator;
///
/// let op: Operator = "*".parse().unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.apply(6.0, 7.0), Ok(42.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol used on the keypad.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by zero (of either sign) is refused instead of producing an
    /// infinity. No range validation happens here; see
    /// [`evaluate`](super::evaluate) for that.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string is not one of `+ - * /`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

/// Check whether `symbol` names a supported operator.
pub fn is_valid_operator(symbol: &str) -> bool {
    Operator::from_symbol(symbol).is_some()
}
