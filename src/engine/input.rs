//! Semantic input events.

use crate::core::Operator;
use std::fmt;
use std::str::FromStr;

/// One press on the calculator keypad, already stripped of how it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
}

impl Input {
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }
}

/// Error returned when a control label maps to no input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown keypad label: {0:?}")]
pub struct UnknownInput(pub String);

/// Parse a control label such as `"7"`, `"."`, `"*"`, `"="` or `"clear"`.
///
/// # Example
///
/// ```rust
/// use reckoner::core::Operator;
/// use reckoner::engine::Input;
///
/// assert_eq!("7".parse(), Ok(Input::Digit('7')));
/// assert_eq!("/".parse(), Ok(Input::Operator(Operator::Divide)));
/// assert_eq!("C".parse(), Ok(Input::Clear));
/// assert!("%".parse::<Input>().is_err());
/// ```
impl FromStr for Input {
    type Err = UnknownInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Ok(Self::Digit(c));
            }
        }

        if let Some(op) = Operator::from_symbol(s) {
            return Ok(Self::Operator(op));
        }

        match s {
            "=" => Ok(Self::Equals),
            "C" | "c" | "clear" => Ok(Self::Clear),
            _ => Err(UnknownInput(s.to_string())),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(c) => write!(f, "{c}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}
