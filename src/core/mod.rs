//! Pure arithmetic core.
//!
//! This module contains everything the calculator computes without touching
//! its own state:
//! - Operators and their IEEE semantics
//! - Number parsing and safe-range validation
//! - Display formatting
//! - The error taxonomy and the `evaluate` function tying them together
//!
//! All logic in this module is pure (no side effects). The stateful shell
//! lives in [`crate::engine`].

mod error;
mod evaluate;
mod format;
mod number;
mod operator;

pub use error::CalcError;
pub use evaluate::evaluate;
pub use format::{format_display_value, format_number};
pub use number::{digit_count, is_valid_number, parse_number, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use operator::{is_valid_operator, Operator, UnknownOperator};
