//! Pure evaluation of one pending operation.

use super::error::CalcError;
use super::number::is_valid_number;
use super::operator::Operator;

/// Apply `operator` to `lhs` and `rhs`, then validate the result.
///
/// Returns the tagged failure instead of a sentinel value: a zero divisor is
/// [`CalcError::DivideByZero`], and a result that is NaN, infinite or outside
/// the safe integer range is [`CalcError::NumberTooLarge`].
///
/// # Example
///
/// ```rust
/// use reckoner::core::{evaluate, CalcError, Operator};
///
/// assert_eq!(evaluate(5.0, Operator::Add, 3.0), Ok(8.0));
/// assert_eq!(evaluate(5.0, Operator::Divide, 0.0), Err(CalcError::DivideByZero));
/// assert_eq!(evaluate(1e300, Operator::Multiply, 1e300), Err(CalcError::NumberTooLarge));
/// ```
pub fn evaluate(lhs: f64, operator: Operator, rhs: f64) -> Result<f64, CalcError> {
    let result = operator.apply(lhs, rhs)?;
    if !is_valid_number(result) {
        return Err(CalcError::NumberTooLarge);
    }
    Ok(result)
}
