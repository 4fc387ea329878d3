//! Reckoner: a keypad calculator engine
//!
//! Reckoner follows the "pure core, imperative shell" split. Arithmetic,
//! parsing, validation and formatting are pure functions in [`core`]; the
//! stateful [`engine::Calculator`] applies keypad events to one explicitly
//! owned state and pushes the resulting display string into a
//! [`engine::Surface`] supplied by whoever embeds it.
//!
//! # Core Concepts
//!
//! - **Entry**: the numeral being typed, one operand at a time
//! - **Pending operation**: a stored operand/operator pair awaiting its
//!   right-hand side, evaluated strictly left to right
//! - **Error state**: a tagged [`core::CalcError`] shown until `clear`
//!
//! # Example
//!
//! ```rust
//! use reckoner::core::Operator;
//! use reckoner::engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('1');
//! calc.append_digit('2');
//! calc.append_digit('.');
//! assert_eq!(calc.current_display_string(), "12.");
//!
//! calc.set_operation(Operator::Divide);
//! calc.append_digit('8');
//! calc.calculate();
//! assert_eq!(calc.current_display_string(), "1.5");
//! ```

pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use core::{CalcError, Operator};
pub use engine::{Calculator, CalculatorState, Input, Phase, Surface};
