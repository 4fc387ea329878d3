//! Stateful calculator engine.
//!
//! This module is the imperative shell around [`crate::core`]:
//! - `CalculatorState` holds the entry, the pending operation and the flags
//! - `Calculator` applies keypad operations to that state
//! - `Surface` is the only way output leaves the engine
//! - `Input` names the semantic events an adapter delivers
//!
//! # Example
//!
//! ```rust
//! use reckoner::config::CalculatorConfig;
//! use reckoner::engine::{Calculator, Input};
//!
//! let mut calc = Calculator::with_surface(CalculatorConfig::default(), String::new());
//! for label in ["5", "/", "0", "="] {
//!     calc.press(label.parse::<Input>().unwrap());
//! }
//!
//! assert!(calc.state().is_errored());
//! assert_eq!(calc.surface(), "Cannot divide by zero");
//! ```

mod calculator;
mod input;
mod state;
mod surface;

pub use calculator::Calculator;
pub use input::{Input, UnknownInput};
pub use state::{CalculatorState, PendingOperation, Phase};
pub use surface::{NullSurface, Surface};
