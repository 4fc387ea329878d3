//! Calculator state and its named phases.

use crate::core::Operator;
use serde::Serialize;
use std::fmt;

/// A left-hand operand waiting for its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// Everything the calculator remembers between key presses.
///
/// Only [`Calculator`](super::Calculator) mutates a state; callers get read
/// access for rendering and inspection. The pending operand and operator are
/// stored as one optional pair, so one can never be present without the
/// other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    pub(crate) entry: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) reset_on_next_digit: bool,
    pub(crate) errored: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The cleared state: entry `"0"`, nothing pending, no error.
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            pending: None,
            reset_on_next_digit: false,
            errored: false,
        }
    }

    /// The numeral being typed, or the error message while errored.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit starts a fresh entry.
    pub fn reset_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    pub fn is_errored(&self) -> bool {
        self.errored
    }

    /// Whether a decimal point may still be added to the entry.
    pub fn accepts_decimal_point(&self) -> bool {
        !self.entry.contains('.')
    }

    /// Named view of the current state.
    pub fn phase(&self) -> Phase {
        if self.errored {
            return Phase::Error;
        }
        match (self.pending.is_some(), self.reset_on_next_digit) {
            (false, false) => Phase::Entry,
            (true, true) => Phase::AwaitingOperand,
            (true, false) => Phase::EnteringOperand,
            (false, true) => Phase::Result,
        }
    }
}

/// Where the calculator is in its input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Typing the first operand
    Entry,
    /// Operator chosen, second operand not started
    AwaitingOperand,
    /// Typing the second operand
    EnteringOperand,
    /// Showing an evaluated result
    Result,
    /// Showing an error message until cleared
    Error,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
            Self::Result => "Result",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
