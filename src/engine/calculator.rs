//! The calculator engine: one state, one configuration, one surface.

use crate::config::CalculatorConfig;
use crate::core::{
    digit_count, evaluate, format_display_value, format_number, parse_number, CalcError, Operator,
};
use crate::engine::input::Input;
use crate::engine::state::{CalculatorState, PendingOperation, Phase};
use crate::engine::surface::{NullSurface, Surface};
use tracing::{debug, trace, warn};

/// Keypad calculator engine.
///
/// Every operation takes `&mut self` and runs to completion. Operations that
/// change what should be shown push the new display string into the surface
/// before returning.
///
/// # Example
///
/// ```rust
/// use reckoner::core::Operator;
/// use reckoner::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.append_digit('5');
/// calc.set_operation(Operator::Add);
/// calc.append_digit('3');
/// calc.set_operation(Operator::Multiply);
/// calc.append_digit('2');
/// calc.calculate();
///
/// assert_eq!(calc.current_display_string(), "16");
/// ```
#[derive(Debug)]
pub struct Calculator<D: Surface = NullSurface> {
    state: CalculatorState,
    config: CalculatorConfig,
    surface: D,
}

impl Calculator<NullSurface> {
    /// Create a calculator with the default configuration and no surface.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator with `config` and no surface.
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_surface(config, NullSurface)
    }
}

impl Default for Calculator<NullSurface> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Surface> Calculator<D> {
    /// Create a calculator bound to `surface`. The initial display is
    /// rendered immediately.
    pub fn with_surface(config: CalculatorConfig, surface: D) -> Self {
        let mut calc = Self {
            state: CalculatorState::new(),
            config,
            surface,
        };
        calc.refresh();
        calc
    }

    /// Current engine state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Configuration this calculator was built with.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Phase derived from the current state.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Surface receiving display updates.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Detach the surface, consuming the calculator.
    pub fn into_surface(self) -> D {
        self.surface
    }

    /// The string the display should show right now.
    ///
    /// While errored this is the raw error message; otherwise it is the entry
    /// run through [`format_display_value`].
    pub fn current_display_string(&self) -> String {
        if self.state.errored {
            self.state.entry.clone()
        } else {
            format_display_value(&self.state.entry, &self.config)
        }
    }

    /// Dispatch one semantic keypad input.
    ///
    /// While errored, everything except [`Input::Clear`] is dropped.
    pub fn press(&mut self, input: Input) {
        if self.state.errored && !input.is_clear() {
            trace!(%input, "input ignored while errored");
            return;
        }

        match input {
            Input::Digit(c) => self.append_digit(c),
            Input::Operator(op) => self.set_operation(op),
            Input::Equals => self.calculate(),
            Input::Clear => self.clear(),
        }
    }

    /// Append a digit or decimal point to the entry.
    ///
    /// Characters other than `0`-`9` and `.` are ignored. Digits past the
    /// configured maximum are dropped silently.
    pub fn append_digit(&mut self, c: char) {
        if self.state.errored {
            return;
        }
        if c != '.' && !c.is_ascii_digit() {
            trace!(key = %c, "ignored non-numeric key");
            return;
        }

        let before = self.state.phase();
        if self.state.reset_on_next_digit {
            self.state.entry = "0".to_string();
            self.state.reset_on_next_digit = false;
        }

        let entry = &mut self.state.entry;
        if c == '.' {
            if entry.contains('.') {
                self.record_transition(before);
                return;
            }
            if *entry == "0" || entry.is_empty() {
                *entry = "0.".to_string();
            } else {
                entry.push('.');
            }
        } else if *entry == "0" {
            *entry = c.to_string();
        } else {
            if digit_count(entry) >= self.config.max_digits() {
                trace!(max_digits = self.config.max_digits(), "digit limit reached");
                self.record_transition(before);
                return;
            }
            entry.push(c);
        }

        self.record_transition(before);
        self.refresh();
    }

    /// Adopt `operator` with the current entry as its left-hand operand.
    ///
    /// If a second operand has already been typed, the pending operation is
    /// evaluated first, left to right. With no second operand the pending
    /// operator is simply replaced.
    pub fn set_operation(&mut self, operator: Operator) {
        if self.state.errored {
            return;
        }
        if parse_number(&self.state.entry).is_none() {
            trace!(entry = %self.state.entry, "operator ignored, entry is not a number");
            return;
        }

        if self.state.pending.is_some() && !self.state.reset_on_next_digit {
            self.calculate();
            if self.state.errored {
                return;
            }
        }

        let Some(operand) = parse_number(&self.state.entry) else {
            return;
        };

        let before = self.state.phase();
        self.state.pending = Some(PendingOperation { operand, operator });
        self.state.reset_on_next_digit = true;
        self.record_transition(before);
    }

    /// Evaluate the pending operation against the current entry.
    ///
    /// Does nothing while errored, without a pending operation, or when the
    /// entry is not a number.
    pub fn calculate(&mut self) {
        if self.state.errored {
            return;
        }
        let Some(pending) = self.state.pending else {
            return;
        };
        let Some(rhs) = parse_number(&self.state.entry) else {
            return;
        };

        match evaluate(pending.operand, pending.operator, rhs) {
            Ok(result) => {
                let before = self.state.phase();
                self.state.entry = format_number(result, &self.config);
                self.state.pending = None;
                self.state.reset_on_next_digit = true;
                debug!(
                    lhs = pending.operand,
                    operator = %pending.operator,
                    rhs,
                    result,
                    "evaluated"
                );
                self.record_transition(before);
                self.refresh();
            }
            Err(err) => self.display_error(err),
        }
    }

    /// Reset to the cleared state. The only way out of an error.
    pub fn clear(&mut self) {
        let before = self.state.phase();
        self.state = CalculatorState::new();
        self.record_transition(before);
        self.refresh();
    }

    /// Enter the error state showing `error`'s message.
    pub fn display_error(&mut self, error: CalcError) {
        let before = self.state.phase();
        warn!(code = error.code(), error = %error, "calculation failed");
        self.state.errored = true;
        self.state.entry = error.to_string();
        self.state.pending = None;
        self.record_transition(before);
        self.refresh();
    }

    fn refresh(&mut self) {
        let text = self.current_display_string();
        self.surface.render(&text);
    }

    fn record_transition(&self, from: Phase) {
        let to = self.state.phase();
        if from != to {
            debug!(from = from.name(), to = to.name(), "phase transition");
        }
    }
}
