//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use proptest::prelude::*;
use reckoner::config::CalculatorConfig;
use reckoner::core::{digit_count, format_number, Operator};
use reckoner::engine::{Calculator, CalculatorState, Input, Phase};

const KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "C",
];

prop_compose! {
    fn arbitrary_input()(label in prop::sample::select(KEYS.to_vec())) -> Input {
        label.parse().unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

prop_compose! {
    /// A keypad operand as typed, with up to four decimal places.
    fn typed_operand()(text in "[0-9]{1,6}(\\.[0-9]{1,4})?") -> String {
        text
    }
}

fn type_entry(calc: &mut Calculator, text: &str) {
    for c in text.chars() {
        calc.append_digit(c);
    }
}

proptest! {
    #[test]
    fn digit_sequences_are_entered_verbatim(digits in "[0-9]{1,15}") {
        let mut calc = Calculator::new();
        for c in digits.chars() {
            calc.append_digit(c);
        }

        let trimmed = digits.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.state().entry(), expected);
    }

    #[test]
    fn entry_never_holds_two_points(keys in prop::collection::vec("[0-9.]", 0..40)) {
        let mut calc = Calculator::new();
        for key in &keys {
            calc.append_digit(key.chars().next().unwrap());
            prop_assert!(calc.state().entry().matches('.').count() <= 1);
        }
    }

    #[test]
    fn typed_digits_never_exceed_the_cap(inputs in prop::collection::vec(arbitrary_input(), 0..60)) {
        let max = CalculatorConfig::default().max_digits();
        let mut calc = Calculator::new();
        for input in inputs {
            let before = calc.state().entry().to_string();
            calc.press(input);
            if let Input::Digit(_) = input {
                let entry = calc.state().entry();
                prop_assert!(entry == before || digit_count(entry) <= max);
            }
        }
    }

    #[test]
    fn operation_matches_direct_arithmetic(
        lhs_text in typed_operand(),
        rhs_text in typed_operand(),
        operator in arbitrary_operator(),
    ) {
        let lhs: f64 = lhs_text.parse().unwrap();
        let rhs: f64 = rhs_text.parse().unwrap();

        let mut calc = Calculator::new();
        type_entry(&mut calc, &lhs_text);
        calc.set_operation(operator);
        type_entry(&mut calc, &rhs_text);
        calc.calculate();

        if operator == Operator::Divide && rhs == 0.0 {
            prop_assert!(calc.state().is_errored());
            prop_assert_eq!(calc.state().entry(), "Cannot divide by zero");
        } else {
            let value = match operator {
                Operator::Add => lhs + rhs,
                Operator::Subtract => lhs - rhs,
                Operator::Multiply => lhs * rhs,
                Operator::Divide => lhs / rhs,
            };
            prop_assert!(!calc.state().is_errored());
            let expected = format_number(value, &CalculatorConfig::default());
            prop_assert_eq!(calc.state().entry(), expected.as_str());
        }
    }

    #[test]
    fn clear_always_returns_to_initial_state(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut calc = Calculator::new();
        for input in inputs {
            calc.press(input);
        }
        calc.clear();

        let state = calc.state();
        prop_assert_eq!(state, &CalculatorState::new());
        prop_assert_eq!(state.entry(), "0");
        prop_assert!(!state.is_errored());
        prop_assert_eq!(state.pending_operand(), None);
        prop_assert_eq!(state.pending_operator(), None);
        prop_assert!(!state.reset_on_next_digit());
    }

    #[test]
    fn error_state_never_keeps_a_pending_operation(inputs in prop::collection::vec(arbitrary_input(), 0..60)) {
        let mut calc = Calculator::new();
        for input in inputs {
            calc.press(input);
            let state = calc.state();
            prop_assert_eq!(state.pending_operand().is_some(), state.pending_operator().is_some());
            if state.is_errored() {
                prop_assert!(state.pending().is_none());
                prop_assert_eq!(calc.phase(), Phase::Error);
            }
        }
    }

    #[test]
    fn display_is_never_empty(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut calc = Calculator::new();
        for input in inputs {
            calc.press(input);
            prop_assert!(!calc.current_display_string().is_empty());
        }
    }

    #[test]
    fn formatted_zero_is_unsigned(negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        prop_assert_eq!(format_number(zero, &CalculatorConfig::default()), "0");
    }
}
