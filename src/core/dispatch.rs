//! # Exercise Dispatcher
//!
//! One validate → compute → render cycle per call. This is the only error
//! boundary: whatever happens inside, the caller gets an `Outcome` it can
//! put straight into a result box.

use log::{debug, warn};

use crate::core::compute;
use crate::core::exercise::{ExerciseId, RawInputs};
use crate::core::messages::{self, Locale};
use crate::core::validate::{self, Limits, ValidInput};

/// What a result box shows after a run. Exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Error(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(s) | Outcome::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

/// Stateless apart from its settings; identical inputs give identical outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    pub locale: Locale,
    pub limits: Limits,
}

impl Dispatcher {
    pub fn new(locale: Locale, limits: Limits) -> Self {
        Self { locale, limits }
    }

    pub fn dispatch(&self, exercise: ExerciseId, inputs: &RawInputs) -> Outcome {
        match validate::validate(exercise, inputs, &self.limits) {
            Ok(valid) => {
                debug!("Dispatching {}: {:?}", exercise, valid);
                Outcome::Success(self.compute(valid))
            }
            Err(e) => {
                warn!("Rejected input: {}", e);
                Outcome::Error(messages::invalid_input(self.locale, e.exercise).to_string())
            }
        }
    }

    fn compute(&self, input: ValidInput) -> String {
        match input {
            ValidInput::Primes { from, to } => {
                let primes = compute::primes_in_range(from, to);
                if primes.is_empty() {
                    messages::no_primes(self.locale).to_string()
                } else {
                    messages::join_list(&primes)
                }
            }
            ValidInput::Fibonacci { limit } => messages::join_list(&compute::fibonacci_up_to(limit)),
            ValidInput::Bmi {
                weight_pounds,
                height_meters,
            } => messages::bmi_sentence(self.locale, &compute::bmi(weight_pounds, height_meters)),
            ValidInput::Palindrome { text } => {
                let verdict = compute::is_palindrome(&text);
                messages::palindrome_sentence(self.locale, &text, verdict)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exercise::Field;

    fn en() -> Dispatcher {
        Dispatcher::default()
    }

    #[test]
    fn test_primes_success() {
        let inputs = RawInputs::new().with(Field::From, "10").with(Field::To, "20");
        assert_eq!(
            en().dispatch(ExerciseId::Primes, &inputs),
            Outcome::Success("11, 13, 17, 19".to_string())
        );
    }

    #[test]
    fn test_primes_empty_range_is_explicit() {
        let inputs = RawInputs::new().with(Field::From, "24").with(Field::To, "28");
        let outcome = en().dispatch(ExerciseId::Primes, &inputs);
        assert!(!outcome.is_error());
        assert_eq!(outcome.text(), "No primes found in this range.");
    }

    #[test]
    fn test_primes_reversed_range_rejected() {
        let inputs = RawInputs::new().with(Field::From, "10").with(Field::To, "1");
        assert_eq!(
            en().dispatch(ExerciseId::Primes, &inputs),
            Outcome::Error("Please enter a valid range.".to_string())
        );
    }

    #[test]
    fn test_fibonacci() {
        let ten = RawInputs::new().with(Field::Limit, "10");
        assert_eq!(en().dispatch(ExerciseId::Fibonacci, &ten).text(), "0, 1, 1, 2, 3, 5, 8");
        let zero = RawInputs::new().with(Field::Limit, "0");
        assert_eq!(en().dispatch(ExerciseId::Fibonacci, &zero).text(), "0");
        let negative = RawInputs::new().with(Field::Limit, "-1");
        assert!(en().dispatch(ExerciseId::Fibonacci, &negative).is_error());
    }

    #[test]
    fn test_bmi_spanish() {
        let d = Dispatcher::new(Locale::Es, Limits::default());
        let inputs = RawInputs::new()
            .with(Field::Weight, "150")
            .with(Field::Height, "1.75");
        assert_eq!(
            d.dispatch(ExerciseId::Bmi, &inputs),
            Outcome::Success("Tu IMC es 22.22 (Peso normal)".to_string())
        );
    }

    #[test]
    fn test_palindrome_outcomes() {
        let d = en();
        let yes = RawInputs::new().with(Field::Text, "Anita lava la tina");
        assert_eq!(
            d.dispatch(ExerciseId::Palindrome, &yes).text(),
            "\"Anita lava la tina\" is a palindrome."
        );
        let no = RawInputs::new().with(Field::Text, "ab");
        assert_eq!(d.dispatch(ExerciseId::Palindrome, &no).text(), "\"ab\" is not a palindrome.");
        let blank = RawInputs::new().with(Field::Text, "   ");
        assert!(d.dispatch(ExerciseId::Palindrome, &blank).is_error());
        let symbols = RawInputs::new().with(Field::Text, "!!!");
        let outcome = d.dispatch(ExerciseId::Palindrome, &symbols);
        assert_eq!(outcome.text(), "Invalid input.");
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let d = en();
        let inputs = RawInputs::new().with(Field::From, "0").with(Field::To, "100");
        let first = d.dispatch(ExerciseId::Primes, &inputs);
        let second = d.dispatch(ExerciseId::Primes, &inputs);
        assert_eq!(first, second);
    }
}
