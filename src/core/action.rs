//! # Actions
//!
//! Everything that can happen in Practica becomes an `Action`.
//! User presses Enter on a card? That's `Action::Run(exercise, inputs)`.
//! User asks for the solution? That's `Action::ShowSolution(exercise)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and reports what the caller should do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::exercise::{ExerciseId, RawInputs};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Validate, compute, and store the outcome for one card.
    Run(ExerciseId, RawInputs),
    /// Open the solution overlay for a card.
    ShowSolution(ExerciseId),
    /// Hide the solution overlay (Esc, close key, or click outside it).
    CloseSolution,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Run(exercise, inputs) => {
            let outcome = app.dispatcher.dispatch(exercise, &inputs);
            let verdict = if outcome.is_error() { "error" } else { "ok" };
            app.status_message = format!("{}: {}", exercise, verdict);
            app.results.insert(exercise, outcome);
            Effect::None
        }
        Action::ShowSolution(exercise) => {
            app.modal.open(&app.catalog, exercise.as_str());
            Effect::None
        }
        Action::CloseSolution => {
            app.modal.close();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::Outcome;
    use crate::core::exercise::Field;
    use crate::test_support::test_app;

    #[test]
    fn test_run_stores_outcome_per_card() {
        let mut app = test_app();
        let inputs = RawInputs::new().with(Field::Limit, "10");
        let effect = update(&mut app, Action::Run(ExerciseId::Fibonacci, inputs));
        assert_eq!(effect, Effect::None);
        assert_eq!(
            app.result(ExerciseId::Fibonacci),
            Some(&Outcome::Success("0, 1, 1, 2, 3, 5, 8".to_string()))
        );
        assert!(app.result(ExerciseId::Primes).is_none());
        assert_eq!(app.status_message, "fibonacci: ok");
    }

    #[test]
    fn test_error_does_not_affect_next_run() {
        let mut app = test_app();
        let bad = RawInputs::new().with(Field::Limit, "-1");
        update(&mut app, Action::Run(ExerciseId::Fibonacci, bad));
        assert!(app.result(ExerciseId::Fibonacci).unwrap().is_error());
        assert_eq!(app.status_message, "fibonacci: error");

        let good = RawInputs::new().with(Field::Limit, "0");
        update(&mut app, Action::Run(ExerciseId::Fibonacci, good));
        assert_eq!(app.result(ExerciseId::Fibonacci).unwrap().text(), "0");
    }

    #[test]
    fn test_show_and_close_solution() {
        let mut app = test_app();
        update(&mut app, Action::ShowSolution(ExerciseId::Palindrome));
        assert_eq!(app.modal.exercise(), Some(ExerciseId::Palindrome));
        update(&mut app, Action::CloseSolution);
        assert!(!app.modal.is_visible());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
