//! # Exercises
//!
//! The closed set of exercises and the named input fields each one reads.
//! Everything else in the crate routes on `ExerciseId`, so an arbitrary
//! string never reaches a dispatcher or the catalog.

use clap::ValueEnum;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum ExerciseId {
    #[value(alias = "primos")]
    Primes,
    Fibonacci,
    #[value(alias = "imc")]
    Bmi,
    #[value(alias = "palindromo")]
    Palindrome,
}

impl ExerciseId {
    /// Card order on screen.
    pub const ALL: [ExerciseId; 4] = [
        ExerciseId::Primes,
        ExerciseId::Fibonacci,
        ExerciseId::Bmi,
        ExerciseId::Palindrome,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseId::Primes => "primes",
            ExerciseId::Fibonacci => "fibonacci",
            ExerciseId::Bmi => "bmi",
            ExerciseId::Palindrome => "palindrome",
        }
    }

    /// Input fields in the order they appear on the card (and bind to CLI values).
    pub fn fields(self) -> &'static [Field] {
        match self {
            ExerciseId::Primes => &[Field::From, Field::To],
            ExerciseId::Fibonacci => &[Field::Limit],
            ExerciseId::Bmi => &[Field::Weight, Field::Height],
            ExerciseId::Palindrome => &[Field::Text],
        }
    }

    pub fn index(self) -> usize {
        match self {
            ExerciseId::Primes => 0,
            ExerciseId::Fibonacci => 1,
            ExerciseId::Bmi => 2,
            ExerciseId::Palindrome => 3,
        }
    }

    /// Next card, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous card, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown exercise: {0:?}")]
pub struct UnknownExercise(pub String);

impl FromStr for ExerciseId {
    type Err = UnknownExercise;

    /// Accepts the canonical names plus their Spanish aliases, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primes" | "primos" => Ok(ExerciseId::Primes),
            "fibonacci" => Ok(ExerciseId::Fibonacci),
            "bmi" | "imc" => Ok(ExerciseId::Bmi),
            "palindrome" | "palindromo" => Ok(ExerciseId::Palindrome),
            _ => Err(UnknownExercise(s.to_string())),
        }
    }
}

/// A named input on an exercise card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    From,
    To,
    Limit,
    Weight,
    Height,
    Text,
}

/// Raw strings as the user typed them, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    values: BTreeMap<Field, String>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for tests and the headless runner.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Missing fields read as empty.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Bind positional values to an exercise's fields in card order.
    /// Extra values are ignored; missing ones stay empty.
    pub fn from_positional(exercise: ExerciseId, values: &[String]) -> Self {
        let mut inputs = Self::new();
        for (field, value) in exercise.fields().iter().zip(values) {
            inputs.set(*field, value.clone());
        }
        inputs
    }
}
