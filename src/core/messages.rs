//! # Messages
//!
//! Every sentence the user can see, per locale. English is the default;
//! Spanish covers the same strings one for one.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::compute::{BmiCategory, BmiReading, PalindromeVerdict};
use crate::core::exercise::{ExerciseId, Field};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "es" | "spanish" | "español" => Some(Locale::Es),
            _ => None,
        }
    }
}

// ── Results ─────────────────────────────────────────────────────────────────

/// Join a sequence the way the result box shows it: `"2, 3, 5"`.
pub fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn no_primes(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No primes found in this range.",
        Locale::Es => "No se encontraron primos en este rango.",
    }
}

pub fn category_label(locale: Locale, category: BmiCategory) -> &'static str {
    match (locale, category) {
        (Locale::En, BmiCategory::Underweight) => "Underweight",
        (Locale::En, BmiCategory::Normal) => "Normal weight",
        (Locale::En, BmiCategory::Overweight) => "Overweight",
        (Locale::En, BmiCategory::Obese) => "Obese",
        (Locale::Es, BmiCategory::Underweight) => "Bajo peso",
        (Locale::Es, BmiCategory::Normal) => "Peso normal",
        (Locale::Es, BmiCategory::Overweight) => "Sobrepeso",
        (Locale::Es, BmiCategory::Obese) => "Obesidad",
    }
}

pub fn bmi_sentence(locale: Locale, reading: &BmiReading) -> String {
    let label = category_label(locale, reading.category);
    let value = reading.display_value();
    match locale {
        Locale::En => format!("Your BMI is {value} ({label})"),
        Locale::Es => format!("Tu IMC es {value} ({label})"),
    }
}

/// Verdict sentence quoting the text exactly as typed.
pub fn palindrome_sentence(locale: Locale, original: &str, verdict: PalindromeVerdict) -> String {
    match (locale, verdict) {
        (Locale::En, PalindromeVerdict::Palindrome) => format!("\"{original}\" is a palindrome."),
        (Locale::En, PalindromeVerdict::NotPalindrome) => {
            format!("\"{original}\" is not a palindrome.")
        }
        (Locale::En, PalindromeVerdict::Invalid) => "Invalid input.".to_string(),
        (Locale::Es, PalindromeVerdict::Palindrome) => format!("\"{original}\" es un palíndromo."),
        (Locale::Es, PalindromeVerdict::NotPalindrome) => {
            format!("\"{original}\" no es un palíndromo.")
        }
        (Locale::Es, PalindromeVerdict::Invalid) => "Entrada no válida.".to_string(),
    }
}

// ── Errors ──────────────────────────────────────────────────────────────────

/// The single user-facing failure message for an exercise.
pub fn invalid_input(locale: Locale, exercise: ExerciseId) -> &'static str {
    match (locale, exercise) {
        (Locale::En, ExerciseId::Primes) => "Please enter a valid range.",
        (Locale::En, ExerciseId::Fibonacci) => "Please enter a non-negative number.",
        (Locale::En, ExerciseId::Bmi) => "Please enter a valid weight and height.",
        (Locale::En, ExerciseId::Palindrome) => "Please enter a word or phrase.",
        (Locale::Es, ExerciseId::Primes) => "Por favor, ingresa un rango válido.",
        (Locale::Es, ExerciseId::Fibonacci) => "Por favor, ingresa un número positivo.",
        (Locale::Es, ExerciseId::Bmi) => "Por favor, ingresa peso y altura válidos.",
        (Locale::Es, ExerciseId::Palindrome) => "Por favor, ingresa una palabra o frase.",
    }
}

// ── Labels ──────────────────────────────────────────────────────────────────

pub fn card_title(locale: Locale, exercise: ExerciseId) -> &'static str {
    match (locale, exercise) {
        (Locale::En, ExerciseId::Primes) => "Prime Numbers",
        (Locale::En, ExerciseId::Fibonacci) => "Fibonacci Sequence",
        (Locale::En, ExerciseId::Bmi) => "BMI Calculator",
        (Locale::En, ExerciseId::Palindrome) => "Palindrome Checker",
        (Locale::Es, ExerciseId::Primes) => "Números Primos",
        (Locale::Es, ExerciseId::Fibonacci) => "Serie Fibonacci",
        (Locale::Es, ExerciseId::Bmi) => "Cálculo de IMC",
        (Locale::Es, ExerciseId::Palindrome) => "Palabra Palíndroma",
    }
}

pub fn field_label(locale: Locale, field: Field) -> &'static str {
    match (locale, field) {
        (Locale::En, Field::From) => "From",
        (Locale::En, Field::To) => "To",
        (Locale::En, Field::Limit) => "Limit",
        (Locale::En, Field::Weight) => "Weight (lb)",
        (Locale::En, Field::Height) => "Height (m)",
        (Locale::En, Field::Text) => "Text",
        (Locale::Es, Field::From) => "Desde",
        (Locale::Es, Field::To) => "Hasta",
        (Locale::Es, Field::Limit) => "Límite",
        (Locale::Es, Field::Weight) => "Peso (lb)",
        (Locale::Es, Field::Height) => "Altura (m)",
        (Locale::Es, Field::Text) => "Texto",
    }
}

pub fn run_button(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "[ Run ]",
        Locale::Es => "[ Calcular ]",
    }
}

pub fn solution_button(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "[ Solution ]",
        Locale::Es => "[ Solución ]",
    }
}

pub fn welcome(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Pick a card and press Enter to run it",
        Locale::Es => "Elige una tarjeta y pulsa Enter para calcular",
    }
}

/// Key hints for the bottom line of the main screen.
pub fn key_help(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Enter Run  F2 Solution  Tab Field  ↑↓ Card  Ctrl+C Quit",
        Locale::Es => "Enter Calcular  F2 Solución  Tab Campo  ↑↓ Tarjeta  Ctrl+C Salir",
    }
}

/// Key hints for the solution overlay border.
pub fn modal_help(locale: Locale) -> &'static str {
    match locale {
        Locale::En => " ↑↓ Scroll  Esc Close ",
        Locale::Es => " ↑↓ Desplazar  Esc Cerrar ",
    }
}
