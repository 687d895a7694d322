//! # Solution Catalog
//!
//! Read-only explanations shown in the solution overlay. Built once at
//! startup and never mutated. The source text is a maintained snippet kept
//! next to the explanation; it is not pulled out of the running code.

use std::collections::BTreeMap;

use crate::core::exercise::ExerciseId;
use crate::core::messages::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    pub title: String,
    /// Markdown, rendered by the adapter.
    pub explanation: String,
    /// Rust source shown as a code block.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<ExerciseId, SolutionEntry>,
}

impl Catalog {
    pub fn builtin(locale: Locale) -> Self {
        let entries = ExerciseId::ALL
            .into_iter()
            .map(|id| {
                let entry = SolutionEntry {
                    title: title(locale, id).to_string(),
                    explanation: explanation(locale, id).to_string(),
                    source: source(id).trim_start_matches('\n').to_string(),
                };
                (id, entry)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, exercise: ExerciseId) -> Option<&SolutionEntry> {
        self.entries.get(&exercise)
    }

    /// Lookup by name; unknown names yield `None` rather than an error.
    pub fn lookup(&self, name: &str) -> Option<(ExerciseId, &SolutionEntry)> {
        let id = name.parse::<ExerciseId>().ok()?;
        self.get(id).map(|entry| (id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn title(locale: Locale, id: ExerciseId) -> &'static str {
    match (locale, id) {
        (Locale::En, ExerciseId::Primes) => "Solution: Prime Numbers",
        (Locale::En, ExerciseId::Fibonacci) => "Solution: Fibonacci Sequence",
        (Locale::En, ExerciseId::Bmi) => "Solution: BMI Calculation",
        (Locale::En, ExerciseId::Palindrome) => "Solution: Palindrome Check",
        (Locale::Es, ExerciseId::Primes) => "Solución: Números Primos",
        (Locale::Es, ExerciseId::Fibonacci) => "Solución: Serie Fibonacci",
        (Locale::Es, ExerciseId::Bmi) => "Solución: Cálculo de IMC",
        (Locale::Es, ExerciseId::Palindrome) => "Solución: Palabra Palíndroma",
    }
}

fn explanation(locale: Locale, id: ExerciseId) -> &'static str {
    match (locale, id) {
        (Locale::En, ExerciseId::Primes) => {
            "The code has two parts:\n\n\
             1. **is_prime(n):** checks one number. It rules out 2 and 3 first, \
             then only tries divisors of the form `6k ± 1` up to the square root.\n\
             2. **primes_in_range(from, to):** walks the range and keeps every \
             number the first function accepts."
        }
        (Locale::En, ExerciseId::Fibonacci) => {
            "The sequence is built iteratively, which is cheaper than recursion here.\n\n\
             1. Two variables `a` and `b` start at the first two terms (0 and 1).\n\
             2. The `while` loop runs as long as the next term is less than or equal to the limit."
        }
        (Locale::En, ExerciseId::Bmi) => {
            "The BMI is computed in three steps:\n\n\
             1. **Conversion:** pounds are converted to kilograms.\n\
             2. **Formula:** `weight (kg) / height (m)^2`.\n\
             3. **Classification:** a chain of comparisons picks the weight category."
        }
        (Locale::En, ExerciseId::Palindrome) => {
            "To check whether a phrase is a palindrome:\n\n\
             1. **Normalization:** lower-case the text and drop anything that is not a letter or digit.\n\
             2. **Reversal:** reverse the normalized string.\n\
             3. **Comparison:** compare the normalized string with its reverse."
        }
        (Locale::Es, ExerciseId::Primes) => {
            "El código se divide en dos partes:\n\n\
             1. **is_prime(n):** verifica si un número es primo usando una \
             optimización que evita comprobar todos los divisores.\n\
             2. **primes_in_range(from, to):** recorre el rango y usa la función \
             anterior para compilar una lista de resultados."
        }
        (Locale::Es, ExerciseId::Fibonacci) => {
            "Este código genera la serie de Fibonacci de forma iterativa, que es más \
             eficiente que la recursividad para este problema.\n\n\
             1. Se inicializan dos variables `a` y `b` con los dos primeros números de la serie (0 y 1).\n\
             2. El bucle `while` se ejecuta mientras el siguiente número sea menor o igual al límite."
        }
        (Locale::Es, ExerciseId::Bmi) => {
            "El cálculo del IMC sigue estos pasos:\n\n\
             1. **Conversión:** se convierten las libras a kilogramos.\n\
             2. **Fórmula:** `peso (kg) / (altura (m))^2`.\n\
             3. **Clasificación:** se usan condicionales para determinar la categoría de peso."
        }
        (Locale::Es, ExerciseId::Palindrome) => {
            "Para verificar si una palabra es palíndroma:\n\n\
             1. **Normalización:** se convierte el texto a minúsculas y se eliminan los caracteres no alfanuméricos.\n\
             2. **Inversión:** la cadena normalizada se invierte.\n\
             3. **Comparación:** se compara la cadena normalizada con su versión invertida."
        }
    }
}

fn source(id: ExerciseId) -> &'static str {
    match id {
        ExerciseId::Primes => {
            r#"
fn is_prime(n: i64) -> bool {
    if n <= 1 { return false; }
    if n <= 3 { return true; }
    if n % 2 == 0 || n % 3 == 0 { return false; }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 { return false; }
        i += 6;
    }
    true
}

fn primes_in_range(from: i64, to: i64) -> Vec<i64> {
    (from..=to).filter(|&n| is_prime(n)).collect()
}"#
        }
        ExerciseId::Fibonacci => {
            r#"
fn fibonacci_up_to(limit: u64) -> Vec<u64> {
    let (mut a, mut b) = (0, 1);
    let mut terms = vec![a];
    while b <= limit {
        terms.push(b);
        (a, b) = (b, a + b);
    }
    terms
}"#
        }
        ExerciseId::Bmi => {
            r#"
fn bmi(weight_pounds: f64, height_meters: f64) -> String {
    let kg = weight_pounds * 0.453592;
    let bmi = kg / (height_meters * height_meters);
    let category = if bmi < 18.5 {
        "Underweight"
    } else if bmi <= 24.9 {
        "Normal weight"
    } else if bmi <= 29.9 {
        "Overweight"
    } else {
        "Obese"
    };
    format!("Your BMI is {bmi:.2} ({category})")
}"#
        }
        ExerciseId::Palindrome => {
            r#"
fn is_palindrome(text: &str) -> Option<bool> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    if normalized.is_empty() {
        return None; // invalid input
    }
    Some(normalized.chars().eq(normalized.chars().rev()))
}"#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_exercise() {
        for locale in [Locale::En, Locale::Es] {
            let catalog = Catalog::builtin(locale);
            assert_eq!(catalog.len(), ExerciseId::ALL.len());
            for id in ExerciseId::ALL {
                let entry = catalog.get(id).unwrap();
                assert!(!entry.title.is_empty());
                assert!(!entry.explanation.is_empty());
                assert!(entry.source.starts_with("fn "));
            }
        }
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let catalog = Catalog::builtin(Locale::En);
        let (id, entry) = catalog.lookup("primes").unwrap();
        assert_eq!(id, ExerciseId::Primes);
        assert_eq!(entry.title, "Solution: Prime Numbers");
        assert!(catalog.lookup("imc").is_some());
        assert!(catalog.lookup("unknown").is_none());
    }

    #[test]
    fn test_spanish_titles() {
        let catalog = Catalog::builtin(Locale::Es);
        assert_eq!(
            catalog.get(ExerciseId::Palindrome).unwrap().title,
            "Solución: Palabra Palíndroma"
        );
    }
}
