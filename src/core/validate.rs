//! # Input Validation
//!
//! Turns raw field strings into typed, checked inputs before any
//! computation runs. Parse failures and constraint violations collapse into
//! the same `InvalidInput` error; callers never see which one it was.
//!
//! Number parsing is lenient in the way browser form handling is: leading
//! whitespace is skipped and trailing garbage is ignored, so `"12abc"` reads
//! as 12 and `"3.9"` reads as the integer 3.

use log::debug;

use crate::core::compute;
use crate::core::exercise::{ExerciseId, Field, RawInputs};

pub const DEFAULT_MAX_PRIME_SPAN: u64 = 1_000_000;
pub const DEFAULT_MAX_PRIME_WORK: u64 = 500_000_000;

/// Bounds that keep every dispatch small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted `to - from` for the primes exercise.
    pub max_prime_span: u64,
    /// Largest accepted `prime_work` estimate for the primes exercise.
    pub max_prime_work: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_prime_span: DEFAULT_MAX_PRIME_SPAN,
            max_prime_work: DEFAULT_MAX_PRIME_WORK,
        }
    }
}

/// Upper bound on trial divisions for scanning `from..=to`: every candidate
/// tries at most one 6k±1 divisor pair per six numbers up to `sqrt(to)`.
///
/// Requires `0 <= from < to`.
pub fn prime_work(from: i64, to: i64) -> u64 {
    let span = (to - from) as u64;
    span.saturating_mul((to as u64).isqrt()) / 3
}

/// Checked input, one variant per exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidInput {
    Primes { from: i64, to: i64 },
    Fibonacci { limit: i64 },
    Bmi { weight_pounds: f64, height_meters: f64 },
    Palindrome { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid input for exercise {exercise}")]
pub struct InvalidInput {
    pub exercise: ExerciseId,
}

pub fn validate(
    exercise: ExerciseId,
    inputs: &RawInputs,
    limits: &Limits,
) -> Result<ValidInput, InvalidInput> {
    let invalid = || InvalidInput { exercise };
    match exercise {
        ExerciseId::Primes => {
            let from = parse_int(inputs.get(Field::From)).ok_or_else(invalid)?;
            let to = parse_int(inputs.get(Field::To)).ok_or_else(invalid)?;
            if from < 0 || from >= to {
                return Err(invalid());
            }
            // from >= 0 and to > from, so the difference fits in u64
            let span = (to - from) as u64;
            if span > limits.max_prime_span {
                debug!("Range span {} exceeds limit {}", span, limits.max_prime_span);
                return Err(invalid());
            }
            let work = prime_work(from, to);
            if work > limits.max_prime_work {
                debug!("Range work {} exceeds limit {}", work, limits.max_prime_work);
                return Err(invalid());
            }
            Ok(ValidInput::Primes { from, to })
        }
        ExerciseId::Fibonacci => {
            let limit = parse_int(inputs.get(Field::Limit)).ok_or_else(invalid)?;
            if limit < 0 {
                return Err(invalid());
            }
            Ok(ValidInput::Fibonacci { limit })
        }
        ExerciseId::Bmi => {
            let weight_pounds = parse_real(inputs.get(Field::Weight)).ok_or_else(invalid)?;
            let height_meters = parse_real(inputs.get(Field::Height)).ok_or_else(invalid)?;
            if weight_pounds <= 0.0 || height_meters <= 0.0 {
                return Err(invalid());
            }
            // a tiny height squares to zero
            if !compute::bmi(weight_pounds, height_meters).value.is_finite() {
                debug!("BMI for {} lb / {} m is not finite", weight_pounds, height_meters);
                return Err(invalid());
            }
            Ok(ValidInput::Bmi {
                weight_pounds,
                height_meters,
            })
        }
        ExerciseId::Palindrome => {
            let text = inputs.get(Field::Text);
            if text.trim().is_empty() {
                return Err(invalid());
            }
            Ok(ValidInput::Palindrome {
                text: text.to_string(),
            })
        }
    }
}

// ── Lenient parsing ─────────────────────────────────────────────────────────

/// Optional sign followed by the longest run of ASCII digits.
/// `None` when there are no digits or the value overflows `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Longest prefix that forms a decimal literal: sign, digits, optional
/// fraction, optional exponent. Non-finite results are rejected.
pub fn parse_real(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(s.starts_with(['+', '-']));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes(from: &str, to: &str) -> RawInputs {
        RawInputs::new().with(Field::From, from).with(Field::To, to)
    }

    fn measurement(weight: &str, height: &str) -> RawInputs {
        RawInputs::new()
            .with(Field::Weight, weight)
            .with(Field::Height, height)
    }

    #[test]
    fn test_parse_int_lenient() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  7"), Some(7));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("+8"), Some(8));
    }

    #[test]
    fn test_parse_int_failures() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_real_lenient() {
        assert_eq!(parse_real("1.75"), Some(1.75));
        assert_eq!(parse_real(" 150lb"), Some(150.0));
        assert_eq!(parse_real(".5"), Some(0.5));
        assert_eq!(parse_real("2."), Some(2.0));
        assert_eq!(parse_real("1e1"), Some(10.0));
        assert_eq!(parse_real("1e"), Some(1.0));
        assert_eq!(parse_real("-3.5x"), Some(-3.5));
    }

    #[test]
    fn test_parse_real_failures() {
        assert_eq!(parse_real(""), None);
        assert_eq!(parse_real("."), None);
        assert_eq!(parse_real("kg"), None);
        assert_eq!(parse_real("1e999"), None);
    }

    #[test]
    fn test_primes_valid_range() {
        let got = validate(ExerciseId::Primes, &primes("10", "20"), &Limits::default());
        assert_eq!(got, Ok(ValidInput::Primes { from: 10, to: 20 }));
    }

    #[test]
    fn test_primes_rejects_reversed_equal_and_negative() {
        let limits = Limits::default();
        let err = InvalidInput { exercise: ExerciseId::Primes };
        assert_eq!(validate(ExerciseId::Primes, &primes("10", "1"), &limits), Err(err));
        assert_eq!(validate(ExerciseId::Primes, &primes("5", "5"), &limits), Err(err));
        assert_eq!(validate(ExerciseId::Primes, &primes("-1", "5"), &limits), Err(err));
        assert_eq!(validate(ExerciseId::Primes, &primes("a", "5"), &limits), Err(err));
        assert_eq!(validate(ExerciseId::Primes, &primes("1", ""), &limits), Err(err));
    }

    #[test]
    fn test_primes_span_limit() {
        let limits = Limits {
            max_prime_span: 100,
            ..Limits::default()
        };
        assert!(validate(ExerciseId::Primes, &primes("0", "100"), &limits).is_ok());
        assert!(validate(ExerciseId::Primes, &primes("0", "101"), &limits).is_err());
    }

    #[test]
    fn test_primes_narrow_range_near_i64_max_is_rejected() {
        let from = (i64::MAX - 200).to_string();
        let to = i64::MAX.to_string();
        let got = validate(ExerciseId::Primes, &primes(&from, &to), &Limits::default());
        assert_eq!(got, Err(InvalidInput { exercise: ExerciseId::Primes }));
    }

    #[test]
    fn test_primes_default_span_from_zero_fits_work_limit() {
        let to = DEFAULT_MAX_PRIME_SPAN.to_string();
        let got = validate(ExerciseId::Primes, &primes("0", &to), &Limits::default());
        assert!(got.is_ok());
    }

    #[test]
    fn test_primes_work_limit_is_configurable() {
        // 100 * isqrt(10_100) / 3 = 3333
        assert_eq!(prime_work(10_000, 10_100), 3333);
        let limits = Limits {
            max_prime_work: 3333,
            ..Limits::default()
        };
        assert!(validate(ExerciseId::Primes, &primes("10000", "10100"), &limits).is_ok());
        assert!(validate(ExerciseId::Primes, &primes("10000", "10101"), &limits).is_err());
    }

    #[test]
    fn test_fibonacci_limit() {
        let limits = Limits::default();
        let ok = RawInputs::new().with(Field::Limit, "0");
        assert_eq!(
            validate(ExerciseId::Fibonacci, &ok, &limits),
            Ok(ValidInput::Fibonacci { limit: 0 })
        );
        let negative = RawInputs::new().with(Field::Limit, "-1");
        assert!(validate(ExerciseId::Fibonacci, &negative, &limits).is_err());
        let missing = RawInputs::new();
        assert!(validate(ExerciseId::Fibonacci, &missing, &limits).is_err());
    }

    #[test]
    fn test_bmi_measurement() {
        let limits = Limits::default();
        assert_eq!(
            validate(ExerciseId::Bmi, &measurement("150", "1.75"), &limits),
            Ok(ValidInput::Bmi { weight_pounds: 150.0, height_meters: 1.75 })
        );
        assert!(validate(ExerciseId::Bmi, &measurement("0", "1.75"), &limits).is_err());
        assert!(validate(ExerciseId::Bmi, &measurement("150", "-1"), &limits).is_err());
        assert!(validate(ExerciseId::Bmi, &measurement("heavy", "1.75"), &limits).is_err());
    }

    #[test]
    fn test_bmi_rejects_height_that_squares_to_zero() {
        let limits = Limits::default();
        let err = InvalidInput { exercise: ExerciseId::Bmi };
        assert_eq!(validate(ExerciseId::Bmi, &measurement("150", "1e-200"), &limits), Err(err));
        assert_eq!(validate(ExerciseId::Bmi, &measurement("1e308", "0.5"), &limits), Err(err));
    }

    #[test]
    fn test_palindrome_text() {
        let limits = Limits::default();
        let blank = RawInputs::new().with(Field::Text, "   ");
        assert_eq!(
            validate(ExerciseId::Palindrome, &blank, &limits),
            Err(InvalidInput { exercise: ExerciseId::Palindrome })
        );
        // Symbols pass validation; the computation reports them as invalid
        let symbols = RawInputs::new().with(Field::Text, "!!!");
        assert!(validate(ExerciseId::Palindrome, &symbols, &limits).is_ok());
    }

    #[test]
    fn test_error_message_names_exercise() {
        let err = InvalidInput { exercise: ExerciseId::Bmi };
        assert_eq!(err.to_string(), "invalid input for exercise bmi");
    }
}
