//! # Exercise Computations
//!
//! The four textbook routines behind the cards. Each one is pure and
//! total over its input type. They return typed values; turning those into
//! sentences is the job of `messages`.

// ── Primes ──────────────────────────────────────────────────────────────────

/// Trial division over 2, 3, then candidates `6k - 1` and `6k + 1`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    // checked: i * i would wrap for n close to i64::MAX
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All primes in the inclusive range `[from, to]`, ascending.
pub fn primes_in_range(from: i64, to: i64) -> Vec<i64> {
    (from..=to).filter(|&n| is_prime(n)).collect()
}

// ── Fibonacci ───────────────────────────────────────────────────────────────

/// Fibonacci terms `0, 1, 1, 2, ...` that are `<= limit`.
///
/// A non-negative limit always yields at least `[0]`; a negative one yields
/// nothing. Accumulation stops before a term would overflow `u64`.
pub fn fibonacci_up_to(limit: i64) -> Vec<u64> {
    let mut terms = Vec::new();
    if limit < 0 {
        return terms;
    }
    let limit = limit as u64;
    let (mut a, mut b): (u64, u64) = (0, 1);
    terms.push(a);
    while b <= limit {
        terms.push(b);
        match a.checked_add(b) {
            Some(next) => {
                a = b;
                b = next;
            }
            None => break,
        }
    }
    terms
}

// ── BMI ─────────────────────────────────────────────────────────────────────

pub const KG_PER_POUND: f64 = 0.453592;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Ordered comparisons. 24.9 passes the `<= 24.9` test first, so it is
    /// Normal even though the Overweight test would also accept it.
    pub fn classify(value: f64) -> Self {
        if value < 18.5 {
            BmiCategory::Underweight
        } else if value <= 24.9 {
            BmiCategory::Normal
        } else if value <= 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    /// Value rounded to two decimals, as shown to the user.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Body mass index from pounds and meters. Classification uses the
/// unrounded value.
pub fn bmi(weight_pounds: f64, height_meters: f64) -> BmiReading {
    let mass_kg = weight_pounds * KG_PER_POUND;
    let value = mass_kg / (height_meters * height_meters);
    BmiReading {
        value,
        category: BmiCategory::classify(value),
    }
}

// ── Palindrome ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalindromeVerdict {
    Palindrome,
    NotPalindrome,
    /// Nothing left after normalization (only symbols or non-ASCII letters).
    Invalid,
}

/// Lower-case and keep only `[a-z0-9]`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn is_palindrome(text: &str) -> PalindromeVerdict {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return PalindromeVerdict::Invalid;
    }
    // ASCII only after normalization, so byte reversal is char reversal
    if normalized.bytes().eq(normalized.bytes().rev()) {
        PalindromeVerdict::Palindrome
    } else {
        PalindromeVerdict::NotPalindrome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: i64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_is_prime_small_values() {
        for n in [-7, -1, 0, 1] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn test_is_prime_matches_naive_trial_division() {
        for n in 0..=10_000 {
            assert_eq!(is_prime(n), naive_is_prime(n), "mismatch at {n}");
        }
    }

    #[test]
    fn test_is_prime_large_values_do_not_overflow() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn test_primes_in_range() {
        assert_eq!(primes_in_range(10, 20), vec![11, 13, 17, 19]);
        assert_eq!(primes_in_range(0, 10), vec![2, 3, 5, 7]);
        assert_eq!(primes_in_range(2, 3), vec![2, 3]);
        assert!(primes_in_range(24, 28).is_empty());
    }

    #[test]
    fn test_fibonacci_up_to() {
        assert_eq!(fibonacci_up_to(10), vec![0, 1, 1, 2, 3, 5, 8]);
        assert_eq!(fibonacci_up_to(0), vec![0]);
        assert_eq!(fibonacci_up_to(1), vec![0, 1, 1]);
        assert_eq!(fibonacci_up_to(8), vec![0, 1, 1, 2, 3, 5, 8]);
        assert!(fibonacci_up_to(-1).is_empty());
    }

    #[test]
    fn test_fibonacci_huge_limit_terminates() {
        let terms = fibonacci_up_to(i64::MAX);
        assert!(terms.len() > 90);
        assert!(terms.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_bmi_reference_value() {
        let reading = bmi(150.0, 1.75);
        assert!((reading.value - 22.2167).abs() < 1e-3);
        assert_eq!(reading.display_value(), "22.22");
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_boundaries_follow_branch_order() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.91), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.91), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_from_measurements_on_each_boundary() {
        let height = 1.75;
        for (boundary, expected) in [
            (18.5, BmiCategory::Normal),
            (24.9, BmiCategory::Normal),
            (29.9, BmiCategory::Overweight),
        ] {
            let weight = boundary * height * height / KG_PER_POUND;
            let reading = bmi(weight, height);
            assert_eq!(reading.value, boundary, "{weight} lb");
            assert_eq!(reading.category, expected, "{weight} lb");
        }
    }

    #[test]
    fn test_bmi_with_unit_height_is_kilograms() {
        let reading = bmi(100.0, 1.0);
        assert!((reading.value - 45.3592).abs() < 1e-9);
        assert_eq!(reading.category, BmiCategory::Obese);
    }

    #[test]
    fn test_palindrome_ignores_case_and_spaces() {
        assert_eq!(is_palindrome("Anita lava la tina"), PalindromeVerdict::Palindrome);
        assert_eq!(is_palindrome("A man, a plan, a canal: Panama"), PalindromeVerdict::Palindrome);
        assert_eq!(is_palindrome("12321"), PalindromeVerdict::Palindrome);
    }

    #[test]
    fn test_palindrome_negative() {
        assert_eq!(is_palindrome("ab"), PalindromeVerdict::NotPalindrome);
    }

    #[test]
    fn test_palindrome_invalid_is_distinct() {
        assert_eq!(is_palindrome("   "), PalindromeVerdict::Invalid);
        assert_eq!(is_palindrome("!!!"), PalindromeVerdict::Invalid);
        assert_ne!(PalindromeVerdict::Invalid, PalindromeVerdict::NotPalindrome);
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Ñandú 42!"), "and42");
    }
}
