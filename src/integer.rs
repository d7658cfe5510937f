//! Integer-valued functions over `f64` inputs: factorial and primality.
//!
//! Inputs stay `f64` so that NaN, infinities and fractional values reach
//! the functions and are classified explicitly rather than by a cast.

use crate::error::{MathError, Result};

/// Returns `true` if `x` is finite and has no fractional part.
fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Computes the conventional factorial `number!` of a non-negative integer.
///
/// `0!` and `1!` return `1` directly; larger inputs multiply `1·2·…·number`.
/// There is no upper bound: from `171!` on the product exceeds `f64::MAX`
/// and the result is `+∞`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`MathError::NotANumber`] if `number` is NaN.
/// - [`MathError::NoFactorial`] if `number` is negative, fractional or infinite.
///
/// # Examples
/// ```
/// use u_numkit::integer::factorial;
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!(factorial(2.5).is_err());
/// ```
pub fn factorial(number: f64) -> Result<f64> {
    if number.is_nan() {
        return Err(MathError::NotANumber { arg: "number" });
    }
    if !is_integer(number) || number < 0.0 {
        return Err(MathError::NoFactorial { value: number });
    }
    if number == 0.0 || number == 1.0 {
        return Ok(1.0);
    }

    let mut product = 1.0;
    let mut i = 2.0;
    while i <= number {
        product *= i;
        if product.is_infinite() {
            tracing::debug!(number, "factorial overflowed the f64 range");
            return Ok(f64::INFINITY);
        }
        i += 1.0;
    }
    Ok(product)
}

/// Tests whether `number` is prime.
///
/// Non-integers, values below 2 and even values other than 2 are not
/// prime. Odd candidates are trial-divided by odd divisors up to `√number`.
///
/// # Complexity
/// Time: O(√n), Space: O(1)
///
/// # Errors
/// - [`MathError::NotANumber`] if `number` is NaN.
///
/// # Examples
/// ```
/// use u_numkit::integer::is_prime;
/// assert!(is_prime(17.0).unwrap());
/// assert!(!is_prime(1.0).unwrap());
/// assert!(!is_prime(2.5).unwrap());
/// ```
pub fn is_prime(number: f64) -> Result<bool> {
    if number.is_nan() {
        return Err(MathError::NotANumber { arg: "number" });
    }
    if !is_integer(number) || number < 2.0 || (number != 2.0 && number % 2.0 == 0.0) {
        return Ok(false);
    }
    if number == 2.0 {
        return Ok(true);
    }

    let mut divisor = 3.0;
    while divisor * divisor <= number {
        if number % divisor == 0.0 {
            return Ok(false);
        }
        divisor += 2.0;
    }
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Trial division over every candidate below `n`.
    fn naive_is_prime(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0.0).unwrap(), 1.0);
        assert_eq!(factorial(1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_factorial_known_values() {
        assert_eq!(factorial(5.0).unwrap(), 120.0);
        assert_eq!(factorial(10.0).unwrap(), 3_628_800.0);
        assert_eq!(factorial(20.0).unwrap(), 2_432_902_008_176_640_000.0);
    }

    #[test]
    fn test_factorial_rejects_invalid() {
        assert_eq!(factorial(-3.0), Err(MathError::NoFactorial { value: -3.0 }));
        assert_eq!(factorial(2.5), Err(MathError::NoFactorial { value: 2.5 }));
        assert!(factorial(f64::INFINITY).is_err());
        assert_eq!(
            factorial(f64::NAN),
            Err(MathError::NotANumber { arg: "number" })
        );
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(factorial(170.0).unwrap().is_finite());
        assert_eq!(factorial(171.0).unwrap(), f64::INFINITY);
        assert_eq!(factorial(1000.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_is_prime_known_values() {
        assert!(is_prime(2.0).unwrap());
        assert!(is_prime(3.0).unwrap());
        assert!(is_prime(17.0).unwrap());
        assert!(is_prime(7919.0).unwrap());
        assert!(!is_prime(1.0).unwrap());
        assert!(!is_prime(4.0).unwrap());
        assert!(!is_prime(9.0).unwrap());
        assert!(!is_prime(25.0).unwrap());
        assert!(!is_prime(7917.0).unwrap());
    }

    #[test]
    fn test_is_prime_outside_domain() {
        assert!(!is_prime(-7.0).unwrap());
        assert!(!is_prime(0.0).unwrap());
        assert!(!is_prime(7.5).unwrap());
        assert!(!is_prime(f64::INFINITY).unwrap());
        assert_eq!(
            is_prime(f64::NAN),
            Err(MathError::NotANumber { arg: "number" })
        );
    }

    #[test]
    fn test_is_prime_large() {
        // 2^31 - 1 (Mersenne prime)
        assert!(is_prime(2_147_483_647.0).unwrap());
        assert!(!is_prime(2_147_483_649.0).unwrap());
    }

    #[test]
    fn test_is_prime_matches_naive_below_2000() {
        for n in 0..2000_u64 {
            assert_eq!(is_prime(n as f64).unwrap(), naive_is_prime(n), "n = {n}");
        }
    }
}
