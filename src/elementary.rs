//! Roots and logarithms over real `f64` values.
//!
//! Both operations reject inputs outside their real domain with a
//! [`MathError`] instead of returning NaN.

use crate::error::{MathError, Result};

/// Root degree used by [`square_root`].
pub const DEFAULT_ROOT: f64 = 2.0;

/// Computes the real `root`-th root of `value`.
///
/// The magnitude is `|value|^(1/root)`; the sign of `value` is then
/// restored, so odd roots of negative numbers come out negative. The sign
/// is restored for fractional degrees as well, which is only an
/// approximation of a real root there.
///
/// # Errors
/// - [`MathError::ZeroRootDegree`] if `root == 0`.
/// - [`MathError::EvenRootOfNegative`] if `value < 0` and `root` is even.
///
/// # Examples
/// ```
/// use u_numkit::elementary::nth_root;
/// assert!((nth_root(27.0, 3.0).unwrap() - 3.0).abs() < 1e-12);
/// assert!((nth_root(-8.0, 3.0).unwrap() + 2.0).abs() < 1e-12);
/// assert!(nth_root(-4.0, 2.0).is_err());
/// ```
pub fn nth_root(value: f64, root: f64) -> Result<f64> {
    if root == 0.0 {
        return Err(MathError::ZeroRootDegree);
    }
    if value < 0.0 && root % 2.0 == 0.0 {
        return Err(MathError::EvenRootOfNegative { value, root });
    }

    let magnitude = value.abs().powf(1.0 / root);
    Ok(if value > 0.0 { magnitude } else { -magnitude })
}

/// Square root through [`nth_root`] with the default degree.
///
/// # Examples
/// ```
/// use u_numkit::elementary::square_root;
/// assert_eq!(square_root(16.0).unwrap(), 4.0);
/// ```
pub fn square_root(value: f64) -> Result<f64> {
    nth_root(value, DEFAULT_ROOT)
}

/// Computes `log_base(value)` as `ln(value) / ln(base)`.
///
/// The base is validated before the value.
///
/// # Errors
/// - [`MathError::InvalidLogBase`] if `base <= 0` or `base == 1`.
/// - [`MathError::NonPositiveLogArgument`] if `value <= 0`.
///
/// # Examples
/// ```
/// use u_numkit::elementary::logarithm;
/// assert!((logarithm(8.0, 2.0).unwrap() - 3.0).abs() < 1e-12);
/// assert!(logarithm(5.0, 1.0).is_err());
/// ```
pub fn logarithm(value: f64, base: f64) -> Result<f64> {
    if base <= 0.0 || base == 1.0 {
        return Err(MathError::invalid_log_base(base));
    }
    if value <= 0.0 {
        return Err(MathError::NonPositiveLogArgument { value });
    }

    Ok(value.ln() / base.ln())
}

/// Natural logarithm: [`logarithm`] with base `e`.
///
/// # Examples
/// ```
/// use u_numkit::elementary::natural_log;
/// assert!((natural_log(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-15);
/// assert!(natural_log(0.0).is_err());
/// ```
pub fn natural_log(value: f64) -> Result<f64> {
    logarithm(value, std::f64::consts::E)
}

// ============================================================================
// Tests
// ============================================================================
