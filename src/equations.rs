//! Closed-form solvers for linear and quadratic equations.
//!
//! Neither solver validates its leading coefficient: `a = 0` divides by
//! zero and the result is ±∞ or NaN rather than an error.

/// Solutions of `ax² + bx + c = 0` as returned by [`solve_quadratic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSolution {
    /// First root, `(−b + √|Δ|) / 2a`, or the double root when `Δ = 0`.
    pub x1: f64,
    /// Second root, `(−b − √|Δ|) / 2a`; `None` when `Δ = 0`.
    pub x2: Option<f64>,
    /// `false` when `Δ < 0`.
    ///
    /// In that case `x1` and `x2` are computed from `|Δ|` with the
    /// real-root formula and are **not** the complex roots.
    pub are_real: bool,
}

impl QuadraticSolution {
    /// Returns the roots that are present: one for a double root, two otherwise.
    pub fn roots(&self) -> Vec<f64> {
        std::iter::once(self.x1).chain(self.x2).collect()
    }
}

/// Computes the discriminant `Δ = b² − 4ac`.
///
/// # Examples
/// ```
/// use u_numkit::equations::discriminant;
/// assert_eq!(discriminant(1.0, -3.0, 2.0), 1.0);
/// ```
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solves the linear equation `ax + b = 0`, returning `x = −b/a`.
///
/// # Examples
/// ```
/// use u_numkit::equations::solve_linear;
/// assert_eq!(solve_linear(2.0, -4.0), 2.0);
/// ```
pub fn solve_linear(a: f64, b: f64) -> f64 {
    if a == 0.0 {
        tracing::debug!(a, b, "linear equation has a zero leading coefficient");
    }
    -b / a
}

/// Solves the quadratic equation `ax² + bx + c = 0`.
///
/// - `Δ = 0`: one root `−b/2a`, `x2` is `None`.
/// - `Δ ≠ 0`: `x1 = (−b + √|Δ|)/2a`, `x2 = (−b − √|Δ|)/2a` and
///   `are_real = Δ > 0`.
///
/// For `Δ < 0` the returned values only flag the complex case through
/// `are_real = false`; the complex roots themselves are not computed.
///
/// # Examples
/// ```
/// use u_numkit::equations::solve_quadratic;
/// let s = solve_quadratic(1.0, -3.0, 2.0);
/// assert_eq!((s.x1, s.x2, s.are_real), (2.0, Some(1.0), true));
///
/// let double = solve_quadratic(1.0, 2.0, 1.0);
/// assert_eq!((double.x1, double.x2), (-1.0, None));
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticSolution {
    if a == 0.0 {
        tracing::debug!(a, b, c, "quadratic equation has a zero leading coefficient");
    }

    let delta = discriminant(a, b, c);
    if delta == 0.0 {
        return QuadraticSolution {
            x1: -b / (2.0 * a),
            x2: None,
            are_real: true,
        };
    }

    let sqrt_delta = delta.abs().sqrt();
    QuadraticSolution {
        x1: (-b + sqrt_delta) / (2.0 * a),
        x2: Some((-b - sqrt_delta) / (2.0 * a)),
        are_real: delta > 0.0,
    }
}

// ============================================================================
// Tests
// ============================================================================
