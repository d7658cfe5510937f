//! Bounded random integer generation.
//!
//! Every draw maps a uniform fraction `u ∈ [0, 1)` to an integer with
//! `⌊u · size⌋ + offset`, where `size` and `offset` depend on which bounds
//! are included (see [`RangeInclusion`]).
//!
//! # Random source
//!
//! The fraction source is injected. [`random_integer_with`] takes any
//! `FnMut() -> f64`, which makes draws fully deterministic in tests;
//! [`random_integer_from_rng`] adapts a [`rand::Rng`], and
//! [`random_integer`] uses the thread-local generator.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::error::{MathError, Result};

/// Lower bound used by [`random_number`].
pub const DEFAULT_MIN: f64 = 0.0;

/// Upper bound used by [`random_number`].
pub const DEFAULT_MAX: f64 = 1.0;

/// Which ends of a `[min, max]` range a draw may land on.
///
/// | include_min | include_max | size | offset |
/// |---|---|---|---|
/// | true | true | max−min+1 | min |
/// | true | false | max−min | min |
/// | false | true | max−min | min+1 |
/// | false | false | max−min−1 | min+1 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInclusion {
    /// Whether `min` itself can be drawn.
    pub include_min: bool,
    /// Whether `max` itself can be drawn.
    pub include_max: bool,
}

impl RangeInclusion {
    /// Creates an inclusion setting from the two bound flags.
    pub fn new(include_min: bool, include_max: bool) -> Self {
        Self {
            include_min,
            include_max,
        }
    }

    /// Both bounds included: `[min, max]`.
    pub fn inclusive() -> Self {
        Self::new(true, true)
    }

    /// Neither bound included: `(min, max)`.
    pub fn exclusive() -> Self {
        Self::new(false, false)
    }

    /// Returns `(size, offset)` for the range `min..max`.
    fn size_and_offset(self, min: f64, max: f64) -> (f64, f64) {
        match (self.include_min, self.include_max) {
            (true, true) => (max - min + 1.0, min),
            (true, false) => (max - min, min),
            (false, true) => (max - min, min + 1.0),
            (false, false) => (max - min - 1.0, min + 1.0),
        }
    }
}

impl Default for RangeInclusion {
    fn default() -> Self {
        Self::inclusive()
    }
}

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_integer_from_rng, RangeInclusion};
/// let mut rng = create_rng(42);
/// let x = random_integer_from_rng(1.0, 6.0, RangeInclusion::default(), &mut rng).unwrap();
/// assert!((1.0..=6.0).contains(&x));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

fn draw(min: f64, max: f64, inclusion: RangeInclusion, unit: f64) -> f64 {
    let (size, offset) = inclusion.size_and_offset(min, max);
    if size <= 0.0 {
        tracing::trace!(min, max, ?inclusion, size, "degenerate random range");
    }
    (unit * size).floor() + offset
}

/// Draws a random integer in the range described by `min`, `max` and
/// `inclusion`, taking the uniform fraction from `unit`.
///
/// `unit` must return values in `[0, 1)`. It is called exactly once.
///
/// Ranges whose size is zero or negative (for instance `min == max` with
/// an excluded bound) are not rejected; the formula is applied as-is.
///
/// # Errors
/// - [`MathError::InvalidRange`] if `min > max`.
///
/// # Examples
/// ```
/// use u_numkit::random::{random_integer_with, RangeInclusion};
/// let top = random_integer_with(1.0, 6.0, RangeInclusion::inclusive(), || 0.999).unwrap();
/// assert_eq!(top, 6.0);
/// let bottom = random_integer_with(1.0, 6.0, RangeInclusion::exclusive(), || 0.0).unwrap();
/// assert_eq!(bottom, 2.0);
/// ```
pub fn random_integer_with<F>(
    min: f64,
    max: f64,
    inclusion: RangeInclusion,
    mut unit: F,
) -> Result<f64>
where
    F: FnMut() -> f64,
{
    if min > max {
        return Err(MathError::InvalidRange { min, max });
    }
    Ok(draw(min, max, inclusion, unit()))
}

/// Draws a random integer using `rng` as the source of uniform fractions.
///
/// # Errors
/// - [`MathError::InvalidRange`] if `min > max`.
pub fn random_integer_from_rng<R: Rng>(
    min: f64,
    max: f64,
    inclusion: RangeInclusion,
    rng: &mut R,
) -> Result<f64> {
    random_integer_with(min, max, inclusion, || rng.random::<f64>())
}

/// Draws a random integer using the thread-local generator.
///
/// # Errors
/// - [`MathError::InvalidRange`] if `min > max`.
///
/// # Examples
/// ```
/// use u_numkit::random::{random_integer, RangeInclusion};
/// let x = random_integer(10.0, 20.0, RangeInclusion::default()).unwrap();
/// assert!(x >= 10.0 && x <= 20.0 && x.fract() == 0.0);
/// assert!(random_integer(5.0, 1.0, RangeInclusion::default()).is_err());
/// ```
pub fn random_integer(min: f64, max: f64, inclusion: RangeInclusion) -> Result<f64> {
    random_integer_from_rng(min, max, inclusion, &mut rand::rng())
}

/// Draws `0` or `1` with equal probability: [`DEFAULT_MIN`] to
/// [`DEFAULT_MAX`], both included.
pub fn random_number() -> f64 {
    let unit = rand::rng().random::<f64>();
    draw(DEFAULT_MIN, DEFAULT_MAX, RangeInclusion::default(), unit)
}

// ============================================================================
// Tests
// ============================================================================
