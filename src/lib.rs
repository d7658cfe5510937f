//! # u-numkit
//!
//! Standalone numeric utilities over `f64`.
//!
//! Every function is a pure, self-contained computation with input
//! validation. Nothing is cached and nothing is shared between calls; the
//! only outside state read is the thread-local RNG behind
//! [`random_integer`] and [`random_number`].
//!
//! ## Modules
//!
//! - [`elementary`] — Real nth roots and logarithms
//! - [`integer`] — Factorial and primality over integral `f64` inputs
//! - [`equations`] — Linear and quadratic equation solvers
//! - [`random`] — Bounded random integers with an injectable source
//! - [`radix`] — Hexadecimal ↔ decimal conversion
//! - [`error`] — The [`MathError`] type
//!
//! ## Error Model
//!
//! - **Invalid domain input** (zero root degree, even root of a negative,
//!   bad logarithm base or argument, non-integral factorial, `min > max`)
//!   returns [`MathError`].
//! - **Degenerate output** (zero leading coefficient in the solvers,
//!   malformed hexadecimal) is returned as NaN or ±∞ and reported through a
//!   `tracing` debug/trace event only.

pub mod elementary;
pub mod equations;
pub mod error;
pub mod integer;
pub mod radix;
pub mod random;

pub use elementary::{logarithm, natural_log, nth_root, square_root, DEFAULT_ROOT};
pub use equations::{discriminant, solve_linear, solve_quadratic, QuadraticSolution};
pub use error::{MathError, Result};
pub use integer::{factorial, is_prime};
pub use radix::{decimal_to_hexadecimal, hexadecimal_to_decimal};
pub use random::{
    create_rng, random_integer, random_integer_from_rng, random_integer_with, random_number,
    RangeInclusion, DEFAULT_MAX, DEFAULT_MIN,
};
