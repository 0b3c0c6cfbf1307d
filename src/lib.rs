//! Forward-mode automatic differentiation with dual numbers.
//!
//! This crate provides a single arithmetic type, [`Dual`], that carries a
//! value together with its first derivative with respect to a chosen seed
//! variable. Evaluating an expression over `Dual` operands computes the
//! function value and its exact derivative in one pass — no symbolic
//! manipulation, no finite differences.
//!
//! # Single-variable differentiation
//!
//! Seed the differentiation variable with [`Dual::variable`] (derivative 1)
//! and wrap literals with [`Dual::constant`] (derivative 0):
//!
//! ```
//! use dualnum::Dual;
//!
//! // f(x) = x² + 2x
//! fn f(x: Dual<f64>) -> Dual<f64> {
//!     x * x + Dual::constant(2.0) * x
//! }
//!
//! // Compute f and f' at x=3
//! let y = f(Dual::variable(3.0));
//! assert_eq!(y.value, 15.0);   // f(3) = 15
//! assert_eq!(y.deriv, 8.0);    // f'(3) = 2x + 2 = 8
//! ```
//!
//! # Transcendental functions
//!
//! Trigonometric, exponential, logarithmic and power functions propagate
//! derivatives through the chain rule automatically:
//!
//! ```
//! use dualnum::Dual;
//!
//! // f(x) = x·y + sin(x), with y held constant
//! let x = Dual::variable(5.0);
//! let y = Dual::constant(14.9);
//! let f = x * y + x.sin();
//!
//! assert_eq!(f.value, 5.0 * 14.9 + 5.0_f64.sin());
//! assert_eq!(f.deriv, 14.9 + 5.0_f64.cos());
//! ```
//!
//! # Generic over the scalar type
//!
//! [`Dual`] defaults to `f64` but works with any floating type implementing
//! [`num_traits::Float`]:
//!
//! ```
//! use dualnum::Dual;
//!
//! let x = Dual::<f32>::variable(3.0);
//! let y = x * x;
//! assert_eq!(y.deriv, 6.0);
//! ```
//!
//! # Numeric failure modes
//!
//! The crate performs no domain validation. Division by zero and
//! out-of-domain arguments to [`Dual::log`] or [`Dual::pow`] follow
//! IEEE-754: the result carries NaN or ±∞ components instead of signaling
//! an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod consts;
pub mod dual;

pub use dual::Dual;
