//! Differentiate a composite expression in one forward pass.
//!
//! Seeds `x` as the differentiation variable and `y` as a constant, then
//! evaluates `z = x·y + sin(x) - 15.78^x / y² + log₁₂(x·y)` and prints
//! dz/dx at x=5.
//!
//! Run with: `cargo run --example derivative`

use dualnum::Dual;

fn main() {
    // Differentiating with respect to x.
    let x = Dual::new(5.0, 1.0);
    let y = Dual::from(14.9);

    let z = x * y + x.sin() - Dual::from(15.78).pow(x) / y.sqr() + (x * y).log(12.0);

    // Prints -12143.060942
    println!("{:.6}", z.deriv);
}
