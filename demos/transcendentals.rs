//! Walk through the transcendental surface of [`Dual`].
//!
//! Each example seeds a variable, applies a function, and prints the
//! `<value, derivative>` pair.
//!
//! Run with: `cargo run --example transcendentals`

use dualnum::{consts, Dual};

fn main() {
    println!("=== Dual Numbers: Transcendental Functions ===\n");

    // f(x) = tan(x) at x=π/4: tan = 1, tan' = 1/cos² = 2
    println!("f(x) = tan(x) at x=π/4");
    let x = Dual::variable(consts::PI / 4.0);
    println!("  {} (expected derivative: 2.0)\n", x.tan());

    // f(x) = log₂(x) at x=8: value 3, derivative 1/(8·ln 2)
    println!("f(x) = log2(x) at x=8");
    let x = Dual::variable(8.0);
    println!("  {}\n", x.log2());

    // f(x) = log₁₀(x) at x=1000
    println!("f(x) = log10(x) at x=1000");
    let x = Dual::variable(1000.0);
    println!("  {}\n", x.log10());

    // f(x) = x^x at x=2: value 4, derivative 4·(ln 2 + 1)
    println!("f(x) = x^x at x=2");
    let x = Dual::variable(2.0);
    println!("  {}\n", x.pow(x));

    // f(x) = √x at x=9: derivative 1/6
    println!("f(x) = sqrt(x) at x=9");
    let x = Dual::variable(9.0);
    println!("  {}\n", x.sqrt());

    // sqr and cube route through the same generalized power rule
    println!("f(x) = x² and x³ at x=3");
    let x = Dual::variable(3.0);
    println!("  {}  {}\n", x.sqr(), x.cube());

    // The natural-log path propagates a′·ln(a) as the tangent;
    // log with base e applies the analytic a′/a rule instead.
    println!("f(x) = ln(x) at x=2, both tangent rules");
    let x = Dual::variable(2.0);
    println!("  ln:          {}", x.ln());
    println!("  ln_analytic: {}", x.ln_analytic());
    println!("  log base e:  {}", x.log(consts::E));
}
