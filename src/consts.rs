//! Mathematical constants used alongside [`Dual`](crate::Dual) computations.
//!
//! These are plain scalars, not dual numbers: a constant has no derivative,
//! so wrapping one only happens at the point of use via
//! [`Dual::constant`](crate::Dual::constant) or `From`.

/// Archimedes' constant, π.
pub const PI: f64 = 3.14159265358979323846;

/// Euler's number, e (base of the natural logarithm).
pub const E: f64 = 2.71828182845904523536;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_std() {
        assert_eq!(PI, std::f64::consts::PI);
        assert_eq!(E, std::f64::consts::E);
    }
}
