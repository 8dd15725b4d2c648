//! Discriminant-based root finding

use std::fmt;
use num_complex::Complex64;
use serde::Serialize;
use thiserror::Error;

/// Default residual tolerance for [`Roots::verify`].
const VERIFY_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Leading coefficient zero: the equation is not quadratic.
    #[error("coefficient 'a' must be non-zero for a quadratic equation")]
    DegenerateCoefficient,
}

/// The root set of a quadratic equation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Roots {
    /// Discriminant zero: one repeated real root
    Double(f64),
    /// Positive discriminant: two distinct real roots
    Real(f64, f64),
    /// Negative discriminant: a conjugate complex pair
    Complex(Complex64, Complex64),
}

/// `b^2 - 4ac`
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve `a*x^2 + b*x + c = 0`.
///
/// The first root always takes the `+sqrt(D)` branch.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Roots, SolveError> {
    if a == 0.0 {
        return Err(SolveError::DegenerateCoefficient);
    }

    let d = discriminant(a, b, c);
    if d > 0.0 {
        let sqrt_d = d.sqrt();
        let x1 = (-b + sqrt_d) / (2.0 * a);
        let x2 = (-b - sqrt_d) / (2.0 * a);
        Ok(Roots::Real(x1, x2))
    } else if d == 0.0 {
        Ok(Roots::Double(-b / (2.0 * a)))
    } else {
        let sqrt_d = Complex64::new(d, 0.0).sqrt();
        let b = Complex64::new(b, 0.0);
        let two_a = Complex64::new(2.0 * a, 0.0);
        let x1 = (-b + sqrt_d) / two_a;
        let x2 = (-b - sqrt_d) / two_a;
        Ok(Roots::Complex(x1, x2))
    }
}

impl Roots {
    /// Substitute each root back into the polynomial and check every
    /// residual stays below the tolerance.
    pub fn verify(&self, a: f64, b: f64, c: f64) -> bool {
        self.verify_with_tolerance(a, b, c, VERIFY_TOLERANCE)
    }

    pub fn verify_with_tolerance(&self, a: f64, b: f64, c: f64, tolerance: f64) -> bool {
        match self {
            Roots::Double(x) => real_residual(a, b, c, *x) < tolerance,
            Roots::Real(x1, x2) => {
                real_residual(a, b, c, *x1) < tolerance && real_residual(a, b, c, *x2) < tolerance
            }
            Roots::Complex(x1, x2) => {
                complex_residual(a, b, c, *x1) < tolerance && complex_residual(a, b, c, *x2) < tolerance
            }
        }
    }
}

fn real_residual(a: f64, b: f64, c: f64, x: f64) -> f64 {
    (a * x * x + b * x + c).abs()
}

fn complex_residual(a: f64, b: f64, c: f64, x: Complex64) -> f64 {
    (x * x * a + x * b + c).norm()
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roots::Double(x) => write!(f, "x = {}", x),
            Roots::Real(x1, x2) => write!(f, "x1 = {}, x2 = {}", x1, x2),
            Roots::Complex(x1, x2) => write!(f, "x1 = {}, x2 = {}", x1, x2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_real_roots() {
        // x^2 - 5x + 6 = 0 -> x = 3, x = 2
        let roots = solve(1.0, -5.0, 6.0).unwrap();
        assert_eq!(roots, Roots::Real(3.0, 2.0));
    }

    #[test]
    fn test_double_root() {
        // x^2 - 2x + 1 = 0 -> x = 1
        let roots = solve(1.0, -2.0, 1.0).unwrap();
        assert_eq!(roots, Roots::Double(1.0));
    }

    #[test]
    fn test_complex_roots() {
        // x^2 + 1 = 0 -> x = ±i
        let roots = solve(1.0, 0.0, 1.0).unwrap();
        match roots {
            Roots::Complex(x1, x2) => {
                assert!((x1 - Complex64::new(0.0, 1.0)).norm() < 1e-12);
                assert!((x2 - Complex64::new(0.0, -1.0)).norm() < 1e-12);
            }
            other => panic!("expected complex pair, got {:?}", other),
        }
    }

    #[test]
    fn test_root_order_takes_positive_branch_first() {
        // 2x^2 - 4x - 6 = 0 -> x = 3, x = -1
        let roots = solve(2.0, -4.0, -6.0).unwrap();
        assert_eq!(roots, Roots::Real(3.0, -1.0));
    }

    #[test]
    fn test_degenerate_coefficient() {
        assert_eq!(solve(0.0, 2.0, 1.0), Err(SolveError::DegenerateCoefficient));
    }

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, -5.0, 6.0), 1.0);
        assert_eq!(discriminant(1.0, 0.0, 1.0), -4.0);
    }

    #[test]
    fn test_verify_accepts_solutions() {
        for (a, b, c) in [(1.0, -5.0, 6.0), (1.0, -2.0, 1.0), (1.0, 0.0, 1.0), (3.0, 1.5, -0.25)] {
            let roots = solve(a, b, c).unwrap();
            assert!(roots.verify(a, b, c), "{:?} failed verification", roots);
        }
    }

    #[test]
    fn test_verify_rejects_wrong_roots() {
        assert!(!Roots::Real(4.0, 5.0).verify(1.0, -5.0, 6.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Roots::Double(1.0)), "x = 1");
        assert_eq!(format!("{}", Roots::Real(3.0, 2.0)), "x1 = 3, x2 = 2");
    }
}
