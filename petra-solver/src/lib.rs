//! Petra Solver - Quadratic Equations
//!
//! Solves `a*x^2 + b*x + c = 0` over the reals and the complex plane via
//! the discriminant. A negative discriminant yields a conjugate complex
//! pair rather than "no roots".

mod quadratic;

pub use quadratic::{discriminant, solve, Roots, SolveError};
