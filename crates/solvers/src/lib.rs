//! Numerical solvers for numeth.
//!
//! - [`equation`]: root finders for scalar equations `f(x) = 0`
//! - [`linear`]: direct and iterative solvers for square linear systems

pub mod equation;
pub mod linear;
