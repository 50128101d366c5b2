//! Core traits and types for numeth.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`]: a real-valued function of one real variable that may fail
//! - [`Closure`], [`TryClosure`]: adapters that turn closures into functions
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`metrics`]: absolute, relative, and percentage error between values

mod function;
mod observer;

pub mod metrics;

pub use function::{Closure, Function, TryClosure};
pub use observer::Observer;
