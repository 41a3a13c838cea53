//! Numerical solvers for the Unitflow framework.
//!
//! # Modules
//!
//! - [`transient`] — integrating ODEs with unit-checked state through time

pub mod transient;
