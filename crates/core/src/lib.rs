//! Core traits and types for the Unitflow framework.
//!
//! This crate defines units-checked values and the contracts that solvers
//! build on:
//!
//! - [`Dimension`] — exponents over the SI base dimensions
//! - [`Unit`] and [`units`] — a dimension with a scale, used to build and read
//!   quantities
//! - [`Quantity`] — a magnitude paired with its dimension, with checked
//!   arithmetic that fails with [`QuantityError`]
//! - [`StepIntegrable`] — state types a solver can step with a derivative
//! - [`OdeFunction`] — the right-hand side `f(u, p, t)` of an ODE
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions
//! - [`Strip`] — drops dimensions at display and plotting boundaries
//!
//! Statically typed [`uom`] quantities convert to and from [`Quantity`]; see
//! [`typed`].

mod dimension;
mod error;
mod observer;
mod ode;
mod quantity;
mod step;
mod strip;
pub mod typed;
mod unit;
pub mod units;

pub use dimension::{BaseDimension, Dimension};
pub use error::QuantityError;
pub use observer::Observer;
pub use ode::OdeFunction;
pub use quantity::Quantity;
pub use step::StepIntegrable;
pub use strip::Strip;
pub use unit::Unit;
