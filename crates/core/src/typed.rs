//! Conversions between [`Quantity`] and statically typed [`uom`] quantities.
//!
//! `uom` checks dimensions at compile time; a [`Quantity`] checks them at run
//! time. Converting a `uom` quantity reads its type-level exponents into a
//! [`Dimension`], so `uom` doubles as a unit registry:
//!
//! ```
//! use uom::si::{f64::Force, force::kilonewton};
//! use unitflow_core::{Dimension, Quantity};
//!
//! let load: Quantity = Force::new::<kilonewton>(1.5).into();
//! assert_eq!(load.dimension(), Dimension::FORCE);
//!
//! let back = Force::try_from(load)?;
//! assert_eq!(back.get::<kilonewton>(), 1.5);
//! # Ok::<(), unitflow_core::QuantityError>(())
//! ```

use std::marker::PhantomData;

use uom::{
    si::{self, SI},
    typenum::Integer,
};

use crate::{Dimension, Quantity, QuantityError, Strip};

/// Reads the run-time dimension of a `uom` ISQ dimension type.
#[must_use]
pub fn dimension_of<D>() -> Dimension
where
    D: si::Dimension + ?Sized,
{
    Dimension::new(
        <D::L as Integer>::to_i32(),
        <D::M as Integer>::to_i32(),
        <D::T as Integer>::to_i32(),
        <D::I as Integer>::to_i32(),
        <D::Th as Integer>::to_i32(),
        <D::N as Integer>::to_i32(),
        <D::J as Integer>::to_i32(),
    )
}

impl<D> From<si::Quantity<D, SI<f64>, f64>> for Quantity
where
    D: si::Dimension + ?Sized,
{
    fn from(value: si::Quantity<D, SI<f64>, f64>) -> Self {
        // `value` is stored in SI base units.
        Quantity::from_si(value.value, dimension_of::<D>())
    }
}

impl<D> TryFrom<Quantity> for si::Quantity<D, SI<f64>, f64>
where
    D: si::Dimension + ?Sized,
{
    type Error = QuantityError;

    fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
        let expected = dimension_of::<D>();
        if quantity.dimension() != expected {
            return Err(QuantityError::DimensionMismatch {
                left: quantity.dimension(),
                right: expected,
            });
        }

        Ok(si::Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value: quantity.strip(),
        })
    }
}
