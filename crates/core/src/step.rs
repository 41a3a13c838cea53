use crate::{Quantity, QuantityError};

/// A trait for state types that can be stepped by a unit-checked derivative.
///
/// A derivative has the same shape as the state, with every component
/// divided by the independent variable (usually time). Stepping multiplies
/// the derivative by a step quantity, which always succeeds, and then adds
/// the result to the state, which is checked:
///
/// ```text
/// next = state + derivative * delta
/// ```
///
/// A derivative with the wrong dimension is therefore rejected on the first
/// step instead of producing a wrong number.
pub trait StepIntegrable: Clone {
    /// Adds another value of the same shape and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] for the first component
    /// whose dimensions differ.
    fn checked_add(&self, other: &Self) -> Result<Self, QuantityError>;

    /// Multiplies every component by a quantity.
    #[must_use]
    fn mul_quantity(&self, factor: Quantity) -> Self;

    /// Multiplies every component by a pure number.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;

    /// Returns the value after stepping with a derivative and step size.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if `derivative * delta`
    /// does not have the dimensions of `self`.
    fn step(&self, derivative: &Self, delta: Quantity) -> Result<Self, QuantityError> {
        self.checked_add(&derivative.mul_quantity(delta))
    }
}

impl StepIntegrable for Quantity {
    fn checked_add(&self, other: &Self) -> Result<Self, QuantityError> {
        Quantity::checked_add(*self, *other)
    }

    fn mul_quantity(&self, factor: Quantity) -> Self {
        *self * factor
    }

    fn scale(&self, factor: f64) -> Self {
        Quantity::scale(*self, factor)
    }
}

impl<T: StepIntegrable, const N: usize> StepIntegrable for [T; N] {
    fn checked_add(&self, other: &Self) -> Result<Self, QuantityError> {
        let mut first_err = None;
        let sums = std::array::from_fn(|i| match self[i].checked_add(&other[i]) {
            Ok(sum) => sum,
            Err(err) => {
                first_err.get_or_insert(err);
                self[i].clone()
            }
        });

        match first_err {
            Some(err) => Err(err),
            None => Ok(sums),
        }
    }

    fn mul_quantity(&self, factor: Quantity) -> Self {
        std::array::from_fn(|i| self[i].mul_quantity(factor))
    }

    fn scale(&self, factor: f64) -> Self {
        std::array::from_fn(|i| self[i].scale(factor))
    }
}
