use std::{
    cmp::Ordering,
    fmt,
    ops::{Mul, Neg},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Dimension, QuantityError, Unit};

/// A magnitude paired with its physical dimension.
///
/// The magnitude is always held in SI coherent units, which makes every pair
/// of quantities with the same dimension directly comparable and addable
/// regardless of the units they were written in.
///
/// Operations that require equal dimensions (addition, subtraction,
/// comparison) are checked and fail with
/// [`QuantityError::DimensionMismatch`]. Multiplication never fails: the
/// result dimension is the product of the operand dimensions.
///
/// The magnitude can only be recovered through [`Strip`](crate::Strip) or
/// [`value_in`](Self::value_in). Both are meant for display and reporting.
///
/// # Example
///
/// ```
/// use unitflow_core::{Dimension, Quantity, units};
///
/// let force = Quantity::new(1.5, units::NEWTON);
/// let time = Quantity::new(1.0, units::SECOND);
///
/// assert!(force.checked_add(time).is_err());
/// assert_eq!((force * time).dimension(), Dimension::FORCE * Dimension::TIME);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    magnitude: f64,
    dimension: Dimension,
}

impl Quantity {
    /// Creates a quantity from a value expressed in `unit`.
    #[must_use]
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            magnitude: value * unit.scale(),
            dimension: unit.dimension(),
        }
    }

    /// Creates a quantity from a magnitude already in SI coherent units.
    #[must_use]
    pub const fn from_si(magnitude: f64, dimension: Dimension) -> Self {
        Self {
            magnitude,
            dimension,
        }
    }

    /// Creates a pure number.
    #[must_use]
    pub const fn dimensionless(value: f64) -> Self {
        Self::from_si(value, Dimension::DIMENSIONLESS)
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.magnitude.is_finite()
    }

    /// Returns the value of this quantity expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if `unit` has a different
    /// dimension.
    pub fn value_in(&self, unit: Unit) -> Result<f64, QuantityError> {
        self.require_dimension(unit.dimension())?;
        Ok(self.magnitude / unit.scale())
    }

    /// Adds two quantities of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        self.require_dimension(rhs.dimension)?;
        Ok(Self::from_si(self.magnitude + rhs.magnitude, self.dimension))
    }

    /// Subtracts two quantities of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        self.require_dimension(rhs.dimension)?;
        Ok(Self::from_si(self.magnitude - rhs.magnitude, self.dimension))
    }

    /// Divides by another quantity; dimensions are divided.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, QuantityError> {
        if rhs.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Self::from_si(
            self.magnitude / rhs.magnitude,
            self.dimension / rhs.dimension,
        ))
    }

    /// Multiplies the magnitude by a pure number.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::from_si(self.magnitude * factor, self.dimension)
    }

    /// Raises the quantity to an integer power.
    ///
    /// # Panics
    ///
    /// Panics if a dimension exponent would overflow `i32`.
    #[must_use]
    pub fn powi(self, power: i32) -> Self {
        Self::from_si(self.magnitude.powi(power), self.dimension.powi(power))
    }

    /// Takes the real `degree`-th root.
    ///
    /// Odd roots keep the sign of the magnitude. Even roots of a negative
    /// magnitude are NaN, as in `f64::sqrt`.
    ///
    /// # Errors
    ///
    /// Fails if the dimension has no integral root of this degree; see
    /// [`Dimension::root`].
    pub fn root(self, degree: u32) -> Result<Self, QuantityError> {
        let dimension = self.dimension.root(degree)?;
        let magnitude = match degree {
            1 => self.magnitude,
            2 => self.magnitude.sqrt(),
            3 => self.magnitude.cbrt(),
            n if n % 2 == 1 => {
                self.magnitude.signum() * self.magnitude.abs().powf(1.0 / f64::from(n))
            }
            n => self.magnitude.powf(1.0 / f64::from(n)),
        };
        Ok(Self::from_si(magnitude, dimension))
    }

    /// Square root; shorthand for `root(2)`.
    ///
    /// # Errors
    ///
    /// Fails if any exponent of the dimension is odd.
    pub fn sqrt(self) -> Result<Self, QuantityError> {
        self.root(2)
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_si(self.magnitude.abs(), self.dimension)
    }

    fn require_dimension(&self, other: Dimension) -> Result<(), QuantityError> {
        if self.dimension == other {
            Ok(())
        } else {
            Err(QuantityError::DimensionMismatch {
                left: self.dimension,
                right: other,
            })
        }
    }

    pub(crate) fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_si(
            self.magnitude * rhs.magnitude,
            self.dimension * rhs.dimension,
        )
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs.scale(self)
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

/// Quantities are only ordered against quantities of the same dimension.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension == other.dimension {
            self.magnitude.partial_cmp(&other.magnitude)
        } else {
            None
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.magnitude, f)?;
        if !self.dimension.is_dimensionless() {
            write!(f, " {}", self.dimension)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::units::{
        HOUR, KILOMETER, KILOMETER_PER_HOUR, METER, METER_PER_SECOND, MINUTE, NEWTON, SECOND,
        SQUARE_METER,
    };

    #[test]
    fn construction_normalizes_to_si() {
        let distance = Quantity::new(1.5, KILOMETER);
        assert_eq!(distance, Quantity::from_si(1500.0, Dimension::LENGTH));

        let sum = Quantity::new(1.0, MINUTE)
            .checked_add(Quantity::new(30.0, SECOND))
            .unwrap();
        assert_relative_eq!(sum.value_in(SECOND).unwrap(), 90.0);
        assert_relative_eq!(sum.value_in(MINUTE).unwrap(), 1.5);
    }

    #[test]
    fn add_time_to_length_fails() {
        let time = Quantity::new(1.0, SECOND);
        let length = Quantity::new(1.0, METER);

        assert_eq!(
            time.checked_add(length),
            Err(QuantityError::DimensionMismatch {
                left: Dimension::TIME,
                right: Dimension::LENGTH,
            })
        );
        assert!(time.checked_sub(length).is_err());

        let product = time * length;
        assert_eq!(product.dimension(), Dimension::TIME * Dimension::LENGTH);
        assert_relative_eq!(product.magnitude(), 1.0);
    }

    #[test]
    fn division_by_zero_fails() {
        let force = Quantity::new(3.0, NEWTON);
        let zero = Quantity::new(0.0, SECOND);
        assert_eq!(force.checked_div(zero), Err(QuantityError::DivisionByZero));

        let rate = force.checked_div(Quantity::new(2.0, SECOND)).unwrap();
        assert_eq!(rate.dimension(), Dimension::FORCE / Dimension::TIME);
        assert_relative_eq!(rate.magnitude(), 1.5);
    }

    #[test]
    fn roots() {
        let area = Quantity::new(9.0, SQUARE_METER);
        let side = area.sqrt().unwrap();
        assert_eq!(side.dimension(), Dimension::LENGTH);
        assert_relative_eq!(side.magnitude(), 3.0);

        let length = Quantity::new(4.0, METER);
        assert_eq!(
            length.root(2),
            Err(QuantityError::IrrationalDimension {
                dimension: Dimension::LENGTH,
                degree: 2,
            })
        );

        let volume = Quantity::from_si(-27.0, Dimension::VOLUME);
        let cube_side = volume.root(3).unwrap();
        assert_relative_eq!(cube_side.magnitude(), -3.0);

        let odd = Quantity::dimensionless(-32.0).root(5).unwrap();
        assert_relative_eq!(odd.magnitude(), -2.0);

        assert!(Quantity::dimensionless(-4.0).root(2).unwrap().magnitude().is_nan());
    }

    #[test]
    fn scale_and_negate_keep_dimension() {
        let speed = Quantity::new(36.0, KILOMETER_PER_HOUR);
        let doubled = speed * 2.0;
        assert_eq!(doubled.dimension(), Dimension::VELOCITY);
        assert_relative_eq!(doubled.value_in(METER_PER_SECOND).unwrap(), 20.0);
        assert_eq!(2.0 * speed, doubled);
        assert_eq!((-speed).dimension(), Dimension::VELOCITY);
        assert_relative_eq!((-speed).abs().magnitude(), speed.magnitude());
    }

    #[test]
    fn value_in_checks_dimension() {
        let duration = Quantity::new(2.0, HOUR);
        assert!(duration.value_in(METER).is_err());
        assert_relative_eq!(duration.value_in(MINUTE).unwrap(), 120.0);
    }

    #[test]
    fn ordering_requires_equal_dimensions() {
        let short = Quantity::new(1.0, METER);
        let long = Quantity::new(1.0, KILOMETER);
        assert!(short < long);
        assert_eq!(short.partial_cmp(&Quantity::new(1.0, SECOND)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Quantity::new(1.5, NEWTON).to_string(), "1.5 m·kg·s^-2");
        assert_eq!(Quantity::dimensionless(0.25).to_string(), "0.25");
        assert_eq!(format!("{:.2}", Quantity::new(1.0, SECOND)), "1.00 s");
    }

    fn dimension() -> impl Strategy<Value = Dimension> {
        prop::array::uniform7(-3..=3i32)
            .prop_map(|[l, m, t, i, th, n, j]| Dimension::new(l, m, t, i, th, n, j))
    }

    fn quantity_of(dimension: Dimension) -> impl Strategy<Value = Quantity> {
        (-1e3..1e3f64).prop_map(move |value| Quantity::from_si(value, dimension))
    }

    fn nonzero_quantity() -> impl Strategy<Value = Quantity> {
        (dimension(), 1e-3..1e3f64, any::<bool>()).prop_map(|(dimension, value, negative)| {
            let value = if negative { -value } else { value };
            Quantity::from_si(value, dimension)
        })
    }

    proptest! {
        #[test]
        fn add_keeps_dimension_and_commutes(
            (a, b) in dimension().prop_flat_map(|d| (quantity_of(d), quantity_of(d)))
        ) {
            let ab = a.checked_add(b).unwrap();
            let ba = b.checked_add(a).unwrap();
            prop_assert_eq!(ab.dimension(), a.dimension());
            prop_assert_eq!(ab.magnitude(), ba.magnitude());
        }

        #[test]
        fn add_is_associative(
            (a, b, c) in dimension()
                .prop_flat_map(|d| (quantity_of(d), quantity_of(d), quantity_of(d)))
        ) {
            let left = a.checked_add(b).unwrap().checked_add(c).unwrap();
            let right = a.checked_add(b.checked_add(c).unwrap()).unwrap();
            prop_assert!((left.magnitude() - right.magnitude()).abs() <= 1e-9);
        }

        #[test]
        fn add_with_different_dimensions_fails(d in dimension(), e in dimension()) {
            prop_assume!(d != e);
            let result = Quantity::from_si(1.0, d).checked_add(Quantity::from_si(1.0, e));
            prop_assert_eq!(result, Err(QuantityError::DimensionMismatch { left: d, right: e }));
        }

        #[test]
        fn multiply_combines_dimensions_and_commutes(
            a in dimension().prop_flat_map(quantity_of),
            b in dimension().prop_flat_map(quantity_of),
        ) {
            prop_assert_eq!((a * b).dimension(), a.dimension() * b.dimension());
            prop_assert_eq!((a * b).magnitude(), (b * a).magnitude());
        }

        #[test]
        fn divide_then_multiply_round_trips(
            a in dimension().prop_flat_map(quantity_of),
            b in nonzero_quantity(),
        ) {
            let back = a.checked_div(b).unwrap() * b;
            prop_assert_eq!(back.dimension(), a.dimension());
            let tolerance = 1e-9 * a.magnitude().abs().max(1.0);
            prop_assert!((back.magnitude() - a.magnitude()).abs() <= tolerance);
        }

        #[test]
        fn root_of_power_recovers_dimension(d in dimension(), degree in 1..5u32) {
            let power = i32::try_from(degree).unwrap();
            let q = Quantity::from_si(2.0, d).powi(power);
            let root = q.root(degree).unwrap();
            prop_assert_eq!(root.dimension(), d);
            prop_assert!((root.magnitude() - 2.0).abs() < 1e-12);
        }
    }
}
