use std::{
    fmt,
    ops::{Div, Mul},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::QuantityError;

/// One of the seven SI base dimensions.
///
/// The declaration order is the order of exponents in a [`Dimension`], which
/// matches the order of the ISQ base quantities in [`uom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Amount,
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in exponent order.
    pub const ALL: [Self; 7] = [
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::Current,
        Self::Temperature,
        Self::Amount,
        Self::LuminousIntensity,
    ];

    /// Symbol of the SI base unit for this dimension.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Mass => "kg",
            Self::Time => "s",
            Self::Current => "A",
            Self::Temperature => "K",
            Self::Amount => "mol",
            Self::LuminousIntensity => "cd",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// The physical dimension of a quantity, as exponents over the SI base
/// dimensions.
///
/// Dimensions form a commutative group under multiplication: exponents add
/// under [`multiply`](Self::multiply), [`DIMENSIONLESS`](Self::DIMENSIONLESS)
/// is the identity, and [`inverse`](Self::inverse) negates every exponent.
/// All dimension arithmetic is exact.
///
/// Exponents are integers. The only operation that divides exponents is
/// [`root`](Self::root), and it rejects results that would not be integral,
/// so fractional exponents are never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    exponents: [i32; 7],
}

impl Dimension {
    /// The dimension of a pure number (all exponents zero).
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    pub const TIME: Self = Self::base(BaseDimension::Time);
    pub const CURRENT: Self = Self::base(BaseDimension::Current);
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    pub const AMOUNT: Self = Self::base(BaseDimension::Amount);
    pub const LUMINOUS_INTENSITY: Self = Self::base(BaseDimension::LuminousIntensity);

    /// T⁻¹
    pub const FREQUENCY: Self = Self::TIME.inverse();
    /// L²
    pub const AREA: Self = Self::LENGTH.powi(2);
    /// L³
    pub const VOLUME: Self = Self::LENGTH.powi(3);
    /// L·T⁻¹
    pub const VELOCITY: Self = Self::LENGTH.divide(Self::TIME);
    /// L·T⁻²
    pub const ACCELERATION: Self = Self::VELOCITY.divide(Self::TIME);
    /// M·L·T⁻²
    pub const FORCE: Self = Self::MASS.multiply(Self::ACCELERATION);
    /// M·L²·T⁻²
    pub const ENERGY: Self = Self::FORCE.multiply(Self::LENGTH);
    /// M·L²·T⁻³
    pub const POWER: Self = Self::ENERGY.divide(Self::TIME);
    /// M·L⁻¹·T⁻²
    pub const PRESSURE: Self = Self::FORCE.divide(Self::AREA);

    /// Creates a dimension from its base exponents, in SI order.
    #[must_use]
    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        current: i32,
        temperature: i32,
        amount: i32,
        luminous_intensity: i32,
    ) -> Self {
        Self {
            exponents: [
                length,
                mass,
                time,
                current,
                temperature,
                amount,
                luminous_intensity,
            ],
        }
    }

    /// Creates the dimension of a single base dimension to the first power.
    #[must_use]
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; 7];
        exponents[base.index()] = 1;
        Self { exponents }
    }

    /// Returns the exponent of one base dimension.
    #[must_use]
    pub const fn exponent(&self, base: BaseDimension) -> i32 {
        self.exponents[base.index()]
    }

    /// Returns all exponents, in SI order.
    #[must_use]
    pub const fn exponents(&self) -> [i32; 7] {
        self.exponents
    }

    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < self.exponents.len() {
            if self.exponents[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Group product: exponents are summed component-wise.
    ///
    /// # Panics
    ///
    /// Panics if an exponent would overflow `i32`, in both debug and release
    /// builds.
    #[must_use]
    pub const fn multiply(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < exponents.len() {
            exponents[i] = match exponents[i].checked_add(rhs.exponents[i]) {
                Some(exp) => exp,
                None => panic!("dimension exponent overflow"),
            };
            i += 1;
        }
        Self { exponents }
    }

    /// Group quotient: exponents are subtracted component-wise.
    #[must_use]
    pub const fn divide(self, rhs: Self) -> Self {
        self.multiply(rhs.inverse())
    }

    /// Group inverse: every exponent is negated.
    #[must_use]
    pub const fn inverse(self) -> Self {
        self.powi(-1)
    }

    /// Raises the dimension to an integer power.
    ///
    /// # Panics
    ///
    /// Panics if an exponent would overflow `i32`, in both debug and release
    /// builds.
    #[must_use]
    pub const fn powi(self, power: i32) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < exponents.len() {
            exponents[i] = match exponents[i].checked_mul(power) {
                Some(exp) => exp,
                None => panic!("dimension exponent overflow"),
            };
            i += 1;
        }
        Self { exponents }
    }

    /// Takes the `degree`-th root of the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::InvalidRoot`] if `degree` is zero, and
    /// [`QuantityError::IrrationalDimension`] if any exponent is not evenly
    /// divisible by `degree`.
    pub fn root(self, degree: u32) -> Result<Self, QuantityError> {
        let divisor = i32::try_from(degree).map_err(|_| QuantityError::InvalidRoot { degree })?;
        if divisor == 0 {
            return Err(QuantityError::InvalidRoot { degree });
        }

        if self.exponents.iter().any(|exp| exp % divisor != 0) {
            return Err(QuantityError::IrrationalDimension {
                dimension: self,
                degree,
            });
        }

        Ok(Self {
            exponents: self.exponents.map(|exp| exp / divisor),
        })
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

/// Formats as a product of base unit symbols, e.g. `m·kg·s^-2`.
///
/// A dimensionless value formats as `1`.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut first = true;
        for base in BaseDimension::ALL {
            let exp = self.exponent(base);
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, "·")?;
            }
            first = false;

            match exp {
                1 => write!(f, "{}", base.symbol())?,
                _ => write!(f, "{}^{exp}", base.symbol())?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_dimensions() {
        assert_eq!(Dimension::VELOCITY, Dimension::new(1, 0, -1, 0, 0, 0, 0));
        assert_eq!(Dimension::FORCE, Dimension::new(1, 1, -2, 0, 0, 0, 0));
        assert_eq!(Dimension::POWER, Dimension::new(2, 1, -3, 0, 0, 0, 0));
        assert_eq!(Dimension::PRESSURE, Dimension::new(-1, 1, -2, 0, 0, 0, 0));
        assert_eq!(Dimension::FREQUENCY.exponent(BaseDimension::Time), -1);
    }

    #[test]
    fn group_laws() {
        let d = Dimension::FORCE;
        let e = Dimension::TIME;

        assert_eq!(d * Dimension::DIMENSIONLESS, d);
        assert_eq!(d * d.inverse(), Dimension::DIMENSIONLESS);
        assert_eq!(d * e, e * d);
        assert_eq!((d / e) * e, d);
        assert!(Dimension::default().is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
    }

    #[test]
    fn exact_roots() {
        assert_eq!(Dimension::AREA.root(2), Ok(Dimension::LENGTH));
        assert_eq!(Dimension::VOLUME.root(3), Ok(Dimension::LENGTH));
        assert_eq!(
            Dimension::DIMENSIONLESS.root(5),
            Ok(Dimension::DIMENSIONLESS)
        );
        assert_eq!(Dimension::ENERGY.root(1), Ok(Dimension::ENERGY));
    }

    #[test]
    fn roots_that_leave_the_lattice_fail() {
        assert_eq!(
            Dimension::LENGTH.root(2),
            Err(QuantityError::IrrationalDimension {
                dimension: Dimension::LENGTH,
                degree: 2,
            })
        );

        // M·L·T⁻² has two odd exponents.
        assert!(matches!(
            Dimension::FORCE.root(2),
            Err(QuantityError::IrrationalDimension { .. })
        ));

        assert_eq!(
            Dimension::AREA.root(0),
            Err(QuantityError::InvalidRoot { degree: 0 })
        );
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow")]
    fn powi_overflow_panics() {
        let _ = Dimension::LENGTH.powi(i32::MAX).powi(2);
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow")]
    fn multiply_overflow_panics() {
        let huge = Dimension::TIME.powi(i32::MAX);
        let _ = huge * Dimension::TIME;
    }

    #[test]
    fn large_exponents_within_range_are_exact() {
        let d = Dimension::LENGTH.powi(i32::MAX);
        assert_eq!(d.exponent(BaseDimension::Length), i32::MAX);
        assert_eq!((d * d.inverse()), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn display() {
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimension::LENGTH.to_string(), "m");
        assert_eq!(Dimension::FORCE.to_string(), "m·kg·s^-2");
        assert_eq!((Dimension::FORCE / Dimension::TIME).to_string(), "m·kg·s^-3");
        assert_eq!(Dimension::FREQUENCY.to_string(), "s^-1");
    }
}
