use std::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Dimension;

/// A unit of measure: a dimension and the factor to its SI coherent unit.
///
/// Units are only used to construct and read quantities. A [`Quantity`]
/// stores its magnitude in SI coherent units, so the unit a value was written
/// in is gone once it has been constructed.
///
/// Named units live in [`units`](crate::units).
///
/// [`Quantity`]: crate::Quantity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    dimension: Dimension,
    scale: f64,
}

impl Unit {
    /// Creates a unit with the given dimension and scale to the SI coherent
    /// unit of that dimension.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not finite and positive.
    #[must_use]
    pub const fn new(dimension: Dimension, scale: f64) -> Self {
        assert!(
            scale.is_finite() && scale > 0.0,
            "unit scale must be finite and positive"
        );
        Self { dimension, scale }
    }

    /// The SI coherent unit of a dimension.
    #[must_use]
    pub const fn coherent(dimension: Dimension) -> Self {
        Self::new(dimension, 1.0)
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Factor that converts a value in this unit to SI coherent units.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn powi(self, power: i32) -> Self {
        Self {
            dimension: self.dimension.powi(power),
            scale: self.scale.powi(power),
        }
    }
}

impl Mul for Unit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            dimension: self.dimension * rhs.dimension,
            scale: self.scale * rhs.scale,
        }
    }
}

impl Div for Unit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self {
            dimension: self.dimension / rhs.dimension,
            scale: self.scale / rhs.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::units::{HOUR, KILOMETER, METER, METER_PER_SECOND, SECOND};

    #[test]
    fn composed_units() {
        let km_per_hour = KILOMETER / HOUR;
        assert_eq!(km_per_hour.dimension(), Dimension::VELOCITY);
        assert_relative_eq!(km_per_hour.scale(), 1.0 / 3.6);

        assert_eq!(METER / SECOND, METER_PER_SECOND);

        let square_km = KILOMETER.powi(2);
        assert_eq!(square_km.dimension(), Dimension::AREA);
        assert_relative_eq!(square_km.scale(), 1e6);
    }

    #[test]
    #[should_panic(expected = "unit scale must be finite and positive")]
    fn zero_scale_is_rejected() {
        let _ = Unit::new(Dimension::LENGTH, 0.0);
    }
}
