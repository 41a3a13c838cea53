use crate::Quantity;

/// Discards dimensions, leaving bare SI magnitudes.
///
/// This is the one way to turn a quantity back into a plain number without
/// naming a unit. It exists for plotting and reporting; nothing produced by
/// `strip` should flow back into dimension-checked arithmetic.
pub trait Strip {
    type Stripped;

    fn strip(&self) -> Self::Stripped;
}

impl Strip for Quantity {
    type Stripped = f64;

    fn strip(&self) -> f64 {
        self.magnitude()
    }
}

impl<T: Strip, const N: usize> Strip for [T; N] {
    type Stripped = [T::Stripped; N];

    fn strip(&self) -> Self::Stripped {
        std::array::from_fn(|i| self[i].strip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::units::{KILOMETER, METER_PER_SECOND, NEWTON};

    #[test]
    fn strip_returns_si_magnitudes() {
        assert_eq!(Quantity::new(1.5, NEWTON).strip(), 1.5);
        assert_eq!(Quantity::new(2.0, KILOMETER).strip(), 2000.0);

        let state = [Quantity::new(1.0, KILOMETER), Quantity::new(3.0, METER_PER_SECOND)];
        assert_eq!(state.strip(), [1000.0, 3.0]);
    }
}
