use thiserror::Error;

use crate::Dimension;

/// Errors raised by dimension-checked arithmetic.
///
/// Every variant is raised at the offending operation. A dimensional error
/// is a modeling bug on the caller's side, so the conflicting dimensions are
/// carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The operands of an operation that requires equal dimensions differ.
    #[error("dimension mismatch: {left} is not compatible with {right}")]
    DimensionMismatch { left: Dimension, right: Dimension },

    /// The divisor has a zero magnitude.
    #[error("division by a zero quantity")]
    DivisionByZero,

    /// A root would produce a non-integral exponent.
    #[error("cannot take root of degree {degree} of dimension {dimension}")]
    IrrationalDimension { dimension: Dimension, degree: u32 },

    /// The root degree is zero or too large to apply.
    #[error("invalid root degree {degree}")]
    InvalidRoot { degree: u32 },
}

impl QuantityError {
    /// Returns the two conflicting dimensions of a mismatch.
    #[must_use]
    pub fn mismatch(&self) -> Option<(Dimension, Dimension)> {
        match *self {
            Self::DimensionMismatch { left, right } => Some((left, right)),
            _ => None,
        }
    }
}
