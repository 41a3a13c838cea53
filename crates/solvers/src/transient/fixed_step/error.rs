use std::error::Error as StdError;

use unitflow_core::{Dimension, QuantityError};

use super::ConfigError;

/// Errors that can occur during fixed-step integration.
///
/// Every error raised during a run carries the 0-based index of the step
/// being attempted, so step 0 is the step from the initial state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("dimension mismatch at step {step}: expected {expected}, found {found}")]
    DimensionMismatch {
        step: usize,
        expected: Dimension,
        found: Dimension,
    },

    #[error("arithmetic error at step {step}: {source}")]
    Arithmetic {
        step: usize,
        #[source]
        source: QuantityError,
    },

    #[error("derivative error at step {step}: {source}")]
    Derivative {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn arithmetic(step: usize, err: QuantityError) -> Self {
        match err {
            QuantityError::DimensionMismatch { left, right } => Self::DimensionMismatch {
                step,
                expected: left,
                found: right,
            },
            source => Self::Arithmetic { step, source },
        }
    }

    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(step: usize, err: E) -> Self {
        Self::Derivative {
            step,
            source: Box::new(err),
        }
    }

    /// Returns the index of the failed step, if the error occurred mid-run.
    #[must_use]
    pub fn step(&self) -> Option<usize> {
        match *self {
            Self::InvalidConfig(_) => None,
            Self::DimensionMismatch { step, .. }
            | Self::Arithmetic { step, .. }
            | Self::Derivative { step, .. } => Some(step),
        }
    }
}
