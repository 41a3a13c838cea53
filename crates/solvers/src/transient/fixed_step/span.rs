use std::cmp::Ordering;

use unitflow_core::{Dimension, Quantity, QuantityError};

use super::ConfigError;

/// The interval of time to integrate over.
///
/// Both ends are time quantities; the end is strictly after the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    start: Quantity,
    end: Quantity,
}

impl TimeSpan {
    /// Creates a validated time span.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SpanNotTime`] if either end is not a time, and
    /// [`ConfigError::EmptySpan`] if either end is not finite or `end` is not
    /// after `start`.
    pub fn new(start: Quantity, end: Quantity) -> Result<Self, ConfigError> {
        if start.dimension() != Dimension::TIME || end.dimension() != Dimension::TIME {
            return Err(ConfigError::SpanNotTime {
                start: start.dimension(),
                end: end.dimension(),
            });
        }

        if !start.is_finite()
            || !end.is_finite()
            || end.partial_cmp(&start) != Some(Ordering::Greater)
        {
            return Err(ConfigError::EmptySpan);
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> Quantity {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Quantity {
        self.end
    }

    pub(crate) fn duration(&self) -> Result<Quantity, QuantityError> {
        self.end.checked_sub(self.start)
    }
}
