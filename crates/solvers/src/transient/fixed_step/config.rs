use std::cmp::Ordering;

use thiserror::Error;
use unitflow_core::{Dimension, Quantity, units};

use super::{Error, Method, TimeSpan};

/// Largest number of steps a single run may take.
///
/// Every sample is kept in the [`Solution`](super::Solution), so the step
/// count bounds the memory a run allocates.
pub const MAX_STEPS: usize = 10_000_000;

/// How the time span is divided into steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steps {
    /// Split the span into this many equal steps.
    Count(usize),

    /// Take steps of this length, shortening the last one to end on the span.
    Size(Quantity),
}

/// Configuration for the fixed-step solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    method: Method,
    steps: Steps,
}

/// Errors that can occur when validating a fixed-step config or time span.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step count must be at least one")]
    ZeroSteps,

    #[error("step count exceeds the limit of {max}")]
    TooManySteps { max: usize },

    #[error("step size must have dimension of time, got {0}")]
    StepNotTime(Dimension),

    #[error("step size must be finite and positive")]
    NonPositiveStep,

    #[error("time span must have dimension of time, got {start} to {end}")]
    SpanNotTime { start: Dimension, end: Dimension },

    #[error("time span must be finite and end after it starts")]
    EmptySpan,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: Method::Euler,
            steps: Steps::Count(100),
        }
    }
}

impl Config {
    /// Creates a new config with a validated step specification.
    ///
    /// # Errors
    ///
    /// Returns an error if the step count is zero or above [`MAX_STEPS`], or
    /// if the step size is not a finite, positive time.
    pub fn new(method: Method, steps: Steps) -> Result<Self, ConfigError> {
        match steps {
            Steps::Count(0) => return Err(ConfigError::ZeroSteps),
            Steps::Count(count) if count > MAX_STEPS => {
                return Err(ConfigError::TooManySteps { max: MAX_STEPS });
            }
            Steps::Count(_) => {}
            Steps::Size(size) => {
                if size.dimension() != Dimension::TIME {
                    return Err(ConfigError::StepNotTime(size.dimension()));
                }
                let zero = Quantity::new(0.0, units::SECOND);
                if !size.is_finite() || size.partial_cmp(&zero) != Some(Ordering::Greater) {
                    return Err(ConfigError::NonPositiveStep);
                }
            }
        }

        Ok(Self { method, steps })
    }

    /// Returns the integration method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the step specification.
    #[must_use]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Returns the sample times for `span`, from its start to exactly its end.
    ///
    /// A step size that would divide `span` into more than [`MAX_STEPS`]
    /// steps is rejected with [`ConfigError::TooManySteps`].
    pub(crate) fn sample_times(&self, span: &TimeSpan) -> Result<Vec<Quantity>, Error> {
        let arithmetic = |err| Error::arithmetic(0, err);
        let duration = span.duration().map_err(arithmetic)?;

        let (count, size) = match self.steps {
            Steps::Count(count) => (count, duration.scale(1.0 / count as f64)),
            Steps::Size(size) => (step_count(duration, size)?, size),
        };

        let mut times = Vec::with_capacity(count + 1);
        for k in 0..count {
            let time = span
                .start()
                .checked_add(size.scale(k as f64))
                .map_err(arithmetic)?;
            times.push(time);
        }
        times.push(span.end());

        Ok(times)
    }
}

/// Number of `size` steps needed to cover `duration`.
///
/// A ratio within rounding error of an integer is not rounded up, so a span
/// of `1 s` in steps of `0.1 s` takes ten steps rather than eleven.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn step_count(duration: Quantity, size: Quantity) -> Result<usize, Error> {
    let ratio = duration
        .checked_div(size)
        .and_then(|ratio| ratio.value_in(units::ONE))
        .map_err(|err| Error::arithmetic(0, err))?;

    if ratio.is_nan() || ratio > MAX_STEPS as f64 {
        return Err(ConfigError::TooManySteps { max: MAX_STEPS }.into());
    }

    let nearest = ratio.round();

    let count = if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };

    Ok((count as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use unitflow_core::{
        Strip,
        units::{METER, MINUTE, SECOND},
    };

    fn span(start: f64, end: f64) -> TimeSpan {
        TimeSpan::new(Quantity::new(start, SECOND), Quantity::new(end, SECOND)).unwrap()
    }

    #[test]
    fn rejects_invalid_steps() {
        assert_eq!(
            Config::new(Method::Euler, Steps::Count(0)),
            Err(ConfigError::ZeroSteps)
        );
        assert_eq!(
            Config::new(Method::Euler, Steps::Size(Quantity::new(1.0, METER))),
            Err(ConfigError::StepNotTime(Dimension::LENGTH))
        );
        assert_eq!(
            Config::new(Method::Rk4, Steps::Size(Quantity::new(0.0, SECOND))),
            Err(ConfigError::NonPositiveStep)
        );
        assert_eq!(
            Config::new(Method::Rk4, Steps::Size(Quantity::new(-1.0, SECOND))),
            Err(ConfigError::NonPositiveStep)
        );
        assert_eq!(
            Config::new(Method::Rk4, Steps::Size(Quantity::new(f64::NAN, SECOND))),
            Err(ConfigError::NonPositiveStep)
        );
    }

    #[test]
    fn rejects_step_count_above_limit() {
        assert_eq!(
            Config::new(Method::Euler, Steps::Count(usize::MAX)),
            Err(ConfigError::TooManySteps { max: MAX_STEPS })
        );
        assert!(Config::new(Method::Euler, Steps::Count(MAX_STEPS)).is_ok());
    }

    #[test]
    fn tiny_step_size_is_rejected_before_allocating() {
        let config = Config::new(Method::Rk4, Steps::Size(Quantity::new(1e-300, SECOND))).unwrap();

        let err = config.sample_times(&span(0.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig(ConfigError::TooManySteps { max: MAX_STEPS })
        ));
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.method(), Method::Euler);
        assert_eq!(config.steps(), Steps::Count(100));
    }

    #[test]
    fn count_divides_span_evenly() {
        let config = Config::new(Method::Euler, Steps::Count(4)).unwrap();
        let times: Vec<f64> = config
            .sample_times(&span(1.0, 3.0))
            .unwrap()
            .iter()
            .map(Strip::strip)
            .collect();

        assert_eq!(times.len(), 5);
        for (time, expected) in times.iter().zip([1.0, 1.5, 2.0, 2.5, 3.0]) {
            assert_relative_eq!(*time, expected);
        }
    }

    #[test]
    fn size_shortens_last_step() {
        let config = Config::new(Method::Euler, Steps::Size(Quantity::new(0.4, SECOND))).unwrap();
        let times = config.sample_times(&span(0.0, 1.0)).unwrap();

        assert_eq!(times.len(), 4);
        assert_relative_eq!(times[2].strip(), 0.8);
        assert_eq!(times[3].strip(), 1.0);
    }

    #[test]
    fn size_that_nearly_divides_span_does_not_add_a_step() {
        let config = Config::new(Method::Euler, Steps::Size(Quantity::new(0.1, SECOND))).unwrap();
        let times = config.sample_times(&span(0.0, 1.0)).unwrap();

        assert_eq!(times.len(), 11);
        assert_eq!(times.last().map(Strip::strip), Some(1.0));
    }

    #[test]
    fn size_may_use_other_time_units() {
        let config = Config::new(Method::Euler, Steps::Size(Quantity::new(1.0, MINUTE))).unwrap();
        let times = config.sample_times(&span(0.0, 180.0)).unwrap();

        assert_eq!(times.len(), 4);
        assert_relative_eq!(times[1].strip(), 60.0);
    }

    #[test]
    fn step_larger_than_span_takes_one_step() {
        let config = Config::new(Method::Euler, Steps::Size(Quantity::new(5.0, SECOND))).unwrap();
        let times = config.sample_times(&span(0.0, 1.0)).unwrap();

        assert_eq!(times.len(), 2);
        assert_eq!(times[1].strip(), 1.0);
    }
}
