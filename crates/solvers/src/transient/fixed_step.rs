//! Fixed-step solver for ODE problems with unit-checked state.
//!
//! This module integrates `du/dt = f(u, p, t)` on a fixed time grid, where
//! the state `u` is built from [`Quantity`] values. Each step multiplies the
//! derivative by a time quantity and adds it to the state:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! The addition is dimension-checked, so a derivative that is not a rate of
//! the state (for example a force where a force per second is expected) fails
//! with [`Error::DimensionMismatch`] at step 0.
//!
//! # Example
//!
//! ```
//! use unitflow_core::{Dimension, Quantity, QuantityError, units};
//! use unitflow_solvers::transient::fixed_step::{self, Config, Method, Steps, TimeSpan};
//!
//! let f = |u: &Quantity, k: &Quantity, _t: &Quantity| -> Result<Quantity, QuantityError> {
//!     Ok(*u * *k)
//! };
//!
//! let u0 = Quantity::new(1.5, units::NEWTON);
//! let k = Quantity::new(0.5, units::HERTZ);
//! let span = TimeSpan::new(Quantity::new(0.0, units::SECOND), Quantity::new(1.0, units::SECOND))?;
//! let config = Config::new(Method::Rk4, Steps::Count(10))?;
//!
//! let solution = fixed_step::solve_unobserved(&f, u0, &k, span, config)?;
//!
//! assert_eq!(solution.samples.len(), 11);
//! assert!(solution.states().all(|u| u.dimension() == Dimension::FORCE));
//! # Ok::<(), fixed_step::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod method;
mod solution;
mod span;

pub use action::Action;
pub use config::{Config, ConfigError, MAX_STEPS, Steps};
pub use error::Error;
pub use event::Event;
pub use method::Method;
pub use solution::{Sample, Solution, Status};
pub use span::TimeSpan;

use tracing::{debug, trace, warn};
use unitflow_core::{Observer, OdeFunction, StepIntegrable};

use method::StepFailure;

/// Integrates an ODE over `span` on a fixed time grid.
///
/// # Algorithm
///
/// 1. Compute the sample times from `span` and `config`.
/// 2. Record the initial sample and emit it as step 0.
/// 3. For each step:
///    - Advance the state with the configured [`Method`], which evaluates
///      the derivative and applies checked `state + derivative * dt` updates.
///    - Record the new sample.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with every sample.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a derivative is not a rate of the
/// state, [`Error::Derivative`] if the derivative function fails, and
/// [`Error::Arithmetic`] for any other failed quantity operation. All carry
/// the index of the failed step. The run is not resumed after an error.
///
/// Returns [`Error::InvalidConfig`] before the first step if a step size
/// would divide `span` into more than [`MAX_STEPS`] steps.
pub fn solve<S, P, F, Obs>(
    f: &F,
    initial: S,
    params: &P,
    span: TimeSpan,
    config: Config,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable,
    F: OdeFunction<S, P>,
    Obs: Observer<Event<S>, Action>,
{
    let times = config.sample_times(&span)?;
    let steps = times.len() - 1;

    debug!(
        method = ?config.method(),
        steps,
        start = %span.start(),
        end = %span.end(),
        "fixed-step integration starting"
    );

    let initial = Sample {
        time: times[0],
        state: initial,
    };

    let mut samples = Vec::with_capacity(steps + 1);
    samples.push(initial.clone());

    // Emit initial event.
    let event = Event {
        step: 0,
        sample: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, "observer stopped integration");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            samples,
            steps: 0,
        });
    }

    for (index, window) in times.windows(2).enumerate() {
        let (t, t_next) = (window[0], window[1]);
        let current = &samples[index].state;

        let next_state = config
            .method()
            .advance(f, current, params, t, t_next)
            .map_err(|failure| step_error(index, failure))?;

        let sample = Sample {
            time: t_next,
            state: next_state,
        };
        samples.push(sample.clone());

        let step = index + 1;
        trace!(step, time = %t_next, "step accepted");

        // Emit event to observer.
        let event = Event { step, sample };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "observer stopped integration");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                samples,
                steps: step,
            });
        }
    }

    debug!(steps, "fixed-step integration complete");

    Ok(Solution {
        status: Status::Complete,
        samples,
        steps,
    })
}

/// Integrates an ODE without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if any step fails; see [`solve`].
pub fn solve_unobserved<S, P, F>(
    f: &F,
    initial: S,
    params: &P,
    span: TimeSpan,
    config: Config,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable,
    F: OdeFunction<S, P>,
{
    solve(f, initial, params, span, config, ())
}

fn step_error<E>(step: usize, failure: StepFailure<E>) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let err = match failure {
        StepFailure::Derivative(err) => Error::derivative(step, err),
        StepFailure::Arithmetic(err) => Error::arithmetic(step, err),
    };

    match &err {
        Error::DimensionMismatch {
            expected, found, ..
        } => warn!(step, %expected, %found, "dimension mismatch"),
        other => warn!(step, error = %other, "integration step failed"),
    }

    err
}
