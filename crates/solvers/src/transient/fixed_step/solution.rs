use unitflow_core::{Quantity, Strip};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The time and state at one point of the solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<S> {
    pub time: Quantity,
    pub state: S,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Samples from each step, including the initial state.
    pub samples: Vec<Sample<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Sample times, in order.
    pub fn times(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.samples.iter().map(|sample| sample.time)
    }

    /// Sample states, in order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.samples.iter().map(|sample| &sample.state)
    }

    /// The final sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample<S>> {
        self.samples.last()
    }
}

impl<S: Strip> Solution<S> {
    /// Returns `(time, state)` pairs with dimensions removed, for plotting or
    /// reporting.
    #[must_use]
    pub fn stripped(&self) -> Vec<(f64, S::Stripped)> {
        self.samples
            .iter()
            .map(|sample| (sample.time.strip(), sample.state.strip()))
            .collect()
    }
}
