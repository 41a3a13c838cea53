use super::Sample;

/// Event emitted by the fixed-step solver for each sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each accepted step.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// The sample index (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Time and state at this step.
    pub sample: Sample<S>,
}
