use std::error::Error as StdError;

use crate::Quantity;

/// The right-hand side of an ODE `du/dt = f(u, p, t)`.
///
/// The returned derivative must have the shape of the state with every
/// dimension divided by time. Solvers do not inspect it beforehand; the
/// mismatch surfaces when the derivative is combined with the state.
///
/// Any closure `Fn(&S, &P, &Quantity) -> Result<S, E>` implements this trait:
///
/// ```
/// use unitflow_core::{OdeFunction, Quantity, QuantityError, units};
///
/// let decay = |u: &Quantity, k: &Quantity, _t: &Quantity| -> Result<Quantity, QuantityError> {
///     Ok(-(*u * *k))
/// };
///
/// let u = Quantity::new(2.0, units::KILOGRAM);
/// let k = Quantity::new(0.5, units::HERTZ);
/// let t = Quantity::new(0.0, units::SECOND);
///
/// let rate = decay.derivative(&u, &k, &t)?;
/// assert_eq!(rate.dimension(), u.dimension() / t.dimension());
/// # Ok::<(), QuantityError>(())
/// ```
pub trait OdeFunction<S, P> {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the derivative of `state` at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated.
    fn derivative(&self, state: &S, params: &P, time: &Quantity) -> Result<S, Self::Error>;
}

impl<S, P, E, F> OdeFunction<S, P> for F
where
    F: Fn(&S, &P, &Quantity) -> Result<S, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn derivative(&self, state: &S, params: &P, time: &Quantity) -> Result<S, E> {
        self(state, params, time)
    }
}
