use unitflow_core::{OdeFunction, Quantity, QuantityError, StepIntegrable};

/// Integration method used for each fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Explicit (forward) Euler, first order.
    ///
    /// ```text
    /// u_{n+1} = u_n + f(u_n, p, t_n) * dt
    /// ```
    Euler,

    /// Classic fourth-order Runge–Kutta.
    ///
    /// Four derivative evaluations per step. Every intermediate state is
    /// formed with the same checked `state + derivative * dt` update as
    /// [`Euler`](Self::Euler), so a derivative with the wrong dimension is
    /// still rejected on the first step.
    Rk4,
}

/// Failure inside a single step, before the step index is attached.
#[derive(Debug)]
pub(crate) enum StepFailure<E> {
    Derivative(E),
    Arithmetic(QuantityError),
}

impl<E> From<QuantityError> for StepFailure<E> {
    fn from(err: QuantityError) -> Self {
        Self::Arithmetic(err)
    }
}

impl Method {
    /// Advances `state` from time `t` to time `t_next`.
    pub(crate) fn advance<S, P, F>(
        self,
        f: &F,
        state: &S,
        params: &P,
        t: Quantity,
        t_next: Quantity,
    ) -> Result<S, StepFailure<F::Error>>
    where
        S: StepIntegrable,
        F: OdeFunction<S, P>,
    {
        let eval = |state: &S, time: &Quantity| {
            f.derivative(state, params, time)
                .map_err(StepFailure::Derivative)
        };

        let dt = t_next.checked_sub(t)?;

        match self {
            Method::Euler => {
                let k1 = eval(state, &t)?;
                Ok(state.step(&k1, dt)?)
            }
            Method::Rk4 => {
                let half_dt = dt.scale(0.5);
                let t_half = t.checked_add(half_dt)?;

                let k1 = eval(state, &t)?;
                let k2 = eval(&state.step(&k1, half_dt)?, &t_half)?;
                let k3 = eval(&state.step(&k2, half_dt)?, &t_half)?;
                let k4 = eval(&state.step(&k3, dt)?, &t_next)?;

                let slope = k1
                    .checked_add(&k2.scale(2.0))?
                    .checked_add(&k3.scale(2.0))?
                    .checked_add(&k4)?;

                Ok(state.step(&slope, dt.scale(1.0 / 6.0))?)
            }
        }
    }
}
