//! Solvers for transient problems — integrating `du/dt = f(u, p, t)` through
//! time.
//!
//! State types implement [`StepIntegrable`], so every update goes through
//! dimension-checked addition. A derivative function that returns the wrong
//! dimension is rejected on the first step.
//!
//! # Solvers
//!
//! - [`fixed_step`] — explicit Euler or classic RK4 on a fixed time grid
//!
//! [`StepIntegrable`]: unitflow_core::StepIntegrable

pub mod fixed_step;
