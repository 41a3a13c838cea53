//! Unit-checked integration of exponential growth.
//!
//! Integrates `du/dt = 0.5 u / 3 s` for a force `u0 = 1.5 N` over one second
//! and prints the solution as a plain table. The first attempt deliberately
//! omits the division by time and is rejected before any number is produced.
//!
//! # Usage
//!
//! ```text
//! cargo run --example exponential_growth
//! cargo run --example exponential_growth -- rk4 0.1
//! RUST_LOG=unitflow_solvers=trace cargo run --example exponential_growth
//! ```

use std::error::Error;

use tracing_subscriber::EnvFilter;
use uom::si::{f64::Force, force::newton};
use unitflow_core::{Quantity, QuantityError, units};
use unitflow_solvers::transient::fixed_step::{self, Config, Method, Steps, TimeSpan};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "unitflow_solvers=info".into()),
        )
        .init();

    let method = match std::env::args().nth(1).as_deref() {
        None | Some("euler") => Method::Euler,
        Some("rk4") => Method::Rk4,
        Some(other) => {
            eprintln!("Unknown method: {other}");
            eprintln!("Usage: exponential_growth [euler|rk4] [dt in seconds]");
            std::process::exit(1);
        }
    };
    let dt = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(0.1);

    let u0: Quantity = Force::new::<newton>(1.5).into();
    let span = TimeSpan::new(
        Quantity::new(0.0, units::SECOND),
        Quantity::new(1.0, units::SECOND),
    )?;
    let config = Config::new(method, Steps::Size(Quantity::new(dt, units::SECOND)))?;

    // A force is not a rate of force; the solver refuses to combine them.
    let missing_time = |u: &Quantity, _: &(), _: &Quantity| Ok::<_, QuantityError>(u.scale(0.5));
    if let Err(err) = fixed_step::solve_unobserved(&missing_time, u0, &(), span, config) {
        println!("rejected: {err}\n");
    }

    let growth = |u: &Quantity, _: &(), _: &Quantity| {
        u.scale(0.5).checked_div(Quantity::new(3.0, units::SECOND))
    };
    let solution = fixed_step::solve_unobserved(&growth, u0, &(), span, config)?;

    println!("{:>8}  {:>12}  {:>12}", "t [s]", "u [N]", "exact [N]");
    for (t, u) in solution.stripped() {
        let exact = 1.5 * (t / 6.0).exp();
        println!("{t:>8.3}  {u:>12.6}  {exact:>12.6}");
    }

    Ok(())
}
