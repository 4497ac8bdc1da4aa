//! Adaptive Dormand-Prince 5(4) integration on a fixed sample grid.
//!
//! The stepper advances with an embedded 5th/4th order Runge-Kutta pair and
//! proportional step-size control:
//!
//! 1. Evaluate the seven stages of the Dormand-Prince tableau.
//! 2. Form the 5th-order solution and the embedded error estimate.
//! 3. Accept the step when the mixed absolute/relative error norm is at most
//!    one, otherwise retry with a smaller step.
//! 4. Clamp the step to the current grid window so every grid time is hit
//!    exactly, regardless of the internal step sequence.
//!
//! # Example
//!
//! ```ignore
//! use lotka_core::{Integrator, LotkaVolterra, Parameters, TimeGrid};
//! use lotka_solvers::ode::{DormandPrince45, Tolerances};
//!
//! let solver = DormandPrince45::new(Tolerances::default());
//! let field = LotkaVolterra::new(Parameters::default());
//! let points = solver.integrate(&field, [10.0, 5.0], &TimeGrid::default())?;
//! ```

mod dormand_prince;
mod error;
mod tableau;

pub use dormand_prince::{DormandPrince45, Tolerances};
pub use error::Error;
