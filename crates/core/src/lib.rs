//! Core types for the Lotka-Volterra phase-portrait explorer.
//!
//! This crate defines the shared abstractions that the solver and the
//! presentation shell build on:
//!
//! - [`Parameters`] — the four model rates with their control ranges
//! - [`State`] — a (prey, predator) population pair
//! - [`TimeGrid`] — the evenly spaced sample times for one run
//! - [`VectorField`] / [`LotkaVolterra`] — the ODE right-hand side
//! - [`Integrator`] — the seam a numerical solver implements
//! - [`Trajectory`] — the sampled result of one integration
//! - [`Session`] — the state machine turning input batches into re-renders

mod field;
mod grid;
mod integrate;
mod params;
mod session;
mod state;
mod trajectory;

pub use field::{LotkaVolterra, VectorField};
pub use grid::TimeGrid;
pub use integrate::Integrator;
pub use params::{ControlRange, Parameters};
pub use session::{InputBatch, RenderPayload, Session};
pub use state::State;
pub use trajectory::Trajectory;
