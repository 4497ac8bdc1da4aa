//! Numerical solvers for the Lotka-Volterra phase-portrait explorer.
//!
//! This crate provides the integrator behind the interactive loop:
//!
//! - [`ode`] — an adaptive Dormand-Prince 5(4) stepper that samples its
//!   solution exactly on a [`TimeGrid`](lotka_core::TimeGrid)
//!
//! The solver implements [`Integrator`](lotka_core::Integrator), so the
//! session core stays free of numerical code.

pub mod ode;
