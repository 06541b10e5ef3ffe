//! # dg-scalar
//!
//! A modal Discontinuous Galerkin solver for 1D scalar hyperbolic
//! conservation laws.
//!
//! Each zone carries three modal coefficients in a scaled Legendre basis;
//! the core kernel advances them by one Runge-Kutta sub-stage using 3-point
//! Gauss quadrature for the volume integral and upwind numerical fluxes at
//! the zone interfaces. This crate provides:
//! - The scaled Legendre basis and its fixed quadrature tables
//! - Conservation law abstractions (linear advection, inviscid Burgers)
//! - Numerical fluxes (upwind with Burgers sonic fix, Lax-Friedrichs)
//! - Guard-padded stage-buffer storage with zone views
//! - The weak-form zone update kernel with SSP-style stage blending
//! - Guard-zone boundary fills (periodic, outflow, fixed)
//! - SSP-RK3 time integration and CFL control

pub mod basis;
pub mod boundary;
pub mod equations;
pub mod flux;
pub mod mesh;
pub mod solver;
pub mod time;

// Re-export main types for convenience
pub use basis::{eval_modal, NPOLY, NUM_POINTS};
pub use boundary::BoundaryCondition1D;
pub use equations::{Advection, Burgers, ScalarLaw};
pub use flux::{lax_friedrichs_flux, upwind_flux};
pub use mesh::Grid1D;
pub use solver::{advance_rk, ModalState1D, SolverError, NG};
#[cfg(feature = "parallel")]
pub use solver::advance_rk_parallel;
pub use time::{compute_dt, ssp_rk3_step, total_mass};
