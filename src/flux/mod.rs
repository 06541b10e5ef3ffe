//! Numerical flux functions.
//!
//! Provides the interface (Riemann) fluxes used by the DG discretization:
//! the upwind flux (the solver default, with the Burgers sonic fix) and a
//! Lax-Friedrichs alternative.

mod upwind;

pub use upwind::{lax_friedrichs_flux, upwind_flux};
