//! Strong Stability Preserving Runge-Kutta time integration.
//!
//! SSP-RK3 (Shu-Osher form) is optimal for hyperbolic conservation laws.
//! Written with the kernel's blend convention
//!
//! u_wr = (1 - b) * (u_rd + dt * L(u_rd)) + b * u_rk
//!
//! the three stages are
//!
//! u1    = u    + dt * L(u)                           b = 0
//! u2    = 3/4 u + 1/4 (u1 + dt * L(u1))              b = 3/4
//! u_new = 1/3 u + 2/3 (u2 + dt * L(u2))              b = 1/3

use crate::basis::{NPOLY, NUM_POINTS};
use crate::boundary::BoundaryCondition1D;
use crate::equations::ScalarLaw;
use crate::mesh::Grid1D;
use crate::solver::{advance_rk, ModalState1D, SolverError};

/// Blend parameter for each SSP-RK3 sub-stage.
const RK_PARAMS: [f64; 3] = [0.0, 0.75, 1.0 / 3.0];

/// Stage time offsets as fractions of dt: t, t + dt, t + dt/2.
const STAGE_TIME_OFFSETS: [f64; 3] = [0.0, 1.0, 0.5];

/// Perform one full SSP-RK3 step, advancing `u` from `t` to `t + dt`.
///
/// Guard zones of the working buffer are refreshed before every sub-stage,
/// and the write buffer of one sub-stage becomes the read buffer of the next
/// by swapping roles rather than copying.
pub fn ssp_rk3_step(
    law: &ScalarLaw,
    grid: &Grid1D,
    bc: &BoundaryCondition1D,
    u: &mut ModalState1D,
    t: f64,
    dt: f64,
) -> Result<(), SolverError> {
    let u_rk = u.clone();
    let mut u_rd = u.clone();
    let mut u_wr = ModalState1D::new(grid.num_zones);

    for (&rk_param, &offset) in RK_PARAMS.iter().zip(STAGE_TIME_OFFSETS.iter()) {
        bc.fill_guard_zones(&mut u_rd);
        advance_rk(
            law,
            grid,
            &u_rk,
            &u_rd,
            &mut u_wr,
            t + offset * dt,
            rk_param,
            dt,
        )?;
        std::mem::swap(&mut u_rd, &mut u_wr);
    }

    *u = u_rd;
    Ok(())
}

/// Compute the CFL-limited time step.
///
/// For DG with polynomial order N:
/// dt <= CFL * dx / (s_max * (2*N + 1))
///
/// where s_max is the maximum wave speed over all quadrature-point values of
/// the current state. The factor (2*N + 1) accounts for the eigenvalue
/// scaling of DG.
///
/// # Arguments
/// * `law` - Conservation law (supplies the wave speed)
/// * `grid` - The grid (for dx)
/// * `u` - Current state (the wave speed is state-dependent for Burgers)
/// * `cfl` - CFL number (typically 0.1 - 0.5)
pub fn compute_dt(law: &ScalarLaw, grid: &Grid1D, u: &ModalState1D, cfl: f64) -> f64 {
    let order = NPOLY - 1;

    let mut s_max: f64 = 0.0;
    for i in 0..u.num_zones {
        for n in 0..NUM_POINTS {
            s_max = s_max.max(law.max_wave_speed(u.value_at_quadrature(i, n)));
        }
    }

    if s_max < 1e-14 {
        // Nothing moves, any timestep is fine
        return f64::INFINITY;
    }

    cfl * grid.dx / (s_max * (2 * order + 1) as f64)
}

/// Total conserved quantity: the sum of cell means times the zone width.
///
/// For periodic boundaries this is invariant in time up to roundoff, which
/// makes it the standard conservation diagnostic.
pub fn total_mass(grid: &Grid1D, u: &ModalState1D) -> f64 {
    let mut sum = 0.0;
    for i in 0..u.num_zones {
        sum += u.cell_average(i);
    }
    sum * grid.dx
}
