//! The weak-form DG zone update with Runge-Kutta stage blending.
//!
//! One call to [`advance_rk`] advances every interior zone of the write
//! buffer by one Runge-Kutta sub-stage:
//!
//! du_l/dt = (1/dx) [ Σ_n f(u(ξ_n)) φ'_l(ξ_n) w_n
//!                    - (F^*_{i-1/2} φ_l(-1) n_L + F^*_{i+1/2} φ_l(+1) n_R) ]
//!
//! followed by the convex blend
//!
//! u_wr = (1 - rk_param) * (u_rd + dt * du/dt) + rk_param * u_rk
//!
//! which realizes SSP-style multi-stage schemes when driven with the stage
//! parameters in [`crate::time`].
//!
//! The three buffers have fixed roles for the duration of the call: `u_rd`
//! is the current sub-stage state (read-only, its guard zones must be
//! populated), `u_rk` is the stage-0 state (read-only, blended in), and
//! `u_wr` receives the result. Each zone's output depends only on its own
//! 3-point stencil in `u_rd` and its own slot of `u_rk`, so zones may be
//! updated in any order; the `&`/`&mut` signature rules out aliasing between
//! the write buffer and either read buffer.

use crate::basis::{
    eval_modal, phi_at_point, DPHI, FACE_NORMALS, GAUSS_WEIGHTS, NPOLY, NUM_POINTS, PHI_FACE_LEFT,
    PHI_FACE_RIGHT,
};
use crate::equations::ScalarLaw;
use crate::flux::upwind_flux;
use crate::mesh::Grid1D;

use super::error::SolverError;
use super::state::ModalState1D;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance all interior zones by one Runge-Kutta sub-stage.
///
/// # Arguments
/// * `law` - Conservation law, fixed at configuration time
/// * `grid` - Uniform grid supplying `num_zones` and `dx`
/// * `u_rk` - Stage-0 state (start of the full time step), read-only
/// * `u_rd` - Current sub-stage state, read-only; guard zones must be filled
/// * `u_wr` - Result buffer; all interior modes are overwritten, guard slots
///   are left untouched
/// * `time` - Current time; unused by the present flux set, reserved for
///   time-dependent source terms
/// * `rk_param` - Convex blend coefficient in [0, 1]; 0 gives plain forward
///   Euler, nonzero values implement later SSP stages
/// * `dt` - Time step, strictly positive
#[allow(clippy::too_many_arguments)]
pub fn advance_rk(
    law: &ScalarLaw,
    grid: &Grid1D,
    u_rk: &ModalState1D,
    u_rd: &ModalState1D,
    u_wr: &mut ModalState1D,
    time: f64,
    rk_param: f64,
    dt: f64,
) -> Result<(), SolverError> {
    validate(grid, u_rk, u_rd, u_wr, rk_param, dt)?;

    let dx = grid.dx;
    for (i, out) in u_wr.interior_mut().chunks_exact_mut(NPOLY).enumerate() {
        let (left, center, right) = u_rd.stencil(i);
        update_zone(
            law,
            left,
            center,
            right,
            u_rk.zone(i),
            dx,
            time,
            rk_param,
            dt,
            out,
        );
    }
    Ok(())
}

/// Parallel version of [`advance_rk`] using rayon.
///
/// Zones are distributed over the thread pool as disjoint `NPOLY`-sized
/// output chunks. The result is bit-identical to the sequential version.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn advance_rk_parallel(
    law: &ScalarLaw,
    grid: &Grid1D,
    u_rk: &ModalState1D,
    u_rd: &ModalState1D,
    u_wr: &mut ModalState1D,
    time: f64,
    rk_param: f64,
    dt: f64,
) -> Result<(), SolverError> {
    validate(grid, u_rk, u_rd, u_wr, rk_param, dt)?;

    let dx = grid.dx;
    u_wr.interior_mut()
        .par_chunks_exact_mut(NPOLY)
        .enumerate()
        .for_each(|(i, out)| {
            let (left, center, right) = u_rd.stencil(i);
            update_zone(
                law,
                left,
                center,
                right,
                u_rk.zone(i),
                dx,
                time,
                rk_param,
                dt,
                out,
            );
        });
    Ok(())
}

/// Validate the caller contract once, at the API boundary.
fn validate(
    grid: &Grid1D,
    u_rk: &ModalState1D,
    u_rd: &ModalState1D,
    u_wr: &ModalState1D,
    rk_param: f64,
    dt: f64,
) -> Result<(), SolverError> {
    for buf in [u_rk, u_rd, u_wr] {
        if buf.num_zones != grid.num_zones {
            return Err(SolverError::ZoneCountMismatch {
                expected: grid.num_zones,
                actual: buf.num_zones,
            });
        }
    }
    if !(dt > 0.0) {
        return Err(SolverError::NonPositiveTimeStep(dt));
    }
    if !(0.0..=1.0).contains(&rk_param) {
        return Err(SolverError::BlendParameterOutOfRange(rk_param));
    }
    Ok(())
}

/// Update a single zone: weak-form residual, forward-Euler sub-step, blend.
#[allow(clippy::too_many_arguments)]
fn update_zone(
    law: &ScalarLaw,
    left: &[f64],
    center: &[f64],
    right: &[f64],
    u_rk: &[f64],
    dx: f64,
    _time: f64,
    rk_param: f64,
    dt: f64,
    u_wr: &mut [f64],
) {
    // Face traces: each interface sees the right face of the zone on its
    // left and the left face of the zone on its right.
    let uimh_l = eval_modal(left, &PHI_FACE_RIGHT);
    let uimh_r = eval_modal(center, &PHI_FACE_LEFT);
    let uiph_l = eval_modal(center, &PHI_FACE_RIGHT);
    let uiph_r = eval_modal(right, &PHI_FACE_LEFT);

    // Single-valued interface fluxes
    let fimh = upwind_flux(law, uimh_l, uimh_r);
    let fiph = upwind_flux(law, uiph_l, uiph_r);

    // Pointwise flux samples at the quadrature points
    let mut fx = [0.0; NUM_POINTS];
    for (n, f) in fx.iter_mut().enumerate() {
        let ux = eval_modal(center, &phi_at_point(n));
        *f = law.flux(ux);
    }

    for l in 0..NPOLY {
        // Volume term of the weak form
        let mut udot_v = 0.0;
        for n in 0..NUM_POINTS {
            udot_v += fx[n] * DPHI[l][n] * GAUSS_WEIGHTS[n] / dx;
        }

        // Surface term, outward normals -1 and +1
        let udot_s = -(fimh * PHI_FACE_LEFT[l] * FACE_NORMALS[0]
            + fiph * PHI_FACE_RIGHT[l] * FACE_NORMALS[1])
            / dx;

        let candidate = center[l] + (udot_v + udot_s) * dt;
        u_wr[l] = (1.0 - rk_param) * candidate + rk_param * u_rk[l];
    }
}
