//! Stage-buffer storage for the 1D modal DG discretization.
//!
//! A [`ModalState1D`] holds one stage buffer: `NPOLY` modal coefficients per
//! zone in a contiguous array, padded with one guard zone on each side. The
//! guard slots carry neighbor or boundary data and are written only by the
//! guard-fill routines in [`crate::boundary`]; the update kernel reads them
//! through [`ModalState1D::stencil`] and never writes them.

use crate::basis::{
    eval_modal, phi_at_point, scaled_legendre, GAUSS_POINTS, GAUSS_WEIGHTS, NPOLY, NUM_POINTS, PHI,
};
use crate::mesh::Grid1D;

/// Number of guard zones on each side of the interior.
///
/// The update stencil reaches exactly one neighbor in each direction, so a
/// single guard zone suffices. Widening the stencil (higher polynomial order)
/// would require growing this together with the basis tables.
pub const NG: usize = 1;

/// One stage buffer of modal coefficients, guard-zone padded.
///
/// Layout is flat: zone `i` of the interior occupies
/// `data[NPOLY * (i + NG) .. NPOLY * (i + NG + 1)]`. Index `0` holds the left
/// guard zone and index `num_zones + 1` the right guard zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState1D {
    /// Modal coefficients, stored as data[(i + NG) * NPOLY + l].
    pub data: Vec<f64>,
    /// Number of interior zones (guard zones excluded).
    pub num_zones: usize,
}

impl ModalState1D {
    /// Create a zero-initialized stage buffer for `num_zones` interior zones.
    pub fn new(num_zones: usize) -> Self {
        assert!(num_zones >= 1, "need at least one zone");
        Self {
            data: vec![0.0; (num_zones + 2 * NG) * NPOLY],
            num_zones,
        }
    }

    /// Modal coefficients of interior zone `i`.
    pub fn zone(&self, i: usize) -> &[f64] {
        assert!(i < self.num_zones, "zone index {} out of range", i);
        let start = (i + NG) * NPOLY;
        &self.data[start..start + NPOLY]
    }

    /// Mutable modal coefficients of interior zone `i`.
    pub fn zone_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.num_zones, "zone index {} out of range", i);
        let start = (i + NG) * NPOLY;
        &mut self.data[start..start + NPOLY]
    }

    /// The (left, center, right) coefficient triple read by the update
    /// stencil for interior zone `i`. The left neighbor of zone 0 and the
    /// right neighbor of the last zone are the guard slots.
    pub fn stencil(&self, i: usize) -> (&[f64], &[f64], &[f64]) {
        assert!(i < self.num_zones, "zone index {} out of range", i);
        let start = (i + NG) * NPOLY;
        (
            &self.data[start - NPOLY..start],
            &self.data[start..start + NPOLY],
            &self.data[start + NPOLY..start + 2 * NPOLY],
        )
    }

    /// The left guard slot.
    pub fn left_guard(&self) -> &[f64] {
        &self.data[..NPOLY]
    }

    /// Mutable left guard slot (for boundary fill).
    pub fn left_guard_mut(&mut self) -> &mut [f64] {
        &mut self.data[..NPOLY]
    }

    /// The right guard slot.
    pub fn right_guard(&self) -> &[f64] {
        let start = (self.num_zones + NG) * NPOLY;
        &self.data[start..start + NPOLY]
    }

    /// Mutable right guard slot (for boundary fill).
    pub fn right_guard_mut(&mut self) -> &mut [f64] {
        let start = (self.num_zones + NG) * NPOLY;
        &mut self.data[start..start + NPOLY]
    }

    /// All interior coefficients as one flat slice.
    pub fn interior(&self) -> &[f64] {
        &self.data[NG * NPOLY..(self.num_zones + NG) * NPOLY]
    }

    /// All interior coefficients, mutable.
    pub fn interior_mut(&mut self) -> &mut [f64] {
        &mut self.data[NG * NPOLY..(self.num_zones + NG) * NPOLY]
    }

    /// L2-project a function onto the modal basis, zone by zone.
    ///
    /// With the scaled basis normalized to ∫ φ_l² dξ = 2, the coefficients
    /// are u_l = (1/2) ∫ f φ_l dξ, evaluated with the 3-point Gauss rule.
    /// Guard slots are left untouched.
    pub fn project<F>(&mut self, grid: &Grid1D, f: F)
    where
        F: Fn(f64) -> f64,
    {
        assert_eq!(self.num_zones, grid.num_zones);

        for i in 0..self.num_zones {
            let mut coeffs = [0.0; NPOLY];
            for n in 0..NUM_POINTS {
                let x = grid.reference_to_physical(i, GAUSS_POINTS[n]);
                let fx = f(x);
                for l in 0..NPOLY {
                    coeffs[l] += 0.5 * GAUSS_WEIGHTS[n] * fx * PHI[l][n];
                }
            }
            self.zone_mut(i).copy_from_slice(&coeffs);
        }
    }

    /// Evaluate the polynomial of zone `i` at reference coordinate `xi` in [-1, 1].
    pub fn evaluate(&self, i: usize, xi: f64) -> f64 {
        let mut phi = [0.0; NPOLY];
        for (l, p) in phi.iter_mut().enumerate() {
            *p = scaled_legendre(l, xi);
        }
        eval_modal(self.zone(i), &phi)
    }

    /// Evaluate the polynomial of zone `i` at quadrature point `n`.
    pub fn value_at_quadrature(&self, i: usize, n: usize) -> f64 {
        eval_modal(self.zone(i), &phi_at_point(n))
    }

    /// Cell average of zone `i`. With the scaled basis this is the mode-0
    /// coefficient.
    pub fn cell_average(&self, i: usize) -> f64 {
        self.zone(i)[0]
    }

    /// Quadrature L2 error against an exact solution.
    pub fn l2_error<F>(&self, grid: &Grid1D, exact: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        assert_eq!(self.num_zones, grid.num_zones);

        let mut err2 = 0.0;
        for i in 0..self.num_zones {
            for n in 0..NUM_POINTS {
                let x = grid.reference_to_physical(i, GAUSS_POINTS[n]);
                let diff = self.value_at_quadrature(i, n) - exact(x);
                err2 += 0.5 * GAUSS_WEIGHTS[n] * diff * diff * grid.dx;
            }
        }
        err2.sqrt()
    }
}
