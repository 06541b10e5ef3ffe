//! Modal basis: scaled Legendre polynomials and fixed quadrature tables.

pub mod legendre;
mod tables;

pub use legendre::{legendre, legendre_derivative, scaled_legendre, scaled_legendre_derivative};
pub use tables::{
    phi_at_point, DPHI, FACE_NORMALS, GAUSS_POINTS, GAUSS_WEIGHTS, NPOLY, NUM_POINTS, PHI,
    PHI_FACE_LEFT, PHI_FACE_RIGHT,
};

/// Evaluate a modal expansion at a point, given the basis values at that point.
///
/// Computes the inner product Σ_l coeffs[l] * phi[l]. The summation runs
/// left to right at every call site, so repeated evaluations of the same
/// zone are bit-for-bit reproducible.
pub fn eval_modal(coeffs: &[f64], phi: &[f64]) -> f64 {
    debug_assert_eq!(coeffs.len(), phi.len());

    let mut sum = 0.0;
    for (c, p) in coeffs.iter().zip(phi.iter()) {
        sum += c * p;
    }
    sum
}
