//! Fixed quadrature and basis tables for the 3-mode modal discretization.
//!
//! The solution in each zone is expanded in the first three scaled Legendre
//! polynomials on the reference interval [-1, 1], and volume integrals are
//! approximated with 3-point Gauss-Legendre quadrature. Both choices are
//! hard-wired: `NPOLY` and `NUM_POINTS` are coupled, and changing one without
//! regenerating every table below is unsound.
//!
//! All entries are plain `const` data; nothing here is ever mutated.

/// Number of modal coefficients per zone (polynomial order 2, 3rd-order scheme).
pub const NPOLY: usize = 3;

/// Number of Gauss-Legendre quadrature points per zone.
pub const NUM_POINTS: usize = 3;

/// Gauss-Legendre quadrature abscissae on [-1, 1]: {-sqrt(3/5), 0, sqrt(3/5)}.
pub const GAUSS_POINTS: [f64; NUM_POINTS] = [-0.7745966692414834, 0.0, 0.7745966692414834];

/// Gauss-Legendre quadrature weights: {5/9, 8/9, 5/9}. They sum to 2.
pub const GAUSS_WEIGHTS: [f64; NUM_POINTS] =
    [0.5555555555555556, 0.8888888888888888, 0.5555555555555556];

/// Scaled Legendre basis values at the quadrature points: `PHI[l][n]` = φ_l(ξ_n).
pub const PHI: [[f64; NUM_POINTS]; NPOLY] = [
    [1.0, 1.0, 1.0],
    [-1.3416407864998738, 0.0, 1.3416407864998738],
    [0.8944271909999159, -1.118033988749895, 0.8944271909999159],
];

/// Scaled Legendre basis derivatives at the quadrature points: `DPHI[l][n]` = φ'_l(ξ_n).
pub const DPHI: [[f64; NUM_POINTS]; NPOLY] = [
    [0.0, 0.0, 0.0],
    [1.7320508075688772, 1.7320508075688772, 1.7320508075688772],
    [-5.196152422706632, 0.0, 5.196152422706632],
];

/// Scaled Legendre basis values at the left face, φ_l(-1).
pub const PHI_FACE_LEFT: [f64; NPOLY] = [1.0, -1.7320508075688772, 2.2360679774997896];

/// Scaled Legendre basis values at the right face, φ_l(+1).
pub const PHI_FACE_RIGHT: [f64; NPOLY] = [1.0, 1.7320508075688772, 2.2360679774997896];

/// Unit outward normals at the (left, right) faces of a zone.
pub const FACE_NORMALS: [f64; 2] = [-1.0, 1.0];

/// Basis values at quadrature point `n`, gathered across the modes.
///
/// This is the column view of [`PHI`] used when evaluating a zone's
/// polynomial at a single quadrature point.
pub fn phi_at_point(n: usize) -> [f64; NPOLY] {
    [PHI[0][n], PHI[1][n], PHI[2][n]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::legendre::{scaled_legendre, scaled_legendre_derivative};

    #[test]
    fn test_weights_sum_to_interval_length() {
        let sum: f64 = GAUSS_WEIGHTS.iter().sum();
        assert!((sum - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_quadrature_exact_for_quartics() {
        // 3-point Gauss quadrature is exact for polynomials up to degree 5.
        // ∫ x^4 dx over [-1, 1] = 2/5.
        let integral: f64 = GAUSS_POINTS
            .iter()
            .zip(GAUSS_WEIGHTS.iter())
            .map(|(&x, &w)| w * x.powi(4))
            .sum();
        assert!((integral - 0.4).abs() < 1e-14);
    }

    #[test]
    fn test_phi_matches_recurrence() {
        for l in 0..NPOLY {
            for (n, &xi) in GAUSS_POINTS.iter().enumerate() {
                let expected = scaled_legendre(l, xi);
                assert!(
                    (PHI[l][n] - expected).abs() < 1e-14,
                    "PHI[{}][{}]: table {}, recurrence {}",
                    l,
                    n,
                    PHI[l][n],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_dphi_matches_recurrence() {
        for l in 0..NPOLY {
            for (n, &xi) in GAUSS_POINTS.iter().enumerate() {
                let expected = scaled_legendre_derivative(l, xi);
                assert!(
                    (DPHI[l][n] - expected).abs() < 1e-13,
                    "DPHI[{}][{}]: table {}, recurrence {}",
                    l,
                    n,
                    DPHI[l][n],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_face_values_match_recurrence() {
        for l in 0..NPOLY {
            assert!((PHI_FACE_LEFT[l] - scaled_legendre(l, -1.0)).abs() < 1e-14);
            assert!((PHI_FACE_RIGHT[l] - scaled_legendre(l, 1.0)).abs() < 1e-14);
        }
    }

    #[test]
    fn test_discrete_orthonormality() {
        // Σ_n w_n φ_a(ξ_n) φ_b(ξ_n) = 2 δ_ab. The integrand has degree
        // a + b <= 4, so the 3-point rule evaluates it exactly.
        for a in 0..NPOLY {
            for b in 0..NPOLY {
                let inner: f64 = (0..NUM_POINTS)
                    .map(|n| GAUSS_WEIGHTS[n] * PHI[a][n] * PHI[b][n])
                    .sum();
                let expected = if a == b { 2.0 } else { 0.0 };
                assert!(
                    (inner - expected).abs() < 1e-13,
                    "<φ_{}, φ_{}> = {}, expected {}",
                    a,
                    b,
                    inner,
                    expected
                );
            }
        }
    }
}
