//! Upwind numerical flux for scalar conservation laws.
//!
//! At a zone interface the DG scheme needs a single-valued numerical flux
//! F^*(ul, ur) built from the two one-sided traces:
//!
//! - Advection: information travels with the fixed velocity a, so
//!   F^* = f(ul) if a > 0, else f(ur).
//! - Burgers: the characteristic speed is u itself. If both traces agree on
//!   the direction, take the upwind side; if the signs straddle the
//!   interface, the interface sits inside a transonic rarefaction whose
//!   sonic point carries f(0) = 0.

use crate::equations::ScalarLaw;

/// Compute the upwind numerical flux F^*(ul, ur).
///
/// # Arguments
/// * `law` - The conservation law, fixed at solver construction
/// * `ul` - Trace from the zone left of the interface, at its right face
/// * `ur` - Trace from the zone right of the interface, at its left face
///
/// For Burgers, the sign tests are strict: an exact zero trace falls through
/// to the sonic branch and the flux is exactly 0.0.
pub fn upwind_flux(law: &ScalarLaw, ul: f64, ur: f64) -> f64 {
    match law {
        ScalarLaw::Advection(adv) => {
            if adv.velocity > 0.0 {
                adv.flux(ul)
            } else {
                adv.flux(ur)
            }
        }
        ScalarLaw::Burgers(burgers) => {
            if ul > 0.0 && ur > 0.0 {
                // Flow fully rightward
                burgers.flux(ul)
            } else if ul < 0.0 && ur < 0.0 {
                // Flow fully leftward
                burgers.flux(ur)
            } else {
                // Transonic: the sonic point u = 0 straddles the interface
                0.0
            }
        }
    }
}

/// Compute the Lax-Friedrichs numerical flux.
///
/// F^* = 0.5 * (f(ul) + f(ur)) - 0.5 * λ * (ur - ul)
///
/// where λ = max(|s(ul)|, |s(ur)|) is the local maximum wave speed. More
/// dissipative than the upwind flux but sign-agnostic.
pub fn lax_friedrichs_flux(law: &ScalarLaw, ul: f64, ur: f64) -> f64 {
    let lambda = law.max_wave_speed(ul).max(law.max_wave_speed(ur));
    0.5 * (law.flux(ul) + law.flux(ur)) - 0.5 * lambda * (ur - ul)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upwind_advection_positive_velocity() {
        // For a > 0 the upwind flux is f(ul) regardless of ur.
        let law = ScalarLaw::advection(1.5);

        for &(ul, ur) in &[(2.0, 1.0), (-1.0, 3.0), (0.0, -4.0)] {
            let flux = upwind_flux(&law, ul, ur);
            assert!((flux - 1.5 * ul).abs() < 1e-14);
        }
    }

    #[test]
    fn test_upwind_advection_negative_velocity() {
        // For a < 0 the upwind flux is f(ur) regardless of ul.
        let law = ScalarLaw::advection(-2.0);

        for &(ul, ur) in &[(2.0, 1.0), (-1.0, 3.0), (5.0, 0.0)] {
            let flux = upwind_flux(&law, ul, ur);
            assert!((flux - (-2.0) * ur).abs() < 1e-14);
        }
    }

    #[test]
    fn test_upwind_burgers_one_sided() {
        let law = ScalarLaw::burgers();

        // Both traces positive: flow rightward, use left state
        let flux = upwind_flux(&law, 2.0, 1.0);
        assert!((flux - 2.0).abs() < 1e-14); // 0.5 * 2²

        // Both traces negative: flow leftward, use right state
        let flux = upwind_flux(&law, -1.0, -3.0);
        assert!((flux - 4.5).abs() < 1e-14); // 0.5 * 3²
    }

    #[test]
    fn test_upwind_burgers_sonic_fix() {
        let law = ScalarLaw::burgers();

        // Transonic rarefaction: ul < 0 < ur
        assert_eq!(upwind_flux(&law, -1.0, 2.0), 0.0);

        // Reversed sign split
        assert_eq!(upwind_flux(&law, 1.0, -2.0), 0.0);

        // Exact zeros are not treated as positive
        assert_eq!(upwind_flux(&law, 0.0, 2.0), 0.0);
        assert_eq!(upwind_flux(&law, -2.0, 0.0), 0.0);
        assert_eq!(upwind_flux(&law, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_upwind_burgers_differs_from_average() {
        // The sonic flux is not the naive average 0.5*(f(ul)+f(ur)).
        let law = ScalarLaw::burgers();
        let (ul, ur) = (-1.0, 2.0);

        let naive = 0.5 * (law.flux(ul) + law.flux(ur));
        assert!(naive > 0.0);
        assert_eq!(upwind_flux(&law, ul, ur), 0.0);
    }

    #[test]
    fn test_lax_friedrichs_consistency() {
        // For equal traces, the LF flux reduces to the physical flux.
        let law = ScalarLaw::advection(1.0);
        assert!((lax_friedrichs_flux(&law, 2.0, 2.0) - law.flux(2.0)).abs() < 1e-14);

        let burgers = ScalarLaw::burgers();
        assert!((lax_friedrichs_flux(&burgers, 2.0, 2.0) - burgers.flux(2.0)).abs() < 1e-14);
    }

    #[test]
    fn test_lax_friedrichs_matches_upwind_for_advection() {
        // For linear advection with |a| as dissipation, LF recovers upwind.
        let law = ScalarLaw::advection(1.0);
        let (ul, ur) = (2.0, 1.0);

        let lf = lax_friedrichs_flux(&law, ul, ur);
        let up = upwind_flux(&law, ul, ur);
        assert!((lf - up).abs() < 1e-14);
    }
}
