//! Inviscid Burgers equation.
//!
//! The 1D inviscid Burgers equation in conservation form:
//!
//! ∂u/∂t + ∂(u²/2)/∂x = 0
//!
//! The flux is convex, and the characteristic speed equals the state itself,
//! so the upwind direction at an interface depends on the local solution.

/// 1D inviscid Burgers equation.
///
/// du/dt + d(u²/2)/dx = 0
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Burgers;

impl Burgers {
    /// Create a new Burgers equation.
    pub fn new() -> Self {
        Self
    }

    /// Physical flux f(u) = u²/2.
    pub fn flux(&self, u: f64) -> f64 {
        0.5 * u * u
    }

    /// Maximum absolute wave speed |u| (the characteristic speed is u).
    pub fn max_wave_speed(&self, u: f64) -> f64 {
        u.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burgers_flux() {
        let burgers = Burgers::new();

        assert!((burgers.flux(2.0) - 2.0).abs() < 1e-14);
        assert!((burgers.flux(-2.0) - 2.0).abs() < 1e-14);
        assert!(burgers.flux(0.0).abs() < 1e-14);
    }

    #[test]
    fn test_burgers_wave_speed() {
        let burgers = Burgers::new();

        assert!((burgers.max_wave_speed(3.0) - 3.0).abs() < 1e-14);
        assert!((burgers.max_wave_speed(-3.0) - 3.0).abs() < 1e-14);
    }
}
