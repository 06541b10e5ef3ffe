//! Scalar conservation law abstractions.
//!
//! Provides the two scalar hyperbolic conservation laws solved by this crate:
//!
//! ∂u/∂t + ∂f(u)/∂x = 0
//!
//! with f(u) = a·u (linear advection) or f(u) = u²/2 (inviscid Burgers).
//!
//! The law is chosen once at solver construction via the closed [`ScalarLaw`]
//! variant; the hot loops dispatch on it with a single `match` and never
//! re-derive the choice per call.

mod advection;
mod burgers;

pub use advection::Advection;
pub use burgers::Burgers;

/// The scalar conservation law being solved.
///
/// A closed set: exactly the two flux choices the discretization supports.
/// Constructing the variant fixes the PDE and its parameter (the advection
/// velocity) for the lifetime of the solver, so an unrecognized selector
/// cannot reach the numerics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarLaw {
    /// Linear advection with constant velocity.
    Advection(Advection),
    /// Inviscid Burgers equation.
    Burgers(Burgers),
}

impl ScalarLaw {
    /// Linear advection with the given constant velocity.
    pub fn advection(velocity: f64) -> Self {
        Self::Advection(Advection::new(velocity))
    }

    /// Inviscid Burgers equation.
    pub fn burgers() -> Self {
        Self::Burgers(Burgers::new())
    }

    /// Physical flux f(u).
    ///
    /// Pure and state-only: the same formula applies at quadrature points
    /// and at face traces.
    pub fn flux(&self, u: f64) -> f64 {
        match self {
            Self::Advection(law) => law.flux(u),
            Self::Burgers(law) => law.flux(u),
        }
    }

    /// Maximum absolute wave speed at state u, for CFL estimates.
    pub fn max_wave_speed(&self, u: f64) -> f64 {
        match self {
            Self::Advection(law) => law.max_wave_speed(u),
            Self::Burgers(law) => law.max_wave_speed(u),
        }
    }
}
