//! Error type for the solver API boundary.

use thiserror::Error;

/// Caller-contract violations detected when the kernel is invoked.
///
/// The per-zone numerics perform no checks of their own; everything
/// reportable is validated once here, at the entry point.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolverError {
    /// A stage buffer is shaped for a different zone count than the grid.
    #[error("stage buffer holds {actual} zones but the grid has {expected}")]
    ZoneCountMismatch {
        /// Zone count of the grid
        expected: usize,
        /// Zone count of the offending buffer
        actual: usize,
    },

    /// The time step must be strictly positive.
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    /// The Runge-Kutta blend parameter must lie in [0, 1].
    #[error("Runge-Kutta blend parameter must lie in [0, 1], got {0}")]
    BlendParameterOutOfRange(f64),
}
