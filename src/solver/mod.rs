//! DG solver components.
//!
//! # Submodules
//!
//! - [`state`]: Guard-padded stage-buffer container ([`ModalState1D`])
//! - [`kernel`]: The per-zone weak-form update ([`advance_rk`])
//! - [`error`]: API-boundary validation ([`SolverError`])

pub mod error;
pub mod kernel;
pub mod state;

pub use error::SolverError;
pub use kernel::advance_rk;
#[cfg(feature = "parallel")]
pub use kernel::advance_rk_parallel;
pub use state::{ModalState1D, NG};
