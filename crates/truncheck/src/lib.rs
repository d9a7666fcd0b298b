#![warn(missing_docs)]
//! Bond-dimension convergence analyzer for MPS quantum circuit simulation
//!
//! Facade crate: re-exports the state model (`truncheck-mps`) and the
//! sweep/report layer (`truncheck-sweep`). The typical flow is
//! [`sweep`] -> [`ConvergenceReport::build`], with the simulation engine
//! supplied by the caller behind [`SimulationBackend`].

// Re-export the MPS state model
pub use truncheck_mps::{
    fidelity, overlap, tensor3_from_flat, tensor3_to_flat, tensor3_zeros, MpsError, MpsScalar,
    MpsState, SavedState, StateBuilder, Tensor3, Tensor3Dims,
};

// Re-export the sweep and report layer
pub use truncheck_sweep::{
    cumulative_profile, log2_spaced, sweep, total_truncated_norm, BackendError, ConvergenceReport,
    Device, Precision, ReportEntry, SimulationBackend, SimulationOutput, SimulationRequest,
    SweepError, SweepOptions, SweepOutcome, SweepResult, SweepWarning, TruncationEvent,
};
