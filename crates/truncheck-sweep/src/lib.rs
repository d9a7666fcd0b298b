#![warn(missing_docs)]
//! Bond-dimension convergence sweep for MPS circuit simulation
//!
//! This crate drives a black-box quantum-circuit simulation backend across
//! an increasing set of truncation bond dimensions and quantifies how close
//! each truncated run gets to the highest-bond-dimension reference:
//! - [`SimulationBackend`]: the request/response contract the external
//!   engine must satisfy
//! - [`TruncationEvent`]: per-gate singular-value telemetry
//! - [`sweep`]: one backend run per bond dimension, reference first,
//!   tolerant of non-reference failures
//! - [`ConvergenceReport`]: `(bond dimension, infidelity, cumulative
//!   truncated norm)` per non-reference run
//!
//! The simulation engine itself, circuit construction and plotting all
//! live outside this crate.

pub mod backend;
pub mod error;
pub mod report;
pub mod sweep;
pub mod truncation;

pub use backend::{
    BackendError, Device, Precision, SimulationBackend, SimulationOutput, SimulationRequest,
};
pub use error::{Result, SweepError};
pub use report::{ConvergenceReport, ReportEntry};
pub use sweep::{log2_spaced, sweep, SweepOptions, SweepOutcome, SweepResult, SweepWarning};
pub use truncation::{cumulative_profile, total_truncated_norm, TruncationEvent};
