//! The simulation backend boundary
//!
//! The circuit engine itself (gate application, canonicalization, GPU
//! dispatch) lives behind [`SimulationBackend`]: the sweeper only needs to
//! run an opaque circuit under an explicit truncation request and get back
//! the resulting tensor list plus per-gate truncation telemetry.

use num_complex::Complex64;
use thiserror::Error;
use truncheck_mps::Tensor3;

use crate::truncation::TruncationEvent;

/// Floating-point precision the backend should simulate in
///
/// A knob for the backend only; the analyzer's own arithmetic is always
/// double-precision complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Single-precision (complex64 on the wire, upcast in the response)
    Single,
    /// Double-precision
    #[default]
    Double,
}

/// Device the backend should dispatch the simulation to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// Simulate on CPU
    #[default]
    Cpu,
    /// Simulate on GPU
    Gpu,
}

/// One simulation request: an opaque circuit plus the truncation
/// configuration to run it under
///
/// Configuration is decoupled from invocation: the sweeper builds one
/// request per swept bond dimension from the same circuit reference.
#[derive(Debug, Clone, Copy)]
pub struct SimulationRequest<'a, C: ?Sized> {
    /// The circuit to execute; opaque to the sweep layer
    pub circuit: &'a C,
    /// Maximum bond dimension the backend may retain
    pub bond_dimension_limit: usize,
    /// Simulation precision
    pub precision: Precision,
    /// Simulation device
    pub device: Device,
}

/// Raw backend output for one simulation run
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// One rank-3 tensor per site, shape `(left_bond, site, right_bond)`
    pub tensors: Vec<Tensor3<Complex64>>,
    /// The singular values discarded at each truncation point, in gate order
    pub truncation_events: Vec<TruncationEvent>,
}

/// Machine-readable backend failure reasons
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The simulation exceeded its time budget
    #[error("simulation timed out")]
    Timeout,
    /// The simulation exceeded available memory
    #[error("simulation ran out of memory")]
    OutOfMemory,
    /// The requested device could not be acquired
    #[error("requested device is unavailable")]
    DeviceUnavailable,
    /// The simulation diverged numerically
    #[error("simulation diverged numerically")]
    NumericalDivergence,
    /// Any other backend-specific failure
    #[error("backend failure: {0}")]
    Other(String),
}

/// A quantum-circuit simulation engine, specified only by what the sweep
/// needs from it
///
/// Implementations are assumed correct and already normalized; the sweep
/// layer validates shapes and truncation invariants but never re-simulates
/// or retries.
pub trait SimulationBackend: Sync {
    /// The circuit description this backend executes; passed through the
    /// sweep unchanged
    type Circuit: Sync + ?Sized;

    /// Execute the circuit under the given truncation configuration
    fn run(
        &self,
        request: &SimulationRequest<'_, Self::Circuit>,
    ) -> std::result::Result<SimulationOutput, BackendError>;
}
