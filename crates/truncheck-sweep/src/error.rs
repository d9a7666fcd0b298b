//! Error types for the convergence sweep

use thiserror::Error;
use truncheck_mps::MpsError;

use crate::backend::BackendError;

/// Result type for sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors that can abort a sweep or a report
#[derive(Error, Debug)]
pub enum SweepError {
    /// The requested bond-dimension set cannot drive a sweep
    #[error("invalid sweep: {message}")]
    InvalidSweep {
        /// Description of the invalid configuration
        message: String,
    },

    /// The reference (largest bond dimension) simulation failed; no
    /// convergence statement is possible without it
    #[error("reference simulation at bond dimension {bond_dimension} failed")]
    ReferenceSimulationFailed {
        /// The reference bond dimension
        bond_dimension: usize,
        /// The backend failure that caused this
        #[source]
        source: BackendError,
    },

    /// A sweep outcome without a reference result was handed to the report
    #[error("sweep outcome contains no reference result")]
    MissingReference,

    /// Backend output violated the state contract (malformed shape or
    /// truncation invariant); fatal at any sweep step
    #[error(transparent)]
    State(#[from] MpsError),
}
