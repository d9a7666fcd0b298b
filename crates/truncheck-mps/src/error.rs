//! Error types for MPS state construction and contraction

use thiserror::Error;

/// Result type for MPS operations
pub type Result<T> = std::result::Result<T, MpsError>;

/// Errors that can occur while building or contracting MPS states
#[derive(Error, Debug)]
pub enum MpsError {
    /// Raw backend output does not form a well-shaped MPS
    #[error("shape mismatch: {message}")]
    ShapeMismatch {
        /// Description of the malformed shape
        message: String,
    },

    /// A bond dimension exceeds the limit the state was declared with.
    /// This indicates a backend bug, not a user error.
    #[error(
        "truncation invariant violated at bond {bond}: dimension {dim} exceeds declared limit {limit}"
    )]
    TruncationInvariantViolation {
        /// Index of the offending bond (between sites `bond` and `bond + 1`)
        bond: usize,
        /// The actual bond dimension found
        dim: usize,
        /// The declared bond-dimension limit
        limit: usize,
    },

    /// Two states cannot be contracted against each other
    #[error("incompatible states: {message}")]
    IncompatibleStates {
        /// Description of the incompatibility
        message: String,
    },
}
