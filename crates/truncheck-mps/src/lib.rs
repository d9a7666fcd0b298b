#![warn(missing_docs)]
//! Matrix Product State (MPS) value types for convergence analysis
//!
//! This crate provides the state side of a bond-dimension convergence
//! analyzer:
//! - `Tensor3`: rank-3 site tensors, shape `(left_bond, site, right_bond)`
//! - `MpsState`: a validated, immutable MPS tagged with the bond-dimension
//!   limit it was produced under
//! - `StateBuilder`: turns raw backend tensor lists into `MpsState` values
//! - `overlap` / `fidelity`: inner product of two MPS via transfer-matrix
//!   contraction
//! - `SavedState`: a tagged serde format for persisting states across runs
//!
//! # Example
//!
//! ```
//! use truncheck_mps::{fidelity, MpsState};
//!
//! let bell = MpsState::bell_pair();
//! let f = fidelity(&bell, &bell).unwrap();
//! assert!((f - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod overlap;
pub mod scalar;
pub mod serialize;
pub mod state;
pub mod types;

pub use error::{MpsError, Result};
pub use overlap::{fidelity, overlap};
pub use scalar::MpsScalar;
pub use serialize::SavedState;
pub use state::{MpsState, StateBuilder};
pub use types::{tensor3_from_flat, tensor3_to_flat, tensor3_zeros, Tensor3, Tensor3Dims};
