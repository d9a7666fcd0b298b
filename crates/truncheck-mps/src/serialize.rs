//! Optional persistence of MPS states across runs
//!
//! No wire format is mandated by the analyzer; this is a simple tagged
//! value `{bond_dimension_limit, site_count, tensor_shapes, tensor_data}`
//! that any serde format can carry. Loading re-runs the full state
//! validation, so a tampered or truncated file cannot produce an invalid
//! [`MpsState`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{MpsError, Result};
use crate::state::{MpsState, StateBuilder};
use crate::types::{tensor3_from_flat, tensor3_to_flat, Tensor3Dims};

/// Serializable snapshot of an [`MpsState<Complex64>`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    /// The bond-dimension limit the state was produced under
    pub bond_dimension_limit: usize,
    /// Number of sites
    pub site_count: usize,
    /// Shape `(left, site, right)` of each site tensor
    pub tensor_shapes: Vec<[usize; 3]>,
    /// Flat row-major data of each site tensor
    pub tensor_data: Vec<Vec<Complex64>>,
}

impl SavedState {
    /// Snapshot a state for persistence
    pub fn from_state(state: &MpsState<Complex64>) -> Self {
        let tensor_shapes = state
            .site_tensors()
            .iter()
            .map(|t| [t.left_dim(), t.site_dim(), t.right_dim()])
            .collect();
        let tensor_data = state.site_tensors().iter().map(tensor3_to_flat).collect();
        Self {
            bond_dimension_limit: state.bond_limit(),
            site_count: state.site_count(),
            tensor_shapes,
            tensor_data,
        }
    }

    /// Rebuild the state, re-validating every invariant
    pub fn into_state(self) -> Result<MpsState<Complex64>> {
        if self.tensor_shapes.len() != self.tensor_data.len() {
            return Err(MpsError::ShapeMismatch {
                message: format!(
                    "saved state lists {} shapes but {} data blocks",
                    self.tensor_shapes.len(),
                    self.tensor_data.len()
                ),
            });
        }

        let mut tensors = Vec::with_capacity(self.tensor_shapes.len());
        for (i, (shape, data)) in self
            .tensor_shapes
            .iter()
            .zip(self.tensor_data.iter())
            .enumerate()
        {
            let expected = shape[0] * shape[1] * shape[2];
            if data.len() != expected {
                return Err(MpsError::ShapeMismatch {
                    message: format!(
                        "saved tensor {i} has {} elements, shape {shape:?} needs {expected}",
                        data.len()
                    ),
                });
            }
            tensors.push(tensor3_from_flat(data, shape[0], shape[1], shape[2]));
        }

        StateBuilder::new(self.site_count, self.bond_dimension_limit).build(tensors)
    }
}
