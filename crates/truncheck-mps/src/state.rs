//! Validated MPS states and the builder that produces them from raw
//! backend output

use num_complex::Complex64;

use crate::error::{MpsError, Result};
use crate::scalar::MpsScalar;
use crate::types::{tensor3_zeros, Tensor3, Tensor3Dims};

/// An immutable matrix-product state tagged with the bond-dimension limit
/// it was produced under
///
/// Site tensors have shape `(left_bond, site_dim, right_bond)` with boundary
/// bonds of dimension 1. Construction validates that adjacent tensors share
/// a bond and that no internal bond exceeds the declared limit; a state that
/// exists is therefore always well-shaped.
///
/// No normalization is imposed at construction: the backend guarantees (or
/// does not) that its output is normalized, and [`MpsState::norm`] exists so
/// callers can re-check.
#[derive(Debug, Clone)]
pub struct MpsState<T: MpsScalar> {
    tensors: Vec<Tensor3<T>>,
    bond_limit: usize,
}

impl<T: MpsScalar> MpsState<T> {
    /// Build a state from a raw backend tensor list
    ///
    /// Validates the MPS structure (boundary dimensions 1, adjacent bonds
    /// matching) and the truncation invariant (every internal bond is at
    /// most `bond_limit`).
    pub fn from_raw(tensors: Vec<Tensor3<T>>, bond_limit: usize) -> Result<Self> {
        if bond_limit == 0 {
            return Err(MpsError::ShapeMismatch {
                message: "bond-dimension limit must be positive".to_string(),
            });
        }
        if tensors.is_empty() {
            return Err(MpsError::ShapeMismatch {
                message: "backend returned an empty tensor list".to_string(),
            });
        }

        if tensors[0].left_dim() != 1 {
            return Err(MpsError::ShapeMismatch {
                message: format!(
                    "first tensor must have left dimension 1, got {}",
                    tensors[0].left_dim()
                ),
            });
        }
        let last = tensors.len() - 1;
        if tensors[last].right_dim() != 1 {
            return Err(MpsError::ShapeMismatch {
                message: format!(
                    "last tensor must have right dimension 1, got {}",
                    tensors[last].right_dim()
                ),
            });
        }

        for i in 0..last {
            if tensors[i].right_dim() != tensors[i + 1].left_dim() {
                return Err(MpsError::ShapeMismatch {
                    message: format!(
                        "bond mismatch between sites {} and {}: {} vs {}",
                        i,
                        i + 1,
                        tensors[i].right_dim(),
                        tensors[i + 1].left_dim()
                    ),
                });
            }
            if tensors[i].right_dim() > bond_limit {
                return Err(MpsError::TruncationInvariantViolation {
                    bond: i,
                    dim: tensors[i].right_dim(),
                    limit: bond_limit,
                });
            }
        }

        Ok(Self {
            tensors,
            bond_limit,
        })
    }

    /// Number of sites (qubits) in the state
    pub fn site_count(&self) -> usize {
        self.tensors.len()
    }

    /// Get the site tensor at position `i`
    pub fn site_tensor(&self, i: usize) -> &Tensor3<T> {
        &self.tensors[i]
    }

    /// Get all site tensors
    pub fn site_tensors(&self) -> &[Tensor3<T>] {
        &self.tensors
    }

    /// Physical dimension of each site
    pub fn site_dims(&self) -> Vec<usize> {
        self.tensors.iter().map(|t| t.site_dim()).collect()
    }

    /// Dimensions of the internal bonds (length `site_count - 1`)
    pub fn bond_dims(&self) -> Vec<usize> {
        self.tensors[..self.tensors.len() - 1]
            .iter()
            .map(|t| t.right_dim())
            .collect()
    }

    /// Largest internal bond dimension actually present
    pub fn rank(&self) -> usize {
        self.bond_dims().into_iter().max().unwrap_or(1)
    }

    /// The bond-dimension limit this state was produced under
    pub fn bond_limit(&self) -> usize {
        self.bond_limit
    }

    /// Build a product state from per-site amplitude vectors
    ///
    /// All internal bonds have dimension 1. The per-site vectors are taken
    /// as-is; pass normalized vectors to obtain a normalized state.
    pub fn product_state(local_states: &[Vec<T>], bond_limit: usize) -> Result<Self> {
        let tensors = local_states
            .iter()
            .map(|amps| {
                let mut t = tensor3_zeros(1, amps.len(), 1);
                for (s, &a) in amps.iter().enumerate() {
                    t[[0, s, 0]] = a;
                }
                t
            })
            .collect();
        Self::from_raw(tensors, bond_limit)
    }
}

impl MpsState<Complex64> {
    /// The two-qubit Bell pair `(|00> + |11>) / sqrt(2)` at bond dimension 2
    ///
    /// Maximally entangled, so any rank-1 truncation of it loses fidelity;
    /// used as a known-entanglement fixture.
    pub fn bell_pair() -> Self {
        let inv_sqrt2 = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let one = Complex64::new(1.0, 0.0);

        let mut left = tensor3_zeros(1, 2, 2);
        left[[0, 0, 0]] = one;
        left[[0, 1, 1]] = one;

        let mut right = tensor3_zeros(2, 2, 1);
        right[[0, 0, 0]] = inv_sqrt2;
        right[[1, 1, 0]] = inv_sqrt2;

        // Shapes are fixed by construction
        Self {
            tensors: vec![left, right],
            bond_limit: 2,
        }
    }
}

/// Converts raw backend tensor lists into validated [`MpsState`] values
///
/// The builder knows the expected qubit count and the bond-dimension limit
/// the backend was asked to honor; [`StateBuilder::build`] is a pure
/// transformation with no side effects.
#[derive(Debug, Clone, Copy)]
pub struct StateBuilder {
    expected_sites: usize,
    bond_limit: usize,
}

impl StateBuilder {
    /// Create a builder for a system of `expected_sites` qubits truncated
    /// at `bond_limit`
    pub fn new(expected_sites: usize, bond_limit: usize) -> Self {
        Self {
            expected_sites,
            bond_limit,
        }
    }

    /// Validate raw backend output and wrap it into a state
    ///
    /// Fails with [`MpsError::ShapeMismatch`] when the tensor count or the
    /// bond structure is malformed, and with
    /// [`MpsError::TruncationInvariantViolation`] when the backend exceeded
    /// its own truncation limit. Neither is recoverable at this layer.
    pub fn build<T: MpsScalar>(&self, tensors: Vec<Tensor3<T>>) -> Result<MpsState<T>> {
        if tensors.len() != self.expected_sites {
            return Err(MpsError::ShapeMismatch {
                message: format!(
                    "expected {} site tensors, got {}",
                    self.expected_sites,
                    tensors.len()
                ),
            });
        }
        MpsState::from_raw(tensors, self.bond_limit)
    }
}
