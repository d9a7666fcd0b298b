//! Inner products between MPS states via transfer-matrix contraction
//!
//! This is the computational bottleneck of the convergence analyzer: the
//! running environment at each bond has size `chi_bra * chi_ket`, so the
//! total cost is `O(N * d * chi^3)` for `N` sites, physical dimension `d`
//! and bond dimensions of order `chi`. The contraction order (left-to-right
//! accumulation) is fixed so the intermediate never grows beyond a matrix;
//! no other order is supported.

use mdarray::DTensor;

use crate::error::{MpsError, Result};
use crate::scalar::MpsScalar;
use crate::state::MpsState;
use crate::types::Tensor3Dims;

/// Left-to-right environment accumulation, no compatibility checks.
/// Callers guarantee equal site counts and matching physical dimensions.
fn transfer_contract<T: MpsScalar>(bra: &MpsState<T>, ket: &MpsState<T>) -> T {
    let a0 = bra.site_tensor(0);
    let b0 = ket.site_tensor(0);

    // env[ra, rb] = sum_s conj(a0[0, s, ra]) * b0[0, s, rb]
    let mut env: DTensor<T, 2> =
        DTensor::<T, 2>::from_elem([a0.right_dim(), b0.right_dim()], T::zero());
    for s in 0..a0.site_dim() {
        for ra in 0..a0.right_dim() {
            for rb in 0..b0.right_dim() {
                env[[ra, rb]] = env[[ra, rb]] + a0[[0, s, ra]].conj() * b0[[0, s, rb]];
            }
        }
    }

    for i in 1..bra.site_count() {
        let a = bra.site_tensor(i);
        let b = ket.site_tensor(i);

        // new_env[ra, rb] = sum_{la, lb, s} env[la, lb] * conj(a[la, s, ra]) * b[lb, s, rb]
        let mut new_env: DTensor<T, 2> =
            DTensor::<T, 2>::from_elem([a.right_dim(), b.right_dim()], T::zero());
        for la in 0..a.left_dim() {
            for lb in 0..b.left_dim() {
                let e = env[[la, lb]];
                for s in 0..a.site_dim() {
                    for ra in 0..a.right_dim() {
                        for rb in 0..b.right_dim() {
                            new_env[[ra, rb]] =
                                new_env[[ra, rb]] + e * a[[la, s, ra]].conj() * b[[lb, s, rb]];
                        }
                    }
                }
            }
        }
        env = new_env;
    }

    // Boundary bonds are 1, so the final environment is 1x1
    env[[0, 0]]
}

/// Compute the inner product `<bra|ket>` of two MPS states
///
/// The `bra` tensors are conjugated during contraction. Fails with
/// [`MpsError::IncompatibleStates`] when the states differ in site count or
/// in any physical dimension.
pub fn overlap<T: MpsScalar>(bra: &MpsState<T>, ket: &MpsState<T>) -> Result<T> {
    if bra.site_count() != ket.site_count() {
        return Err(MpsError::IncompatibleStates {
            message: format!(
                "site counts differ: {} vs {}",
                bra.site_count(),
                ket.site_count()
            ),
        });
    }
    for i in 0..bra.site_count() {
        let da = bra.site_tensor(i).site_dim();
        let db = ket.site_tensor(i).site_dim();
        if da != db {
            return Err(MpsError::IncompatibleStates {
                message: format!("physical dimensions differ at site {i}: {da} vs {db}"),
            });
        }
    }
    Ok(transfer_contract(bra, ket))
}

/// Compute the fidelity `|<a|b>|^2` between two MPS states
///
/// Equals 1.0 (within floating tolerance) when `a` and `b` hold the same
/// tensors. No renormalization is performed: for unnormalized inputs this
/// is the fidelity of the raw vectors, not of the physical states.
pub fn fidelity<T: MpsScalar>(a: &MpsState<T>, b: &MpsState<T>) -> Result<f64> {
    Ok(overlap(a, b)?.abs_sq())
}

impl<T: MpsScalar> MpsState<T> {
    /// The 2-norm of the state, `sqrt(<psi|psi>)`
    ///
    /// Provided so callers can re-check the normalization the backend is
    /// assumed to guarantee; nothing in this crate applies it implicitly.
    pub fn norm(&self) -> f64 {
        // <psi|psi> is real and non-negative, so |<psi|psi>| = norm^2
        let norm_sq = transfer_contract(self, self);
        norm_sq.abs_sq().sqrt().sqrt()
    }
}
