//! The convergence sweep: one simulation per bond dimension, largest first
//!
//! The sweep runs the same circuit at every bond dimension in the set,
//! descending. The largest value runs first and becomes the reference
//! against which the report later judges every smaller truncation; the
//! assumption, preserved from common practice and *not* verified here, is
//! that the largest swept bond dimension is large enough to be numerically
//! converged for the given circuit.
//!
//! The non-reference steps have no data dependency on each other and can
//! run in parallel (`SweepOptions::parallel`); each step owns its own
//! backend invocation and its own state.

use rayon::prelude::*;
use tracing::{debug, warn};

use num_complex::Complex64;
use truncheck_mps::{MpsState, StateBuilder};

use crate::backend::{
    BackendError, Device, Precision, SimulationBackend, SimulationOutput, SimulationRequest,
};
use crate::error::{Result, SweepError};
use crate::truncation::TruncationEvent;

/// Options controlling how the sweep drives the backend
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOptions {
    /// Precision forwarded to every backend request
    pub precision: Precision,
    /// Device forwarded to every backend request
    pub device: Device,
    /// Run the non-reference steps on the rayon thread pool
    pub parallel: bool,
}

/// The state and truncation telemetry produced at one bond dimension
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// The bond-dimension limit this step ran under
    pub bond_dimension: usize,
    /// Whether this is the reference (largest bond dimension) result
    pub is_reference: bool,
    /// The state the backend produced, validated
    pub state: MpsState<Complex64>,
    /// Per-gate truncation telemetry for this run
    pub truncation_events: Vec<TruncationEvent>,
}

/// A non-reference step that failed and was excluded from the results
#[derive(Debug, Clone)]
pub struct SweepWarning {
    /// The bond dimension whose simulation failed
    pub bond_dimension: usize,
    /// The backend failure
    pub error: BackendError,
}

/// Everything a sweep produced: the successful results (reference first,
/// then descending bond dimension) and a warning per excluded step
///
/// Warnings are part of the value so callers can distinguish "converged
/// with N points" from "converged with N points, M of which failed".
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    results: Vec<SweepResult>,
    warnings: Vec<SweepWarning>,
}

impl SweepOutcome {
    /// The successful sweep results, reference first
    pub fn results(&self) -> &[SweepResult] {
        &self.results
    }

    /// One warning per excluded (failed) non-reference step
    pub fn warnings(&self) -> &[SweepWarning] {
        &self.warnings
    }

    /// The reference result, if present
    pub fn reference(&self) -> Option<&SweepResult> {
        self.results.iter().find(|r| r.is_reference)
    }
}

enum StepOutcome {
    Completed(SweepResult),
    Excluded(SweepWarning),
}

/// Sort descending, drop duplicates, reject unusable sweep sets
fn normalize_sweep_set(bond_dimensions: &[usize]) -> Result<Vec<usize>> {
    if bond_dimensions.iter().any(|&chi| chi == 0) {
        return Err(SweepError::InvalidSweep {
            message: "bond dimensions must be positive".to_string(),
        });
    }
    let mut chis = bond_dimensions.to_vec();
    chis.sort_unstable_by(|a, b| b.cmp(a));
    chis.dedup();
    if chis.len() < 2 {
        return Err(SweepError::InvalidSweep {
            message: format!(
                "need at least two distinct bond dimensions, got {}",
                chis.len()
            ),
        });
    }
    Ok(chis)
}

/// Run the convergence sweep over a set of bond dimensions
///
/// The largest value is simulated first and flagged as the reference. A
/// backend failure there aborts the whole sweep with
/// [`SweepError::ReferenceSimulationFailed`]; a failure at any other step
/// only excludes that step and records a [`SweepWarning`]. Malformed
/// backend output ([`truncheck_mps::MpsError`]) is fatal at any step, since
/// it signals a broken backend contract rather than a resource problem.
pub fn sweep<B: SimulationBackend>(
    backend: &B,
    bond_dimensions: &[usize],
    circuit: &B::Circuit,
    options: &SweepOptions,
) -> Result<SweepOutcome> {
    let chis = normalize_sweep_set(bond_dimensions)?;
    let reference_chi = chis[0];

    debug!(
        bond_dimension = reference_chi,
        "running reference simulation"
    );
    let request = SimulationRequest {
        circuit,
        bond_dimension_limit: reference_chi,
        precision: options.precision,
        device: options.device,
    };
    let SimulationOutput {
        tensors,
        truncation_events,
    } = backend
        .run(&request)
        .map_err(|source| SweepError::ReferenceSimulationFailed {
            bond_dimension: reference_chi,
            source,
        })?;

    let reference_state = MpsState::from_raw(tensors, reference_chi)?;
    let site_count = reference_state.site_count();
    let reference = SweepResult {
        bond_dimension: reference_chi,
        is_reference: true,
        state: reference_state,
        truncation_events,
    };

    // The site count is fixed for the lifetime of the sweep; every
    // remaining step is validated against the reference's.
    let step = |chi: usize| -> Result<StepOutcome> {
        let request = SimulationRequest {
            circuit,
            bond_dimension_limit: chi,
            precision: options.precision,
            device: options.device,
        };
        match backend.run(&request) {
            Ok(output) => {
                let state = StateBuilder::new(site_count, chi).build(output.tensors)?;
                debug!(bond_dimension = chi, rank = state.rank(), "sweep step done");
                Ok(StepOutcome::Completed(SweepResult {
                    bond_dimension: chi,
                    is_reference: false,
                    state,
                    truncation_events: output.truncation_events,
                }))
            }
            Err(error) => {
                warn!(
                    bond_dimension = chi,
                    %error,
                    "sweep step failed; excluding it from the results"
                );
                Ok(StepOutcome::Excluded(SweepWarning {
                    bond_dimension: chi,
                    error,
                }))
            }
        }
    };

    let rest: Vec<StepOutcome> = if options.parallel {
        chis[1..]
            .par_iter()
            .map(|&chi| step(chi))
            .collect::<Result<_>>()?
    } else {
        chis[1..]
            .iter()
            .map(|&chi| step(chi))
            .collect::<Result<_>>()?
    };

    let mut results = vec![reference];
    let mut warnings = Vec::new();
    for outcome in rest {
        match outcome {
            StepOutcome::Completed(result) => results.push(result),
            StepOutcome::Excluded(warning) => warnings.push(warning),
        }
    }

    Ok(SweepOutcome { results, warnings })
}

/// Log2-spaced bond-dimension sweep set, ascending and deduplicated
///
/// `log2_spaced(5, 20)` spreads 20 values over `1..=2^5` the way a
/// log-spaced axis does, then drops the duplicates produced by integer
/// truncation at the low end.
pub fn log2_spaced(max_exponent: u32, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![1];
    }
    let mut chis: Vec<usize> = (0..count)
        .map(|k| {
            let e = max_exponent as f64 * k as f64 / (count - 1) as f64;
            2.0f64.powf(e) as usize
        })
        .collect();
    chis.sort_unstable();
    chis.dedup();
    chis
}
