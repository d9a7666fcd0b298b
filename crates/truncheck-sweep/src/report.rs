//! Report construction: infidelity and truncated norm per bond dimension

use rayon::prelude::*;
use tracing::warn;

use truncheck_mps::fidelity;

use crate::error::{Result, SweepError};
use crate::sweep::{SweepOutcome, SweepResult, SweepWarning};
use crate::truncation::total_truncated_norm;

/// Convergence metrics for one non-reference bond dimension
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// The bond-dimension limit of the run
    pub bond_dimension: usize,
    /// `1 - |<reference|state>|^2`
    pub infidelity: f64,
    /// Sum of all singular-value magnitudes discarded during the run
    pub cumulative_truncated_norm: f64,
}

/// The convergence report: one entry per non-reference sweep result,
/// ascending by bond dimension
///
/// Immutable once built; the ascending order is a presentation concern
/// (infidelity-vs-chi plots read left to right) and carries no
/// computational meaning.
#[derive(Debug, Clone)]
pub struct ConvergenceReport {
    reference_bond_dimension: usize,
    entries: Vec<ReportEntry>,
    warnings: Vec<SweepWarning>,
}

impl ConvergenceReport {
    /// Build the report from a completed sweep
    ///
    /// Computes the fidelity of every non-reference state against the
    /// reference (in parallel; the reference is the only shared input) and
    /// sums each run's truncation telemetry. Fails with
    /// [`SweepError::MissingReference`] if the outcome has no reference
    /// result. A report with zero entries is legal but signals a
    /// misconfigured sweep, so a warning is logged.
    pub fn build(outcome: &SweepOutcome) -> Result<Self> {
        let reference = outcome.reference().ok_or(SweepError::MissingReference)?;
        let others: Vec<&SweepResult> = outcome
            .results()
            .iter()
            .filter(|r| !r.is_reference)
            .collect();
        if others.is_empty() {
            warn!(
                reference_bond_dimension = reference.bond_dimension,
                "degenerate report: sweep produced no non-reference results"
            );
        }

        let mut entries: Vec<ReportEntry> = others
            .par_iter()
            .map(|result| -> Result<ReportEntry> {
                let f = fidelity(&reference.state, &result.state)?;
                Ok(ReportEntry {
                    bond_dimension: result.bond_dimension,
                    infidelity: 1.0 - f,
                    cumulative_truncated_norm: total_truncated_norm(&result.truncation_events),
                })
            })
            .collect::<Result<_>>()?;
        entries.sort_unstable_by_key(|e| e.bond_dimension);

        Ok(Self {
            reference_bond_dimension: reference.bond_dimension,
            entries,
            warnings: outcome.warnings().to_vec(),
        })
    }

    /// The bond dimension of the reference simulation
    pub fn reference_bond_dimension(&self) -> usize {
        self.reference_bond_dimension
    }

    /// Report entries, ascending by bond dimension
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Warnings carried over from the sweep (one per excluded step)
    pub fn warnings(&self) -> &[SweepWarning] {
        &self.warnings
    }
}
