//! Truncation telemetry collected during a simulation run

/// The singular values discarded at one truncation point of one run
///
/// Values are the magnitudes *not* retained, non-negative and sorted in
/// decreasing order by the backend that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncationEvent {
    /// Index of the gate/step at which the truncation occurred
    pub step_index: usize,
    /// The discarded singular values, largest first
    pub discarded_singular_values: Vec<f64>,
}

impl TruncationEvent {
    /// Create a truncation event
    pub fn new(step_index: usize, discarded_singular_values: Vec<f64>) -> Self {
        Self {
            step_index,
            discarded_singular_values,
        }
    }

    /// Norm discarded at this event: the sum of the cut magnitudes
    pub fn truncated_weight(&self) -> f64 {
        self.discarded_singular_values.iter().sum()
    }
}

/// Total norm truncated over a whole run
pub fn total_truncated_norm(events: &[TruncationEvent]) -> f64 {
    events.iter().map(TruncationEvent::truncated_weight).sum()
}

/// Running sum of truncated norm after each event, in gate order
///
/// This is the per-run profile plotted against gate count to see *where*
/// along the circuit a given bond dimension starts losing norm.
pub fn cumulative_profile(events: &[TruncationEvent]) -> Vec<f64> {
    let mut acc = 0.0;
    events
        .iter()
        .map(|e| {
            acc += e.truncated_weight();
            acc
        })
        .collect()
}
