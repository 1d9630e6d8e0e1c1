use serde::{Serialize, Deserialize};

/// Snapshot sent to a channel `Monitor` at each monitored epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index, the same index a callback monitor receives.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean training cost over the epoch, as returned by `backpropagate`.
    pub error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
