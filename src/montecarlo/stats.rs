//! Per-decision statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rollouts completed.
    pub trials: u32,

    /// Moves applied across all rollouts, seed moves included.
    pub plies: u64,

    /// Heuristic draws that gave up and took an unfiltered move.
    pub fallbacks: u32,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,

    /// True when the deadline, not the rollout cap, ended the decision.
    pub timed_out: bool,

    /// True when the decision took longer than the turn allowance.
    pub overrun: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another worker's counters into these.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.trials += other.trials;
        self.plies += other.plies;
        self.fallbacks += other.fallbacks;
        self.timed_out |= other.timed_out;
    }

    /// Calculate rollouts per second.
    #[must_use]
    pub fn trials_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.trials as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate average rollout length.
    #[must_use]
    pub fn avg_plies_per_trial(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.plies as f64 / self.trials as f64
        }
    }
}
