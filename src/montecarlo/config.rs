//! Rollout engine configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the controlled agent's in-rollout draw is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawMode {
    /// Redraw until the progress heuristic accepts, then discard that draw
    /// and apply a fresh unfiltered one.
    #[default]
    Preserved,
    /// Apply the draw the progress heuristic accepted.
    Validated,
}

/// Rollout outcome scoring weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Bonus when the seed move is a hop.
    pub hop: i32,

    /// Bonus when the seed move starts farther than `escape_distance`
    /// from the goal corner.
    pub escape: i32,

    /// Distance beyond which a piece counts as still near home.
    pub escape_distance: f64,

    /// Added on a win, subtracted otherwise.
    pub win: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hop: 3,
            escape: 2,
            escape_distance: 15.0,
            win: 6,
        }
    }
}

/// Rollout engine configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Maximum rollouts per decision.
    pub max_simulations: u32,

    /// Soft wall-clock budget per decision, in milliseconds.
    /// Checked after every completed rollout.
    pub timeout_ms: u64,

    /// Hard per-turn allowance of the surrounding game, in milliseconds.
    /// Decisions finishing later are reported as overruns.
    pub turn_budget_ms: u64,

    /// Heuristic draws before falling back to an unfiltered draw.
    pub max_redraws: u32,

    /// How the controlled agent's in-rollout draw is applied.
    pub redraw_mode: RedrawMode,

    /// Outcome scoring weights.
    pub weights: ScoreWeights,

    /// Rollout workers (1 = run on the calling thread).
    pub workers: usize,

    /// Random seed. Same seed and budget produce the same decisions.
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            max_simulations: 10_000,
            timeout_ms: 970,
            turn_budget_ms: 1000,
            max_redraws: 64,
            redraw_mode: RedrawMode::Preserved,
            weights: ScoreWeights::default(),
            workers: 1,
            seed: 42,
        }
    }
}

impl MonteCarloConfig {
    /// Per-decision time budget.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Create a new config with a custom rollout cap.
    pub fn with_max_simulations(mut self, n: u32) -> Self {
        self.max_simulations = n;
        self
    }

    /// Create a new config with a custom time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Per-turn allowance of the surrounding game.
    #[must_use]
    pub fn turn_budget(&self) -> Duration {
        Duration::from_millis(self.turn_budget_ms)
    }

    /// Create a new config with a custom turn allowance.
    pub fn with_turn_budget(mut self, budget: Duration) -> Self {
        self.turn_budget_ms = budget.as_millis() as u64;
        self
    }

    /// Create a new config with a custom redraw bound.
    pub fn with_max_redraws(mut self, n: u32) -> Self {
        self.max_redraws = n;
        self
    }

    /// Create a new config with a custom redraw mode.
    pub fn with_redraw_mode(mut self, mode: RedrawMode) -> Self {
        self.redraw_mode = mode;
        self
    }

    /// Create a new config with custom scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Create a new config with a custom worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations that could never produce a decision.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_simulations == 0 {
            return Err(EngineError::InvalidConfig("max_simulations must be at least 1".into()));
        }
        if self.max_redraws == 0 {
            return Err(EngineError::InvalidConfig("max_redraws must be at least 1".into()));
        }
        if self.workers == 0 {
            return Err(EngineError::InvalidConfig("workers must be at least 1".into()));
        }
        Ok(())
    }
}
