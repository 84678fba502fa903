//! # halma-rollout
//!
//! A time-boxed Monte Carlo move chooser for four-player Halma.
//!
//! ## Design Principles
//!
//! 1. **No tree**: every rollout is an independent game played to the end
//!    from a private copy of the position. Only the seed move is scored.
//!
//! 2. **Board-Agnostic**: the engine sees the game through the `Board`
//!    trait. The bundled Halma board is one implementation of it.
//!
//! 3. **Explicit state**: the agent's goal corner and previous move live in
//!    an `AgentSession` created when the seat is known, not in lazily
//!    initialized flags.
//!
//! ## Architecture
//!
//! - **Progress heuristic**: the controlled player's rollout moves must not
//!   increase distance to its goal corner nor undo its previous move.
//!   Redraws are bounded, so a position with no forward move cannot stall.
//!
//! - **Deadline**: rollouts stop at a rollout cap or after the time budget,
//!   checked after every rollout.
//!
//! - **Workers**: rollouts can be spread over the rayon pool; each worker
//!   owns its board copies and RNG stream, and score tables are merged once
//!   all workers finish.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, moves, goal corners, RNG
//! - `rules`: The `Board` contract
//! - `games`: Board implementations (Halma)
//! - `montecarlo`: Heuristic, rollouts, scoring, aggregation, controller
//! - `error`: Engine errors

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod montecarlo;

// Re-export commonly used types
pub use crate::core::{Coord, GameRng, GoalCorner, Move, PlayerId, PlayerMap};

pub use crate::error::EngineError;

pub use crate::rules::Board;

pub use crate::games::halma::{HalmaBoard, HalmaBoardBuilder};

pub use crate::montecarlo::{
    AgentSession, Candidate, Decision, MonteCarloConfig, MonteCarloPlayer,
    ProgressHeuristic, RedrawMode, ResultTable, ScoreWeights, SearchStats,
};
