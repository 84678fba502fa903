//! Engine errors.
//!
//! Every variant is a broken precondition: a board that violates its
//! contract, a misconfigured engine, or a caller asking at the wrong time.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors returned by the rollout engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("no legal moves for {player}")]
    EmptyMoveSet { player: PlayerId },

    #[error("no goal corner for player ordinal {0}")]
    UnknownPlayer(u8),

    #[error("{player} asked to move but it is {turn}'s turn")]
    NotOurTurn { player: PlayerId, turn: PlayerId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no rollout completed")]
    NoCandidates,
}
