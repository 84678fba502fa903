//! Per-agent state carried across real decisions.

use crate::core::{GoalCorner, Move, PlayerId};
use crate::error::EngineError;

/// The controlled agent's identity, goal and previous move.
///
/// Created once when the agent learns which seat it plays. The goal corner is
/// fixed at creation; the last move changes only when the controller commits
/// a real decision, never during rollouts.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentSession {
    player: PlayerId,
    goal: GoalCorner,
    last_move: Option<Move>,
}

impl AgentSession {
    /// Assign the agent its seat and goal corner.
    pub fn new(player: PlayerId) -> Result<Self, EngineError> {
        Ok(Self {
            player,
            goal: GoalCorner::for_player(player)?,
            last_move: None,
        })
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn goal(&self) -> GoalCorner {
        self.goal
    }

    /// The move committed by the previous decision, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Remember a committed decision.
    pub fn record_decision(&mut self, mv: Move) {
        self.last_move = Some(mv);
    }
}
