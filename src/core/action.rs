//! Move representation.
//!
//! A move names the player making it, optional source and destination
//! cells, and whether it jumps over another piece. Moves without a source or
//! destination are placeholders that are always legal when offered (Halma
//! uses one to end a hop chain).

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// A single move.
///
/// ## Example
///
/// ```
/// use halma_rollout::core::{Coord, Move, PlayerId};
///
/// let step = Move::step(PlayerId::new(0), Coord::new(3, 0), Coord::new(4, 1));
/// assert!(!step.is_hop());
///
/// let end = Move::end_turn(PlayerId::new(0));
/// assert!(end.is_placeholder());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the piece leaves.
    pub from: Option<Coord>,

    /// Cell the piece lands on.
    pub to: Option<Coord>,

    /// The player making the move.
    pub player: PlayerId,

    /// True when the piece jumps over an adjacent piece.
    pub hop: bool,
}

impl Move {
    /// A move to an adjacent empty cell.
    #[must_use]
    pub const fn step(player: PlayerId, from: Coord, to: Coord) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            player,
            hop: false,
        }
    }

    /// A jump over an adjacent piece.
    #[must_use]
    pub const fn hop(player: PlayerId, from: Coord, to: Coord) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            player,
            hop: true,
        }
    }

    /// Ends the player's turn without moving a piece.
    #[must_use]
    pub const fn end_turn(player: PlayerId) -> Self {
        Self {
            from: None,
            to: None,
            player,
            hop: false,
        }
    }

    #[must_use]
    pub const fn is_hop(&self) -> bool {
        self.hop
    }

    /// True when either endpoint is absent.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.from.is_none() || self.to.is_none()
    }

    /// Both endpoints, when present.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Coord, Coord)> {
        Some((self.from?, self.to?))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.endpoints() {
            Some((from, to)) => {
                let kind = if self.hop { "hops" } else { "steps" };
                write!(f, "{} {} {} -> {}", self.player, kind, from, to)
            }
            None => write!(f, "{} ends turn", self.player),
        }
    }
}
