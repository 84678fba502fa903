//! Narrowing a legal move list to one player's moves.

use crate::core::{Move, PlayerId};

/// The moves in `moves` made by `player`, in their original order.
#[must_use]
pub fn moves_for_player(moves: &[Move], player: PlayerId) -> Vec<Move> {
    moves.iter().filter(|m| m.player == player).copied().collect()
}
