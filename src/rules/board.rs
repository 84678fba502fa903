//! Board trait for game implementations.

use crate::core::{Move, PlayerId};

/// Board trait.
///
/// `Clone` must produce a fully independent copy: the engine mutates clones
/// during rollouts and relies on the original never observing it.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Moves for the player whose turn it is. Must not be empty
///   while the game is undecided.
/// - `apply_move`: Advances the turn as the rules dictate. Behavior for a
///   move that is not currently legal is unspecified.
/// - `winner`: `None` while the game continues.
pub trait Board: Clone {
    /// Get all legal moves for the current turn.
    fn legal_moves(&self) -> Vec<Move>;

    /// The player to move.
    fn turn(&self) -> PlayerId;

    /// The winner, if the game is over.
    fn winner(&self) -> Option<PlayerId>;

    /// Apply a move for the player to move.
    fn apply_move(&mut self, mv: &Move);

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }
}
