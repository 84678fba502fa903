//! Board contract consumed by the rollout engine.
//!
//! Boards implement `Board` to define:
//! - Legal moves for the player to move
//! - How moves modify the position
//! - When the game is won
//!
//! The engine calls into `Board` but never interprets board geometry
//! beyond the coordinates carried by each `Move`.

pub mod board;

pub use board::Board;
