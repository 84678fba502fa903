//! Core types: players, coordinates, moves, goal corners, RNG.
//!
//! These are shared by the rollout engine and by board implementations.
//! Nothing here knows how a particular board generates or applies moves.

pub mod player;
pub mod coord;
pub mod corner;
pub mod action;
pub mod rng;

pub use player::{PlayerId, PlayerMap};
pub use coord::Coord;
pub use corner::{GoalCorner, BOARD_MAX};
pub use action::Move;
pub use rng::GameRng;
