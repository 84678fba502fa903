//! Four-player Halma on a 16x16 board.
//!
//! Reference implementation of the `Board` contract:
//! - Each player starts with 13 pieces in one corner base
//! - The goal base is the diagonally opposite corner
//! - On your turn: step to an adjacent cell, or chain hops over pieces
//! - First player with every piece in its goal base wins

mod board;

pub use board::{
    base_cells, in_base, HalmaBoard, HalmaBoardBuilder, BOARD_SIZE, DEFAULT_MAX_TURNS,
    PIECES_PER_PLAYER, PLAYER_COUNT,
};
