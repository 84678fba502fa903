//! Goal corners and their assignment to players.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::coord::Coord;
use super::player::PlayerId;

/// Largest coordinate on the 16x16 board.
pub const BOARD_MAX: i8 = 15;

/// One of the four board corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl GoalCorner {
    /// All four corners.
    pub const ALL: [GoalCorner; 4] = [
        GoalCorner::TopLeft,
        GoalCorner::TopRight,
        GoalCorner::BottomLeft,
        GoalCorner::BottomRight,
    ];

    /// The corner a player races toward.
    ///
    /// ```
    /// use halma_rollout::core::{Coord, GoalCorner, PlayerId};
    ///
    /// let corner = GoalCorner::for_player(PlayerId::new(0)).unwrap();
    /// assert_eq!(corner, GoalCorner::BottomRight);
    /// assert_eq!(corner.coord(), Coord::new(15, 15));
    /// ```
    pub fn for_player(player: PlayerId) -> Result<Self, EngineError> {
        match player.0 {
            0 => Ok(GoalCorner::BottomRight),
            1 => Ok(GoalCorner::TopRight),
            2 => Ok(GoalCorner::BottomLeft),
            3 => Ok(GoalCorner::TopLeft),
            other => Err(EngineError::UnknownPlayer(other)),
        }
    }

    /// The corner cell itself.
    #[must_use]
    pub const fn coord(self) -> Coord {
        match self {
            GoalCorner::TopLeft => Coord::new(0, 0),
            GoalCorner::TopRight => Coord::new(0, BOARD_MAX),
            GoalCorner::BottomLeft => Coord::new(BOARD_MAX, 0),
            GoalCorner::BottomRight => Coord::new(BOARD_MAX, BOARD_MAX),
        }
    }

    /// The diagonally opposite corner, where a player racing here starts.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            GoalCorner::TopLeft => GoalCorner::BottomRight,
            GoalCorner::TopRight => GoalCorner::BottomLeft,
            GoalCorner::BottomLeft => GoalCorner::TopRight,
            GoalCorner::BottomRight => GoalCorner::TopLeft,
        }
    }

    /// Direction pointing from the corner into the board, per axis.
    #[must_use]
    pub const fn inward(self) -> (i8, i8) {
        let c = self.coord();
        (
            if c.x == 0 { 1 } else { -1 },
            if c.y == 0 { 1 } else { -1 },
        )
    }
}

impl std::fmt::Display for GoalCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GoalCorner::TopLeft => "top-left",
            GoalCorner::TopRight => "top-right",
            GoalCorner::BottomLeft => "bottom-left",
            GoalCorner::BottomRight => "bottom-right",
        };
        write!(f, "{} {}", name, self.coord())
    }
}
