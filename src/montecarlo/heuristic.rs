//! Forward-progress filter for the controlled agent's moves.
//!
//! A move passes when it does not increase the moving piece's distance to
//! the goal corner and does not land where the previous real move started.
//! Placeholder moves always pass.

use crate::core::{Coord, GameRng, Move};

/// A move drawn under the heuristic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawn {
    pub mv: Move,
    /// True when no accepted move turned up within the redraw bound and
    /// `mv` was drawn without the filter.
    pub fell_back: bool,
}

/// Progress heuristic for one decision.
#[derive(Clone, Copy, Debug)]
pub struct ProgressHeuristic {
    goal: Coord,
    forbidden: Option<Coord>,
}

impl ProgressHeuristic {
    /// Heuristic toward `goal`, forbidding a return to where `last_move`
    /// started.
    #[must_use]
    pub fn new(goal: Coord, last_move: Option<&Move>) -> Self {
        Self {
            goal,
            forbidden: last_move.and_then(|m| m.from),
        }
    }

    /// The corner progress is measured against.
    #[must_use]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Does `mv` make non-negative progress without undoing the last move?
    #[must_use]
    pub fn accepts(&self, mv: &Move) -> bool {
        let Some((from, to)) = mv.endpoints() else {
            return true;
        };
        if self.forbidden == Some(to) {
            return false;
        }
        from.distance(self.goal) >= to.distance(self.goal)
    }

    /// Draw uniformly from `moves` until a draw is accepted, giving up after
    /// `max_redraws` attempts and drawing once more unfiltered.
    ///
    /// Returns `None` only when `moves` is empty.
    pub fn draw(&self, moves: &[Move], rng: &mut GameRng, max_redraws: u32) -> Option<Drawn> {
        for _ in 0..max_redraws {
            let mv = *rng.choose(moves)?;
            if self.accepts(&mv) {
                return Some(Drawn { mv, fell_back: false });
            }
        }
        rng.choose(moves).map(|&mv| Drawn { mv, fell_back: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GoalCorner, PlayerId};

    const P: PlayerId = PlayerId::new(0);

    fn toward_origin() -> ProgressHeuristic {
        ProgressHeuristic::new(GoalCorner::TopLeft.coord(), None)
    }

    #[test]
    fn test_forward_and_sideways_accepted() {
        let h = toward_origin();
        assert!(h.accepts(&Move::step(P, Coord::new(5, 5), Coord::new(4, 4))));
        // (5, 4) and (4, 5) are equidistant from the origin.
        assert!(h.accepts(&Move::step(P, Coord::new(5, 4), Coord::new(4, 5))));
    }

    #[test]
    fn test_backward_rejected() {
        let h = toward_origin();
        assert!(!h.accepts(&Move::step(P, Coord::new(4, 4), Coord::new(5, 5))));
        assert!(!h.accepts(&Move::hop(P, Coord::new(4, 4), Coord::new(4, 6))));
    }

    #[test]
    fn test_placeholder_always_accepted() {
        for corner in GoalCorner::ALL {
            let last = Move::step(P, Coord::new(1, 1), Coord::new(2, 2));
            let h = ProgressHeuristic::new(corner.coord(), Some(&last));
            assert!(h.accepts(&Move::end_turn(P)));
        }
    }

    #[test]
    fn test_reversal_rejected_even_when_forward() {
        let last = Move::step(P, Coord::new(4, 4), Coord::new(5, 5));
        let h = ProgressHeuristic::new(GoalCorner::TopLeft.coord(), Some(&last));
        assert!(!h.accepts(&Move::step(P, Coord::new(5, 5), Coord::new(4, 4))));
        assert!(h.accepts(&Move::step(P, Coord::new(5, 5), Coord::new(4, 5))));
    }

    #[test]
    fn test_last_placeholder_forbids_nothing() {
        let last = Move::end_turn(P);
        let h = ProgressHeuristic::new(GoalCorner::TopLeft.coord(), Some(&last));
        assert!(h.accepts(&Move::step(P, Coord::new(1, 1), Coord::new(0, 0))));
    }

    #[test]
    fn test_draw_finds_the_only_forward_move() {
        let h = toward_origin();
        let forward = Move::step(P, Coord::new(5, 5), Coord::new(4, 4));
        let mut moves: Vec<Move> = (0..9)
            .map(|i| Move::step(P, Coord::new(5, i), Coord::new(6, i)))
            .collect();
        moves.push(forward);

        let mut rng = GameRng::new(7);
        for _ in 0..20 {
            let drawn = h.draw(&moves, &mut rng, 500).unwrap();
            assert_eq!(drawn, Drawn { mv: forward, fell_back: false });
        }
    }

    #[test]
    fn test_draw_falls_back_when_nothing_passes() {
        let h = toward_origin();
        let moves = vec![
            Move::step(P, Coord::new(4, 4), Coord::new(5, 5)),
            Move::step(P, Coord::new(2, 2), Coord::new(3, 3)),
        ];

        let mut rng = GameRng::new(1);
        let drawn = h.draw(&moves, &mut rng, 64).unwrap();
        assert!(drawn.fell_back);
        assert!(moves.contains(&drawn.mv));
    }

    #[test]
    fn test_draw_on_empty_list() {
        let mut rng = GameRng::new(1);
        assert_eq!(toward_origin().draw(&[], &mut rng, 64), None);
    }
}
