//! Four-player Halma board.

use smallvec::SmallVec;

use crate::core::{Coord, GoalCorner, Move, PlayerId, PlayerMap, BOARD_MAX};
use crate::rules::Board;

/// Cells per side.
pub const BOARD_SIZE: usize = BOARD_MAX as usize + 1;

/// Halma is played by exactly four players.
pub const PLAYER_COUNT: usize = 4;

/// Pieces each player starts with.
pub const PIECES_PER_PLAYER: usize = 13;

/// Completed turns after which the game is decided on position.
pub const DEFAULT_MAX_TURNS: u32 = 5000;

/// Length of each row of a base, counted outward from the corner.
const BASE_ROWS: [i8; 4] = [4, 4, 3, 2];

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

type Pieces = SmallVec<[Coord; PIECES_PER_PLAYER]>;

/// Is `cell` inside the base anchored at `corner`?
#[must_use]
pub fn in_base(corner: GoalCorner, cell: Coord) -> bool {
    let anchor = corner.coord();
    let i = (i16::from(cell.x) - i16::from(anchor.x)).abs();
    let j = (i16::from(cell.y) - i16::from(anchor.y)).abs();
    on_board(cell) && i < BASE_ROWS.len() as i16 && j < i16::from(BASE_ROWS[i as usize])
}

/// All cells of the base anchored at `corner`.
#[must_use]
pub fn base_cells(corner: GoalCorner) -> Pieces {
    let anchor = corner.coord();
    let (dx, dy) = corner.inward();
    let mut cells = Pieces::new();
    for (i, &len) in BASE_ROWS.iter().enumerate() {
        for j in 0..len {
            cells.push(Coord::new(anchor.x + dx * i as i8, anchor.y + dy * j));
        }
    }
    cells
}

fn on_board(cell: Coord) -> bool {
    (0..=BOARD_MAX).contains(&cell.x) && (0..=BOARD_MAX).contains(&cell.y)
}

/// A Halma position.
///
/// A turn is either a single step to an adjacent empty cell, or a chain of
/// hops by one piece ended by `Move::end_turn`. A piece that has reached its
/// goal base may not leave it. A player wins once all of its pieces stand in
/// its goal base; after `max_turns` completed turns the leader on position
/// wins instead.
#[derive(Clone, Debug)]
pub struct HalmaBoard {
    cells: [[Option<PlayerId>; BOARD_SIZE]; BOARD_SIZE],
    pieces: PlayerMap<Pieces>,
    goals: PlayerMap<GoalCorner>,
    turn: PlayerId,
    /// Cells visited by the piece currently hopping, origin first.
    hop_chain: SmallVec<[Coord; 8]>,
    turns_played: u32,
    max_turns: u32,
    winner: Option<PlayerId>,
}

/// Builder for creating a HalmaBoard.
pub struct HalmaBoardBuilder {
    max_turns: u32,
    first_player: PlayerId,
    placements: Vec<(PlayerId, Vec<Coord>)>,
}

impl Default for HalmaBoardBuilder {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            first_player: PlayerId::new(0),
            placements: Vec::new(),
        }
    }
}

impl HalmaBoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_turns(mut self, turns: u32) -> Self {
        assert!(turns > 0, "Turn limit must be positive");
        self.max_turns = turns;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        assert!(player.index() < PLAYER_COUNT, "Player must be 0-3");
        self.first_player = player;
        self
    }

    /// Place a player's pieces on the given cells instead of its home base.
    pub fn place(mut self, player: PlayerId, cells: &[Coord]) -> Self {
        assert!(player.index() < PLAYER_COUNT, "Player must be 0-3");
        assert!(!cells.is_empty(), "A player needs at least one piece");
        assert!(cells.iter().all(|&c| on_board(c)), "Pieces must be on the board");
        self.placements.retain(|(p, _)| *p != player);
        self.placements.push((player, cells.to_vec()));
        self
    }

    /// Build the board.
    pub fn build(self) -> HalmaBoard {
        let goals = PlayerMap::new(PLAYER_COUNT, |p| {
            GoalCorner::for_player(p).unwrap_or(GoalCorner::TopLeft)
        });

        let mut pieces: PlayerMap<Pieces> = PlayerMap::new(PLAYER_COUNT, |p| {
            base_cells(goals[p].opposite())
        });
        for (player, cells) in self.placements {
            pieces[player] = cells.into_iter().collect();
        }

        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (player, owned) in pieces.iter() {
            for cell in owned {
                let slot = &mut cells[cell.x as usize][cell.y as usize];
                assert!(slot.is_none(), "Two pieces placed on {}", cell);
                *slot = Some(player);
            }
        }

        HalmaBoard {
            cells,
            pieces,
            goals,
            turn: self.first_player,
            hop_chain: SmallVec::new(),
            turns_played: 0,
            max_turns: self.max_turns,
            winner: None,
        }
    }
}

impl Default for HalmaBoard {
    fn default() -> Self {
        HalmaBoardBuilder::new().build()
    }
}

impl HalmaBoard {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the piece on `cell`, if any.
    #[must_use]
    pub fn piece_at(&self, cell: Coord) -> Option<PlayerId> {
        if on_board(cell) {
            self.cells[cell.x as usize][cell.y as usize]
        } else {
            None
        }
    }

    /// A player's pieces.
    #[must_use]
    pub fn pieces(&self, player: PlayerId) -> &[Coord] {
        &self.pieces[player]
    }

    /// The corner a player races toward.
    #[must_use]
    pub fn goal(&self, player: PlayerId) -> GoalCorner {
        self.goals[player]
    }

    /// Completed turns so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// True while a piece is in the middle of a hop chain.
    #[must_use]
    pub fn is_hopping(&self) -> bool {
        !self.hop_chain.is_empty()
    }

    /// Number of a player's pieces inside its goal base.
    #[must_use]
    pub fn pieces_home(&self, player: PlayerId) -> usize {
        let goal = self.goals[player];
        self.pieces[player].iter().filter(|&&c| in_base(goal, c)).count()
    }

    fn is_empty(&self, cell: Coord) -> bool {
        on_board(cell) && self.cells[cell.x as usize][cell.y as usize].is_none()
    }

    /// A piece in its goal base never leaves it.
    fn may_enter(&self, player: PlayerId, from: Coord, to: Coord) -> bool {
        let goal = self.goals[player];
        !in_base(goal, from) || in_base(goal, to)
    }

    fn push_hops(&self, player: PlayerId, from: Coord, out: &mut Vec<Move>) {
        for (dx, dy) in DIRECTIONS {
            let Some(over) = from.offset(dx, dy) else { continue };
            if self.piece_at(over).is_none() {
                continue;
            }
            let Some(to) = over.offset(dx, dy) else { continue };
            if self.is_empty(to)
                && !self.hop_chain.contains(&to)
                && self.may_enter(player, from, to)
            {
                out.push(Move::hop(player, from, to));
            }
        }
    }

    fn relocate(&mut self, player: PlayerId, from: Coord, to: Coord) {
        self.cells[from.x as usize][from.y as usize] = None;
        self.cells[to.x as usize][to.y as usize] = Some(player);
        if let Some(piece) = self.pieces[player].iter_mut().find(|c| **c == from) {
            *piece = to;
        }
    }

    fn finish_turn(&mut self) {
        self.hop_chain.clear();
        let mover = self.turn;
        if self.pieces_home(mover) == self.pieces[mover].len() {
            self.winner = Some(mover);
        }
        self.turns_played += 1;
        if self.winner.is_none() && self.turns_played >= self.max_turns {
            self.winner = Some(self.leader());
        }
        self.turn = mover.next(PLAYER_COUNT);
    }

    /// Most pieces home, then least total distance to goal, then lowest id.
    fn leader(&self) -> PlayerId {
        let standing = |p: PlayerId| {
            let goal = self.goals[p].coord();
            let spread: f64 = self.pieces[p].iter().map(|c| c.distance(goal)).sum();
            (self.pieces_home(p), spread)
        };

        let mut best = PlayerId::new(0);
        let (mut best_home, mut best_spread) = standing(best);
        for player in PlayerId::all(PLAYER_COUNT).skip(1) {
            let (home, spread) = standing(player);
            if home > best_home || (home == best_home && spread < best_spread) {
                best = player;
                best_home = home;
                best_spread = spread;
            }
        }
        best
    }
}

impl Board for HalmaBoard {
    fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }

        let player = self.turn;
        let mut moves = Vec::new();

        if let Some(&at) = self.hop_chain.last() {
            self.push_hops(player, at, &mut moves);
            moves.push(Move::end_turn(player));
            return moves;
        }

        for &from in self.pieces[player].iter() {
            for (dx, dy) in DIRECTIONS {
                let Some(to) = from.offset(dx, dy) else { continue };
                if self.is_empty(to) && self.may_enter(player, from, to) {
                    moves.push(Move::step(player, from, to));
                }
            }
            self.push_hops(player, from, &mut moves);
        }

        // Boxed in: the turn passes.
        if moves.is_empty() {
            moves.push(Move::end_turn(player));
        }
        moves
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    fn apply_move(&mut self, mv: &Move) {
        let player = self.turn;
        match mv.endpoints() {
            None => self.finish_turn(),
            Some((from, to)) => {
                self.relocate(player, from, to);
                if mv.hop {
                    if self.hop_chain.is_empty() {
                        self.hop_chain.push(from);
                    }
                    self.hop_chain.push(to);
                } else {
                    self.finish_turn();
                }
            }
        }
    }
}

impl std::fmt::Display for HalmaBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let glyph = match self.cells[x][y] {
                    Some(p) => char::from(b'0' + p.0),
                    None => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
