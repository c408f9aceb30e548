//! Engine-independent board snapshot used for look-ahead.
//!
//! A `SimState` is cheap to clone and owns its piece snapshots
//! outright; hypothetical lines are explored by cloning a state and
//! applying one move, never by mutating the board the game runs on.

use crate::game::board::Board;
use crate::game::candidate::MoveCandidate;
use crate::game::piece::{PieceSnapshot, Role, Side};
use crate::game::square::Square;

#[derive(Debug, Clone)]
pub struct SimState {
    width: u8,
    height: u8,
    squares: Vec<Option<PieceSnapshot>>,
    obstacles: Vec<bool>,
}

impl SimState {
    pub fn empty(width: u8, height: u8) -> Self {
        let area = width as usize * height as usize;
        Self {
            width,
            height,
            squares: vec![None; area],
            obstacles: vec![false; area],
        }
    }

    /// Snapshot a live board into a simulation state.
    pub fn from_board(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            squares: board.squares().to_vec(),
            obstacles: board.obstacles().to_vec(),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn piece_at(&self, square: Square) -> Option<&PieceSnapshot> {
        self.squares[square.index(self.width)].as_ref()
    }

    pub fn is_obstacle(&self, square: Square) -> bool {
        self.obstacles[square.index(self.width)]
    }

    /// Put a piece on its square, replacing any occupant. The square
    /// recorded in the snapshot is authoritative.
    pub fn place(&mut self, piece: PieceSnapshot) {
        let idx = piece.square.index(self.width);
        self.squares[idx] = Some(piece);
    }

    pub fn set_obstacle(&mut self, square: Square) {
        self.obstacles[square.index(self.width)] = true;
    }

    /// Simulate a move: take the piece at `from`, overwrite whatever
    /// stands at `to`. A missing origin piece leaves the state
    /// untouched.
    pub fn apply(&mut self, from: Square, to: Square) {
        let from_idx = from.index(self.width);
        if let Some(mut piece) = self.squares[from_idx].take() {
            piece.square = to;
            self.squares[to.index(self.width)] = Some(piece);
        }
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &PieceSnapshot> {
        self.squares
            .iter()
            .filter_map(|slot| slot.as_ref())
            .filter(move |piece| piece.side == side)
    }

    pub fn has_king(&self, side: Side) -> bool {
        self.pieces_of(side).any(|piece| piece.role == Role::King)
    }

    /// A position is terminal when at least one side's king is gone.
    /// Computed fresh on every call; never cached.
    pub fn is_terminal(&self) -> bool {
        !self.has_king(Side::White) || !self.has_king(Side::Black)
    }

    /// All candidates for a side: squares in row-major order, each
    /// piece's rules in attachment order. This enumeration order is
    /// part of the contract, since it decides which of several
    /// equal-score moves the search prefers.
    pub fn moves_for_side(&self, side: Side) -> Vec<MoveCandidate> {
        let mut out = Vec::new();
        for slot in &self.squares {
            let piece = match slot {
                Some(piece) if piece.side == side => piece,
                _ => continue,
            };
            self.push_piece_moves(piece, &mut out);
        }
        out
    }

    /// Candidates for the piece standing on one square, in the same
    /// order `moves_for_side` would produce them.
    pub fn moves_for_piece(&self, square: Square) -> Vec<MoveCandidate> {
        let mut out = Vec::new();
        if let Some(piece) = self.piece_at(square) {
            self.push_piece_moves(piece, &mut out);
        }
        out
    }

    fn push_piece_moves(&self, piece: &PieceSnapshot, out: &mut Vec<MoveCandidate>) {
        for rule in &piece.rules {
            for dest in rule.destinations(self, piece.square, piece.side) {
                out.push(MoveCandidate::new(
                    piece.square,
                    dest,
                    Some(piece.clone()),
                ));
            }
        }
    }
}
