//! The live board the caller owns.
//!
//! The search never touches this directly: it snapshots it into a
//! `SimState` and works on clones. The board's job is setup and the
//! runtime mutation API: placing pieces, toggling obstacles, and
//! attaching or detaching movement rules on pieces mid-game.

use std::fmt;
use std::sync::Arc;

use crate::game::piece::{PieceSnapshot, Role, Side};
use crate::game::rules::MoveRule;
use crate::game::square::Square;

#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    squares: Vec<Option<PieceSnapshot>>,
    obstacles: Vec<bool>,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Self {
        let area = width as usize * height as usize;
        Self {
            width,
            height,
            squares: vec![None; area],
            obstacles: vec![false; area],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn squares(&self) -> &[Option<PieceSnapshot>] {
        &self.squares
    }

    pub(crate) fn obstacles(&self) -> &[bool] {
        &self.obstacles
    }

    fn in_bounds(&self, square: Square) -> bool {
        square.x < self.width && square.y < self.height
    }

    /// Place a piece with the standard rule loadout for its role,
    /// replacing any occupant. Out-of-range squares are ignored.
    pub fn place(&mut self, role: Role, side: Side, square: Square) {
        self.place_with_rules(role, side, square, MoveRule::standard_for(role));
    }

    pub fn place_with_rules(
        &mut self,
        role: Role,
        side: Side,
        square: Square,
        rules: Vec<Arc<MoveRule>>,
    ) {
        debug_assert!(self.in_bounds(square), "placement off the board: {square}");
        if !self.in_bounds(square) {
            return;
        }
        let idx = square.index(self.width);
        self.squares[idx] = Some(PieceSnapshot::new(role, side, square, rules));
    }

    pub fn remove(&mut self, square: Square) -> Option<PieceSnapshot> {
        if !self.in_bounds(square) {
            return None;
        }
        self.squares[square.index(self.width)].take()
    }

    pub fn piece_at(&self, square: Square) -> Option<&PieceSnapshot> {
        if !self.in_bounds(square) {
            return None;
        }
        self.squares[square.index(self.width)].as_ref()
    }

    pub fn set_obstacle(&mut self, square: Square) {
        debug_assert!(self.in_bounds(square), "obstacle off the board: {square}");
        if self.in_bounds(square) {
            self.obstacles[square.index(self.width)] = true;
        }
    }

    pub fn clear_obstacle(&mut self, square: Square) {
        if self.in_bounds(square) {
            self.obstacles[square.index(self.width)] = false;
        }
    }

    pub fn is_obstacle(&self, square: Square) -> bool {
        self.in_bounds(square) && self.obstacles[square.index(self.width)]
    }

    /// Attach a movement rule to the piece on `square` ("mutation").
    /// The rule goes to the end of the piece's list, which places its
    /// destinations last in enumeration order. Returns false when the
    /// square is empty.
    pub fn attach_rule(&mut self, square: Square, rule: Arc<MoveRule>) -> bool {
        if !self.in_bounds(square) {
            return false;
        }
        match &mut self.squares[square.index(self.width)] {
            Some(piece) => {
                piece.rules.push(rule);
                true
            }
            None => false,
        }
    }

    /// Detach the first attached rule equal to `rule` from the piece
    /// on `square`. Returns false when nothing matched.
    pub fn detach_rule(&mut self, square: Square, rule: &MoveRule) -> bool {
        if !self.in_bounds(square) {
            return false;
        }
        match &mut self.squares[square.index(self.width)] {
            Some(piece) => match piece.rules.iter().position(|r| r.as_ref() == rule) {
                Some(pos) => {
                    piece.rules.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Execute a chosen move on the live board: same semantics as the
    /// simulation's apply. Returns the captured piece, if any.
    pub fn apply(&mut self, from: Square, to: Square) -> Option<PieceSnapshot> {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return None;
        }
        let moved = self.squares[from.index(self.width)].take();
        match moved {
            Some(mut piece) => {
                piece.square = to;
                self.squares[to.index(self.width)].replace(piece)
            }
            None => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let square = Square::new(x, y);
                let c = if self.is_obstacle(square) {
                    '#'
                } else {
                    match self.piece_at(square) {
                        Some(piece) => piece.role.as_char(piece.side),
                        None => '.',
                    }
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
