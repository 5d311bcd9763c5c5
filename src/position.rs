use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::bitboard::{Bitboard, BOARD_SIZE};
use crate::error::BitboardError;

/// A cell coordinate, or a relative offset between cells.
///
/// `x` is the row (0 at the top) and `y` is the column (0 at the left). The
/// fields are signed so the same type can describe a free-form move for
/// [`Bitboard::shift_by`]. The derived ordering is row-major, which matches
/// increasing bit index for cells on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Position of the bit at `index`, counted from the most significant bit.
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Position {
            x: (index / BOARD_SIZE) as i32,
            y: (index % BOARD_SIZE) as i32,
        }
    }

    /// Bit index of this cell, or `None` when it lies off the board.
    #[inline]
    pub const fn to_index(&self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.x as usize * BOARD_SIZE + self.y as usize)
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_on_board(&self) -> bool {
        let size = BOARD_SIZE as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Cells sharing an edge with this one. Fails for an off-board position.
    pub fn neighbors_cardinal(&self) -> Result<Bitboard, BitboardError> {
        Bitboard::from_position(*self).map(Bitboard::neighbors_cardinal)
    }

    /// Cells sharing only a corner with this one. Fails for an off-board position.
    pub fn neighbors_diagonal(&self) -> Result<Bitboard, BitboardError> {
        Bitboard::from_position(*self).map(Bitboard::neighbors_diagonal)
    }

    /// The Moore neighbourhood of this cell. Fails for an off-board position.
    pub fn neighbors_cardinal_and_diagonal(&self) -> Result<Bitboard, BitboardError> {
        Bitboard::from_position(*self).map(Bitboard::neighbors_cardinal_and_diagonal)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        Position::new(-self.x, -self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
