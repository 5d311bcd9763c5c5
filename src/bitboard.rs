use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};
use std::str::FromStr;

use crate::direction::{Compass, Direction};
use crate::error::BitboardError;
use crate::position::Position;

/// Number of rows, and of columns.
pub const BOARD_SIZE: usize = 8;

/// Number of cells.
pub const N_BITS: usize = BOARD_SIZE * BOARD_SIZE;

const TOP_LEFT: u64 = 0x8000_0000_0000_0000;
const LEFT_EDGE: u64 = 0x8080_8080_8080_8080;
const RIGHT_EDGE: u64 = 0x0101_0101_0101_0101;
const TOP_EDGE: u64 = 0xFF00_0000_0000_0000;
const BOTTOM_EDGE: u64 = 0x0000_0000_0000_00FF;

/// Raw left shift that empties instead of overflowing.
#[inline]
const fn raw_shl(bits: u64, n: usize) -> u64 {
    if n >= N_BITS {
        0
    } else {
        bits << n
    }
}

#[inline]
const fn raw_shr(bits: u64, n: usize) -> u64 {
    if n >= N_BITS {
        0
    } else {
        bits >> n
    }
}

/// Union of the `n` rightmost columns.
#[inline]
const fn right_wall(n: usize) -> u64 {
    if n >= BOARD_SIZE {
        u64::MAX
    } else {
        RIGHT_EDGE * ((1u64 << n) - 1)
    }
}

/// Union of the `n` leftmost columns.
#[inline]
const fn left_wall(n: usize) -> u64 {
    right_wall(BOARD_SIZE) ^ right_wall(BOARD_SIZE.saturating_sub(n))
}

#[inline]
const fn shift_up(bits: u64, n: usize) -> u64 {
    raw_shl(bits, n.saturating_mul(BOARD_SIZE))
}

#[inline]
const fn shift_down(bits: u64, n: usize) -> u64 {
    raw_shr(bits, n.saturating_mul(BOARD_SIZE))
}

// Cells leaving column 0 would reappear in the rightmost columns of the row
// above, so the wall clears them.
#[inline]
const fn shift_left(bits: u64, n: usize) -> u64 {
    raw_shl(bits, n) & !right_wall(n)
}

#[inline]
const fn shift_right(bits: u64, n: usize) -> u64 {
    raw_shr(bits, n) & !left_wall(n)
}

/// A set of cells on an 8×8 board, one bit per cell.
///
/// Bit index `i`, counted from the most significant bit, is row `i / 8` and
/// column `i % 8`. The most significant bit is the top-left cell and the least
/// significant bit the bottom-right cell.
///
/// Construction from a position, index, or string is validated. Everything
/// after that is total: shifts and dilations drop cells that leave the board
/// and never wrap around an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const TOP_LEFT: Bitboard = Bitboard(TOP_LEFT);
    pub const TOP_RIGHT: Bitboard = Bitboard(TOP_EDGE & RIGHT_EDGE);
    pub const BOTTOM_LEFT: Bitboard = Bitboard(BOTTOM_EDGE & LEFT_EDGE);
    pub const BOTTOM_RIGHT: Bitboard = Bitboard(1);

    pub const TOP_EDGE: Bitboard = Bitboard(TOP_EDGE);
    pub const BOTTOM_EDGE: Bitboard = Bitboard(BOTTOM_EDGE);
    pub const LEFT_EDGE: Bitboard = Bitboard(LEFT_EDGE);
    pub const RIGHT_EDGE: Bitboard = Bitboard(RIGHT_EDGE);

    pub const TOP_RIGHT_EDGE: Bitboard = Bitboard(TOP_EDGE | RIGHT_EDGE);
    pub const TOP_LEFT_EDGE: Bitboard = Bitboard(TOP_EDGE | LEFT_EDGE);
    pub const BOTTOM_RIGHT_EDGE: Bitboard = Bitboard(BOTTOM_EDGE | RIGHT_EDGE);
    pub const BOTTOM_LEFT_EDGE: Bitboard = Bitboard(BOTTOM_EDGE | LEFT_EDGE);
    pub const ALL_EDGE: Bitboard = Bitboard(TOP_EDGE | BOTTOM_EDGE | LEFT_EDGE | RIGHT_EDGE);

    /// Bottom-left to top-right diagonal.
    pub const POSITIVE_SLOPE: Bitboard = Bitboard(0x0102_0408_1020_4080);
    /// Top-left to bottom-right diagonal.
    pub const NEGATIVE_SLOPE: Bitboard = Bitboard(0x8040_2010_0804_0201);

    /// Wraps a raw word without validation.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    const fn bit(index: usize) -> Self {
        Bitboard(raw_shr(TOP_LEFT, index))
    }

    /// Single cell at bit `index`, counted from the most significant bit.
    pub fn from_index(index: usize) -> Result<Self, BitboardError> {
        if index >= N_BITS {
            log::trace!("rejected bit index {index}");
            return Err(BitboardError::IndexOutOfRange(index));
        }
        Ok(Bitboard::bit(index))
    }

    /// Single cell at `position`.
    pub fn from_position(position: Position) -> Result<Self, BitboardError> {
        match position.to_index() {
            Some(index) => Ok(Bitboard::bit(index)),
            None => {
                log::trace!("rejected position {position}");
                Err(BitboardError::PositionOutOfRange {
                    x: position.x,
                    y: position.y,
                })
            }
        }
    }

    /// Row `n`, counted from the top. Empty when `n >= 8`.
    pub const fn row(n: usize) -> Self {
        Bitboard::TOP_EDGE.shift(Direction::Down, n)
    }

    /// Column `n`, counted from the left. Empty when `n >= 8`.
    pub const fn column(n: usize) -> Self {
        Bitboard::LEFT_EDGE.shift(Direction::Right, n)
    }

    /// Boundary facing `direction`. A diagonal direction gives the union of
    /// its two boundary lines.
    pub const fn edge(direction: Direction) -> Self {
        match direction {
            Direction::Right => Bitboard::RIGHT_EDGE,
            Direction::UpRight => Bitboard::TOP_RIGHT_EDGE,
            Direction::Up => Bitboard::TOP_EDGE,
            Direction::UpLeft => Bitboard::TOP_LEFT_EDGE,
            Direction::Left => Bitboard::LEFT_EDGE,
            Direction::DownLeft => Bitboard::BOTTOM_LEFT_EDGE,
            Direction::Down => Bitboard::BOTTOM_EDGE,
            Direction::DownRight => Bitboard::BOTTOM_RIGHT_EDGE,
        }
    }

    /// Whether the cell at `position` is set. An off-board position is an
    /// error, as it is for construction.
    #[inline]
    pub fn test(&self, position: Position) -> Result<bool, BitboardError> {
        let cell = Bitboard::from_position(position)?;
        Ok(self.test_any(cell))
    }

    #[inline]
    pub const fn test_any(&self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn test_all(&self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Population count.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn has_single_position(&self) -> bool {
        self.0.is_power_of_two()
    }

    #[inline]
    pub fn set(&mut self, other: Bitboard) -> &mut Self {
        self.0 |= other.0;
        self
    }

    pub fn set_position(&mut self, position: Position) -> Result<&mut Self, BitboardError> {
        let cell = Bitboard::from_position(position)?;
        Ok(self.set(cell))
    }

    #[inline]
    pub fn clear(&mut self, other: Bitboard) -> &mut Self {
        self.0 &= !other.0;
        self
    }

    pub fn clear_position(&mut self, position: Position) -> Result<&mut Self, BitboardError> {
        let cell = Bitboard::from_position(position)?;
        Ok(self.clear(cell))
    }

    #[inline]
    pub fn clear_all(&mut self) -> &mut Self {
        self.0 = 0;
        self
    }

    /// Moves every cell `n` steps toward `direction`.
    ///
    /// Vertical moves shift the word by whole rows, so cells fall off the top
    /// or bottom on their own. Horizontal moves shift by `n` bits and then
    /// clear the wall of `n` columns that would otherwise receive cells
    /// wrapped in from the neighbouring row. Diagonals are a vertical move
    /// followed by a horizontal one. Any `n`, however large, is accepted.
    #[inline]
    pub const fn shift(self, direction: Direction, n: usize) -> Bitboard {
        let bits = self.0;
        Bitboard(match direction {
            Direction::Right => shift_right(bits, n),
            Direction::UpRight => shift_right(shift_up(bits, n), n),
            Direction::Up => shift_up(bits, n),
            Direction::UpLeft => shift_left(shift_up(bits, n), n),
            Direction::Left => shift_left(bits, n),
            Direction::DownLeft => shift_left(shift_down(bits, n), n),
            Direction::Down => shift_down(bits, n),
            Direction::DownRight => shift_right(shift_down(bits, n), n),
        })
    }

    /// [`shift`](Self::shift) with the direction fixed at compile time.
    #[inline]
    pub const fn shift_toward<D: Compass>(self, n: usize) -> Bitboard {
        self.shift(D::DIRECTION, n)
    }

    #[inline]
    pub fn shift_assign(&mut self, direction: Direction, n: usize) -> &mut Self {
        *self = self.shift(direction, n);
        self
    }

    /// Moves every cell by a free-form offset: `x` rows down (up when
    /// negative), then `y` columns right (left when negative).
    #[inline]
    pub const fn shift_by(self, offset: Position) -> Bitboard {
        let rows = offset.x.unsigned_abs() as usize;
        let vertical = if offset.x >= 0 {
            self.shift(Direction::Down, rows)
        } else {
            self.shift(Direction::Up, rows)
        };
        let columns = offset.y.unsigned_abs() as usize;
        if offset.y >= 0 {
            vertical.shift(Direction::Right, columns)
        } else {
            vertical.shift(Direction::Left, columns)
        }
    }

    #[inline]
    pub fn shift_by_assign(&mut self, offset: Position) -> &mut Self {
        *self = self.shift_by(offset);
        self
    }

    /// Grows the set by one cell toward `direction`, `n` times over.
    ///
    /// Each step unions the board with its own one-step shift, so the grown
    /// cells contribute again on the next step. Stops early once a step adds
    /// nothing, which leaves the result unchanged.
    pub fn dilate(&mut self, direction: Direction, n: usize) -> &mut Self {
        for _ in 0..n {
            let grown = *self | self.shift(direction, 1);
            if grown == *self {
                break;
            }
            *self = grown;
        }
        self
    }

    #[inline]
    pub fn dilate_toward<D: Compass>(&mut self, n: usize) -> &mut Self {
        self.dilate(D::DIRECTION, n)
    }

    pub fn dilated(mut self, direction: Direction, n: usize) -> Bitboard {
        self.dilate(direction, n);
        self
    }

    #[inline]
    pub const fn on_edge(&self, direction: Direction) -> bool {
        self.test_any(Bitboard::edge(direction))
    }

    #[inline]
    pub const fn on_edge_toward<D: Compass>(&self) -> bool {
        self.on_edge(D::DIRECTION)
    }

    #[inline]
    pub const fn on_any_edge(&self) -> bool {
        self.test_any(Bitboard::ALL_EDGE)
    }

    pub const fn neighbors_cardinal(self) -> Bitboard {
        Bitboard(
            self.shift(Direction::Right, 1).0
                | self.shift(Direction::Up, 1).0
                | self.shift(Direction::Left, 1).0
                | self.shift(Direction::Down, 1).0,
        )
    }

    pub const fn neighbors_diagonal(self) -> Bitboard {
        Bitboard(
            self.shift(Direction::UpRight, 1).0
                | self.shift(Direction::UpLeft, 1).0
                | self.shift(Direction::DownLeft, 1).0
                | self.shift(Direction::DownRight, 1).0,
        )
    }

    pub const fn neighbors_cardinal_and_diagonal(self) -> Bitboard {
        Bitboard(self.neighbors_cardinal().0 | self.neighbors_diagonal().0)
    }

    /// The single position on this board.
    ///
    /// The board must hold exactly one cell; check with
    /// [`has_single_position`](Self::has_single_position) first. This is
    /// asserted in debug builds only. In release builds a board with several
    /// cells yields its first cell and an empty board yields an off-board
    /// position.
    #[inline]
    pub const fn to_position(&self) -> Position {
        debug_assert!(self.has_single_position());
        Position::from_index(self.0.leading_zeros() as usize)
    }

    /// Single-cell boards in increasing bit index order.
    #[inline]
    pub fn iter(&self) -> BitIterator {
        BitIterator { bits: self.0 }
    }

    /// Set positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.iter().map(|cell| cell.to_position())
    }

    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn to_position_vector(&self) -> Vec<Position> {
        self.positions().collect()
    }

    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn to_bitboard_vector(&self) -> Vec<Bitboard> {
        self.iter().collect()
    }

    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn to_position_set(&self) -> BTreeSet<Position> {
        self.positions().collect()
    }
}

impl From<u64> for Bitboard {
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    fn from(board: Bitboard) -> Self {
        board.0
    }
}

impl TryFrom<Position> for Bitboard {
    type Error = BitboardError;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        Bitboard::from_position(position)
    }
}

impl TryFrom<&str> for Bitboard {
    type Error = BitboardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parses 64 characters of `'0'` and `'1'`, most significant bit first.
impl FromStr for Bitboard {
    type Err = BitboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != N_BITS {
            log::debug!("rejected board string of length {length}");
            return Err(BitboardError::InvalidLength(length));
        }

        s.chars()
            .enumerate()
            .try_fold(Bitboard::EMPTY, |board, (offset, character)| match character {
                '1' => Ok(board | Bitboard::bit(offset)),
                '0' => Ok(board),
                _ => Err(BitboardError::InvalidCharacter { character, offset }),
            })
            .inspect_err(|e| log::debug!("rejected board string: {e}"))
    }
}

/// 64 characters of `'0'` and `'1'`, most significant bit first.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..N_BITS {
            f.write_str(if self.test_any(Bitboard::bit(index)) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Raw shift of the word toward the most significant bit, with no edge
/// masking. Shifting by 64 or more empties the board.
impl Shl<usize> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shl(self, n: usize) -> Bitboard {
        Bitboard(raw_shl(self.0, n))
    }
}

impl ShlAssign<usize> for Bitboard {
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        self.0 = raw_shl(self.0, n);
    }
}

/// Raw shift of the word toward the least significant bit, with no edge
/// masking. Shifting by 64 or more empties the board.
impl Shr<usize> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shr(self, n: usize) -> Bitboard {
        Bitboard(raw_shr(self.0, n))
    }
}

impl ShrAssign<usize> for Bitboard {
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        self.0 = raw_shr(self.0, n);
    }
}

impl FromIterator<Bitboard> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Bitboard>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, |acc, board| acc | board)
    }
}

impl IntoIterator for Bitboard {
    type Item = Bitboard;
    type IntoIter = BitIterator;

    fn into_iter(self) -> BitIterator {
        self.iter()
    }
}

/// Iterator over the cells of a [`Bitboard`] as single-cell boards, from the
/// top-left cell to the bottom-right cell.
#[derive(Clone, Debug)]
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = Bitboard;

    #[inline]
    fn next(&mut self) -> Option<Bitboard> {
        if self.bits == 0 {
            return None;
        }
        // Highest set bit is the lowest index.
        let cell = TOP_LEFT >> self.bits.leading_zeros();
        self.bits ^= cell;
        Some(Bitboard(cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIterator {}

impl FusedIterator for BitIterator {}
