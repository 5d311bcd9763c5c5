pub mod bitboard;
pub mod direction;
pub mod error;
pub mod position;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use bitboard::{BitIterator, Bitboard, BOARD_SIZE, N_BITS};
pub use direction::{compass, Compass, Direction};
pub use error::BitboardError;
pub use position::Position;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn bitboard8(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyBitboard>()?;
    m.add("BOARD_SIZE", BOARD_SIZE)?;
    m.add(
        "DIRECTIONS",
        Direction::ALL.iter().map(|d| d.name()).collect::<Vec<_>>(),
    )?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::exceptions::PyValueError;

    fn value_error(err: BitboardError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn parse_direction(name: &str) -> PyResult<Direction> {
        name.parse().map_err(value_error)
    }

    #[pyclass(name = "Bitboard", eq)]
    #[derive(Clone, PartialEq)]
    pub struct PyBitboard {
        board: Bitboard,
    }

    impl From<Bitboard> for PyBitboard {
        fn from(board: Bitboard) -> Self {
            PyBitboard { board }
        }
    }

    #[pymethods]
    impl PyBitboard {
        #[new]
        #[pyo3(signature = (bits = 0))]
        pub fn new(bits: u64) -> Self {
            Bitboard::new(bits).into()
        }

        #[staticmethod]
        pub fn from_string(s: &str) -> PyResult<Self> {
            s.parse::<Bitboard>().map(Self::from).map_err(value_error)
        }

        #[staticmethod]
        pub fn from_position(x: i32, y: i32) -> PyResult<Self> {
            Bitboard::from_position(Position::new(x, y))
                .map(Self::from)
                .map_err(value_error)
        }

        #[staticmethod]
        pub fn from_index(index: usize) -> PyResult<Self> {
            Bitboard::from_index(index)
                .map(Self::from)
                .map_err(value_error)
        }

        #[staticmethod]
        pub fn full() -> Self {
            Bitboard::FULL.into()
        }

        /// Named mask such as `"top_edge"`, `"all_edge"` or `"positive_slope"`.
        #[staticmethod]
        pub fn mask(name: &str) -> PyResult<Self> {
            let board = match name {
                "empty" => Bitboard::EMPTY,
                "full" => Bitboard::FULL,
                "top_left" => Bitboard::TOP_LEFT,
                "top_right" => Bitboard::TOP_RIGHT,
                "bottom_left" => Bitboard::BOTTOM_LEFT,
                "bottom_right" => Bitboard::BOTTOM_RIGHT,
                "top_edge" => Bitboard::TOP_EDGE,
                "bottom_edge" => Bitboard::BOTTOM_EDGE,
                "left_edge" => Bitboard::LEFT_EDGE,
                "right_edge" => Bitboard::RIGHT_EDGE,
                "top_right_edge" => Bitboard::TOP_RIGHT_EDGE,
                "top_left_edge" => Bitboard::TOP_LEFT_EDGE,
                "bottom_right_edge" => Bitboard::BOTTOM_RIGHT_EDGE,
                "bottom_left_edge" => Bitboard::BOTTOM_LEFT_EDGE,
                "all_edge" => Bitboard::ALL_EDGE,
                "positive_slope" => Bitboard::POSITIVE_SLOPE,
                "negative_slope" => Bitboard::NEGATIVE_SLOPE,
                _ => {
                    return Err(PyValueError::new_err(format!("unknown mask: {}", name)));
                }
            };
            Ok(board.into())
        }

        #[staticmethod]
        pub fn edge(direction: &str) -> PyResult<Self> {
            Ok(Bitboard::edge(parse_direction(direction)?).into())
        }

        #[staticmethod]
        pub fn row(n: usize) -> Self {
            Bitboard::row(n).into()
        }

        #[staticmethod]
        pub fn column(n: usize) -> Self {
            Bitboard::column(n).into()
        }

        #[getter]
        pub fn bits(&self) -> u64 {
            self.board.bits()
        }

        pub fn count(&self) -> u32 {
            self.board.count()
        }

        pub fn is_empty(&self) -> bool {
            self.board.is_empty()
        }

        pub fn has_single_position(&self) -> bool {
            self.board.has_single_position()
        }

        pub fn test(&self, x: i32, y: i32) -> PyResult<bool> {
            self.board.test(Position::new(x, y)).map_err(value_error)
        }

        pub fn test_any(&self, other: &Self) -> bool {
            self.board.test_any(other.board)
        }

        pub fn test_all(&self, other: &Self) -> bool {
            self.board.test_all(other.board)
        }

        pub fn set(&mut self, other: &Self) {
            self.board.set(other.board);
        }

        pub fn set_position(&mut self, x: i32, y: i32) -> PyResult<()> {
            self.board
                .set_position(Position::new(x, y))
                .map(|_| ())
                .map_err(value_error)
        }

        pub fn clear(&mut self, other: &Self) {
            self.board.clear(other.board);
        }

        pub fn clear_position(&mut self, x: i32, y: i32) -> PyResult<()> {
            self.board
                .clear_position(Position::new(x, y))
                .map(|_| ())
                .map_err(value_error)
        }

        pub fn clear_all(&mut self) {
            self.board.clear_all();
        }

        #[pyo3(signature = (direction, n = 1))]
        pub fn shift(&self, direction: &str, n: usize) -> PyResult<Self> {
            Ok(self.board.shift(parse_direction(direction)?, n).into())
        }

        pub fn shift_by(&self, dx: i32, dy: i32) -> Self {
            self.board.shift_by(Position::new(dx, dy)).into()
        }

        #[pyo3(signature = (direction, n = 1))]
        pub fn dilate(&self, direction: &str, n: usize) -> PyResult<Self> {
            Ok(self.board.dilated(parse_direction(direction)?, n).into())
        }

        pub fn on_edge(&self, direction: &str) -> PyResult<bool> {
            Ok(self.board.on_edge(parse_direction(direction)?))
        }

        pub fn on_any_edge(&self) -> bool {
            self.board.on_any_edge()
        }

        pub fn neighbors_cardinal(&self) -> Self {
            self.board.neighbors_cardinal().into()
        }

        pub fn neighbors_diagonal(&self) -> Self {
            self.board.neighbors_diagonal().into()
        }

        pub fn neighbors_cardinal_and_diagonal(&self) -> Self {
            self.board.neighbors_cardinal_and_diagonal().into()
        }

        /// The single cell on this board. Raises unless exactly one is set.
        pub fn to_position(&self) -> PyResult<(i32, i32)> {
            if !self.board.has_single_position() {
                return Err(PyValueError::new_err(format!(
                    "board holds {} cells, expected exactly one",
                    self.board.count()
                )));
            }
            let position = self.board.to_position();
            Ok((position.x, position.y))
        }

        pub fn positions(&self) -> Vec<(i32, i32)> {
            self.board.positions().map(|p| (p.x, p.y)).collect()
        }

        pub fn to_bitboards(&self) -> Vec<Self> {
            self.board.iter().map(Self::from).collect()
        }

        fn __or__(&self, other: &Self) -> Self {
            (self.board | other.board).into()
        }

        fn __and__(&self, other: &Self) -> Self {
            (self.board & other.board).into()
        }

        fn __xor__(&self, other: &Self) -> Self {
            (self.board ^ other.board).into()
        }

        fn __invert__(&self) -> Self {
            (!self.board).into()
        }

        fn __lshift__(&self, n: usize) -> Self {
            (self.board << n).into()
        }

        fn __rshift__(&self, n: usize) -> Self {
            (self.board >> n).into()
        }

        fn __len__(&self) -> usize {
            self.board.count() as usize
        }

        fn __contains__(&self, position: (i32, i32)) -> PyResult<bool> {
            self.board.test(Position::from(position)).map_err(value_error)
        }

        fn __str__(&self) -> String {
            self.board.to_string()
        }

        fn __repr__(&self) -> String {
            format!("Bitboard.from_string('{}')", self.board)
        }
    }
}
