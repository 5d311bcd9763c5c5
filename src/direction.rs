use std::fmt;
use std::str::FromStr;

use paste::paste;

use crate::error::BitboardError;
use crate::position::Position;

/// A direction known at compile time.
///
/// Implemented by the zero-sized types in [`compass`]. Generic entry points
/// such as [`Bitboard::shift_toward`](crate::Bitboard::shift_toward) take one
/// of these as a type parameter and compile down to the same code as their
/// runtime counterparts with the `match` folded away.
pub trait Compass: Copy {
    const DIRECTION: Direction;
}

macro_rules! directions {
    ($($name:ident = $text:literal => $row:literal, $col:literal;)*) => {
        paste! {
            /// The eight compass directions on the board. Right is +column and
            /// up is -row.
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub enum Direction {
                $([<$name:camel>],)*
            }

            impl Direction {
                /// Every direction, counter-clockwise from `Right`.
                pub const ALL: [Direction; 8] = [$(Direction::[<$name:camel>],)*];

                /// Unit step taken by one shift in this direction.
                pub const fn offset(self) -> Position {
                    match self {
                        $(Direction::[<$name:camel>] => Position::new($row, $col),)*
                    }
                }

                pub const fn name(self) -> &'static str {
                    match self {
                        $(Direction::[<$name:camel>] => $text,)*
                    }
                }
            }

            impl FromStr for Direction {
                type Err = BitboardError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s {
                        $($text => Ok(Direction::[<$name:camel>]),)*
                        _ => Err(BitboardError::InvalidDirection),
                    }
                }
            }

            /// Marker types for compile-time direction dispatch.
            pub mod compass {
                use super::{Compass, Direction};

                $(
                    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                    pub struct [<$name:camel>];

                    impl Compass for [<$name:camel>] {
                        const DIRECTION: Direction = Direction::[<$name:camel>];
                    }
                )*
            }
        }
    };
}

directions! {
    right = "right" => 0, 1;
    up_right = "upright" => -1, 1;
    up = "up" => -1, 0;
    up_left = "upleft" => -1, -1;
    left = "left" => 0, -1;
    down_left = "downleft" => 1, -1;
    down = "down" => 1, 0;
    down_right = "downright" => 1, 1;
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::UpRight => Direction::DownLeft,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::Left => Direction::Right,
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::Right | Direction::Up | Direction::Left | Direction::Down
        )
    }

    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            names,
            vec!["right", "upright", "up", "upleft", "left", "downleft", "down", "downright"]
        );
        for direction in Direction::ALL {
            assert_eq!(direction.name().parse::<Direction>(), Ok(direction));
        }
        assert_eq!(
            "north".parse::<Direction>(),
            Err(BitboardError::InvalidDirection)
        );
    }

    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.opposite().offset(), -direction.offset());
        }
    }

    #[test]
    fn test_cardinal_and_diagonal_partition() {
        for direction in Direction::CARDINAL {
            assert!(direction.is_cardinal());
            let offset = direction.offset();
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
        }
        for direction in Direction::DIAGONAL {
            assert!(direction.is_diagonal());
            let offset = direction.offset();
            assert_eq!((offset.x.abs(), offset.y.abs()), (1, 1));
        }
    }

    #[test]
    fn test_compass_markers() {
        assert_eq!(compass::Right::DIRECTION, Direction::Right);
        assert_eq!(compass::UpRight::DIRECTION, Direction::UpRight);
        assert_eq!(compass::DownLeft::DIRECTION, Direction::DownLeft);
        assert_eq!(compass::Down::DIRECTION, Direction::Down);
    }
}
