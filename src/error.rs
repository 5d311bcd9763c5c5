/// Errors raised while constructing a [`Bitboard`](crate::Bitboard) or parsing
/// one of its companion types.
///
/// Only construction is fallible. Once a board exists every operation on it is
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BitboardError {
    /// A coordinate lies outside `[0, 8)`.
    #[error("position ({x}, {y}) outside of board")]
    PositionOutOfRange { x: i32, y: i32 },

    /// A raw bit index is 64 or more.
    #[error("bit index {0} outside of board")]
    IndexOutOfRange(usize),

    /// A board string does not hold exactly 64 characters.
    #[error("invalid string length {0}, expected 64")]
    InvalidLength(usize),

    /// A board string holds something other than `'0'` or `'1'`.
    #[error("invalid string character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    /// A direction name is not one of the eight compass names.
    #[error("invalid direction name")]
    InvalidDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            BitboardError::PositionOutOfRange { x: 8, y: -1 }.to_string(),
            "position (8, -1) outside of board"
        );
        assert_eq!(
            BitboardError::IndexOutOfRange(64).to_string(),
            "bit index 64 outside of board"
        );
        assert_eq!(
            BitboardError::InvalidLength(3).to_string(),
            "invalid string length 3, expected 64"
        );
        assert_eq!(
            BitboardError::InvalidCharacter {
                character: 'x',
                offset: 12
            }
            .to_string(),
            "invalid string character 'x' at offset 12"
        );
    }
}
