use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::position::Position;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A board serializes as its 64-character `'0'`/`'1'` string.
impl Serialize for Bitboard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bitboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A position serializes as `"x,y"`.
impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{},{}", self.x, self.y))
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid position format: {}", s)))?;
        let x: i32 = x
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid row: {}", e)))?;
        let y: i32 = y
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid column: {}", e)))?;

        Ok(Position::new(x, y))
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid direction: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitboard_serde() {
        let board = Bitboard::TOP_LEFT | Bitboard::BOTTOM_RIGHT;

        let json = serde_json::to_string(&board).expect("serialize");
        assert_eq!(json, format!("\"1{}1\"", "0".repeat(62)));

        let board2: Bitboard = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(board2, board);
    }

    #[test]
    fn test_bitboard_serde_rejects_bad_strings() {
        assert!(serde_json::from_str::<Bitboard>(r#""0101""#).is_err());

        let json = format!("\"{}x\"", "0".repeat(63));
        let err = serde_json::from_str::<Bitboard>(&json).expect_err("bad character");
        assert!(err.to_string().contains("invalid string character 'x'"));
    }

    #[test]
    fn test_position_serde() {
        let position = Position::new(3, -2);

        let json = serde_json::to_string(&position).expect("serialize");
        assert_eq!(json, r#""3,-2""#);

        let position2: Position = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(position2, position);

        assert!(serde_json::from_str::<Position>(r#""3""#).is_err());
        assert!(serde_json::from_str::<Position>(r#""a,1""#).is_err());
    }

    #[test]
    fn test_direction_serde() {
        for direction in Direction::ALL {
            let json = serde_json::to_string(&direction).expect("serialize");
            assert_eq!(json, format!("\"{}\"", direction.name()));
            let direction2: Direction = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(direction2, direction);
        }
        assert!(serde_json::from_str::<Direction>(r#""sideways""#).is_err());
    }

    #[test]
    fn test_nested_roundtrip() {
        let moves = vec![
            (Position::new(0, 0), Direction::DownRight),
            (Position::new(7, 3), Direction::Up),
        ];
        let json = serde_json::to_string(&moves).expect("serialize");
        assert_eq!(json, r#"[["0,0","downright"],["7,3","up"]]"#);

        let moves2: Vec<(Position, Direction)> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(moves2, moves);
    }
}
