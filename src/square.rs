use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, STRIDE};
use crate::error::SquareParseError;

const COLUMN_TAGS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const ROW_TAGS: [char; BOARD_SIZE] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// An interior board cell, addressed with 1-based coordinates.
/// `x` is the column (`a`..`h`), `y` is the row (`1`..`8`, row 1 on top).
///
/// Serialized as its tag string, e.g. `"d3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    y: u8,
    x: u8,
}

impl Square {
    /// Returns `None` when either coordinate is outside 1..=8.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        let range = 1..=BOARD_SIZE as u8;
        if range.contains(&x) && range.contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Index into the padded board array.
    pub fn padded_index(self) -> usize {
        self.y as usize * STRIDE + self.x as usize
    }

    /// Inverse of [`Square::padded_index`]; `None` for border indices.
    pub fn from_padded_index(index: usize) -> Option<Self> {
        let x = u8::try_from(index % STRIDE).ok()?;
        let y = u8::try_from(index / STRIDE).ok()?;
        Self::new(x, y)
    }

    /// Row-major index in 0..64, as used by [`crate::board::Board::to_array`].
    pub fn to_index(self) -> u8 {
        (self.y - 1) * BOARD_SIZE as u8 + (self.x - 1)
    }

    /// All 64 interior squares in row-major order (a1, b1, .., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE as u8).flat_map(|y| (1..=BOARD_SIZE as u8).map(move |x| Square { x, y }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            COLUMN_TAGS[self.x as usize - 1],
            ROW_TAGS[self.y as usize - 1]
        )
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parses a tag like `"d3"`. The column letter may be upper case.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut chars = tag.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::Length(tag.to_string()));
        };

        let x = COLUMN_TAGS
            .iter()
            .position(|&c| c == col.to_ascii_lowercase())
            .ok_or(SquareParseError::Column(col))?;
        let y = ROW_TAGS
            .iter()
            .position(|&r| r == row)
            .ok_or(SquareParseError::Row(row))?;

        Ok(Self {
            x: x as u8 + 1,
            y: y as u8 + 1,
        })
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_tags() {
        let sq: Square = "d3".parse().unwrap();
        assert_eq!((sq.x(), sq.y()), (4, 3));
        assert_eq!(sq.to_string(), "d3");
        assert_eq!("H8".parse::<Square>().unwrap(), Square::new(8, 8).unwrap());
    }

    #[test]
    fn rejects_malformed_tags() {
        assert_eq!(
            "d".parse::<Square>(),
            Err(SquareParseError::Length("d".to_string()))
        );
        assert_eq!(
            "d10".parse::<Square>(),
            Err(SquareParseError::Length("d10".to_string()))
        );
        assert_eq!("i1".parse::<Square>(), Err(SquareParseError::Column('i')));
        assert_eq!("a9".parse::<Square>(), Err(SquareParseError::Row('9')));
        assert_eq!("a0".parse::<Square>(), Err(SquareParseError::Row('0')));
    }

    #[test]
    fn new_rejects_border_coordinates() {
        assert!(Square::new(0, 4).is_none());
        assert!(Square::new(4, 9).is_none());
        assert!(Square::new(1, 1).is_some());
    }

    #[test]
    fn padded_index_round_trips_only_for_interior() {
        let sq: Square = "c5".parse().unwrap();
        assert_eq!(sq.padded_index(), 5 * STRIDE + 3);
        assert_eq!(Square::from_padded_index(sq.padded_index()), Some(sq));
        assert_eq!(Square::from_padded_index(0), None);
        assert_eq!(Square::from_padded_index(STRIDE * 9 + 4), None);
    }

    #[test]
    fn all_is_row_major_and_complete() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[1].to_string(), "b1");
        assert_eq!(squares[63].to_string(), "h8");
        assert!(squares.iter().enumerate().all(|(i, sq)| sq.to_index() as usize == i));
    }

    #[test]
    fn serializes_as_tag_string() {
        let sq: Square = "f5".parse().unwrap();
        assert_eq!(serde_json::to_string(&sq).unwrap(), "\"f5\"");
        assert_eq!(serde_json::from_str::<Square>("\"f5\"").unwrap(), sq);
        assert!(serde_json::from_str::<Square>("\"z5\"").is_err());
    }
}
