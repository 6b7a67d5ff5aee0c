use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardParseError;
use crate::square::Square;
use crate::types::Score;

pub const BOARD_SIZE: usize = 8;
/// Side of the padded grid: the board plus a one-cell wall on each edge.
pub const STRIDE: usize = BOARD_SIZE + 2;
const PADDED_CELLS: usize = STRIDE * STRIDE;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// State of one cell of the padded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Wall,
}

impl Cell {
    pub fn is(self, color: Color) -> bool {
        self == Cell::from(color)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// The eight neighbor offsets. Row 1 is north, column `a` is west.
///
/// The discriminant is the bit position used in [`DirectionSet`], so a
/// direction recorded by the legality scan reads back as the same walk in
/// the flip executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    West = 0,
    NorthWest = 1,
    North = 2,
    NorthEast = 3,
    East = 4,
    SouthEast = 5,
    South = 6,
    SouthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
    ];

    pub fn bit(self) -> u8 {
        1 << self as u8
    }

    /// `(dx, dy)` in board coordinates.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// Step in the padded array.
    pub fn offset(self) -> isize {
        let (dx, dy) = self.delta();
        dy * STRIDE as isize + dx
    }
}

/// A set of [`Direction`]s packed into one byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&dir| self.contains(dir))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

/// Othello board stored as a flat 10x10 grid with a wall border, so a
/// directional walk from any interior cell stops on the border without a
/// bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; PADDED_CELLS],
}

impl Board {
    /// Creates the opening position:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// A walled board with an empty interior.
    pub fn empty() -> Self {
        let mut cells = [Cell::Wall; PADDED_CELLS];
        for sq in Square::all() {
            cells[sq.padded_index()] = Cell::Empty;
        }
        Self { cells }
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
        self.set(4, 4, Cell::White);
        self.set(5, 5, Cell::White);
        self.set(5, 4, Cell::Black);
        self.set(4, 5, Cell::Black);
    }

    /// Reads the padded grid at `(x, y)`; 0 and 9 address the wall.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * STRIDE + x]
    }

    /// Writes an interior cell. Writing the border, or writing `Wall`,
    /// breaks the board invariant and is only caught in debug builds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(
            (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y),
            "set() outside the interior: ({x}, {y})"
        );
        debug_assert!(cell != Cell::Wall, "set() cannot place a wall");
        self.cells[y * STRIDE + x] = cell;
    }

    pub fn at(&self, square: Square) -> Cell {
        self.cells[square.padded_index()]
    }

    pub fn put(&mut self, square: Square, cell: Cell) {
        self.set(square.x() as usize, square.y() as usize, cell);
    }

    /// Reads a raw padded index. Callers walking from an interior cell stay
    /// in range because every walk stops at the wall.
    pub(crate) fn cell_at_index(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub(crate) fn set_index(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn count_color(&self, color: Color) -> u8 {
        self.count_cells(Cell::from(color))
    }

    pub fn count_empty(&self) -> u8 {
        self.count_cells(Cell::Empty)
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count_color(Color::Black),
            white: self.count_color(Color::White),
            empty: self.count_empty(),
        }
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for sq in Square::all() {
            board[sq.to_index() as usize] = match self.at(sq) {
                Cell::Black => 1,
                Cell::White => 2,
                Cell::Empty | Cell::Wall => 0,
            };
        }
        board
    }

    /// `true` when every border cell is `Wall` and no interior cell is.
    pub fn is_well_formed(&self) -> bool {
        (0..PADDED_CELLS).all(|index| match Square::from_padded_index(index) {
            Some(_) => self.cells[index] != Cell::Wall,
            None => self.cells[index] == Cell::Wall,
        })
    }

    fn count_cells(&self, cell: Cell) -> u8 {
        Square::all().filter(|&sq| self.at(sq) == cell).count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight rows of `.`, `B` and `W`, row 1 first. Whitespace inside a row is
/// ignored and blank lines are skipped.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row: y + 1,
                    len: row.len(),
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'B' | 'b' | 'X' | 'x' => Cell::Black,
                    'W' | 'w' | 'O' | 'o' => Cell::White,
                    _ => {
                        return Err(BoardParseError::Cell {
                            row: y + 1,
                            col: x + 1,
                            ch,
                        });
                    }
                };
                board.set(x + 1, y + 1, cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=BOARD_SIZE {
            for x in 1..=BOARD_SIZE {
                let ch = match self.get(x, y) {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                    Cell::Wall => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
