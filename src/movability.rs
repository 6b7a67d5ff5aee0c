use crate::board::{Board, Cell, Color, Direction, DirectionSet, STRIDE};
use crate::square::Square;

/// Per-cell flip directions for one color, parallel to the padded board.
/// A cell is a legal placement iff its set is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovabilityMap {
    color: Color,
    masks: [DirectionSet; STRIDE * STRIDE],
}

impl MovabilityMap {
    fn blank(color: Color) -> Self {
        Self {
            color,
            masks: [DirectionSet::EMPTY; STRIDE * STRIDE],
        }
    }

    /// The color this map was computed for.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn get(&self, square: Square) -> DirectionSet {
        self.masks[square.padded_index()]
    }

    pub fn is_legal(&self, square: Square) -> bool {
        !self.get(square).is_empty()
    }

    /// `true` when at least one cell is playable.
    pub fn any(&self) -> bool {
        self.masks.iter().any(|mask| !mask.is_empty())
    }

    pub fn count(&self) -> usize {
        self.masks.iter().filter(|mask| !mask.is_empty()).count()
    }

    /// Legal squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|&sq| self.is_legal(sq))
    }
}

/// Scans every empty cell of `board` and records, for `color`, each direction
/// in which a run of opponent disks is closed by a `color` disk.
pub fn compute_movability(board: &Board, color: Color) -> MovabilityMap {
    let mut map = MovabilityMap::blank(color);

    for sq in Square::all() {
        if board.at(sq) != Cell::Empty {
            continue;
        }
        let origin = sq.padded_index();
        map.masks[origin] = Direction::ALL
            .into_iter()
            .filter(|&dir| closes_run(board, origin, dir, color))
            .collect();
    }

    map
}

fn closes_run(board: &Board, origin: usize, dir: Direction, color: Color) -> bool {
    let opponent = Cell::from(!color);
    let step = dir.offset();

    let mut index = origin.wrapping_add_signed(step);
    let mut run = 0usize;
    // The wall border is never `opponent`, so this stops before leaving the grid.
    while board.cell_at_index(index) == opponent {
        index = index.wrapping_add_signed(step);
        run += 1;
    }

    run > 0 && board.cell_at_index(index).is(color)
}
