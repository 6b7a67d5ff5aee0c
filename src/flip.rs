use crate::board::{Board, Cell, Color, DirectionSet};
use crate::square::Square;

/// Places `color` on `square` and converts the opponent runs in every
/// direction of `mask`. Returns the flipped squares, direction by direction
/// in bit order, nearest first.
///
/// Caller contract: `mask` is the non-empty movability entry for `square`
/// under `color`, computed on this exact board.
pub fn apply_placement(
    board: &mut Board,
    square: Square,
    color: Color,
    mask: DirectionSet,
) -> Vec<Square> {
    debug_assert!(!mask.is_empty(), "apply_placement() on an illegal square");
    debug_assert_eq!(board.at(square), Cell::Empty, "{square} is occupied");

    let own = Cell::from(color);
    let opponent = Cell::from(!color);
    let origin = square.padded_index();
    let mut flipped = Vec::new();

    board.put(square, own);

    for dir in mask.iter() {
        let step = dir.offset();
        let mut index = origin.wrapping_add_signed(step);
        while board.cell_at_index(index) == opponent {
            board.set_index(index, own);
            flipped.extend(Square::from_padded_index(index));
            index = index.wrapping_add_signed(step);
        }
        debug_assert_eq!(
            board.cell_at_index(index),
            own,
            "{dir:?} run from {square} is not closed by {color}"
        );
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;
    use crate::movability::compute_movability;

    fn sq(tag: &str) -> Square {
        tag.parse().unwrap()
    }

    fn tags(squares: &[Square]) -> Vec<String> {
        squares.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn opening_c4_flips_d4_only() {
        let mut board = Board::new();
        let mask = compute_movability(&board, Color::Black).get(sq("c4"));

        let flipped = apply_placement(&mut board, sq("c4"), Color::Black, mask);

        assert_eq!(tags(&flipped), vec!["d4"]);
        assert_eq!(board.at(sq("c4")), Cell::Black);
        assert_eq!(board.at(sq("d4")), Cell::Black);
        assert_eq!(board.count_color(Color::Black), 4);
        assert_eq!(board.count_color(Color::White), 1);
        assert_eq!(board.count_empty(), 59);
    }

    #[test]
    fn flips_long_runs_in_several_directions() {
        let mut board: Board = "\
            B.......
            W.......
            W.......
            .WWWWWWB
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mask = compute_movability(&board, Color::Black).get(sq("a4"));
        assert!(mask.contains(Direction::North));
        assert!(mask.contains(Direction::East));

        let flipped = apply_placement(&mut board, sq("a4"), Color::Black, mask);

        // North is bit 2, East is bit 4.
        assert_eq!(
            tags(&flipped),
            vec!["a3", "a2", "b4", "c4", "d4", "e4", "f4", "g4"]
        );
        assert_eq!(board.count_color(Color::White), 0);
        assert_eq!(board.count_color(Color::Black), 11);
    }

    #[test]
    fn only_masked_directions_are_walked() {
        let mut board = Board::new();
        let mask = compute_movability(&board, Color::Black).get(sq("c4"));
        let before = board.clone();

        apply_placement(&mut board, sq("c4"), Color::Black, mask);

        // White e5 and the other opening disks outside the east run stay put.
        assert_eq!(board.at(sq("e5")), before.at(sq("e5")));
        assert_eq!(board.at(sq("d5")), before.at(sq("d5")));
        assert_eq!(board.at(sq("e4")), before.at(sq("e4")));
    }
}
