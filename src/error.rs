/// Errors produced when parsing a cell tag such as `"d3"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("cell tag must be two characters, got {0:?}")]
    Length(String),

    #[error("invalid column {0:?} (expected a-h)")]
    Column(char),

    #[error("invalid row {0:?} (expected 1-8)")]
    Row(char),
}

/// Errors produced when parsing a textual board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} must have 8 cells, got {len}")]
    RowLength { row: usize, len: usize },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    Cell { row: usize, col: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_error_display() {
        let err = SquareParseError::Column('z');
        assert_eq!(err.to_string(), "invalid column 'z' (expected a-h)");
    }

    #[test]
    fn board_error_display() {
        let err = BoardParseError::Cell {
            row: 3,
            col: 5,
            ch: 'x',
        };
        assert_eq!(
            err.to_string(),
            "unexpected character 'x' at row 3, column 5"
        );
    }
}
