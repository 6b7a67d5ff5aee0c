use tracing::{debug, info, trace};

use crate::board::{Board, Color};
use crate::flip::apply_placement;
use crate::movability::{MovabilityMap, compute_movability};
use crate::square::Square;
use crate::types::{GameResult, MoveOutcome, Phase, Rejection, Score, Status, TurnEvent};

/// Turn controller: owns the board and both movability maps, and sequences
/// placement, flipping, turn advance and pass/game-over detection.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    color: Color,
    turn: u32,
    is_game_over: bool,
    /// Legal cells for `color`.
    current: MovabilityMap,
    /// Legal cells for `!color`; only consulted to tell a pass from game over.
    opponent: MovabilityMap,
}

impl Game {
    /// Opening position, black to move, turn 1.
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            current: compute_movability(&board, Color::Black),
            opponent: compute_movability(&board, Color::White),
            board,
            color: Color::Black,
            turn: 1,
            is_game_over: false,
        }
    }

    /// Starts from an arbitrary position with `to_move` on turn. If
    /// `to_move` has no legal cell the turn passes to the opponent, and if
    /// neither side can move the game is already over.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        debug_assert!(board.is_well_formed());
        let mut game = Self {
            current: compute_movability(&board, to_move),
            opponent: compute_movability(&board, !to_move),
            board,
            color: to_move,
            turn: 1,
            is_game_over: false,
        };
        if !game.current.any() {
            game.resolve_stuck_mover();
        }
        game
    }

    /// Discards the current game and returns to the opening position.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset to opening position");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::GameOver
        } else {
            Phase::AwaitingMove(self.color)
        }
    }

    /// `None` once the game is over.
    pub fn to_move(&self) -> Option<Color> {
        (!self.is_game_over).then_some(self.color)
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// The movability map last computed for `color`.
    pub fn legal_moves(&self, color: Color) -> &MovabilityMap {
        if color == self.color {
            &self.current
        } else {
            &self.opponent
        }
    }

    pub fn score_counts(&self) -> Score {
        self.board.score()
    }

    /// `Some` once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over
            .then(|| GameResult::from(self.score_counts()))
    }

    pub fn status(&self) -> Status {
        Status {
            score: self.score_counts(),
            turn: self.turn,
            to_move: self.to_move(),
            is_game_over: self.is_game_over,
        }
    }

    /// Places a disk for the color to move. Illegal attempts change nothing
    /// and come back as [`MoveOutcome::Rejected`].
    pub fn attempt_move(&mut self, square: Square) -> MoveOutcome {
        self.attempt_move_as(self.color, square)
    }

    /// Like [`Game::attempt_move`], rejecting the attempt unless `color` is
    /// the color to move.
    pub fn attempt_move_as(&mut self, color: Color, square: Square) -> MoveOutcome {
        if let Err(reason) = self.check_placement(color, square) {
            trace!(%square, %color, ?reason, "placement ignored");
            return MoveOutcome::Rejected { reason };
        }

        let mask = self.current.get(square);
        let flipped = apply_placement(&mut self.board, square, color, mask);
        debug!(%square, %color, flips = flipped.len(), turn = self.turn, "placed disk");

        let event = self.advance_turn(color);
        MoveOutcome::Accepted {
            square,
            color,
            flipped,
            event,
        }
    }

    fn check_placement(&self, color: Color, square: Square) -> Result<(), Rejection> {
        if self.is_game_over {
            return Err(Rejection::GameOver);
        }
        if color != self.color {
            return Err(Rejection::NotYourTurn);
        }
        if !self.current.is_legal(square) {
            return Err(Rejection::IllegalSquare);
        }
        Ok(())
    }

    /// Hands the turn to the opponent of `mover` and recomputes both maps,
    /// then resolves a pass or the end of the game.
    fn advance_turn(&mut self, mover: Color) -> TurnEvent {
        self.turn += 1;
        self.color = !mover;
        self.current = compute_movability(&self.board, self.color);
        self.opponent = compute_movability(&self.board, mover);

        if self.current.any() {
            return TurnEvent::Continue {
                to_move: self.color,
            };
        }
        self.resolve_stuck_mover()
    }

    /// Called when `self.color` has no legal cell.
    fn resolve_stuck_mover(&mut self) -> TurnEvent {
        if self.opponent.any() {
            let skipped = self.color;
            self.color = !skipped;
            std::mem::swap(&mut self.current, &mut self.opponent);
            info!(%skipped, to_move = %self.color, turn = self.turn, "no legal move, passing");
            return TurnEvent::Passed {
                skipped,
                to_move: self.color,
            };
        }

        self.is_game_over = true;
        let result = GameResult::from(self.score_counts());
        info!(
            black = result.score.black,
            white = result.score.white,
            turn = self.turn,
            "neither side can move, game over"
        );
        TurnEvent::GameOver { result }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
