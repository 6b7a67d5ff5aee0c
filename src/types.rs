use serde::Serialize;

use crate::board::Color;
use crate::square::Square;

/// Disk counts. `black + white + empty == 64` for every reachable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub black: u8,
    pub white: u8,
    pub empty: u8,
}

impl Score {
    /// The color with more disks, or `None` on a draw.
    pub fn leader(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Color>,
    pub score: Score,
}

impl From<Score> for GameResult {
    fn from(score: Score) -> Self {
        Self {
            winner: score.leader(),
            score,
        }
    }
}

/// Where the turn controller stands between placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "color", rename_all = "camelCase")]
pub enum Phase {
    AwaitingMove(Color),
    GameOver,
}

/// Why an attempted placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    GameOver,
    NotYourTurn,
    IllegalSquare,
}

/// What happened to the turn after an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TurnEvent {
    /// The opponent of the mover is next.
    #[serde(rename_all = "camelCase")]
    Continue { to_move: Color },
    /// `skipped` had no legal cell, so `to_move` (the same mover) goes again.
    #[serde(rename_all = "camelCase")]
    Passed { skipped: Color, to_move: Color },
    /// Neither color can move.
    GameOver { result: GameResult },
}

impl TurnEvent {
    /// `None` once the game is over.
    pub fn to_move(&self) -> Option<Color> {
        match *self {
            TurnEvent::Continue { to_move } | TurnEvent::Passed { to_move, .. } => Some(to_move),
            TurnEvent::GameOver { .. } => None,
        }
    }
}

/// Report returned by every placement attempt.
/// Contract:
/// - `Rejected`: the game state is unchanged.
/// - `Accepted`: `flipped` lists every converted disk, excluding `square`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveOutcome {
    Rejected {
        reason: Rejection,
    },
    Accepted {
        square: Square,
        color: Color,
        flipped: Vec<Square>,
        event: TurnEvent,
    },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Empty for a rejected attempt.
    pub fn flipped(&self) -> &[Square] {
        match self {
            MoveOutcome::Accepted { flipped, .. } => flipped,
            MoveOutcome::Rejected { .. } => &[],
        }
    }

    pub fn event(&self) -> Option<&TurnEvent> {
        match self {
            MoveOutcome::Accepted { event, .. } => Some(event),
            MoveOutcome::Rejected { .. } => None,
        }
    }
}

/// Snapshot for the status line: counts, turn number and whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub score: Score,
    pub turn: u32,
    /// `None` once the game is over.
    pub to_move: Option<Color>,
    pub is_game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leader_breaks_ties_as_draw() {
        let score = Score {
            black: 32,
            white: 32,
            empty: 0,
        };
        assert_eq!(GameResult::from(score).winner, None);

        let score = Score {
            black: 10,
            white: 40,
            empty: 14,
        };
        assert_eq!(GameResult::from(score).winner, Some(Color::White));
    }

    #[test]
    fn accepted_outcome_serializes_with_tags() {
        let outcome = MoveOutcome::Accepted {
            square: "c4".parse().unwrap(),
            color: Color::Black,
            flipped: vec!["d4".parse().unwrap()],
            event: TurnEvent::Continue {
                to_move: Color::White,
            },
        };

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "kind": "accepted",
                "square": "c4",
                "color": "black",
                "flipped": ["d4"],
                "event": { "kind": "continue", "toMove": "white" }
            })
        );
    }

    #[test]
    fn rejected_outcome_serializes_reason() {
        let outcome = MoveOutcome::Rejected {
            reason: Rejection::IllegalSquare,
        };

        assert!(!outcome.is_accepted());
        assert!(outcome.flipped().is_empty());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "kind": "rejected", "reason": "illegalSquare" })
        );
    }

    #[test]
    fn game_over_event_carries_counts() {
        let event = TurnEvent::GameOver {
            result: GameResult::from(Score {
                black: 40,
                white: 24,
                empty: 0,
            }),
        };

        assert_eq!(event.to_move(), None);
        assert_eq!(
            serde_json::to_value(event).unwrap(),
            json!({
                "kind": "gameOver",
                "result": {
                    "winner": "black",
                    "score": { "black": 40, "white": 24, "empty": 0 }
                }
            })
        );
    }
}
