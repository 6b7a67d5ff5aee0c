use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod flip;
pub mod game;
pub mod movability;
pub mod square;
pub mod types;
pub mod wasm;

pub use board::{Board, Cell, Color, Direction, DirectionSet};
pub use game::Game;
pub use movability::{MovabilityMap, compute_movability};
pub use square::Square;
pub use types::{GameResult, MoveOutcome, Phase, Rejection, Score, Status, TurnEvent};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
