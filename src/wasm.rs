//! JavaScript bindings for the presentation layer.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::square::Square;

/// One game, owned by the JavaScript caller.
#[wasm_bindgen]
pub struct OthelloGame {
    game: Game,
}

#[wasm_bindgen]
impl OthelloGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Attempts a placement for the color to move, e.g. `attemptMove("c4")`.
    /// Returns the serialized `MoveOutcome`; throws only on a malformed tag.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, tag: &str) -> Result<JsValue, JsError> {
        let square: Square = tag.parse()?;
        let outcome = self.game.attempt_move(square);
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    /// Tags of the cells the color to move may play, for highlighting.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let squares: Vec<Square> = match self.game.to_move() {
            Some(color) => self.game.legal_moves(color).squares().collect(),
            None => Vec::new(),
        };
        Ok(serde_wasm_bindgen::to_value(&squares)?)
    }

    #[wasm_bindgen(js_name = scoreCounts)]
    pub fn score_counts(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.score_counts())?)
    }

    pub fn status(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.status())?)
    }

    /// 64 bytes, row-major from a1: 0=empty, 1=black, 2=white.
    pub fn board(&self) -> Vec<u8> {
        self.game.board().to_array().to_vec()
    }
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new()
    }
}
