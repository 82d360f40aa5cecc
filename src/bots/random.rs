use rand::Rng;
use rand::seq::SliceRandom;

use crate::bot::Bot;
use crate::card::Color;
use crate::error::GameError;
use crate::state::GameStateView;

/// Chance that the AI remembers to call UNO.
pub const UNO_DECLARE_PROBABILITY: f64 = 0.8;

/// Baseline AI that samples uniformly from the legal choices.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn choose_card(
        &mut self,
        _state: &GameStateView,
        playable: &[usize],
    ) -> Result<usize, GameError> {
        playable
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::IllegalCardChoice { index: 0 })
    }

    fn choose_color(&mut self, _state: &GameStateView) -> Result<Color, GameError> {
        Ok(Color::ALL[self.rng.gen_range(0..Color::ALL.len())])
    }

    fn declare_uno(&mut self, _state: &GameStateView) -> Result<bool, GameError> {
        Ok(self.rng.gen_bool(UNO_DECLARE_PROBABILITY))
    }
}
