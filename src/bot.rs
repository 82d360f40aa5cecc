use crate::card::Color;
use crate::error::GameError;
use crate::state::GameStateView;

/// Interface for the decisions a seat makes during its turn.
pub trait Bot {
    /// Picks one hand index out of `playable` (never empty).
    fn choose_card(&mut self, state: &GameStateView, playable: &[usize])
    -> Result<usize, GameError>;

    /// Names the active color after playing a wild.
    fn choose_color(&mut self, state: &GameStateView) -> Result<Color, GameError>;

    /// Called when the hand is down to one card.
    fn declare_uno(&mut self, state: &GameStateView) -> Result<bool, GameError>;
}
