use thiserror::Error;

use crate::state::PlayerId;

/// Errors that can occur while setting up or running a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("invalid setup: {0}")]
    InvalidSetup(&'static str),
    #[error("card at hand index {index} cannot be played")]
    IllegalCardChoice { index: usize },
    #[error("cannot draw {requested} cards, only {remaining} remain")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("game is already over")]
    GameOver,
    #[error("input closed before a choice was made")]
    InputClosed,
    #[error("game aborted by player")]
    Aborted,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
