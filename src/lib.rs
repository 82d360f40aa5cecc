//! UNO engine for the text console: deck handling, card legality, and a turn
//! state machine that drives human and AI seats through a `Bot` interface.

pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod logging;
pub mod prompt;
pub mod rules;
pub mod state;
pub mod visualize;

pub use crate::bot::Bot;
pub use crate::bots::{HumanBot, RandomBot, UNO_DECLARE_PROBABILITY};
pub use crate::card::{Card, Color, Rank, full_deck};
pub use crate::deck::{Deck, DiscardPile};
pub use crate::error::GameError;
pub use crate::event::GameEvent;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::logging::init_logging;
pub use crate::prompt::{LineSource, Prompter, SetupCounts};
pub use crate::rules::{has_any_playable, is_playable, is_special};
pub use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, PlayerId, PlayerPublicState, TurnPhase,
};
pub use crate::visualize::{describe_event, render_hand, render_top_card};
