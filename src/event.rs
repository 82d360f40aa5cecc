use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};
use crate::state::PlayerId;

/// Observable outcome of a turn phase, recorded in order by the engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted { player: PlayerId, top_card: Card },
    /// Player held one card without having declared UNO.
    UnoPenaltyApplied { player: PlayerId, cards: usize },
    NoPlayableCard { player: PlayerId },
    CardPlayed { player: PlayerId, card: Card },
    ColorChosen { player: PlayerId, color: Color },
    DirectionReversed,
    PlayerSkipped { player: PlayerId },
    CardsForced { player: PlayerId, cards: usize },
    UnoDeclared { player: PlayerId },
    UnoForgotten { player: PlayerId },
    /// Hand emptied on an action or wild card; one card is drawn instead.
    SpecialFinishBlocked { player: PlayerId },
    DeckRecycled { cards: usize },
    PlayerWon { player: PlayerId },
}
