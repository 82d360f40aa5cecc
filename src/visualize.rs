use std::fmt::Write;

use crate::card::Card;
use crate::event::GameEvent;
use crate::state::{GameSettings, PlayerId};

const RULE: &str = "------------------------------";

/// Seat label shown to players; seats are numbered from 1 on screen.
pub fn player_label(settings: &GameSettings, player: PlayerId) -> String {
    if settings.is_ai(player) {
        format!("AI Player {}", player + 1)
    } else {
        format!("Player {}", player + 1)
    }
}

pub fn render_turn_header(name: &str) -> String {
    format!("\n{name}'s Turn\n{RULE}")
}

/// Numbered hand listing, 1-based to match the selection prompt.
pub fn render_hand(hand: &[Card]) -> String {
    let mut out = String::new();
    for (idx, card) in hand.iter().enumerate() {
        let _ = writeln!(out, "{}) {card}", idx + 1);
    }
    out.push_str(RULE);
    out
}

pub fn render_top_card(card: Card) -> String {
    format!("\nTop card: {card}\n{RULE}")
}

/// One console line for an engine event, or `None` for events with no text.
pub fn describe_event(settings: &GameSettings, event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::TurnStarted { top_card, .. } => render_top_card(*top_card),
        GameEvent::UnoPenaltyApplied { player, cards } => format!(
            "{} failed to declare UNO! Drawing {cards} penalty cards.",
            player_label(settings, *player)
        ),
        GameEvent::NoPlayableCard { player } => format!(
            "{} cannot play. Drawing one card.",
            player_label(settings, *player)
        ),
        GameEvent::CardPlayed { player, card } => {
            format!("{} played: {card}", player_label(settings, *player))
        }
        GameEvent::ColorChosen { player, color } => {
            format!("{} chooses {color}", player_label(settings, *player))
        }
        GameEvent::DirectionReversed => String::from("Play direction reversed!"),
        GameEvent::PlayerSkipped { player } => format!(
            "Next player skipped! ({} loses their turn)",
            player_label(settings, *player)
        ),
        GameEvent::CardsForced { player, cards } => {
            format!("{} draws {cards} cards!", player_label(settings, *player))
        }
        GameEvent::UnoDeclared { player } => {
            format!("{} declares UNO!", player_label(settings, *player))
        }
        GameEvent::UnoForgotten { player } => {
            if settings.is_ai(*player) {
                format!("{} forgets to declare UNO!", player_label(settings, *player))
            } else {
                return None;
            }
        }
        GameEvent::SpecialFinishBlocked { player } => format!(
            "{} cannot finish on a special card! Drawing one card instead.",
            player_label(settings, *player)
        ),
        GameEvent::DeckRecycled { cards } => {
            format!("Draw pile empty. Shuffled {cards} discarded cards back in.")
        }
        GameEvent::PlayerWon { player } => {
            format!("\n{} wins!", player_label(settings, *player))
        }
    };
    Some(text)
}
