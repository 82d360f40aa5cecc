//! Card legality against the current discard state.

use crate::card::{Card, Color, Rank};

/// Checks whether `card` may be played on the current discard state.
///
/// Wild-family cards are always legal. Otherwise the card must share the
/// active color or the active value. An active value of `None` (after a wild)
/// matches nothing, so only the color counts.
#[inline]
pub fn is_playable(active_color: Option<Color>, active_value: Option<Rank>, card: &Card) -> bool {
    card.is_wild()
        || (card.color().is_some() && card.color() == active_color)
        || (active_value.is_some() && Some(card.rank()) == active_value)
}

pub fn has_any_playable(
    hand: &[Card],
    active_color: Option<Color>,
    active_value: Option<Rank>,
) -> bool {
    hand.iter()
        .any(|card| is_playable(active_color, active_value, card))
}

/// Hand indices of every legal card, in hand order.
pub fn playable_indices(
    hand: &[Card],
    active_color: Option<Color>,
    active_value: Option<Rank>,
) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| is_playable(active_color, active_value, card))
        .map(|(index, _)| index)
        .collect()
}

/// Action and wild cards. A player cannot go out on one of these.
#[inline]
pub fn is_special(card: &Card) -> bool {
    !matches!(card.rank(), Rank::Number(_))
}

/// Active color and value implied by a card landing on the discard pile.
pub fn active_state_for(card: &Card) -> (Option<Color>, Option<Rank>) {
    if card.is_wild() {
        (None, None)
    } else {
        (card.color(), Some(card.rank()))
    }
}
