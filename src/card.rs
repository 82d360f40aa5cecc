use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four UNO suit colors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Menu order used when a player names a color after a wild.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Face value of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    /// Colored action and number ranks, in deck-building order.
    pub const COLORED: [Rank; 13] = [
        Rank::Number(0),
        Rank::Number(1),
        Rank::Number(2),
        Rank::Number(3),
        Rank::Number(4),
        Rank::Number(5),
        Rank::Number(6),
        Rank::Number(7),
        Rank::Number(8),
        Rank::Number(9),
        Rank::Skip,
        Rank::Reverse,
        Rank::DrawTwo,
    ];

    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Number of cards the next player must draw when this rank is played.
    #[inline]
    pub fn draw_penalty(self) -> usize {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(value) => write!(f, "{value}"),
            Rank::Skip => f.write_str("Skip"),
            Rank::Reverse => f.write_str("Reverse"),
            Rank::DrawTwo => f.write_str("Draw Two"),
            Rank::Wild => f.write_str("Wild"),
            Rank::WildDrawFour => f.write_str("Wild Draw Four"),
        }
    }
}

/// Representation of an UNO card.
///
/// Wild-family cards never carry a color; every other rank always does. The
/// color a wild is played as belongs to the game state, not the card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    color: Option<Color>,
    rank: Rank,
}

pub const HAND_SIZE: usize = 5;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 108;
pub const WILD_COPIES: usize = 4;
pub const CARDS_PER_COLOR: usize = 25;

impl Card {
    pub const WILD: Card = Card {
        color: None,
        rank: Rank::Wild,
    };

    pub const WILD_DRAW_FOUR: Card = Card {
        color: None,
        rank: Rank::WildDrawFour,
    };

    /// Builds a colored card. Wild ranks are mapped onto their colorless card.
    pub fn colored(color: Color, rank: Rank) -> Self {
        if rank.is_wild() {
            return Card { color: None, rank };
        }
        debug_assert!(!matches!(rank, Rank::Number(v) if v > 9));
        Card {
            color: Some(color),
            rank,
        }
    }

    #[inline]
    pub fn number(color: Color, value: u8) -> Self {
        Self::colored(color, Rank::Number(value))
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns true for Wild and Wild Draw Four.
    #[inline]
    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{color} {}", self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// Builds the full 108-card UNO deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for rank in Rank::COLORED {
            let card = Card::colored(color, rank);
            deck.push(card);
            if rank != Rank::Number(0) {
                deck.push(card);
            }
        }
    }
    deck.extend(std::iter::repeat(Card::WILD).take(WILD_COPIES));
    deck.extend(std::iter::repeat(Card::WILD_DRAW_FOUR).take(WILD_COPIES));
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_console_text() {
        assert_eq!(Card::number(Color::Red, 7).to_string(), "Red 7");
        assert_eq!(
            Card::colored(Color::Blue, Rank::DrawTwo).to_string(),
            "Blue Draw Two"
        );
        assert_eq!(Card::WILD_DRAW_FOUR.to_string(), "Wild Draw Four");
    }

    #[test]
    fn wild_ranks_drop_color() {
        let card = Card::colored(Color::Green, Rank::Wild);
        assert_eq!(card, Card::WILD);
        assert_eq!(card.color(), None);
    }
}
