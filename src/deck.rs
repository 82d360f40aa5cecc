use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::GameError;

/// Draw pile. The front of the vector is the top of the pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled 108-card deck.
    pub fn standard() -> Self {
        Self::from_cards(full_deck())
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the first `n` cards. Leaves the deck untouched when it holds fewer.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Places cards underneath the current pile.
    pub fn refill(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }
}

/// Played cards. Always holds a top card once the game has started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscardPile {
    top: Card,
    below: Vec<Card>,
}

impl DiscardPile {
    pub fn new(top: Card) -> Self {
        Self {
            top,
            below: Vec::new(),
        }
    }

    #[inline]
    pub fn top(&self) -> Card {
        self.top
    }

    pub fn push(&mut self, card: Card) {
        self.below.push(std::mem::replace(&mut self.top, card));
    }

    pub fn len(&self) -> usize {
        self.below.len() + 1
    }

    /// Removes every card except the top one, oldest first.
    pub fn take_below(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.below)
    }
}
