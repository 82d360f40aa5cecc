use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, Rank};
use crate::error::GameError;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub num_ai: usize,
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(num_players: usize, num_ai: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidSetup("players must be between 2 and 4"));
        }
        if num_ai > num_players {
            return Err(GameError::InvalidSetup(
                "AI players cannot outnumber total players",
            ));
        }
        Ok(Self {
            num_players,
            num_ai,
            hand_size: HAND_SIZE,
        })
    }

    /// AI seats are always the last `num_ai` seats.
    #[inline]
    pub fn is_ai(&self, player: PlayerId) -> bool {
        player < self.num_players && player >= self.num_players - self.num_ai
    }

    pub fn ai_seats(&self) -> std::ops::Range<PlayerId> {
        (self.num_players - self.num_ai)..self.num_players
    }
}

/// Order in which seats take turns.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat reached by taking one step from `from` around a table of `players`.
    pub fn step(self, from: PlayerId, players: usize) -> PlayerId {
        match self {
            Direction::Clockwise => (from + 1) % players,
            Direction::CounterClockwise => (from + players - 1) % players,
        }
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Phase of the turn state machine. Each call to `Game::step` runs one phase.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingPenaltyCheck,
    AwaitingChoice,
    ApplyingEffect,
    AwaitingUnoDeclaration,
    CheckingWinCondition,
    AdvancingTurn,
    GameOver,
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub hand_size: usize,
    pub is_ai: bool,
    pub is_current: bool,
    pub uno_declared: bool,
}

/// Game state snapshot handed to player controllers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top_card: Card,
    pub active_color: Option<Color>,
    pub active_value: Option<Rank>,
    pub draw_pile_count: usize,
    pub discard_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_validate_counts() {
        assert!(GameSettings::new(1, 0).is_err());
        assert!(GameSettings::new(5, 0).is_err());
        assert!(GameSettings::new(3, 4).is_err());
        let settings = GameSettings::new(4, 2).expect("valid settings");
        assert_eq!(settings.ai_seats(), 2..4);
        assert!(!settings.is_ai(1));
        assert!(settings.is_ai(2));
        assert!(settings.is_ai(3));
    }

    #[test]
    fn direction_steps_wrap() {
        assert_eq!(Direction::Clockwise.step(2, 3), 0);
        assert_eq!(Direction::CounterClockwise.step(0, 3), 2);
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
    }
}
