use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::bot::Bot;
use crate::card::{Card, Color, Rank, full_deck};
use crate::deck::{Deck, DiscardPile};
use crate::error::GameError;
use crate::event::GameEvent;
use crate::rules::{active_state_for, is_special, playable_indices};
use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, PlayerId, PlayerPublicState, TurnPhase,
};

const DEFAULT_SEED: u64 = 0x0A0B_5EED_0A0B_5EED;
const UNO_PENALTY: usize = 2;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub num_ai: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(num_players: usize, num_ai: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(num_players, num_ai)?;
        Ok(Self {
            num_players,
            num_ai,
            seed,
        })
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, 0, DEFAULT_SEED)?,
            deck: None,
        })
    }

    /// The last `num_ai` seats are controlled by the computer.
    pub fn with_ai_players(mut self, num_ai: usize) -> Self {
        self.config.num_ai = num_ai;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` as-is instead of a shuffled standard deck. The first card
    /// starts the discard pile, then hands are dealt in seat order.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

#[derive(Clone, Copy, Debug)]
struct TurnState {
    player: PlayerId,
    chosen: Option<usize>,
}

/// Core UNO game engine.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    phase: TurnPhase,
    current_player: PlayerId,
    direction: Direction,
    deck: Deck,
    discard: DiscardPile,
    hands: Vec<Vec<Card>>,
    uno_declared: Vec<bool>,
    active_color: Option<Color>,
    active_value: Option<Rank>,
    turn: TurnState,
    events: Vec<GameEvent>,
    rng: StdRng,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn_phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Seat whose turn is in progress. Differs from `current_player` after a
    /// Skip has moved the turn pointer mid-turn.
    pub fn active_player(&self) -> PlayerId {
        match self.phase {
            TurnPhase::AwaitingPenaltyCheck => self.current_player,
            _ => self.turn.player,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn top_card(&self) -> Card {
        self.discard.top()
    }

    pub fn active_color(&self) -> Option<Color> {
        self.active_color
    }

    pub fn active_value(&self) -> Option<Rank> {
        self.active_value
    }

    pub fn draw_pile_count(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    pub fn hand(&self, player: PlayerId) -> Result<&[Card], GameError> {
        self.hands
            .get(player)
            .map(Vec::as_slice)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn uno_declared(&self, player: PlayerId) -> Result<bool, GameError> {
        self.uno_declared
            .get(player)
            .copied()
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn is_ai(&self, player: PlayerId) -> bool {
        self.settings.is_ai(player)
    }

    /// Cards across the draw pile, the discard pile and every hand.
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard.len() + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        let hand = self.hand(perspective)?.to_vec();
        let players = self
            .hands
            .iter()
            .enumerate()
            .map(|(idx, cards)| PlayerPublicState {
                id: idx,
                hand_size: cards.len(),
                is_ai: self.settings.is_ai(idx),
                is_current: idx == self.current_player,
                uno_declared: self.uno_declared[idx],
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            phase: self.phase,
            status: self.status,
            self_player: perspective,
            current_player: self.current_player,
            direction: self.direction,
            top_card: self.discard.top(),
            active_color: self.active_color,
            active_value: self.active_value,
            draw_pile_count: self.deck.len(),
            discard_count: self.discard.len(),
            players,
            hand,
        })
    }

    /// Hand indices the given player could legally play right now.
    pub fn playable_cards(&self, player: PlayerId) -> Result<Vec<usize>, GameError> {
        let hand = self.hand(player)?;
        Ok(playable_indices(hand, self.active_color, self.active_value))
    }

    /// Runs the current phase of the turn state machine and returns the phase
    /// the machine moved to. `bot` must control the `active_player` seat.
    pub fn step(&mut self, bot: &mut dyn Bot) -> Result<TurnPhase, GameError> {
        let next = match self.phase {
            TurnPhase::GameOver => return Err(GameError::GameOver),
            TurnPhase::AwaitingPenaltyCheck => {
                self.begin_turn()?;
                TurnPhase::AwaitingChoice
            }
            TurnPhase::AwaitingChoice => {
                if self.acquire_choice(bot)? {
                    TurnPhase::ApplyingEffect
                } else {
                    TurnPhase::AwaitingUnoDeclaration
                }
            }
            TurnPhase::ApplyingEffect => {
                self.apply_effect(bot)?;
                TurnPhase::AwaitingUnoDeclaration
            }
            TurnPhase::AwaitingUnoDeclaration => {
                self.uno_window(bot)?;
                TurnPhase::CheckingWinCondition
            }
            TurnPhase::CheckingWinCondition => {
                if self.check_win()? {
                    TurnPhase::GameOver
                } else {
                    TurnPhase::AdvancingTurn
                }
            }
            TurnPhase::AdvancingTurn => {
                self.current_player = self
                    .direction
                    .step(self.current_player, self.settings.num_players);
                TurnPhase::AwaitingPenaltyCheck
            }
        };
        self.phase = next;
        Ok(next)
    }

    /// Steps through one full turn. Returns `AwaitingPenaltyCheck` when the next
    /// turn is ready, or `GameOver` when this turn produced a winner.
    pub fn play_turn(&mut self, bot: &mut dyn Bot) -> Result<TurnPhase, GameError> {
        loop {
            let phase = self.step(bot)?;
            if matches!(phase, TurnPhase::AwaitingPenaltyCheck | TurnPhase::GameOver) {
                return Ok(phase);
            }
        }
    }

    /// Plays turns until someone wins. `bots` holds one controller per seat.
    pub fn run(&mut self, bots: &mut [Box<dyn Bot>]) -> Result<PlayerId, GameError> {
        if bots.len() != self.settings.num_players {
            return Err(GameError::InvalidSetup("one controller per seat is required"));
        }
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            let active = self.active_player();
            self.play_turn(bots[active].as_mut())?;
        }
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.num_players, config.num_ai)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut deck = match deck {
            Some(cards) => Deck::from_cards(cards),
            None => {
                let mut deck = Deck::from_cards(full_deck());
                deck.shuffle(&mut rng);
                deck
            }
        };

        let required = 1 + settings.num_players * settings.hand_size;
        if deck.len() < required {
            return Err(GameError::InvalidSetup(
                "deck does not contain enough cards to deal",
            ));
        }

        let mut starter = deck.draw(1)?;
        let top = starter.pop().ok_or(GameError::InvalidSetup("deck is empty"))?;
        let hands = (0..settings.num_players)
            .map(|_| deck.draw(settings.hand_size))
            .collect::<Result<Vec<_>, _>>()?;
        let (active_color, active_value) = active_state_for(&top);

        info!(
            players = settings.num_players,
            ai = settings.num_ai,
            seed = config.seed,
            top_card = %top,
            "game set up"
        );

        Ok(Game {
            settings,
            status: GameStatus::Ongoing,
            phase: TurnPhase::AwaitingPenaltyCheck,
            current_player: 0,
            direction: Direction::Clockwise,
            deck,
            discard: DiscardPile::new(top),
            uno_declared: vec![false; settings.num_players],
            hands,
            active_color,
            active_value,
            turn: TurnState {
                player: 0,
                chosen: None,
            },
            events: Vec::new(),
            rng,
        })
    }

    fn begin_turn(&mut self) -> Result<(), GameError> {
        let player = self.current_player;
        self.turn = TurnState {
            player,
            chosen: None,
        };
        self.events.push(GameEvent::TurnStarted {
            player,
            top_card: self.discard.top(),
        });
        debug!(player, top_card = %self.discard.top(), "turn started");

        if self.hands[player].len() == 1 && !self.uno_declared[player] {
            self.draw_into(player, UNO_PENALTY)?;
            self.events.push(GameEvent::UnoPenaltyApplied {
                player,
                cards: UNO_PENALTY,
            });
            info!(player, "UNO penalty applied");
        }
        self.uno_declared[player] = false;
        Ok(())
    }

    /// Returns true when a card was chosen, false when the player had to draw.
    fn acquire_choice(&mut self, bot: &mut dyn Bot) -> Result<bool, GameError> {
        let player = self.turn.player;
        let legal = self.playable_cards(player)?;
        if legal.is_empty() {
            self.draw_into(player, 1)?;
            self.events.push(GameEvent::NoPlayableCard { player });
            debug!(player, "no playable card, drew one");
            return Ok(false);
        }
        let view = self.state_view(player)?;
        let index = bot.choose_card(&view, &legal)?;
        if !legal.contains(&index) {
            return Err(GameError::IllegalCardChoice { index });
        }
        self.turn.chosen = Some(index);
        Ok(true)
    }

    fn apply_effect(&mut self, bot: &mut dyn Bot) -> Result<(), GameError> {
        let player = self.turn.player;
        let Some(index) = self.turn.chosen else {
            return Ok(());
        };
        let card = *self.hands[player]
            .get(index)
            .ok_or(GameError::IllegalCardChoice { index })?;
        let players = self.settings.num_players;
        let next = self.direction.step(self.current_player, players);

        // Checks and prompts that can fail run before the card leaves the hand.
        let forced = card.rank().draw_penalty();
        let drawable = self.deck.len() + self.discard.len();
        if forced > drawable {
            return Err(GameError::DeckExhausted {
                requested: forced,
                remaining: drawable,
            });
        }
        let color = if card.is_wild() {
            let mut view = self.state_view(player)?;
            view.hand.remove(index);
            view.players[player].hand_size -= 1;
            Some(bot.choose_color(&view)?)
        } else {
            None
        };

        self.turn.chosen = None;
        self.hands[player].remove(index);
        self.discard.push(card);
        (self.active_color, self.active_value) = active_state_for(&card);
        self.events.push(GameEvent::CardPlayed { player, card });
        debug!(player, card = %card, "card played");

        if let Some(color) = color {
            self.active_color = Some(color);
            self.events.push(GameEvent::ColorChosen { player, color });
            debug!(player, color = %color, "color chosen");
        }

        match card.rank() {
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                self.events.push(GameEvent::DirectionReversed);
                debug!(direction = ?self.direction, "direction reversed");
            }
            Rank::Skip => {
                self.current_player = next;
                self.events.push(GameEvent::PlayerSkipped { player: next });
                debug!(player = next, "player skipped");
            }
            Rank::DrawTwo | Rank::WildDrawFour => {
                self.draw_into(next, forced)?;
                self.events.push(GameEvent::CardsForced {
                    player: next,
                    cards: forced,
                });
                debug!(player = next, cards = forced, "forced draw");
            }
            Rank::Number(_) | Rank::Wild => {}
        }
        Ok(())
    }

    fn uno_window(&mut self, bot: &mut dyn Bot) -> Result<(), GameError> {
        let player = self.turn.player;
        if self.hands[player].len() != 1 {
            return Ok(());
        }
        let view = self.state_view(player)?;
        let declared = bot.declare_uno(&view)?;
        self.uno_declared[player] = declared;
        if declared {
            self.events.push(GameEvent::UnoDeclared { player });
        } else {
            self.events.push(GameEvent::UnoForgotten { player });
        }
        debug!(player, declared, "UNO window closed");
        Ok(())
    }

    /// Returns true when the active player has won.
    fn check_win(&mut self) -> Result<bool, GameError> {
        let player = self.turn.player;
        if !self.hands[player].is_empty() {
            return Ok(false);
        }
        if is_special(&self.discard.top()) {
            self.draw_into(player, 1)?;
            self.events.push(GameEvent::SpecialFinishBlocked { player });
            debug!(player, top_card = %self.discard.top(), "cannot finish on a special card");
            return Ok(false);
        }
        self.status = GameStatus::Finished { winner: player };
        self.events.push(GameEvent::PlayerWon { player });
        info!(player, "player won");
        Ok(true)
    }

    fn draw_into(&mut self, player: PlayerId, count: usize) -> Result<(), GameError> {
        if self.deck.len() < count {
            self.recycle_discard();
        }
        let cards = self.deck.draw(count)?;
        self.hands[player].extend(cards);
        Ok(())
    }

    /// Shuffles every discard but the top card back under the draw pile.
    fn recycle_discard(&mut self) {
        let mut recycled = self.discard.take_below();
        if recycled.is_empty() {
            return;
        }
        recycled.shuffle(&mut self.rng);
        let cards = recycled.len();
        self.deck.refill(recycled);
        self.events.push(GameEvent::DeckRecycled { cards });
        warn!(cards, "draw pile exhausted, discard pile recycled");
    }
}
