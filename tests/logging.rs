use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use unobot::{Bot, Card, Color, GameBuilder, GameError, GameStateView};

#[derive(Debug, Clone)]
struct Entry {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct Capture {
    entries: Arc<Mutex<Vec<Entry>>>,
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(Entry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

/// Plays the first legal card; calls UNO only when told to.
struct FirstLegal {
    calls_uno: bool,
}

impl Bot for FirstLegal {
    fn choose_card(&mut self, _: &GameStateView, playable: &[usize]) -> Result<usize, GameError> {
        Ok(playable[0])
    }

    fn choose_color(&mut self, _: &GameStateView) -> Result<Color, GameError> {
        Ok(Color::Red)
    }

    fn declare_uno(&mut self, _: &GameStateView) -> Result<bool, GameError> {
        Ok(self.calls_uno)
    }
}

#[test]
fn engine_logs_setup_penalties_and_plays_with_fields() -> Result<(), GameError> {
    let capture = Capture::default();
    let subscriber = Registry::default().with(capture.clone());

    let red = |value| Card::number(Color::Red, value);
    let mut deck = vec![red(0)];
    deck.extend([red(1), red(2), red(3), red(4), red(5)]);
    deck.extend([red(6), red(7), red(8), red(9), red(6)]);
    deck.extend([Card::number(Color::Blue, 1), Card::number(Color::Blue, 2)]);

    tracing::subscriber::with_default(subscriber, || -> Result<(), GameError> {
        let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
        for _ in 0..9 {
            game.play_turn(&mut FirstLegal { calls_uno: false })?;
        }
        Ok(())
    })?;

    let entries = capture.entries.lock().unwrap().clone();
    let setup = entries
        .iter()
        .find(|entry| entry.message == "game set up")
        .expect("setup is logged");
    assert_eq!(setup.level, Level::INFO);
    assert!(setup.fields.iter().any(|(k, v)| k == "players" && v == "2"));

    let penalty = entries
        .iter()
        .find(|entry| entry.message == "UNO penalty applied")
        .expect("penalty is logged");
    assert_eq!(penalty.level, Level::INFO);
    assert!(penalty.fields.iter().any(|(k, v)| k == "player" && v == "0"));

    assert!(
        entries
            .iter()
            .any(|entry| entry.level == Level::DEBUG && entry.message == "card played")
    );
    Ok(())
}

#[test]
fn engine_logs_the_winner() -> Result<(), GameError> {
    let capture = Capture::default();
    let subscriber = Registry::default().with(capture.clone());

    let red = |value| Card::number(Color::Red, value);
    let blue = Card::number(Color::Blue, 9);
    let mut deck = vec![red(0), red(1), red(2), red(3), red(4), red(5)];
    deck.extend([blue; 5]);
    deck.extend([Card::number(Color::Blue, 8); 4]);

    let winner = tracing::subscriber::with_default(subscriber, || -> Result<_, GameError> {
        let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
        let mut bot = FirstLegal { calls_uno: true };
        while !game.is_finished() {
            game.play_turn(&mut bot)?;
        }
        Ok(game.winner())
    })?;
    assert_eq!(winner, Some(0));

    let entries = capture.entries.lock().unwrap().clone();
    let won = entries
        .iter()
        .find(|entry| entry.message == "player won")
        .expect("win is logged");
    assert_eq!(won.level, Level::INFO);
    assert!(won.fields.iter().any(|(k, v)| k == "player" && v == "0"));
    assert!(!entries.iter().any(|entry| entry.message == "UNO penalty applied"));
    Ok(())
}
