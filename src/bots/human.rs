use std::io::{self, Write};

use crate::bot::Bot;
use crate::card::Color;
use crate::error::GameError;
use crate::prompt::{LineSource, Prompter};
use crate::state::GameStateView;
use crate::visualize::{render_hand, render_turn_header};

/// Interactive seat that queries a human on the console.
pub struct HumanBot<I = io::Stdin, O = io::Stdout> {
    name: String,
    prompter: Prompter<I, O>,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_io(name, io::stdin(), io::stdout())
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl<I: LineSource, O: Write> HumanBot<I, O> {
    pub fn with_io(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            prompter: Prompter::new(input, output),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output(&self) -> &O {
        self.prompter.output()
    }
}

impl<I: LineSource, O: Write> Bot for HumanBot<I, O> {
    fn choose_card(
        &mut self,
        state: &GameStateView,
        playable: &[usize],
    ) -> Result<usize, GameError> {
        self.prompter.say(render_turn_header(&self.name))?;
        self.prompter.say(render_hand(&state.hand))?;
        let mut prompt = "Select a card to play";
        loop {
            let answer = self.prompter.ask(prompt)?;
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                return Err(GameError::Aborted);
            }
            let choice = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1));
            match choice {
                Some(index) if playable.contains(&index) => return Ok(index),
                Some(index) if index < state.hand.len() => {
                    prompt = "You can't play that card. Choose another";
                }
                _ => prompt = "Enter the number shown next to a card",
            }
        }
    }

    fn choose_color(&mut self, _state: &GameStateView) -> Result<Color, GameError> {
        for (number, color) in Color::ALL.iter().enumerate() {
            self.prompter.say(format!("{}) {color}", number + 1))?;
        }
        let number = self.prompter.ask_number(
            "Choose a color",
            "Pick 1-4 from the list above",
            1..=Color::ALL.len(),
        )?;
        Ok(Color::ALL[number - 1])
    }

    fn declare_uno(&mut self, _state: &GameStateView) -> Result<bool, GameError> {
        let answer = self
            .prompter
            .ask("You have 1 card left! Type 'UNO' to declare")?;
        Ok(answer.eq_ignore_ascii_case("uno"))
    }
}
