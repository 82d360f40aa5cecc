//! Line-oriented console prompting shared by the setup flow and human seats.

use std::fmt::Display;
use std::io::{self, BufRead, Cursor, Write};
use std::ops::RangeInclusive;

use crate::card::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;

/// Source of whole input lines.
///
/// `io::Stdin` is used directly rather than a held `StdinLock` so that several
/// human seats can read from the same terminal.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Player counts collected before the game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupCounts {
    pub num_players: usize,
    pub num_ai: usize,
}

pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl Prompter<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<I: LineSource, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn say(&mut self, text: impl Display) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `prompt` and returns the next input line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses to a number inside `range`.
    pub fn ask_number(
        &mut self,
        prompt: &str,
        retry: &str,
        range: RangeInclusive<usize>,
    ) -> Result<usize, GameError> {
        let mut current = prompt;
        loop {
            let answer = self.ask(current)?;
            match answer.parse::<usize>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => current = retry,
            }
        }
    }

    pub fn prompt_setup_counts(&mut self) -> Result<SetupCounts, GameError> {
        let num_players = self.ask_number(
            &format!("Enter total number of players ({MIN_PLAYERS}–{MAX_PLAYERS})"),
            &format!("Invalid number. Enter between {MIN_PLAYERS} and {MAX_PLAYERS}"),
            MIN_PLAYERS..=MAX_PLAYERS,
        )?;
        let num_ai = self.ask_number(
            &format!("How many AI players? (0–{num_players})"),
            &format!("Invalid. Enter between 0 and {num_players}"),
            0..=num_players,
        )?;
        Ok(SetupCounts {
            num_players,
            num_ai,
        })
    }
}
