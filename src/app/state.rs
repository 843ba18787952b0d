//! Application shell: the command line being typed, the message log, and
//! dispatch into the game core.

use std::collections::VecDeque;

use crate::app::command::{self, Command};
use crate::game::{GameState, PlayOutcome};

/// Longest scrollback kept in the message log.
const MESSAGE_LOG_MAX: usize = 200;

const RULES: &[&str] = &[
    "spell words from your rack; tiles you play are spent, tiles you swap",
    "go back into the bag. racks refill from the bag after every move.",
    "  show                      racks and bag count",
    "  play <player> <word>      play a word from that player's rack",
    "  swap <player> <letters>   trade those tiles back into the bag",
    "  quit                      leave the table",
];

/// Interactive state around one [`GameState`]: the pending input line, a
/// bounded message log, and the quit flag the event loop watches.
pub struct App {
    pub game: GameState,
    /// Command line currently being typed.
    pub input: String,
    /// Recent messages, oldest first, capped at `MESSAGE_LOG_MAX`.
    messages: VecDeque<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            input: String::new(),
            messages: VecDeque::new(),
            should_quit: false,
        }
    }

    /// Signal the event loop to stop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Parse and run the pending command line. Empty lines are dropped
    /// quietly; everything else leaves at least one message in the log.
    pub fn on_submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        match command::parse(&line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => {}
            Err(err) => self.push_message(err.message()),
        }
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        while self.messages.len() > MESSAGE_LOG_MAX {
            self.messages.pop_front();
        }
    }

    /// The log, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Show => self.show(),
            Command::Play { player, word } => match self.game.play(player, &word) {
                Ok(PlayOutcome {
                    word,
                    score,
                    definition,
                }) => {
                    self.push_message(format!(
                        "player {} played {} for {} points",
                        player, word, score
                    ));
                    if let Some(definition) = definition {
                        self.push_message(format!("{}: {}", word, definition));
                    }
                }
                Err(err) => self.push_message(err.message()),
            },
            Command::Swap { player, letters } => match self.game.swap(player, &letters) {
                Ok(outcome) => self.push_message(format!(
                    "player {} swapped {} tile{}",
                    player,
                    outcome.swapped,
                    if outcome.swapped == 1 { "" } else { "s" }
                )),
                Err(err) => self.push_message(err.message()),
            },
            Command::Rules => {
                for line in RULES {
                    self.push_message(*line);
                }
            }
            Command::Quit => self.quit(),
        }
    }

    fn show(&mut self) {
        let snapshot = self.game.show();
        for (i, rack) in snapshot.racks.iter().enumerate() {
            self.push_message(format!("player {}: {}", i + 1, spaced(rack)));
        }
        self.push_message(format!(
            "{} tiles left in the bag",
            snapshot.bag_remaining
        ));
    }
}

/// `"CAT"` as `"C A T"`, for rack display.
pub fn spaced(letters: &str) -> String {
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, c) in letters.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
