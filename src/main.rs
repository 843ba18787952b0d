//! rackle - a turn-based word-tile game at the terminal
//!
//! Draw tiles, spell words, score by letter.

mod app;
mod game;
mod tui;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;

use app::App;
use game::{Dictionary, GameState, TileBag, DEFAULT_RACK_CAPACITY};

/// A turn-based word-tile game at the terminal.
#[derive(Parser, Debug)]
#[command(name = "rackle", version)]
struct Args {
    /// Dictionary file, one WORD<TAB>DEFINITION entry per line
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Players at the table
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=8))]
    players: u8,

    /// Tiles each rack is filled up to
    #[arg(long, default_value_t = DEFAULT_RACK_CAPACITY)]
    capacity: usize,

    /// Seed for the bag shuffle, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let (dictionary, notice) = load_dictionary(args.dict.as_deref());

    let mut bag = TileBag::standard();
    match args.seed {
        Some(seed) => bag.shuffle_with(&mut StdRng::seed_from_u64(seed)),
        None => bag.shuffle(),
    }

    let capacity = args.capacity.max(1);
    let game = GameState::with_bag(bag, args.players as usize, capacity, dictionary);

    let mut app = App::new(game);
    app.push_message(notice);
    app.push_message("type 'rules' for how to play");

    let mut terminal = tui::Tui::new()?;
    terminal.enter()?;

    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => app.quit(),
                        KeyCode::Enter => app.on_submit(),
                        KeyCode::Backspace => app.on_backspace(),
                        KeyCode::Char(c) => {
                            // Command lines hold verbs, player numbers, letters.
                            if c.is_ascii_alphanumeric() || c == ' ' {
                                app.on_char(c);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Resolve and load the dictionary. A missing or unreadable source is not
/// fatal: the game runs with word validation switched off.
fn load_dictionary(explicit: Option<&Path>) -> (Dictionary, String) {
    if let Some(path) = explicit {
        return match Dictionary::load(path) {
            Ok(dictionary) => {
                let notice = format!("loaded {} words from {}", dictionary.len(), path.display());
                (dictionary, notice)
            }
            Err(err) => (
                Dictionary::empty(),
                format!(
                    "could not read {} ({}); word validation is off",
                    path.display(),
                    err
                ),
            ),
        };
    }

    let mut candidates = vec![PathBuf::from("words.tsv"), PathBuf::from("data/words.tsv")];
    if let Some(dirs) = ProjectDirs::from("", "", "rackle") {
        candidates.push(dirs.data_dir().join("words.tsv"));
    }

    for candidate in &candidates {
        if let Ok(dictionary) = Dictionary::load(candidate) {
            let notice = format!(
                "loaded {} words from {}",
                dictionary.len(),
                candidate.display()
            );
            return (dictionary, notice);
        }
    }

    (
        Dictionary::empty(),
        "no dictionary found; word validation is off".to_string(),
    )
}
