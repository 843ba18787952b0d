#![allow(dead_code)]
//! One table of the game: the bag, the racks, and the play/swap/show
//! operations that tie them to the dictionary and the scorer.

use std::fmt;

use super::bag::TileBag;
use super::dictionary::Dictionary;
use super::rack::Rack;
use super::scoring;

/// Tiles a rack is filled up to unless the table says otherwise.
pub const DEFAULT_RACK_CAPACITY: usize = 7;

/// Recoverable failures of a single play or swap. The failing operation
/// never mutates any state; the command loop reports and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Player number outside `1..=players`.
    InvalidPlayer { player: usize, players: usize },
    /// The rack cannot spell the requested word.
    InsufficientTiles { word: String },
    /// The word is missing from the loaded dictionary.
    WordNotFound { word: String },
    /// A swap asked for tiles the rack does not hold.
    MissingTile { missing: Vec<char> },
}

impl GameError {
    /// A user-facing description of the failure.
    pub fn message(&self) -> String {
        match self {
            GameError::InvalidPlayer { player, players } => {
                format!("no player {} at this table (players 1-{})", player, players)
            }
            GameError::InsufficientTiles { word } => {
                format!("'{}' cannot be spelled from that rack", word)
            }
            GameError::WordNotFound { word } => {
                format!("'{}' is not in the dictionary", word)
            }
            GameError::MissingTile { missing } => {
                let letters: String = missing.iter().collect();
                format!("that rack is missing: {}", letters)
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for GameError {}

/// Result of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub word: String,
    pub score: u32,
    /// Definition from the dictionary, when it has one for the word.
    pub definition: Option<String>,
}

/// Result of a successful swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    pub swapped: usize,
}

/// Read-only view of the table: each rack's letters in player order, plus
/// the number of undrawn tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub racks: Vec<String>,
    pub bag_remaining: usize,
}

/// The game table: a shared bag, one rack per player, and the dictionary
/// plays are checked against.
///
/// Turns are not enforced; any player number may play or swap at any time.
/// Played tiles leave the game for good while swapped tiles go back into
/// the bag; the asymmetry is a rule of the game (played tiles count as
/// placed, not recycled), not an oversight.
pub struct GameState {
    bag: TileBag,
    racks: Vec<Rack>,
    dictionary: Dictionary,
    capacity: usize,
}

impl GameState {
    /// A fresh table: standard shuffled bag, racks filled to the default
    /// capacity.
    pub fn new(players: usize, dictionary: Dictionary) -> Self {
        let mut bag = TileBag::standard();
        bag.shuffle();
        Self::with_bag(bag, players, DEFAULT_RACK_CAPACITY, dictionary)
    }

    /// A table dealt from a prepared bag. The bag is drawn as-is, so seeded
    /// or hand-ordered bags give reproducible games.
    pub fn with_bag(
        mut bag: TileBag,
        players: usize,
        capacity: usize,
        dictionary: Dictionary,
    ) -> Self {
        let mut racks = vec![Rack::new(); players];
        for rack in &mut racks {
            rack.refill(&mut bag, capacity);
        }
        Self {
            bag,
            racks,
            dictionary,
            capacity,
        }
    }

    /// Play `word` from a player's rack. The spent tiles do not return to
    /// the bag; the rack refills from whatever the bag still holds.
    pub fn play(&mut self, player: usize, word: &str) -> Result<PlayOutcome, GameError> {
        let index = self.rack_index(player)?;
        let word = word.to_uppercase();

        if !self.racks[index].can_form(&word) {
            return Err(GameError::InsufficientTiles { word });
        }
        if !self.dictionary.is_empty() && !self.dictionary.contains(&word) {
            return Err(GameError::WordNotFound { word });
        }

        let score = scoring::score_word(&word);
        if !self.racks[index].consume(&word) {
            return Err(GameError::InsufficientTiles { word });
        }
        self.racks[index].refill(&mut self.bag, self.capacity);

        let definition = self.dictionary.definition(&word).map(str::to_string);
        Ok(PlayOutcome {
            word,
            score,
            definition,
        })
    }

    /// Trade specific rack tiles for fresh draws: the tiles go back into
    /// the bag, the bag reshuffles, and the rack refills. All-or-nothing;
    /// a missing tile leaves rack and bag exactly as they were.
    pub fn swap(&mut self, player: usize, letters: &str) -> Result<SwapOutcome, GameError> {
        let index = self.rack_index(player)?;
        let letters = letters.to_uppercase();

        if !self.racks[index].remove_exact(&letters) {
            let missing = self.racks[index].missing_for(&letters).unwrap_or_default();
            return Err(GameError::MissingTile { missing });
        }

        let returned: Vec<char> = letters.chars().collect();
        self.bag.return_tiles(&returned);
        self.bag.shuffle();
        self.racks[index].refill(&mut self.bag, self.capacity);

        Ok(SwapOutcome {
            swapped: returned.len(),
        })
    }

    /// Read-only view of every rack and the remaining bag size. Never
    /// mutates; two calls with no mutation between them are identical.
    pub fn show(&self) -> Snapshot {
        Snapshot {
            racks: self.racks.iter().map(|rack| rack.as_string()).collect(),
            bag_remaining: self.bag.len(),
        }
    }

    pub fn players(&self) -> usize {
        self.racks.len()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Translate a 1-based player number into a rack index, rejecting
    /// out-of-range numbers instead of indexing blindly.
    fn rack_index(&self, player: usize) -> Result<usize, GameError> {
        if player == 0 || player > self.racks.len() {
            return Err(GameError::InvalidPlayer {
                player,
                players: self.racks.len(),
            });
        }
        Ok(player - 1)
    }
}
