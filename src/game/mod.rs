//! Game core: tile bag, racks, scoring, dictionary, and table state.

pub mod bag;
pub mod dictionary;
pub mod rack;
pub mod scoring;
pub mod state;

pub use bag::TileBag;
pub use dictionary::Dictionary;
pub use rack::Rack;
pub use state::{GameError, GameState, PlayOutcome, Snapshot, SwapOutcome, DEFAULT_RACK_CAPACITY};
