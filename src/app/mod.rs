//! Command parsing and the interactive shell around the game core.

pub mod command;
pub mod state;

pub use command::{Command, ParseError};
pub use state::App;
