//! The line-oriented command grammar.

/// A parsed command line. Player numbers stay 1-based here; the game core
/// does the translation and the range check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Play { player: usize, word: String },
    Swap { player: usize, letters: String },
    Rules,
    Quit,
}

/// Why a command line was rejected. An empty line is not an error; `parse`
/// reports it as `Ok(None)` so the caller can skip it quietly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    BadPlayerNumber(String),
    NotLetters(String),
    Usage(&'static str),
}

impl ParseError {
    /// A user-facing description of the rejection.
    pub fn message(&self) -> String {
        match self {
            ParseError::UnknownCommand(verb) => {
                format!("unknown command '{}' (try 'rules')", verb)
            }
            ParseError::BadPlayerNumber(arg) => {
                format!("'{}' is not a player number", arg)
            }
            ParseError::NotLetters(arg) => {
                format!("'{}' must be letters only", arg)
            }
            ParseError::Usage(usage) => format!("usage: {}", usage),
        }
    }
}

/// Parse one command line. Whitespace-tolerant, verbs case-insensitive.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "show" => bare(Command::Show, &mut tokens, "show")?,
        "rules" | "help" => bare(Command::Rules, &mut tokens, "rules")?,
        "quit" | "exit" => bare(Command::Quit, &mut tokens, "quit")?,
        "play" => {
            let (player, word) = player_and_letters(&mut tokens, "play <player> <word>")?;
            Command::Play { player, word }
        }
        "swap" => {
            let (player, letters) = player_and_letters(&mut tokens, "swap <player> <letters>")?;
            Command::Swap { player, letters }
        }
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn bare<'a>(
    command: Command,
    tokens: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> Result<Command, ParseError> {
    match tokens.next() {
        None => Ok(command),
        Some(_) => Err(ParseError::Usage(usage)),
    }
}

fn player_and_letters<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> Result<(usize, String), ParseError> {
    let (Some(player), Some(letters), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ParseError::Usage(usage));
    };
    let player: usize = player
        .parse()
        .map_err(|_| ParseError::BadPlayerNumber(player.to_string()))?;
    if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ParseError::NotLetters(letters.to_string()));
    }
    Ok((player, letters.to_ascii_uppercase()))
}
