//! Fixed per-letter scoring.

/// Point value of a single letter. Case-insensitive; anything outside
/// `A`-`Z` is worth nothing.
pub fn letter_value(letter: char) -> u32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Score a word as the sum of its letter values. Pure and deterministic.
pub fn score_word(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}
