#![allow(dead_code)]
//! The shared tile bag.

use rand::prelude::*;

/// Tiles of each letter in a fresh bag. Vowel-heavy, with the rare
/// consonants as singletons; 88 tiles in total.
pub const STANDARD_DISTRIBUTION: [(char, u8); 26] = [
    ('A', 7),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 9),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 6),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 6),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// The shared pool of undrawn letter tiles.
///
/// Tiles are plain uppercase letters with no identity beyond that; the bag
/// keeps them in draw order, so `draw` is only random after a `shuffle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBag {
    tiles: Vec<char>,
}

impl TileBag {
    /// Build an unshuffled bag from a letter distribution, one tile per count.
    pub fn from_distribution(distribution: &[(char, u8)]) -> Self {
        let mut tiles = Vec::new();
        for &(letter, count) in distribution {
            for _ in 0..count {
                tiles.push(letter.to_ascii_uppercase());
            }
        }
        Self { tiles }
    }

    /// A full bag with the standard letter distribution.
    pub fn standard() -> Self {
        Self::from_distribution(&STANDARD_DISTRIBUTION)
    }

    /// Randomize the draw order.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Randomize the draw order using a specific RNG (for testing/seeding).
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    /// Remove and return the next tile, or `None` once the bag is empty.
    pub fn draw(&mut self) -> Option<char> {
        self.tiles.pop()
    }

    /// Put tiles back into the bag. The caller decides when to reshuffle.
    pub fn return_tiles(&mut self, tiles: &[char]) {
        self.tiles.extend_from_slice(tiles);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_bag_matches_distribution() {
        let bag = TileBag::standard();
        let expected: usize = STANDARD_DISTRIBUTION.iter().map(|&(_, n)| n as usize).sum();
        assert_eq!(bag.len(), expected);
        assert_eq!(bag.len(), 88);
    }

    #[test]
    fn test_draw_drains_exact_multiset() {
        let mut bag = TileBag::from_distribution(&[('A', 2), ('B', 1)]);
        let mut drawn = Vec::new();
        while let Some(tile) = bag.draw() {
            drawn.push(tile);
        }
        drawn.sort_unstable();
        assert_eq!(drawn, vec!['A', 'A', 'B']);
        assert!(bag.is_empty());
        assert_eq!(bag.draw(), None);
    }

    #[test]
    fn test_distribution_letters_are_uppercased() {
        let mut bag = TileBag::from_distribution(&[('q', 1)]);
        assert_eq!(bag.draw(), Some('Q'));
    }

    #[test]
    fn test_return_tiles_grows_bag_without_reshuffle() {
        let mut bag = TileBag::from_distribution(&[('A', 1)]);
        bag.return_tiles(&['Z', 'X']);
        assert_eq!(bag.len(), 3);
        // Appended tiles come out first until someone shuffles.
        assert_eq!(bag.draw(), Some('X'));
        assert_eq!(bag.draw(), Some('Z'));
        assert_eq!(bag.draw(), Some('A'));
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let mut first = TileBag::standard();
        let mut second = TileBag::standard();

        first.shuffle_with(&mut StdRng::seed_from_u64(42));
        second.shuffle_with(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_keeps_contents() {
        let mut bag = TileBag::standard();
        bag.shuffle_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(bag.len(), TileBag::standard().len());

        let mut drawn = Vec::new();
        while let Some(tile) = bag.draw() {
            drawn.push(tile);
        }
        drawn.sort_unstable();

        let mut expected = Vec::new();
        let mut fresh = TileBag::standard();
        while let Some(tile) = fresh.draw() {
            expected.push(tile);
        }
        expected.sort_unstable();

        assert_eq!(drawn, expected);
    }
}
