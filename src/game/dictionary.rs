//! The word list plays are validated against.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// One dictionary entry: an uppercase word and its free-text definition,
/// possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

/// An immutable set of valid words with optional definitions.
///
/// Built once at startup, read-only afterwards; entries are kept sorted so
/// membership and definition lookup are a binary search. An empty dictionary
/// means validation is skipped entirely, not that every play fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// A dictionary with no entries. Word validation is skipped against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse a dictionary file. Callers treat an I/O error as
    /// "dictionary unavailable" and fall back to `empty`.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// Parse `WORD<TAB>DEFINITION` lines; a run of two or more spaces also
    /// separates word from definition. Blank lines are skipped, definitions
    /// are optional, and a word seen twice (in any case mix) keeps its first
    /// occurrence.
    pub fn parse(text: &str) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (word_part, definition) = split_entry(line);
            let Some(word) = word_part.split_whitespace().next() else {
                continue;
            };
            let word = word.to_uppercase();
            if seen.insert(word.clone()) {
                entries.push(Entry {
                    word,
                    definition: definition.trim().to_string(),
                });
            }
        }

        entries.sort_by(|a, b| a.word.cmp(&b.word));
        Self { entries }
    }

    /// Case-insensitive membership test, O(log n).
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// The definition recorded for `word`, when the word is known and its
    /// source line carried one.
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.lookup(word)
            .map(|entry| entry.definition.as_str())
            .filter(|definition| !definition.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<&Entry> {
        let needle = word.to_uppercase();
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(needle.as_str()))
            .ok()
            .map(|index| &self.entries[index])
    }
}

/// Split a line into word part and definition part. A tab wins; failing
/// that, the first run of two spaces.
fn split_entry(line: &str) -> (&str, &str) {
    if let Some(tab) = line.find('\t') {
        return (&line[..tab], &line[tab + 1..]);
    }
    if let Some(gap) = line.find("  ") {
        return (&line[..gap], &line[gap..]);
    }
    (line, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated_entries() {
        let dict = Dictionary::parse("CAT\ta small domesticated feline\nDOG\tman's best friend\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("CAT"));
        assert_eq!(dict.definition("DOG"), Some("man's best friend"));
    }

    #[test]
    fn test_parse_multi_space_separated_entries() {
        let dict = Dictionary::parse("MOUSE    a small rodent\n");
        assert!(dict.contains("MOUSE"));
        assert_eq!(dict.definition("MOUSE"), Some("a small rodent"));
    }

    #[test]
    fn test_parse_word_without_definition() {
        let dict = Dictionary::parse("ZYZZYVA\n");
        assert!(dict.contains("ZYZZYVA"));
        assert_eq!(dict.definition("ZYZZYVA"), None);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let dict = Dictionary::parse("\n\nCAT\tfeline\n   \nDOG\tcanine\n\n");
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let dict = Dictionary::parse("CAT\tfeline\ncat\tsecond definition\nCaT\tthird\n");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.definition("cat"), Some("feline"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::parse("Quiz\ta short test\n");
        assert!(dict.contains("quiz"));
        assert!(dict.contains("QUIZ"));
        assert!(dict.contains("qUiZ"));
        assert!(!dict.contains("quizzes"));
    }

    #[test]
    fn test_lookup_works_across_a_larger_sorted_set() {
        let text: String = ('A'..='Z').map(|c| format!("{c}{c}{c}\tword {c}\n")).collect();
        let dict = Dictionary::parse(&text);
        assert_eq!(dict.len(), 26);
        assert!(dict.contains("AAA"));
        assert!(dict.contains("mmm"));
        assert!(dict.contains("ZZZ"));
        assert!(!dict.contains("AAB"));
        assert_eq!(dict.definition("QQQ"), Some("word Q"));
    }

    #[test]
    fn test_single_space_line_keeps_first_token_as_word() {
        let dict = Dictionary::parse("CAT feline\n");
        assert!(dict.contains("CAT"));
        assert!(!dict.contains("CAT FELINE"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert!(!dict.contains("ANYTHING"));
        assert_eq!(dict.definition("ANYTHING"), None);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Dictionary::load(Path::new("/no/such/wordlist.tsv")).is_err());
    }
}
