//! External word lists
//!
//! Lexicons are plain files of one word per line. The alternatives filter
//! finds lexicon words that obey a puzzle's letter rules but are not on its
//! answer list. Frequency lists rank words by commonness so remaining answers
//! can be listed rarest first.

pub mod frequency;
pub mod loader;

pub use frequency::WordFrequency;

use crate::puzzle::PuzzleRecord;
use rayon::prelude::*;

/// Lexicon words that fit the puzzle's letters but are not accepted answers
///
/// Only all-lowercase entries are considered, so proper nouns and acronyms
/// drop out. Sorted longest first, then alphabetically.
#[must_use]
pub fn alternative_answers(puzzle: &PuzzleRecord, lexicon: &[String]) -> Vec<String> {
    let mut result: Vec<String> = lexicon
        .par_iter()
        .filter(|word| word.chars().all(|c| c.is_ascii_lowercase()))
        .filter(|word| puzzle.does_word_count(word) && !puzzle.is_answer(word))
        .cloned()
        .collect();

    result.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    result.dedup();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::fixtures::puzzle;

    fn lexicon(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn alternatives_exclude_answers() {
        let words = lexicon(&["hunk", "dunk", "chunked", "huhu", "unhunched", "duck"]);
        let alternatives = alternative_answers(&puzzle(), &words);
        // "dunk" and "duck" lack the center letter
        assert_eq!(alternatives, vec!["unhunched", "huhu"]);
    }

    #[test]
    fn alternatives_skip_capitalized() {
        let words = lexicon(&["Heck", "HUED", "echt", "heckhunk"]);
        assert_eq!(alternative_answers(&puzzle(), &words), vec!["heckhunk"]);
    }

    #[test]
    fn alternatives_sorted_and_unique() {
        let words = lexicon(&["huhu", "hench", "huhu", "kench", "hench"]);
        assert_eq!(
            alternative_answers(&puzzle(), &words),
            vec!["hench", "kench", "huhu"]
        );
    }

    #[test]
    fn alternatives_empty_lexicon() {
        assert!(alternative_answers(&puzzle(), &[]).is_empty());
    }
}
