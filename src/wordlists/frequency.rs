//! Word frequency ranks
//!
//! A frequency list is a plain word list ordered from most to least common;
//! a word's rank is its line number. Words missing from the list count as
//! rarer than any listed word.

use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Commonness rank per word, 0 being the most common
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    ranks: FxHashMap<String, usize>,
}

impl WordFrequency {
    /// Build from words ordered most common first
    ///
    /// Words are lowercased; a repeated word keeps its first (more common) rank.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::wordlists::frequency::WordFrequency;
    ///
    /// let freq = WordFrequency::from_ranked(["check", "chunk", "eunuch"]);
    /// assert_eq!(freq.rank("chunk"), Some(1));
    /// assert_eq!(freq.rank("nunchuk"), None);
    /// ```
    pub fn from_ranked<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = FxHashMap::default();
        for (rank, word) in words.into_iter().enumerate() {
            ranks
                .entry(word.as_ref().trim().to_lowercase())
                .or_insert(rank);
        }
        Self { ranks }
    }

    #[inline]
    #[must_use]
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(&word.to_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sort rarest first: unlisted words, then descending rank, ties alphabetical
    pub fn sort_rarest_first(&self, words: &mut [String]) {
        words.sort_by_cached_key(|w| (Reverse(self.rank(w).unwrap_or(usize::MAX)), w.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn ranks_follow_line_order() {
        let freq = WordFrequency::from_ranked(["Check", "hunk", "check"]);
        assert_eq!(freq.rank("check"), Some(0));
        assert_eq!(freq.rank("HUNK"), Some(1));
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn rarest_first_with_unlisted_leading() {
        let freq = WordFrequency::from_ranked(["check", "hunk", "chunk"]);
        let mut list = words(&["check", "nunchuk", "chunk", "eunuch", "hunk"]);
        freq.sort_rarest_first(&mut list);
        assert_eq!(list, words(&["eunuch", "nunchuk", "chunk", "hunk", "check"]));
    }

    #[test]
    fn empty_list_sorts_alphabetically() {
        let freq = WordFrequency::default();
        assert!(freq.is_empty());
        let mut list = words(&["hunk", "check", "heed"]);
        freq.sort_rarest_first(&mut list);
        assert_eq!(list, words(&["check", "heed", "hunk"]));
    }
}
