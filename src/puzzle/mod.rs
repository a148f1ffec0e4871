//! The daily puzzle
//!
//! A `PuzzleRecord` is built once from externally supplied raw data, checked
//! against the letter invariants, and is immutable afterwards apart from its
//! rendered-image slot.

use crate::core::{
    HintTable, Judgement, LetterSet, Rank, evaluate_guess, normalize_word, word_points,
};
use crate::error::{BeeError, Result};
use crate::render::RenderedImage;
use crate::wordlists::WordFrequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Day keys are ISO calendar dates
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` day key
///
/// # Errors
/// Returns `BeeError::MalformedPuzzleData` if `day` is not a valid date in that format.
pub fn parse_day(day: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(day.trim(), DAY_FORMAT)
        .map_err(|e| BeeError::malformed(format!("invalid day {day:?}: {e}")))
}

/// Puzzle data as the fetch collaborator delivers it, before any validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPuzzle {
    #[serde(rename = "printDate")]
    pub day: String,
    #[serde(rename = "centerLetter")]
    pub center: String,
    #[serde(rename = "outerLetters")]
    pub outside: Vec<String>,
    #[serde(default)]
    pub pangrams: Vec<String>,
    pub answers: Vec<String>,
}

/// One day's puzzle: letters, answers, derived pangrams and score ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleRecord {
    day: NaiveDate,
    letters: LetterSet,
    answers: BTreeSet<String>,
    pangrams: BTreeSet<String>,
    max_points: u32,
    image: Option<Vec<u8>>,
    image_format: Option<String>,
}

impl PuzzleRecord {
    /// Validate raw collaborator data and build the puzzle
    ///
    /// # Errors
    /// Returns `BeeError::MalformedPuzzleData` if the day, letters or answers
    /// violate the puzzle invariants.
    pub fn from_raw(raw: &RawPuzzle) -> Result<Self> {
        let day = parse_day(&raw.day)?;
        let letters = LetterSet::from_strings(&raw.center, &raw.outside)?;
        Self::new(day, letters, &raw.answers, &raw.pangrams)
    }

    /// Build a puzzle from already-parsed parts
    ///
    /// Words are case-folded. Supplied pangrams are merged into the answers and
    /// must cover all seven letters; the stored pangram set is derived from the
    /// answers by coverage.
    ///
    /// # Errors
    /// Returns `BeeError::MalformedPuzzleData` if there are no answers, any
    /// answer breaks the letter rules, or a supplied pangram does not cover
    /// every letter.
    pub fn new<S: AsRef<str>>(
        day: NaiveDate,
        letters: LetterSet,
        answers: &[S],
        pangrams: &[S],
    ) -> Result<Self> {
        let mut all_answers: BTreeSet<String> =
            answers.iter().map(|w| normalize_word(w.as_ref())).collect();

        for pangram in pangrams {
            let pangram = normalize_word(pangram.as_ref());
            if !letters.is_pangram(&pangram) {
                return Err(BeeError::malformed(format!(
                    "listed pangram {pangram:?} does not use every letter of {letters}"
                )));
            }
            all_answers.insert(pangram);
        }

        if all_answers.is_empty() {
            return Err(BeeError::malformed("puzzle has no answers"));
        }
        if let Some(bad) = all_answers.iter().find(|w| !letters.does_word_count(w)) {
            return Err(BeeError::malformed(format!(
                "answer {bad:?} breaks the letter rules of {letters}"
            )));
        }

        let pangrams: BTreeSet<String> = all_answers
            .iter()
            .filter(|w| letters.is_pangram(w))
            .cloned()
            .collect();
        let max_points = all_answers
            .iter()
            .map(|w| word_points(w, pangrams.contains(w)))
            .sum();

        Ok(Self {
            day,
            letters,
            answers: all_answers,
            pangrams,
            max_points,
            image: None,
            image_format: None,
        })
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn answers(&self) -> &BTreeSet<String> {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub const fn pangrams(&self) -> &BTreeSet<String> {
        &self.pangrams
    }

    /// Sum of the point values of every answer
    #[inline]
    #[must_use]
    pub const fn max_points(&self) -> u32 {
        self.max_points
    }

    #[must_use]
    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn image_format(&self) -> Option<&str> {
        self.image_format.as_deref()
    }

    /// Replace the rendered image without interpreting it
    pub fn set_image(&mut self, image: RenderedImage) {
        self.image = Some(image.bytes);
        self.image_format = Some(image.format);
    }

    pub(crate) fn restore_image(&mut self, image: Option<Vec<u8>>, format: Option<String>) {
        self.image = image;
        self.image_format = format;
    }

    /// Letter rules only; see [`LetterSet::does_word_count`]
    #[must_use]
    pub fn does_word_count(&self, word: &str) -> bool {
        self.letters.does_word_count(word)
    }

    /// Alphabet coverage only; see [`LetterSet::is_pangram`]
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.letters.is_pangram(word)
    }

    #[must_use]
    pub fn is_answer(&self, word: &str) -> bool {
        self.answers.contains(&normalize_word(word))
    }

    /// Judge a guess against a caller-supplied set of found words
    #[must_use]
    pub fn guess(&self, word: &str, gotten: &BTreeSet<String>) -> Judgement {
        evaluate_guess(word, &self.answers, &self.pangrams, gotten)
    }

    /// Points for an answer, 0 for anything else
    #[must_use]
    pub fn point_value(&self, word: &str) -> u32 {
        let word = normalize_word(word);
        if self.answers.contains(&word) {
            word_points(&word, self.pangrams.contains(&word))
        } else {
            0
        }
    }

    /// Total points of the distinct answers among `words`
    #[must_use]
    pub fn valid_words_to_points<S: AsRef<str>>(&self, words: &[S]) -> u32 {
        words
            .iter()
            .map(|w| normalize_word(w.as_ref()))
            .collect::<BTreeSet<_>>()
            .iter()
            .map(|w| self.point_value(w))
            .sum()
    }

    /// Rank earned by a set of found words
    #[must_use]
    pub fn ranking(&self, gotten: &BTreeSet<String>) -> Rank {
        let words: Vec<&str> = gotten.iter().map(String::as_str).collect();
        Rank::from_points(self.valid_words_to_points(&words), self.max_points)
    }

    /// Share of answers found, rounded to one decimal place
    #[must_use]
    pub fn percentage_complete(&self, gotten: &BTreeSet<String>) -> f64 {
        let found = gotten.intersection(&self.answers).count();
        (found as f64 / self.answers.len() as f64 * 1000.0).round() / 10.0
    }

    /// Answers not in `gotten`, alphabetical
    #[must_use]
    pub fn unguessed_words(&self, gotten: &BTreeSet<String>) -> Vec<String> {
        self.answers.difference(gotten).cloned().collect()
    }

    /// Answers not in `gotten`, least common first
    #[must_use]
    pub fn unguessed_words_by_rarity(
        &self,
        gotten: &BTreeSet<String>,
        frequency: &WordFrequency,
    ) -> Vec<String> {
        let mut words = self.unguessed_words(gotten);
        frequency.sort_rarest_first(&mut words);
        words
    }

    /// Hint table over the answers not in `gotten`
    #[must_use]
    pub fn hints(&self, gotten: &BTreeSet<String>) -> HintTable {
        HintTable::from_words(self.answers.difference(gotten).map(String::as_str), &self.pangrams)
    }

    /// Hint table over every answer
    #[must_use]
    pub fn hint_table(&self) -> HintTable {
        self.hints(&BTreeSet::new())
    }

    /// Back to the raw shape, for export and storage
    #[must_use]
    pub fn to_raw(&self) -> RawPuzzle {
        RawPuzzle {
            day: self.day.format(DAY_FORMAT).to_string(),
            center: self.letters.center().to_string(),
            outside: self.letters.outside().iter().map(char::to_string).collect(),
            pangrams: self.pangrams.iter().cloned().collect(),
            answers: self.answers.iter().cloned().collect(),
        }
    }
}

impl fmt::Display for PuzzleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} answers, {} pangrams, {} points)",
            self.day.format(DAY_FORMAT),
            self.letters,
            self.answers.len(),
            self.pangrams.len(),
            self.max_points
        )
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{puzzle, raw_puzzle};
    use super::*;
    use crate::core::JudgementFlag::{Accepted, AlreadyGotten, Pangram};

    fn gotten(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn basic_attributes() {
        let puzzle = puzzle();
        assert_eq!(puzzle.day(), NaiveDate::from_ymd_opt(2022, 1, 16).unwrap());
        assert_eq!(puzzle.letters().center(), 'H');
        assert_eq!(puzzle.letters().outside(), &['C', 'D', 'E', 'K', 'N', 'U']);
        assert_eq!(puzzle.answers().len(), 21);
        assert_eq!(puzzle.pangrams().len(), 2);
        assert!(puzzle.answers().iter().all(|w| *w == w.to_lowercase()));
        assert!(puzzle.pangrams().is_subset(puzzle.answers()));
    }

    #[test]
    fn word_judgements() {
        let puzzle = puzzle();
        assert!(puzzle.does_word_count("hunk"));
        assert!(!puzzle.does_word_count("zamboni"));
        assert!(puzzle.does_word_count("Chunked"));
        assert!(puzzle.is_pangram("Chunked"));
        assert!(!puzzle.is_pangram("hence"));

        let none = BTreeSet::new();
        assert_eq!(puzzle.guess("hunk", &none), Judgement::from_flags(&[Accepted]));
        assert_eq!(
            puzzle.guess("chunked", &none),
            Judgement::from_flags(&[Accepted, Pangram])
        );
        assert_eq!(
            puzzle.guess("chunked", &gotten(&["hunk", "chunked"])),
            Judgement::from_flags(&[Accepted, Pangram, AlreadyGotten])
        );
        assert_eq!(puzzle.guess("batarang", &none), Judgement::UNACCEPTED);
        // Fits the letters but is not on the answer list
        assert_eq!(puzzle.guess("dunk", &none), Judgement::UNACCEPTED);
    }

    #[test]
    fn points() {
        let puzzle = puzzle();
        assert_eq!(puzzle.point_value("hunk"), 1);
        assert_eq!(puzzle.point_value("chunked"), 14);
        assert_eq!(puzzle.point_value("dunk"), 0);
        assert_eq!(puzzle.valid_words_to_points(&["hunk"]), 1);
        assert_eq!(puzzle.valid_words_to_points(&["hunk", "dunk"]), 1);
        assert_eq!(puzzle.valid_words_to_points(&["hunk", "chunk"]), 6);
        assert_eq!(puzzle.valid_words_to_points(&["hunk", "chunked"]), 15);
        assert_eq!(puzzle.valid_words_to_points(&["hunk", "chunk", "chunked"]), 20);
        assert_eq!(puzzle.valid_words_to_points(&["hunk", "HUNK"]), 1);
        assert_eq!(puzzle.max_points(), 127);
    }

    #[test]
    fn max_points_is_sum_over_answers() {
        let puzzle = puzzle();
        let sum: u32 = puzzle.answers().iter().map(|w| puzzle.point_value(w)).sum();
        assert_eq!(puzzle.max_points(), sum);

        let mut everything: Vec<&str> = puzzle.answers().iter().map(String::as_str).collect();
        everything.push("zamboni");
        assert_eq!(puzzle.valid_words_to_points(&everything), puzzle.max_points());
        everything.pop();
        everything.pop();
        assert!(puzzle.valid_words_to_points(&everything) < puzzle.max_points());
    }

    #[test]
    fn ranking_and_completion() {
        let puzzle = puzzle();
        assert_eq!(puzzle.ranking(&gotten(&["chunked", "hunk"])), Rank::Good);
        assert_eq!(puzzle.ranking(&gotten(&[])), Rank::Beginner);
        assert_eq!(puzzle.ranking(puzzle.answers()), Rank::QueenBee);
        assert!((puzzle.percentage_complete(&gotten(&["hunk", "chunk", "chunked"])) - 14.3).abs() < 1e-9);
    }

    #[test]
    fn unguessed_words_rarest_first() {
        let puzzle = puzzle();
        let frequency = WordFrequency::from_ranked(["check", "heck", "chunk", "hence"]);
        let unguessed = puzzle.unguessed_words_by_rarity(&gotten(&["chunk"]), &frequency);
        assert_eq!(unguessed.len(), 20);
        assert_eq!(unguessed[0], "checked");
        assert_eq!(&unguessed[17..], ["hence", "heck", "check"]);
    }

    #[test]
    fn unguessed_words_and_hints() {
        let puzzle = puzzle();
        let found = gotten(&["chunk", "chunked"]);
        let unguessed = puzzle.unguessed_words(&found);
        assert_eq!(unguessed.len(), 19);
        assert!(!unguessed.contains(&"chunk".to_string()));

        let hints = puzzle.hints(&found);
        assert_eq!(hints.total(), 19);
        assert_eq!(hints.pangram_count(), 1);
        assert_eq!(puzzle.hint_table().total(), 21);
    }

    #[test]
    fn pangrams_are_merged_and_derived() {
        let mut raw = raw_puzzle();
        raw.answers.retain(|w| w != "chunked");
        raw.pangrams = vec!["CHUNKED".to_string()];
        let puzzle = PuzzleRecord::from_raw(&raw).unwrap();
        assert!(puzzle.is_answer("chunked"));
        // "unchecked" is found by coverage even though it was not listed
        assert!(puzzle.pangrams().contains("unchecked"));
    }

    #[test]
    fn malformed_answers_rejected() {
        let mut raw = raw_puzzle();
        raw.answers.push("zamboni".to_string());
        assert!(matches!(
            PuzzleRecord::from_raw(&raw),
            Err(BeeError::MalformedPuzzleData(_))
        ));

        let mut raw = raw_puzzle();
        raw.answers.push("duck".to_string());
        assert!(PuzzleRecord::from_raw(&raw).is_err());
    }

    #[test]
    fn malformed_pangram_rejected() {
        let mut raw = raw_puzzle();
        raw.pangrams.push("hence".to_string());
        assert!(PuzzleRecord::from_raw(&raw).is_err());
    }

    #[test]
    fn malformed_letters_and_day_rejected() {
        let mut raw = raw_puzzle();
        raw.outside.pop();
        assert!(PuzzleRecord::from_raw(&raw).is_err());

        let mut raw = raw_puzzle();
        raw.day = "16/01/2022".to_string();
        assert!(PuzzleRecord::from_raw(&raw).is_err());

        let mut raw = raw_puzzle();
        raw.answers.clear();
        raw.pangrams.clear();
        assert!(PuzzleRecord::from_raw(&raw).is_err());
    }

    #[test]
    fn image_slot_is_replaceable() {
        let mut puzzle = puzzle();
        assert!(puzzle.image().is_none());
        puzzle.set_image(RenderedImage::new(b"GIF89a".to_vec(), "gif"));
        puzzle.set_image(RenderedImage::new(b"\x89PNG".to_vec(), "png"));
        assert_eq!(puzzle.image(), Some(&b"\x89PNG"[..]));
        assert_eq!(puzzle.image_format(), Some("png"));
    }

    #[test]
    fn raw_round_trip() {
        let puzzle = puzzle();
        let rebuilt = PuzzleRecord::from_raw(&puzzle.to_raw()).unwrap();
        assert_eq!(rebuilt, puzzle);
    }
}
