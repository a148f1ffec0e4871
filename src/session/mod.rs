//! Guessing sessions
//!
//! A `SessionRecord` tracks one guesser's progress on one day's puzzle. It keeps
//! only the puzzle's day as a lookup key; every query that needs the answers
//! takes the puzzle explicitly and checks that it is the right day.

use crate::core::{HintTable, Judgement, Rank, normalize_word};
use crate::error::{BeeError, Result};
use crate::puzzle::PuzzleRecord;
use crate::wordlists::WordFrequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use uuid::Uuid;

/// One guesser's progress against one puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    session_id: Uuid,
    puzzle_day: NaiveDate,
    gotten_words: BTreeSet<String>,
    metadata: Option<Value>,
}

impl SessionRecord {
    /// Empty session for the puzzle of `puzzle_day`, with a fresh identifier
    #[must_use]
    pub fn new(puzzle_day: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), puzzle_day)
    }

    #[must_use]
    pub fn with_id(session_id: Uuid, puzzle_day: NaiveDate) -> Self {
        Self {
            session_id,
            puzzle_day,
            gotten_words: BTreeSet::new(),
            metadata: None,
        }
    }

    /// Rebuild a stored session exactly as saved
    pub(crate) fn restore(
        session_id: Uuid,
        puzzle_day: NaiveDate,
        gotten_words: BTreeSet<String>,
        metadata: Option<Value>,
    ) -> Self {
        Self {
            session_id,
            puzzle_day,
            gotten_words,
            metadata,
        }
    }

    #[inline]
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[inline]
    #[must_use]
    pub const fn puzzle_day(&self) -> NaiveDate {
        self.puzzle_day
    }

    #[inline]
    #[must_use]
    pub const fn gotten_words(&self) -> &BTreeSet<String> {
        &self.gotten_words
    }

    #[must_use]
    pub const fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Replace the metadata wholesale
    pub fn set_metadata(&mut self, metadata: Option<Value>) {
        self.metadata = metadata;
    }

    fn check_puzzle(&self, puzzle: &PuzzleRecord) -> Result<()> {
        if puzzle.day() == self.puzzle_day {
            Ok(())
        } else {
            Err(BeeError::PuzzleMismatch {
                expected: self.puzzle_day,
                actual: puzzle.day(),
            })
        }
    }

    /// Judge a guess against this session's found words and record it if accepted
    ///
    /// Accepting a word that is already recorded changes nothing.
    ///
    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn guess(&mut self, puzzle: &PuzzleRecord, word: &str) -> Result<Judgement> {
        self.check_puzzle(puzzle)?;
        let judgement = puzzle.guess(word, &self.gotten_words);
        if judgement.is_accepted() {
            self.gotten_words.insert(normalize_word(word));
        }
        Ok(judgement)
    }

    /// Guess every distinct word in a free-form message
    ///
    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn respond_to_guesses(&mut self, puzzle: &PuzzleRecord, text: &str) -> Result<GuessReport> {
        self.check_puzzle(puzzle)?;
        let mut report = GuessReport::default();
        for word in split_words(text) {
            let judgement = self.guess(puzzle, &word)?;
            report.record(&word, judgement, puzzle.point_value(&word));
        }
        Ok(report)
    }

    /// Percentage of answers found, unrounded
    ///
    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn percentage_words_gotten(&self, puzzle: &PuzzleRecord) -> Result<f64> {
        self.check_puzzle(puzzle)?;
        Ok(100.0 * self.gotten_words.len() as f64 / puzzle.answers().len() as f64)
    }

    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn points_scored(&self, puzzle: &PuzzleRecord) -> Result<u32> {
        self.check_puzzle(puzzle)?;
        let words: Vec<&str> = self.gotten_words.iter().map(String::as_str).collect();
        Ok(puzzle.valid_words_to_points(&words))
    }

    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn points_scored_percentage(&self, puzzle: &PuzzleRecord) -> Result<f64> {
        Ok(100.0 * f64::from(self.points_scored(puzzle)?) / f64::from(puzzle.max_points()))
    }

    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn ranking(&self, puzzle: &PuzzleRecord) -> Result<Rank> {
        self.check_puzzle(puzzle)?;
        Ok(puzzle.ranking(&self.gotten_words))
    }

    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn unguessed_words(&self, puzzle: &PuzzleRecord) -> Result<Vec<String>> {
        self.check_puzzle(puzzle)?;
        Ok(puzzle.unguessed_words(&self.gotten_words))
    }

    /// Words still to find, least common first
    ///
    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn unguessed_words_by_rarity(
        &self,
        puzzle: &PuzzleRecord,
        frequency: &WordFrequency,
    ) -> Result<Vec<String>> {
        self.check_puzzle(puzzle)?;
        Ok(puzzle.unguessed_words_by_rarity(&self.gotten_words, frequency))
    }

    /// # Errors
    /// Returns `BeeError::PuzzleMismatch` if `puzzle` is not this session's day.
    pub fn unguessed_hints(&self, puzzle: &PuzzleRecord) -> Result<HintTable> {
        self.check_puzzle(puzzle)?;
        Ok(puzzle.hints(&self.gotten_words))
    }
}

/// Distinct lowercase words of a message, in first-seen order
fn split_words(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Aggregate outcome of guessing every word in a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessReport {
    /// Accepted words, new or repeated
    pub accepted: Vec<String>,
    /// Words not on the answer list
    pub unaccepted: Vec<String>,
    /// Points for the accepted words that were new
    pub new_points: u32,
    pub pangram: bool,
    pub already_gotten: bool,
}

impl GuessReport {
    fn record(&mut self, word: &str, judgement: Judgement, points: u32) {
        if judgement.is_accepted() {
            self.accepted.push(word.to_string());
            if !judgement.is_already_gotten() {
                self.new_points += points;
            }
        } else {
            self.unaccepted.push(word.to_string());
        }
        self.pangram |= judgement.is_pangram();
        self.already_gotten |= judgement.is_already_gotten();
    }

    /// Emoji reactions summarising the report
    ///
    /// 👍 for any accepted word, digit emoji for the count when more than one
    /// was accepted, 🍳 for a pangram and 🤝 when a word had already been found.
    #[must_use]
    pub fn reactions(&self) -> Vec<String> {
        const DIGITS: [&str; 10] = [
            "0\u{fe0f}\u{20e3}",
            "1\u{fe0f}\u{20e3}",
            "2\u{fe0f}\u{20e3}",
            "3\u{fe0f}\u{20e3}",
            "4\u{fe0f}\u{20e3}",
            "5\u{fe0f}\u{20e3}",
            "6\u{fe0f}\u{20e3}",
            "7\u{fe0f}\u{20e3}",
            "8\u{fe0f}\u{20e3}",
            "9\u{fe0f}\u{20e3}",
        ];

        let mut reactions = Vec::new();
        let count = self.accepted.len();
        if count > 0 {
            reactions.push("👍".to_string());
            if count > 1 {
                reactions.extend(
                    count
                        .to_string()
                        .chars()
                        .filter_map(|d| d.to_digit(10))
                        .map(|d| DIGITS[d as usize].to_string()),
                );
            }
        }
        if self.pangram {
            reactions.push("🍳".to_string());
        }
        if self.already_gotten {
            reactions.push("🤝".to_string());
        }
        reactions
    }
}
