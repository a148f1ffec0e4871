//! The seven-letter puzzle alphabet
//!
//! A `LetterSet` holds one mandatory center letter and six outside letters, and
//! answers the two letter-level questions every other component builds on:
//! whether a word obeys the letter rules and whether it covers the alphabet.

use crate::error::{BeeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Number of outside letters around the center
const OUTSIDE_COUNT: usize = 6;

/// Case-fold a guess the way every judgement sees it
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// One center letter plus six outside letters, all uppercase ASCII
///
/// Immutable once constructed; outside letters keep the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSet {
    center: char,
    outside: [char; OUTSIDE_COUNT],
}

impl LetterSet {
    /// Build a letter set, upper-casing the input
    ///
    /// # Errors
    /// Returns `BeeError::MalformedPuzzleData` if there are not exactly six
    /// outside letters, any letter is not ASCII alphabetic, the outside letters
    /// repeat, or the center letter is also an outside letter.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let letters = LetterSet::new('h', &['u', 'd', 'c', 'e', 'k', 'n']).unwrap();
    /// assert_eq!(letters.center(), 'H');
    /// assert!(LetterSet::new('h', &['h', 'd', 'c', 'e', 'k', 'n']).is_err());
    /// ```
    pub fn new(center: char, outside: &[char]) -> Result<Self> {
        if !center.is_ascii_alphabetic() {
            return Err(BeeError::malformed(format!(
                "center letter {center:?} is not an ASCII letter"
            )));
        }
        let center = center.to_ascii_uppercase();

        let outside: [char; OUTSIDE_COUNT] = outside.try_into().map_err(|_| {
            BeeError::malformed(format!(
                "expected {OUTSIDE_COUNT} outside letters, got {}",
                outside.len()
            ))
        })?;

        let mut upper = outside;
        for (i, letter) in upper.iter_mut().enumerate() {
            if !letter.is_ascii_alphabetic() {
                return Err(BeeError::malformed(format!(
                    "outside letter {letter:?} is not an ASCII letter"
                )));
            }
            *letter = letter.to_ascii_uppercase();
            if *letter == center {
                return Err(BeeError::malformed(format!(
                    "center letter {center} is also an outside letter"
                )));
            }
            if outside[..i]
                .iter()
                .any(|prev| prev.eq_ignore_ascii_case(letter))
            {
                return Err(BeeError::malformed(format!(
                    "outside letter {letter} appears more than once"
                )));
            }
        }

        Ok(Self {
            center,
            outside: upper,
        })
    }

    /// Parse single-letter strings, as the game data supplies them
    ///
    /// # Errors
    /// Same as [`LetterSet::new`], plus any entry that is not exactly one character.
    pub fn from_strings<S: AsRef<str>>(center: &str, outside: &[S]) -> Result<Self> {
        let center = single_letter(center)?;
        let outside = outside
            .iter()
            .map(|s| single_letter(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(center, &outside)
    }

    /// The mandatory letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// The six optional letters, in supplied order
    #[inline]
    #[must_use]
    pub const fn outside(&self) -> &[char; OUTSIDE_COUNT] {
        &self.outside
    }

    /// Center first, then the outside letters
    #[must_use]
    pub fn all(&self) -> [char; OUTSIDE_COUNT + 1] {
        let mut letters = [self.center; OUTSIDE_COUNT + 1];
        letters[1..].copy_from_slice(&self.outside);
        letters
    }

    /// Case-insensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        letter == self.center || self.outside.contains(&letter)
    }

    /// Whether `word` obeys the letter rules
    ///
    /// True iff the case-folded word is at least four letters long, uses only
    /// letters from this set, and contains the center letter. Membership in a
    /// puzzle's answer list is a separate question.
    #[must_use]
    pub fn does_word_count(&self, word: &str) -> bool {
        let word = normalize_word(word);
        word.chars().count() >= MIN_WORD_LENGTH
            && word.chars().all(|c| self.contains(c))
            && word.chars().any(|c| c.eq_ignore_ascii_case(&self.center))
    }

    /// Whether `word` contains all seven letters at least once
    ///
    /// Coverage is the only criterion: length, the center rule and extra
    /// letters outside the set are not considered.
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.all()
            .iter()
            .all(|letter| word.chars().any(|c| c.eq_ignore_ascii_case(letter)))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.center)?;
        for letter in &self.outside {
            write!(f, " {letter}")?;
        }
        Ok(())
    }
}

fn single_letter(s: &str) -> Result<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BeeError::malformed(format!(
            "expected a single letter, got {s:?}"
        ))),
    }
}
