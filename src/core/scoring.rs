//! Point values and ranking tiers

use super::letters::{MIN_WORD_LENGTH, normalize_word};
use std::fmt;

/// Flat bonus added to a pangram's length score
pub const PANGRAM_BONUS: u32 = 7;

/// Points for one accepted word
///
/// Four-letter words score 1; longer words score their length; pangrams add
/// [`PANGRAM_BONUS`] on top.
///
/// # Examples
/// ```
/// use spelling_bee::core::word_points;
///
/// assert_eq!(word_points("hunk", false), 1);
/// assert_eq!(word_points("chunk", false), 5);
/// assert_eq!(word_points("chunked", true), 14);
/// ```
#[must_use]
pub fn word_points(word: &str, pangram: bool) -> u32 {
    let length = word.chars().count() as u32;
    let base = if length <= MIN_WORD_LENGTH as u32 {
        1
    } else {
        length
    };
    if pangram { base + PANGRAM_BONUS } else { base }
}

/// Score words by length alone, without checking any answer list
///
/// Pangram status depends on a puzzle, so no bonus is applied here.
#[must_use]
pub fn any_words_to_points<S: AsRef<str>>(words: &[S]) -> u32 {
    words
        .iter()
        .map(|w| word_points(&normalize_word(w.as_ref()), false))
        .sum()
}

/// Ranking tiers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Beginner,
    GoodStart,
    MovingUp,
    Good,
    Solid,
    Nice,
    Great,
    Amazing,
    Genius,
    QueenBee,
}

impl Rank {
    /// Breakpoints as (minimum percentage of max points, rank), ascending
    pub const TABLE: [(f64, Self); 10] = [
        (0.0, Self::Beginner),
        (2.0, Self::GoodStart),
        (5.0, Self::MovingUp),
        (8.0, Self::Good),
        (15.0, Self::Solid),
        (25.0, Self::Nice),
        (40.0, Self::Great),
        (50.0, Self::Amazing),
        (70.0, Self::Genius),
        (100.0, Self::QueenBee),
    ];

    /// Highest rank whose threshold does not exceed `percentage`
    ///
    /// A percentage exactly on a breakpoint earns the higher rank.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        Self::TABLE
            .iter()
            .rev()
            .find(|(threshold, _)| *threshold <= percentage)
            .map_or(Self::Beginner, |&(_, rank)| rank)
    }

    /// Rank for `points` out of `max_points`
    #[must_use]
    pub fn from_points(points: u32, max_points: u32) -> Self {
        if max_points == 0 {
            return Self::Beginner;
        }
        Self::from_percentage(100.0 * f64::from(points) / f64::from(max_points))
    }

    /// Percentage of max points this rank starts at
    #[must_use]
    pub fn threshold(self) -> f64 {
        Self::TABLE
            .iter()
            .find(|(_, rank)| *rank == self)
            .map_or(0.0, |&(threshold, _)| threshold)
    }

    /// The next rank up, if any
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::TABLE
            .iter()
            .map(|&(_, rank)| rank)
            .find(|rank| *rank > self)
    }

    /// Points required to reach this rank
    #[must_use]
    pub fn min_points(self, max_points: u32) -> u32 {
        (self.threshold() * f64::from(max_points) / 100.0).ceil() as u32
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::GoodStart => "Good Start",
            Self::MovingUp => "Moving Up",
            Self::Good => "Good",
            Self::Solid => "Solid",
            Self::Nice => "Nice",
            Self::Great => "Great",
            Self::Amazing => "Amazing",
            Self::Genius => "Genius",
            Self::QueenBee => "Queen Bee",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
