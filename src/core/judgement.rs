//! Guess judgements
//!
//! A judgement is a small closed set of flags stored in a single byte, one bit
//! per [`JudgementFlag`]. Judging a guess is a pure function of the answer
//! list, the pangram list and the words already found.

use super::letters::normalize_word;
use std::collections::BTreeSet;
use std::fmt;

/// One fact about a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JudgementFlag {
    Accepted,
    Unaccepted,
    AlreadyGotten,
    Pangram,
}

impl JudgementFlag {
    const ALL: [Self; 4] = [
        Self::Accepted,
        Self::Unaccepted,
        Self::AlreadyGotten,
        Self::Pangram,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::Accepted => 0b0001,
            Self::Unaccepted => 0b0010,
            Self::AlreadyGotten => 0b0100,
            Self::Pangram => 0b1000,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "accepted word",
            Self::Unaccepted => "unaccepted word",
            Self::AlreadyGotten => "already gotten",
            Self::Pangram => "pangram",
        }
    }
}

impl fmt::Display for JudgementFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of flags returned for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Judgement(u8);

impl Judgement {
    /// The judgement for any word outside the answer list
    pub const UNACCEPTED: Self = Self(0b0010);

    /// Build a judgement from explicit flags
    #[must_use]
    pub fn from_flags(flags: &[JudgementFlag]) -> Self {
        Self(flags.iter().fold(0, |bits, flag| bits | flag.bit()))
    }

    /// Raw bit value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, flag: JudgementFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        self.contains(JudgementFlag::Accepted)
    }

    #[inline]
    #[must_use]
    pub const fn is_pangram(self) -> bool {
        self.contains(JudgementFlag::Pangram)
    }

    #[inline]
    #[must_use]
    pub const fn is_already_gotten(self) -> bool {
        self.contains(JudgementFlag::AlreadyGotten)
    }

    #[must_use]
    const fn with(self, flag: JudgementFlag) -> Self {
        Self(self.0 | flag.bit())
    }

    /// Flags present, in declaration order
    pub fn flags(self) -> impl Iterator<Item = JudgementFlag> {
        JudgementFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.flags().map(JudgementFlag::label).collect();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

/// Judge one guess
///
/// Words outside `answers` get exactly [`Judgement::UNACCEPTED`], whatever
/// their letters. Answers are `Accepted`, plus `Pangram` when listed in
/// `pangrams`, plus `AlreadyGotten` when present in `gotten`.
///
/// # Examples
/// ```
/// use spelling_bee::core::{Judgement, JudgementFlag, evaluate_guess};
/// use std::collections::BTreeSet;
///
/// let answers: BTreeSet<String> = ["hunk", "chunked"].map(String::from).into();
/// let pangrams: BTreeSet<String> = ["chunked"].map(String::from).into();
///
/// let judgement = evaluate_guess("Chunked", &answers, &pangrams, &BTreeSet::new());
/// assert_eq!(
///     judgement,
///     Judgement::from_flags(&[JudgementFlag::Accepted, JudgementFlag::Pangram])
/// );
/// ```
#[must_use]
pub fn evaluate_guess(
    word: &str,
    answers: &BTreeSet<String>,
    pangrams: &BTreeSet<String>,
    gotten: &BTreeSet<String>,
) -> Judgement {
    let word = normalize_word(word);

    if !answers.contains(&word) {
        return Judgement::UNACCEPTED;
    }

    let mut judgement = Judgement::default().with(JudgementFlag::Accepted);
    if pangrams.contains(&word) {
        judgement = judgement.with(JudgementFlag::Pangram);
    }
    if gotten.contains(&word) {
        judgement = judgement.with(JudgementFlag::AlreadyGotten);
    }
    judgement
}
