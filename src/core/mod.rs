//! Core domain types for the puzzle
//!
//! Pure, in-memory building blocks: the seven-letter alphabet, guess judgements,
//! scoring and ranking, and hint-table aggregation. Nothing here touches a store.

mod hints;
mod judgement;
mod letters;
mod scoring;

pub use hints::{HintTable, cardinal_words};
pub use judgement::{Judgement, JudgementFlag, evaluate_guess};
pub use letters::{LetterSet, MIN_WORD_LENGTH, normalize_word};
pub use scoring::{PANGRAM_BONUS, Rank, any_words_to_points, word_points};
