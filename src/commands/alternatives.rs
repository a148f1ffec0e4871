//! Lexicon words the puzzle did not accept

use crate::error::Result;
use crate::store::{PuzzleKey, RecordStore};
use crate::wordlists::alternative_answers;
use chrono::NaiveDate;

pub struct AlternativesResult {
    pub day: NaiveDate,
    pub lexicon_size: usize,
    pub words: Vec<String>,
}

/// Filter `lexicon` against the puzzle for `key`
///
/// # Errors
///
/// Returns `BeeError::UnknownStoreKey` if the key matches nothing.
pub fn find_alternatives(
    store: &dyn RecordStore,
    key: &PuzzleKey,
    lexicon: &[String],
) -> Result<AlternativesResult> {
    let puzzle = store.resolve_puzzle(key)?;
    Ok(AlternativesResult {
        day: puzzle.day(),
        lexicon_size: lexicon.len(),
        words: alternative_answers(&puzzle, lexicon),
    })
}
