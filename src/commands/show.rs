//! Show a stored puzzle and its full hint table

use crate::core::HintTable;
use crate::error::Result;
use crate::puzzle::PuzzleRecord;
use crate::store::{PuzzleKey, RecordStore};

/// A puzzle with its hints over every answer
pub struct PuzzleSummary {
    pub puzzle: PuzzleRecord,
    pub hints: HintTable,
    pub reveal: bool,
}

/// Look up a puzzle by day or `latest`
///
/// # Errors
///
/// Returns `BeeError::UnknownStoreKey` if the key matches nothing.
pub fn show_puzzle(
    store: &dyn RecordStore,
    key: &PuzzleKey,
    reveal: bool,
) -> Result<PuzzleSummary> {
    let puzzle = store.resolve_puzzle(key)?;
    let hints = puzzle.hint_table();
    Ok(PuzzleSummary {
        puzzle,
        hints,
        reveal,
    })
}
