//! Puzzle data sources
//!
//! A source hands back raw puzzle data; [`fetch_puzzle`] validates it into a
//! [`PuzzleRecord`]. The built-in sources read the game-data JSON from a file
//! or from text, either bare, wrapped in a `"today"` object, or embedded in a
//! saved game page as `window.gameData = {...}</script>`.

use crate::error::{BeeError, Result};
use crate::puzzle::{PuzzleRecord, RawPuzzle};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const GAME_DATA_MARKER: &str = "window.gameData = ";
const SCRIPT_END: &str = "</script>";

/// Anything that can supply one day's raw puzzle data
pub trait PuzzleSource {
    /// # Errors
    /// Returns an error if the data cannot be read or is not puzzle-shaped.
    fn fetch(&self) -> Result<RawPuzzle>;
}

/// Game data stored in a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PuzzleSource for FileSource {
    fn fetch(&self) -> Result<RawPuzzle> {
        let text = fs::read_to_string(&self.path)?;
        parse_game_data(&text)
    }
}

/// Game data already in memory
#[derive(Debug, Clone)]
pub struct TextSource(pub String);

impl PuzzleSource for TextSource {
    fn fetch(&self) -> Result<RawPuzzle> {
        parse_game_data(&self.0)
    }
}

/// Pull raw puzzle data out of JSON or a game page
///
/// # Errors
/// Returns `BeeError::MalformedPuzzleData` if no puzzle-shaped JSON is found.
pub fn parse_game_data(text: &str) -> Result<RawPuzzle> {
    let json = match text.find(GAME_DATA_MARKER) {
        Some(start) => {
            let rest = &text[start + GAME_DATA_MARKER.len()..];
            let end = rest.find(SCRIPT_END).unwrap_or(rest.len());
            &rest[..end]
        }
        None => text,
    };

    let mut value: Value = serde_json::from_str(json.trim().trim_end_matches(';'))
        .map_err(|e| BeeError::malformed(format!("game data is not JSON: {e}")))?;
    if let Some(today) = value.get_mut("today") {
        value = today.take();
    }

    serde_json::from_value(value)
        .map_err(|e| BeeError::malformed(format!("game data is missing fields: {e}")))
}

/// Fetch from `source` and validate into a puzzle
///
/// # Errors
/// Returns the source's error, or `BeeError::MalformedPuzzleData` if the
/// letters or answers break the puzzle invariants.
pub fn fetch_puzzle(source: &dyn PuzzleSource) -> Result<PuzzleRecord> {
    let raw = source.fetch()?;
    let puzzle = PuzzleRecord::from_raw(&raw)?;
    info!(%puzzle, "fetched puzzle");
    Ok(puzzle)
}
