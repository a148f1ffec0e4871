//! Error type shared by the puzzle engine, the stores and the collaborators.

use chrono::NaiveDate;
use uuid::Uuid;

/// Every failure the library surfaces to its callers.
///
/// Classification and scoring never fail; errors only arise at construction
/// and persistence boundaries.
#[derive(Debug, thiserror::Error)]
pub enum BeeError {
    /// Raw puzzle data violated a letter or answer invariant.
    #[error("malformed puzzle data: {0}")]
    MalformedPuzzleData(String),

    /// A day, session id, `latest` or `primary` lookup found nothing.
    #[error("no saved {kind} for key \"{key}\"")]
    UnknownStoreKey { kind: &'static str, key: String },

    /// A session points at a puzzle day that is no longer in the store.
    #[error("session {session_id} refers to puzzle {day}, which is not in the store")]
    DanglingSessionReference { session_id: Uuid, day: NaiveDate },

    /// A session was asked to judge a guess against another day's puzzle.
    #[error("session is for puzzle {expected}, got puzzle {actual}")]
    PuzzleMismatch {
        expected: NaiveDate,
        actual: NaiveDate,
    },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(String),
}

impl BeeError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPuzzleData(message.into())
    }

    pub(crate) fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownStoreKey {
            kind,
            key: key.into(),
        }
    }
}

/// Convenience alias for `Result<T, BeeError>`.
pub type Result<T> = std::result::Result<T, BeeError>;
