//! Persistent storage of puzzles and sessions
//!
//! A store is a key-addressable table of puzzles (keyed by day) and sessions
//! (keyed by session id), plus two single-value pointer slots: the latest
//! saved day and the primary session. Saves overwrite the whole record for a
//! key; there is no merging.
//!
//! Stores assume a single writer. Two bound copies of the same record in one
//! or more processes will overwrite each other's saves, last write wins;
//! coordinating writers is the caller's job.

mod binding;
mod keys;
mod memory;
mod sqlite;

pub use binding::{Bound, Persist};
pub use keys::{PuzzleKey, SessionKey};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::{BeeError, Result};
use crate::puzzle::{PuzzleRecord, parse_day};
use crate::session::SessionRecord;
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

/// The single-value pointer slots a store keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointerSlot {
    LatestDay,
    PrimarySession,
}

impl PointerSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LatestDay => "latest_day",
            Self::PrimarySession => "primary_session",
        }
    }
}

/// Storage engine contract
///
/// The required methods are raw reads and writes. The provided methods layer
/// the pointer bookkeeping and key resolution on top of them, and are what the
/// rest of the crate calls.
pub trait RecordStore {
    /// Insert or overwrite the puzzle for its day
    ///
    /// # Errors
    /// Returns an error if the engine cannot write the record.
    fn put_puzzle(&self, puzzle: &PuzzleRecord) -> Result<()>;

    /// # Errors
    /// Returns an error if the engine cannot read or decode the record.
    fn get_puzzle(&self, day: NaiveDate) -> Result<Option<PuzzleRecord>>;

    /// Returns whether a record was removed
    ///
    /// # Errors
    /// Returns an error if the engine cannot delete the record.
    fn remove_puzzle(&self, day: NaiveDate) -> Result<bool>;

    /// Stored days, ascending
    ///
    /// # Errors
    /// Returns an error if the engine cannot list its keys.
    fn list_days(&self) -> Result<Vec<NaiveDate>>;

    /// Insert or overwrite the session for its id
    ///
    /// # Errors
    /// Returns an error if the engine cannot write the record.
    fn put_session(&self, session: &SessionRecord) -> Result<()>;

    /// # Errors
    /// Returns an error if the engine cannot read or decode the record.
    fn get_session(&self, session_id: Uuid) -> Result<Option<SessionRecord>>;

    /// Returns whether a record was removed
    ///
    /// # Errors
    /// Returns an error if the engine cannot delete the record.
    fn remove_session(&self, session_id: Uuid) -> Result<bool>;

    /// Stored session ids
    ///
    /// # Errors
    /// Returns an error if the engine cannot list its keys.
    fn list_sessions(&self) -> Result<Vec<Uuid>>;

    /// # Errors
    /// Returns an error if the engine cannot read the slot.
    fn get_pointer(&self, slot: PointerSlot) -> Result<Option<String>>;

    /// Set or clear a pointer slot
    ///
    /// # Errors
    /// Returns an error if the engine cannot write the slot.
    fn set_pointer(&self, slot: PointerSlot, value: Option<&str>) -> Result<()>;

    /// Save a puzzle, advancing the latest-day pointer if it is newer
    ///
    /// # Errors
    /// Returns an error if the engine cannot write.
    fn save_puzzle(&self, puzzle: &PuzzleRecord) -> Result<()> {
        self.put_puzzle(puzzle)?;
        if self.latest_day()?.is_none_or(|latest| puzzle.day() > latest) {
            let day = puzzle.day().format(crate::puzzle::DAY_FORMAT).to_string();
            self.set_pointer(PointerSlot::LatestDay, Some(&day))?;
        }
        debug!(day = %puzzle.day(), "saved puzzle");
        Ok(())
    }

    /// # Errors
    /// Returns an error if the engine cannot write.
    fn save_session(&self, session: &SessionRecord) -> Result<()> {
        self.put_session(session)?;
        debug!(
            session_id = %session.session_id(),
            words = session.gotten_words().len(),
            "saved session"
        );
        Ok(())
    }

    /// Delete a puzzle; sessions that refer to it are left alone
    ///
    /// # Errors
    /// Returns an error if the engine cannot delete or update the pointer.
    fn delete_puzzle(&self, day: NaiveDate) -> Result<bool> {
        let removed = self.remove_puzzle(day)?;
        if removed && self.latest_day()? == Some(day) {
            let newest = self.list_days()?.last().copied();
            let value = newest.map(|d| d.format(crate::puzzle::DAY_FORMAT).to_string());
            self.set_pointer(PointerSlot::LatestDay, value.as_deref())?;
        }
        Ok(removed)
    }

    /// Delete a session, clearing the primary pointer if it pointed there
    ///
    /// # Errors
    /// Returns an error if the engine cannot delete or update the pointer.
    fn delete_session(&self, session_id: Uuid) -> Result<bool> {
        let removed = self.remove_session(session_id)?;
        if removed && self.primary_session_id()? == Some(session_id) {
            self.set_pointer(PointerSlot::PrimarySession, None)?;
        }
        Ok(removed)
    }

    /// Greatest day ever saved and still present
    ///
    /// # Errors
    /// Returns an error if the slot cannot be read or holds a bad day.
    fn latest_day(&self) -> Result<Option<NaiveDate>> {
        self.get_pointer(PointerSlot::LatestDay)?
            .map(|day| parse_day(&day))
            .transpose()
    }

    /// # Errors
    /// Returns an error if the slot cannot be read or holds a bad id.
    fn primary_session_id(&self) -> Result<Option<Uuid>> {
        self.get_pointer(PointerSlot::PrimarySession)?
            .map(|id| Uuid::parse_str(&id).map_err(|_| BeeError::unknown_key("session", id)))
            .transpose()
    }

    /// Point the primary slot at `session_id`, replacing any previous primary
    ///
    /// # Errors
    /// Returns an error if the engine cannot write the slot.
    fn set_primary_session(&self, session_id: Uuid) -> Result<()> {
        self.set_pointer(PointerSlot::PrimarySession, Some(&session_id.to_string()))
    }

    /// Look a puzzle up by day or `latest`
    ///
    /// # Errors
    /// Returns `BeeError::UnknownStoreKey` if nothing matches.
    fn resolve_puzzle(&self, key: &PuzzleKey) -> Result<PuzzleRecord> {
        let day = match key {
            PuzzleKey::Day(day) => *day,
            PuzzleKey::Latest => self
                .latest_day()?
                .ok_or_else(|| BeeError::unknown_key("puzzle", key.to_string()))?,
        };
        debug!(%key, %day, "resolving puzzle");
        self.get_puzzle(day)?
            .ok_or_else(|| BeeError::unknown_key("puzzle", key.to_string()))
    }

    /// Look a session up by id or `primary`
    ///
    /// # Errors
    /// Returns `BeeError::UnknownStoreKey` if nothing matches.
    fn resolve_session(&self, key: &SessionKey) -> Result<SessionRecord> {
        let session_id = match key {
            SessionKey::Id(id) => *id,
            SessionKey::Primary => self
                .primary_session_id()?
                .ok_or_else(|| BeeError::unknown_key("session", key.to_string()))?,
        };
        debug!(%key, %session_id, "resolving session");
        self.get_session(session_id)?
            .ok_or_else(|| BeeError::unknown_key("session", key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::fixtures::{puzzle, raw_puzzle_on};

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn puzzle_on(s: &str) -> PuzzleRecord {
        PuzzleRecord::from_raw(&raw_puzzle_on(s)).unwrap()
    }

    /// Shared behaviour every engine must show
    pub(super) fn exercise_store(store: &dyn RecordStore) {
        assert!(matches!(
            store.resolve_puzzle(&PuzzleKey::Latest),
            Err(BeeError::UnknownStoreKey { .. })
        ));
        assert!(matches!(
            store.resolve_session(&SessionKey::Primary),
            Err(BeeError::UnknownStoreKey { .. })
        ));

        store.save_puzzle(&puzzle_on("2022-01-17")).unwrap();
        store.save_puzzle(&puzzle()).unwrap();
        // An older day saved later does not move `latest`
        assert_eq!(store.latest_day().unwrap(), Some(day("2022-01-17")));
        assert_eq!(store.list_days().unwrap(), vec![day("2022-01-16"), day("2022-01-17")]);

        let latest = store.resolve_puzzle(&PuzzleKey::Latest).unwrap();
        assert_eq!(latest.day(), day("2022-01-17"));
        let by_day = store.resolve_puzzle(&PuzzleKey::Day(day("2022-01-16"))).unwrap();
        assert_eq!(by_day, puzzle());

        // Overwrite, not duplicate
        store.save_puzzle(&puzzle()).unwrap();
        assert_eq!(store.list_days().unwrap().len(), 2);

        let session = SessionRecord::new(day("2022-01-16"));
        store.save_session(&session).unwrap();
        store.set_primary_session(session.session_id()).unwrap();
        let primary = store.resolve_session(&SessionKey::Primary).unwrap();
        assert_eq!(primary.session_id(), session.session_id());

        let other = SessionRecord::new(day("2022-01-16"));
        store.save_session(&other).unwrap();
        store.set_primary_session(other.session_id()).unwrap();
        assert_eq!(store.primary_session_id().unwrap(), Some(other.session_id()));
        assert_eq!(store.list_sessions().unwrap().len(), 2);

        // Deleting the latest puzzle falls back to the next newest
        assert!(store.delete_puzzle(day("2022-01-17")).unwrap());
        assert!(!store.delete_puzzle(day("2022-01-17")).unwrap());
        assert_eq!(store.latest_day().unwrap(), Some(day("2022-01-16")));

        // Deleting a puzzle leaves its sessions in place
        assert!(store.delete_puzzle(day("2022-01-16")).unwrap());
        assert_eq!(store.latest_day().unwrap(), None);
        assert!(store.get_session(session.session_id()).unwrap().is_some());

        assert!(store.delete_session(other.session_id()).unwrap());
        assert_eq!(store.primary_session_id().unwrap(), None);
        assert_eq!(store.list_sessions().unwrap(), vec![session.session_id()]);
    }

    #[test]
    fn unknown_day_key() {
        let store = MemoryStore::new();
        store.save_puzzle(&puzzle()).unwrap();
        let err = store
            .resolve_puzzle(&PuzzleKey::Day(day("1999-01-01")))
            .unwrap_err();
        assert_eq!(err.to_string(), "no saved puzzle for key \"1999-01-01\"");
    }

    #[test]
    fn unknown_session_id() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.resolve_session(&SessionKey::Id(Uuid::new_v4())),
            Err(BeeError::UnknownStoreKey { kind: "session", .. })
        ));
    }
}
