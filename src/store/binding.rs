//! Write-through binding of records to a store
//!
//! A record starts unbound: mutations stay in memory. Binding it to a store
//! saves it once and wraps it in [`Bound`], which hands out only read access
//! to the record and routes every mutation through a method that saves the
//! full record before returning. There is no way back to the unbound state.

use super::{PuzzleKey, RecordStore, SessionKey};
use crate::core::{HintTable, Judgement, Rank};
use crate::error::{BeeError, Result};
use crate::puzzle::PuzzleRecord;
use crate::render::{RenderedImage, Renderer};
use crate::session::{GuessReport, SessionRecord};
use serde_json::Value;
use std::ops::Deref;
use tracing::{info, warn};

/// A record that knows how to write itself to a store
pub trait Persist {
    /// Overwrite the stored copy with this one
    ///
    /// # Errors
    /// Returns an error if the store cannot write.
    fn write_to(&self, store: &dyn RecordStore) -> Result<()>;

    /// Short description for logs
    fn describe(&self) -> String;
}

impl Persist for PuzzleRecord {
    fn write_to(&self, store: &dyn RecordStore) -> Result<()> {
        store.save_puzzle(self)
    }

    fn describe(&self) -> String {
        format!("puzzle {}", self.day())
    }
}

impl Persist for SessionRecord {
    fn write_to(&self, store: &dyn RecordStore) -> Result<()> {
        store.save_session(self)
    }

    fn describe(&self) -> String {
        format!("session {}", self.session_id())
    }
}

/// A record bound to a store; every mutation is saved before it returns
///
/// Changes are staged on a copy and only replace the bound record once the
/// save succeeds, so after a failed save both sides hold the last committed
/// state and the same change can be retried.
pub struct Bound<'s, R: Persist> {
    record: R,
    store: &'s dyn RecordStore,
}

impl<'s, R: Persist> Bound<'s, R> {
    /// Save `record` to `store` and keep it bound there
    ///
    /// # Errors
    /// Returns an error if the initial save fails.
    pub fn bind(record: R, store: &'s dyn RecordStore) -> Result<Self> {
        record.write_to(store)?;
        info!(record = %record.describe(), "bound to store");
        Ok(Self { record, store })
    }

    /// Wrap a record that was just read from `store`
    fn loaded(record: R, store: &'s dyn RecordStore) -> Self {
        Self { record, store }
    }

    #[must_use]
    pub fn record(&self) -> &R {
        &self.record
    }

    #[must_use]
    pub fn store(&self) -> &'s dyn RecordStore {
        self.store
    }

    /// Apply a mutation to a copy, save it, then keep it
    fn mutate<T>(&mut self, change: impl FnOnce(&mut R) -> T) -> Result<T>
    where
        R: Clone,
    {
        let mut staged = self.record.clone();
        let out = change(&mut staged);
        staged.write_to(self.store)?;
        self.record = staged;
        Ok(out)
    }
}

impl<R: Persist> Deref for Bound<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.record
    }
}

impl PuzzleRecord {
    /// Bind this puzzle to `store`, saving it now and on every later change
    ///
    /// # Errors
    /// Returns an error if the initial save fails.
    pub fn persist(self, store: &dyn RecordStore) -> Result<Bound<'_, Self>> {
        Bound::bind(self, store)
    }

    /// Load a puzzle by day or `latest`, already bound to `store`
    ///
    /// # Errors
    /// Returns `BeeError::UnknownStoreKey` if nothing matches the key.
    pub fn retrieve_saved<'s>(
        store: &'s dyn RecordStore,
        key: &PuzzleKey,
    ) -> Result<Bound<'s, Self>> {
        Ok(Bound::loaded(store.resolve_puzzle(key)?, store))
    }
}

impl Bound<'_, PuzzleRecord> {
    /// Replace the image and save
    ///
    /// # Errors
    /// Returns an error if the save fails.
    pub fn set_image(&mut self, image: RenderedImage) -> Result<()> {
        self.mutate(|puzzle| puzzle.set_image(image))
    }

    /// Render with `renderer`, store the result and save
    ///
    /// # Errors
    /// Returns the renderer's error, or an error if the save fails.
    pub fn render(&mut self, renderer: &dyn Renderer) -> Result<()> {
        let image = renderer.render(&self.record)?;
        self.set_image(image)
    }
}

impl SessionRecord {
    /// Bind this session to `store`, saving it now and on every later change
    ///
    /// # Errors
    /// Returns an error if the initial save fails.
    pub fn persist(self, store: &dyn RecordStore) -> Result<Bound<'_, Self>> {
        Bound::bind(self, store)
    }

    /// Load a session by id or `primary`, already bound to `store`
    ///
    /// The session's puzzle is not checked here; a missing puzzle surfaces on
    /// the first call that needs it.
    ///
    /// # Errors
    /// Returns `BeeError::UnknownStoreKey` if nothing matches the key.
    pub fn retrieve_saved<'s>(
        store: &'s dyn RecordStore,
        key: &SessionKey,
    ) -> Result<Bound<'s, Self>> {
        Ok(Bound::loaded(store.resolve_session(key)?, store))
    }
}

impl Bound<'_, SessionRecord> {
    /// The session's puzzle, read from the store
    ///
    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn puzzle(&self) -> Result<PuzzleRecord> {
        let day = self.record.puzzle_day();
        match self.store.resolve_puzzle(&PuzzleKey::Day(day)) {
            Ok(puzzle) => Ok(puzzle),
            Err(BeeError::UnknownStoreKey { .. }) => {
                warn!(session_id = %self.record.session_id(), %day, "session puzzle missing");
                Err(BeeError::DanglingSessionReference {
                    session_id: self.record.session_id(),
                    day,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Judge a guess and save if it added a word
    ///
    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone, or
    /// an error if the save fails.
    pub fn guess(&mut self, word: &str) -> Result<Judgement> {
        let puzzle = self.puzzle()?;
        let judgement = puzzle.guess(word, self.record.gotten_words());
        if judgement.is_accepted() && !judgement.is_already_gotten() {
            return self.mutate(|session| session.guess(&puzzle, word))?;
        }
        Ok(judgement)
    }

    /// Guess every word in a message, saving once at the end
    ///
    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone, or
    /// an error if the save fails.
    pub fn respond_to_guesses(&mut self, text: &str) -> Result<GuessReport> {
        let puzzle = self.puzzle()?;
        self.mutate(|session| session.respond_to_guesses(&puzzle, text))?
    }

    /// Replace the metadata and save
    ///
    /// # Errors
    /// Returns an error if the save fails.
    pub fn set_metadata(&mut self, metadata: Option<Value>) -> Result<()> {
        self.mutate(|session| session.set_metadata(metadata))
    }

    /// Make this the store's primary session, replacing any previous one
    ///
    /// # Errors
    /// Returns an error if the pointer cannot be written.
    pub fn make_primary_session(&self) -> Result<()> {
        self.store.set_primary_session(self.record.session_id())?;
        info!(session_id = %self.record.session_id(), "primary session set");
        Ok(())
    }

    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn percentage_words_gotten(&self) -> Result<f64> {
        self.record.percentage_words_gotten(&self.puzzle()?)
    }

    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn points_scored(&self) -> Result<u32> {
        self.record.points_scored(&self.puzzle()?)
    }

    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn points_scored_percentage(&self) -> Result<f64> {
        self.record.points_scored_percentage(&self.puzzle()?)
    }

    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn ranking(&self) -> Result<Rank> {
        self.record.ranking(&self.puzzle()?)
    }

    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn unguessed_words(&self) -> Result<Vec<String>> {
        self.record.unguessed_words(&self.puzzle()?)
    }

    /// # Errors
    /// Returns `BeeError::DanglingSessionReference` if the puzzle is gone.
    pub fn unguessed_hints(&self) -> Result<HintTable> {
        self.record.unguessed_hints(&self.puzzle()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JudgementFlag::{Accepted, AlreadyGotten, Pangram};
    use crate::puzzle::fixtures::puzzle;
    use crate::render::TextHiveRenderer;
    use crate::store::{MemoryStore, PointerSlot, SqliteStore};
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::io;
    use uuid::Uuid;

    /// Memory store that can be told to fail its next session write
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_next_session_put: Cell<bool>,
    }

    impl RecordStore for FlakyStore {
        fn put_puzzle(&self, puzzle: &PuzzleRecord) -> Result<()> {
            self.inner.put_puzzle(puzzle)
        }
        fn get_puzzle(&self, day: NaiveDate) -> Result<Option<PuzzleRecord>> {
            self.inner.get_puzzle(day)
        }
        fn remove_puzzle(&self, day: NaiveDate) -> Result<bool> {
            self.inner.remove_puzzle(day)
        }
        fn list_days(&self) -> Result<Vec<NaiveDate>> {
            self.inner.list_days()
        }
        fn put_session(&self, session: &SessionRecord) -> Result<()> {
            if self.fail_next_session_put.replace(false) {
                return Err(BeeError::Io(io::Error::other("disk full")));
            }
            self.inner.put_session(session)
        }
        fn get_session(&self, session_id: Uuid) -> Result<Option<SessionRecord>> {
            self.inner.get_session(session_id)
        }
        fn remove_session(&self, session_id: Uuid) -> Result<bool> {
            self.inner.remove_session(session_id)
        }
        fn list_sessions(&self) -> Result<Vec<Uuid>> {
            self.inner.list_sessions()
        }
        fn get_pointer(&self, slot: PointerSlot) -> Result<Option<String>> {
            self.inner.get_pointer(slot)
        }
        fn set_pointer(&self, slot: PointerSlot, value: Option<&str>) -> Result<()> {
            self.inner.set_pointer(slot, value)
        }
    }

    #[test]
    fn unbound_changes_stay_in_memory() {
        let store = MemoryStore::new();
        let puzzle = puzzle();
        let mut session = SessionRecord::new(puzzle.day());
        session.guess(&puzzle, "hunk").unwrap();
        assert!(store.get_session(session.session_id()).unwrap().is_none());
    }

    #[test]
    fn persist_saves_immediately() {
        let store = MemoryStore::new();
        let bound = puzzle().persist(&store).unwrap();
        assert_eq!(store.get_puzzle(bound.day()).unwrap().as_ref(), Some(bound.record()));
        assert_eq!(store.latest_day().unwrap(), Some(bound.day()));
    }

    #[test]
    fn bound_puzzle_saves_image() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut bound = puzzle().persist(&store).unwrap();
        bound.render(&TextHiveRenderer).unwrap();

        let saved = store.get_puzzle(bound.day()).unwrap().unwrap();
        assert_eq!(saved.image_format(), Some("txt"));
        assert_eq!(saved.image(), bound.image());

        bound
            .set_image(RenderedImage::new(b"GIF89a".to_vec(), "gif"))
            .unwrap();
        let saved = store.get_puzzle(bound.day()).unwrap().unwrap();
        assert_eq!(saved.image_format(), Some("gif"));
    }

    #[test]
    fn bound_session_writes_through() {
        let store = SqliteStore::open_in_memory().unwrap();
        let puzzle = puzzle().persist(&store).unwrap();
        let mut session = SessionRecord::new(puzzle.day()).persist(&store).unwrap();

        assert_eq!(
            session.guess("chunked").unwrap(),
            Judgement::from_flags(&[Accepted, Pangram])
        );
        let saved = store.get_session(session.session_id()).unwrap().unwrap();
        assert!(saved.gotten_words().contains("chunked"));

        assert_eq!(
            session.guess("chunked").unwrap(),
            Judgement::from_flags(&[Accepted, Pangram, AlreadyGotten])
        );
        assert_eq!(session.gotten_words().len(), 1);

        session
            .set_metadata(Some(serde_json::json!({"message_id": 99})))
            .unwrap();
        let saved = store.get_session(session.session_id()).unwrap().unwrap();
        assert_eq!(saved, *session.record());
    }

    #[test]
    fn bound_session_queries() {
        let store = MemoryStore::new();
        let _puzzle = puzzle().persist(&store).unwrap();
        let mut session = SessionRecord::new(puzzle().day()).persist(&store).unwrap();
        let report = session.respond_to_guesses("chunk chunked hunk").unwrap();
        assert_eq!(report.new_points, 20);

        let saved = store.get_session(session.session_id()).unwrap().unwrap();
        assert_eq!(saved.gotten_words().len(), 3);
        assert_eq!(session.points_scored().unwrap(), 20);
        assert_eq!(session.ranking().unwrap(), Rank::Solid);
        assert!((session.percentage_words_gotten().unwrap() - 300.0 / 21.0).abs() < 1e-9);
        assert!((session.points_scored_percentage().unwrap() - 2000.0 / 127.0).abs() < 1e-9);
        assert_eq!(session.unguessed_words().unwrap().len(), 18);
        assert_eq!(session.unguessed_hints().unwrap().pangram_count(), 1);
    }

    #[test]
    fn primary_session_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        let puzzle = puzzle().persist(&store).unwrap();
        let a = SessionRecord::new(puzzle.day()).persist(&store).unwrap();
        let b = SessionRecord::new(puzzle.day()).persist(&store).unwrap();

        a.make_primary_session().unwrap();
        let primary = SessionRecord::retrieve_saved(&store, &SessionKey::Primary).unwrap();
        assert_eq!(primary.session_id(), a.session_id());

        b.make_primary_session().unwrap();
        let primary = SessionRecord::retrieve_saved(&store, &SessionKey::Primary).unwrap();
        assert_eq!(primary.session_id(), b.session_id());
    }

    #[test]
    fn retrieved_records_are_bound() {
        let store = SqliteStore::open_in_memory().unwrap();
        let day = puzzle().persist(&store).unwrap().day();
        let id = SessionRecord::new(day).persist(&store).unwrap().session_id();

        let mut session = SessionRecord::retrieve_saved(&store, &SessionKey::Id(id)).unwrap();
        session.guess("hunk").unwrap();
        let saved = store.get_session(id).unwrap().unwrap();
        assert!(saved.gotten_words().contains("hunk"));

        let mut latest = PuzzleRecord::retrieve_saved(&store, &PuzzleKey::Latest).unwrap();
        assert_eq!(latest.record(), &puzzle());
        latest
            .set_image(RenderedImage::new(b"<svg/>".to_vec(), "svg"))
            .unwrap();
        assert_eq!(
            store.get_puzzle(day).unwrap().unwrap().image_format(),
            Some("svg")
        );
    }

    #[test]
    fn dangling_reference_surfaces_on_use() {
        let store = MemoryStore::new();
        let day = puzzle().persist(&store).unwrap().day();
        let id = SessionRecord::new(day).persist(&store).unwrap().session_id();
        store.delete_puzzle(day).unwrap();

        // Loading the session itself still works
        let mut session = SessionRecord::retrieve_saved(&store, &SessionKey::Id(id)).unwrap();
        assert!(matches!(
            session.guess("hunk"),
            Err(BeeError::DanglingSessionReference { .. })
        ));
        assert!(matches!(
            session.ranking(),
            Err(BeeError::DanglingSessionReference { .. })
        ));
    }

    #[test]
    fn unknown_keys_surface() {
        let store = MemoryStore::new();
        assert!(matches!(
            PuzzleRecord::retrieve_saved(&store, &PuzzleKey::Latest),
            Err(BeeError::UnknownStoreKey { kind: "puzzle", .. })
        ));
        assert!(matches!(
            SessionRecord::retrieve_saved(&store, &SessionKey::Primary),
            Err(BeeError::UnknownStoreKey { kind: "session", .. })
        ));
    }

    #[test]
    fn failed_guess_save_can_be_retried() {
        let store = FlakyStore::default();
        let day = puzzle().persist(&store).unwrap().day();
        let mut session = SessionRecord::new(day).persist(&store).unwrap();
        let id = session.session_id();

        store.fail_next_session_put.set(true);
        assert!(matches!(session.guess("hunk"), Err(BeeError::Io(_))));
        assert!(session.gotten_words().is_empty());
        assert!(store.get_session(id).unwrap().unwrap().gotten_words().is_empty());

        assert_eq!(session.guess("hunk").unwrap(), Judgement::from_flags(&[Accepted]));
        let saved = store.get_session(id).unwrap().unwrap();
        assert!(saved.gotten_words().contains("hunk"));
        assert_eq!(saved, *session.record());
    }

    #[test]
    fn failed_batch_save_leaves_record_unchanged() {
        let store = FlakyStore::default();
        let day = puzzle().persist(&store).unwrap().day();
        let mut session = SessionRecord::new(day).persist(&store).unwrap();

        store.fail_next_session_put.set(true);
        assert!(session.respond_to_guesses("hunk chunked").is_err());
        assert!(session.gotten_words().is_empty());
        assert!(session.set_metadata(Some(serde_json::json!(1))).is_ok());

        let report = session.respond_to_guesses("hunk chunked").unwrap();
        assert_eq!(report.reactions()[0], "👍");
        assert_eq!(session.gotten_words().len(), 2);
    }
}
