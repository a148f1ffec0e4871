//! Session commands: start, guess, status and listing

use crate::core::{HintTable, Judgement, Rank};
use crate::error::Result;
use crate::session::SessionRecord;
use crate::store::{PuzzleKey, RecordStore, SessionKey};
use crate::wordlists::WordFrequency;
use chrono::NaiveDate;
use uuid::Uuid;

/// Judgement for each submitted word plus the session's standing afterwards
pub struct GuessOutcome {
    pub session_id: Uuid,
    pub judgements: Vec<(String, Judgement, u32)>,
    pub points: u32,
    pub max_points: u32,
    pub rank: Rank,
}

impl GuessOutcome {
    /// Points added by words that were new this round
    #[must_use]
    pub fn new_points(&self) -> u32 {
        self.judgements
            .iter()
            .filter(|(_, j, _)| j.is_accepted() && !j.is_already_gotten())
            .map(|(_, _, points)| points)
            .sum()
    }
}

/// Progress summary for one session
pub struct SessionStatus {
    pub session: SessionRecord,
    pub points: u32,
    pub max_points: u32,
    pub rank: Rank,
    pub words_percentage: f64,
    pub points_percentage: f64,
    pub answer_count: usize,
    pub hints: HintTable,
}

impl SessionStatus {
    /// Next rank and the points still needed to reach it
    #[must_use]
    pub fn next_rank(&self) -> Option<(Rank, u32)> {
        self.rank.next().map(|next| {
            let needed = next.min_points(self.max_points);
            (next, needed.saturating_sub(self.points))
        })
    }
}

/// One row of the session listing
pub struct SessionListing {
    pub session_id: Uuid,
    pub puzzle_day: NaiveDate,
    pub found: usize,
    pub primary: bool,
}

/// Start a session on the puzzle for `key`, optionally making it primary
///
/// # Errors
///
/// Returns `BeeError::UnknownStoreKey` if no puzzle matches, or a storage error.
pub fn new_session(store: &dyn RecordStore, key: &PuzzleKey, primary: bool) -> Result<SessionRecord> {
    let puzzle = store.resolve_puzzle(key)?;
    let session = SessionRecord::new(puzzle.day()).persist(store)?;
    if primary {
        session.make_primary_session()?;
    }
    Ok(session.record().clone())
}

/// Guess each word in turn against a stored session
///
/// # Errors
///
/// Returns `BeeError::UnknownStoreKey` for an unknown session,
/// `BeeError::DanglingSessionReference` if its puzzle is gone, or a storage error.
pub fn guess_words<S: AsRef<str>>(
    store: &dyn RecordStore,
    key: &SessionKey,
    words: &[S],
) -> Result<GuessOutcome> {
    let mut session = SessionRecord::retrieve_saved(store, key)?;
    let puzzle = session.puzzle()?;

    let mut judgements = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        let judgement = session.guess(word)?;
        judgements.push((word.to_string(), judgement, puzzle.point_value(word)));
    }

    Ok(GuessOutcome {
        session_id: session.session_id(),
        judgements,
        points: session.points_scored()?,
        max_points: puzzle.max_points(),
        rank: session.ranking()?,
    })
}

/// Points, rank, percentages and remaining hints for a session
///
/// # Errors
///
/// Returns `BeeError::UnknownStoreKey` for an unknown session or
/// `BeeError::DanglingSessionReference` if its puzzle is gone.
pub fn session_status(store: &dyn RecordStore, key: &SessionKey) -> Result<SessionStatus> {
    let session = SessionRecord::retrieve_saved(store, key)?;
    let puzzle = session.puzzle()?;
    let record = session.record();

    Ok(SessionStatus {
        points: record.points_scored(&puzzle)?,
        max_points: puzzle.max_points(),
        rank: record.ranking(&puzzle)?,
        words_percentage: record.percentage_words_gotten(&puzzle)?,
        points_percentage: record.points_scored_percentage(&puzzle)?,
        answer_count: puzzle.answers().len(),
        hints: record.unguessed_hints(&puzzle)?,
        session: record.clone(),
    })
}

/// Words the session has not found, rarest first when a frequency list is given
///
/// # Errors
///
/// Returns `BeeError::UnknownStoreKey` for an unknown session or
/// `BeeError::DanglingSessionReference` if its puzzle is gone.
pub fn remaining_words(
    store: &dyn RecordStore,
    key: &SessionKey,
    frequency: Option<&WordFrequency>,
) -> Result<Vec<String>> {
    let session = SessionRecord::retrieve_saved(store, key)?;
    let puzzle = session.puzzle()?;
    match frequency {
        Some(frequency) => session.unguessed_words_by_rarity(&puzzle, frequency),
        None => session.unguessed_words(),
    }
}

/// Every stored session, flagging the primary one
///
/// # Errors
///
/// Returns a storage error if the store cannot be read.
pub fn list_sessions(store: &dyn RecordStore) -> Result<Vec<SessionListing>> {
    let primary = store.primary_session_id()?;
    let mut listings = Vec::new();
    for session_id in store.list_sessions()? {
        if let Some(session) = store.get_session(session_id)? {
            listings.push(SessionListing {
                session_id,
                puzzle_day: session.puzzle_day(),
                found: session.gotten_words().len(),
                primary: primary == Some(session_id),
            });
        }
    }
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeeError;
    use crate::puzzle::fixtures::puzzle;
    use crate::store::MemoryStore;

    fn store_with_puzzle() -> MemoryStore {
        let store = MemoryStore::new();
        store.save_puzzle(&puzzle()).unwrap();
        store
    }

    #[test]
    fn new_primary_session() {
        let store = store_with_puzzle();
        let session = new_session(&store, &PuzzleKey::Latest, true).unwrap();
        assert_eq!(store.primary_session_id().unwrap(), Some(session.session_id()));
        assert!(session.gotten_words().is_empty());
    }

    #[test]
    fn new_session_without_puzzle() {
        let store = MemoryStore::new();
        assert!(matches!(
            new_session(&store, &PuzzleKey::Latest, true),
            Err(BeeError::UnknownStoreKey { .. })
        ));
    }

    #[test]
    fn guess_words_scores_and_saves() {
        let store = store_with_puzzle();
        new_session(&store, &PuzzleKey::Latest, true).unwrap();

        let outcome = guess_words(&store, &SessionKey::Primary, &["chunked", "hunk", "hunk", "dunk"]).unwrap();
        assert_eq!(outcome.points, 15);
        assert_eq!(outcome.rank, Rank::Good);
        assert_eq!(outcome.new_points(), 15);
        assert!(outcome.judgements[0].1.is_pangram());
        assert!(outcome.judgements[2].1.is_already_gotten());
        assert!(!outcome.judgements[3].1.is_accepted());

        let saved = store.resolve_session(&SessionKey::Primary).unwrap();
        assert_eq!(saved.gotten_words().len(), 2);
    }

    #[test]
    fn status_reports_next_rank() {
        let store = store_with_puzzle();
        new_session(&store, &PuzzleKey::Latest, true).unwrap();
        guess_words(&store, &SessionKey::Primary, &["chunked", "hunk"]).unwrap();

        let status = session_status(&store, &SessionKey::Primary).unwrap();
        assert_eq!(status.points, 15);
        assert_eq!(status.max_points, 127);
        assert_eq!(status.answer_count, 21);
        assert_eq!(status.hints.total(), 19);
        assert_eq!(status.next_rank(), Some((Rank::Solid, 5)));
    }

    #[test]
    fn remaining_words_by_frequency() {
        let store = store_with_puzzle();
        new_session(&store, &PuzzleKey::Latest, true).unwrap();
        guess_words(&store, &SessionKey::Primary, &["hunk", "chunk"]).unwrap();

        let alphabetical = remaining_words(&store, &SessionKey::Primary, None).unwrap();
        assert_eq!(alphabetical.len(), 19);
        assert_eq!(alphabetical[0], "check");

        let frequency = WordFrequency::from_ranked(["unheeded", "check"]);
        let rarest = remaining_words(&store, &SessionKey::Primary, Some(&frequency)).unwrap();
        assert_eq!(rarest.len(), 19);
        assert_eq!(rarest[..2], ["checked", "cheek"]);
        assert_eq!(rarest[17..], ["check", "unheeded"]);
    }

    #[test]
    fn listing_marks_primary() {
        let store = store_with_puzzle();
        let a = new_session(&store, &PuzzleKey::Latest, false).unwrap();
        let b = new_session(&store, &PuzzleKey::Latest, true).unwrap();
        guess_words(&store, &SessionKey::Id(a.session_id()), &["hunk"]).unwrap();

        let listings = list_sessions(&store).unwrap();
        assert_eq!(listings.len(), 2);
        let row_a = listings.iter().find(|l| l.session_id == a.session_id()).unwrap();
        let row_b = listings.iter().find(|l| l.session_id == b.session_id()).unwrap();
        assert_eq!((row_a.found, row_a.primary), (1, false));
        assert_eq!((row_b.found, row_b.primary), (0, true));
    }
}
