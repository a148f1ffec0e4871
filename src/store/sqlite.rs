//! SQLite-backed store
//!
//! One file per store. List-valued fields are kept as JSON text; the rendered
//! image is a BLOB next to its format name.

use super::{PointerSlot, RecordStore};
use crate::error::Result;
use crate::puzzle::{DAY_FORMAT, PuzzleRecord, RawPuzzle};
use crate::session::SessionRecord;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS puzzles (
        day TEXT PRIMARY KEY,
        center TEXT NOT NULL,
        outside TEXT NOT NULL,
        answers TEXT NOT NULL,
        pangrams TEXT NOT NULL,
        image BLOB,
        image_format TEXT
    );
    CREATE TABLE IF NOT EXISTS sessions (
        session_id BLOB PRIMARY KEY,
        puzzle_day TEXT NOT NULL,
        gotten_words TEXT NOT NULL,
        metadata TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_sessions_day ON sessions (puzzle_day);
    CREATE TABLE IF NOT EXISTS pointers (
        slot TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
";

/// Store kept in a single SQLite database file
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path`
    ///
    /// # Errors
    /// Returns `BeeError::Storage` if the file cannot be opened or the schema
    /// cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened puzzle store");
        Self::init(conn)
    }

    /// Fresh private database that lives as long as the store
    ///
    /// # Errors
    /// Returns `BeeError::Storage` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

struct PuzzleRow {
    center: String,
    outside: String,
    answers: String,
    pangrams: String,
    image: Option<Vec<u8>>,
    image_format: Option<String>,
}

impl PuzzleRow {
    fn into_domain(self, day: NaiveDate) -> Result<PuzzleRecord> {
        let raw = RawPuzzle {
            day: day.format(DAY_FORMAT).to_string(),
            center: self.center,
            outside: serde_json::from_str(&self.outside)?,
            pangrams: serde_json::from_str(&self.pangrams)?,
            answers: serde_json::from_str(&self.answers)?,
        };
        let mut puzzle = PuzzleRecord::from_raw(&raw)?;
        puzzle.restore_image(self.image, self.image_format);
        Ok(puzzle)
    }
}

struct SessionRow {
    puzzle_day: NaiveDate,
    gotten_words: String,
    metadata: Option<String>,
}

impl SessionRow {
    fn into_domain(self, session_id: Uuid) -> Result<SessionRecord> {
        let gotten: BTreeSet<String> = serde_json::from_str(&self.gotten_words)?;
        let metadata = self
            .metadata
            .map(|m| serde_json::from_str(&m))
            .transpose()?;
        Ok(SessionRecord::restore(
            session_id,
            self.puzzle_day,
            gotten,
            metadata,
        ))
    }
}

impl RecordStore for SqliteStore {
    fn put_puzzle(&self, puzzle: &PuzzleRecord) -> Result<()> {
        let letters = puzzle.letters();
        let outside: Vec<String> = letters.outside().iter().map(char::to_string).collect();
        self.conn.execute(
            "INSERT OR REPLACE INTO puzzles
                (day, center, outside, answers, pangrams, image, image_format)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                puzzle.day(),
                letters.center().to_string(),
                serde_json::to_string(&outside)?,
                serde_json::to_string(puzzle.answers())?,
                serde_json::to_string(puzzle.pangrams())?,
                puzzle.image(),
                puzzle.image_format(),
            ],
        )?;
        Ok(())
    }

    fn get_puzzle(&self, day: NaiveDate) -> Result<Option<PuzzleRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT center, outside, answers, pangrams, image, image_format
                 FROM puzzles WHERE day = ?1",
                params![day],
                |row| {
                    Ok(PuzzleRow {
                        center: row.get(0)?,
                        outside: row.get(1)?,
                        answers: row.get(2)?,
                        pangrams: row.get(3)?,
                        image: row.get(4)?,
                        image_format: row.get(5)?,
                    })
                },
            )
            .optional()?;
        row.map(|r| r.into_domain(day)).transpose()
    }

    fn remove_puzzle(&self, day: NaiveDate) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM puzzles WHERE day = ?1", params![day])?;
        Ok(changed > 0)
    }

    fn list_days(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare("SELECT day FROM puzzles ORDER BY day")?;
        let days = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<NaiveDate>>>()?;
        Ok(days)
    }

    fn put_session(&self, session: &SessionRecord) -> Result<()> {
        let metadata = session
            .metadata()
            .map(serde_json::to_string)
            .transpose()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO sessions (session_id, puzzle_day, gotten_words, metadata)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                session.session_id(),
                session.puzzle_day(),
                serde_json::to_string(session.gotten_words())?,
                metadata,
            ],
        )?;
        Ok(())
    }

    fn get_session(&self, session_id: Uuid) -> Result<Option<SessionRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT puzzle_day, gotten_words, metadata FROM sessions WHERE session_id = ?1",
                params![session_id],
                |row| {
                    Ok(SessionRow {
                        puzzle_day: row.get(0)?,
                        gotten_words: row.get(1)?,
                        metadata: row.get(2)?,
                    })
                },
            )
            .optional()?;
        row.map(|r| r.into_domain(session_id)).transpose()
    }

    fn remove_session(&self, session_id: Uuid) -> Result<bool> {
        let changed = self.conn.execute(
            "DELETE FROM sessions WHERE session_id = ?1",
            params![session_id],
        )?;
        Ok(changed > 0)
    }

    fn list_sessions(&self) -> Result<Vec<Uuid>> {
        let mut stmt = self
            .conn
            .prepare("SELECT session_id FROM sessions ORDER BY puzzle_day, session_id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<Uuid>>>()?;
        Ok(ids)
    }

    fn get_pointer(&self, slot: PointerSlot) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM pointers WHERE slot = ?1",
                params![slot.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_pointer(&self, slot: PointerSlot, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => self.conn.execute(
                "INSERT OR REPLACE INTO pointers (slot, value) VALUES (?1, ?2)",
                params![slot.as_str(), value],
            )?,
            None => self.conn.execute(
                "DELETE FROM pointers WHERE slot = ?1",
                params![slot.as_str()],
            )?,
        };
        Ok(())
    }
}
