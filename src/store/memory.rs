//! In-process store
//!
//! Same contract as the SQLite store, held in ordered maps. Handy for tests and
//! for callers that want write-through semantics without a file.

use super::{PointerSlot, RecordStore};
use crate::error::Result;
use crate::puzzle::PuzzleRecord;
use crate::session::SessionRecord;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    puzzles: BTreeMap<NaiveDate, PuzzleRecord>,
    sessions: BTreeMap<Uuid, SessionRecord>,
    pointers: BTreeMap<PointerSlot, String>,
}

/// Store backed by memory; contents vanish when it is dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RefCell<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn put_puzzle(&self, puzzle: &PuzzleRecord) -> Result<()> {
        self.tables
            .borrow_mut()
            .puzzles
            .insert(puzzle.day(), puzzle.clone());
        Ok(())
    }

    fn get_puzzle(&self, day: NaiveDate) -> Result<Option<PuzzleRecord>> {
        Ok(self.tables.borrow().puzzles.get(&day).cloned())
    }

    fn remove_puzzle(&self, day: NaiveDate) -> Result<bool> {
        Ok(self.tables.borrow_mut().puzzles.remove(&day).is_some())
    }

    fn list_days(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.tables.borrow().puzzles.keys().copied().collect())
    }

    fn put_session(&self, session: &SessionRecord) -> Result<()> {
        self.tables
            .borrow_mut()
            .sessions
            .insert(session.session_id(), session.clone());
        Ok(())
    }

    fn get_session(&self, session_id: Uuid) -> Result<Option<SessionRecord>> {
        Ok(self.tables.borrow().sessions.get(&session_id).cloned())
    }

    fn remove_session(&self, session_id: Uuid) -> Result<bool> {
        Ok(self.tables.borrow_mut().sessions.remove(&session_id).is_some())
    }

    fn list_sessions(&self) -> Result<Vec<Uuid>> {
        Ok(self.tables.borrow().sessions.keys().copied().collect())
    }

    fn get_pointer(&self, slot: PointerSlot) -> Result<Option<String>> {
        Ok(self.tables.borrow().pointers.get(&slot).cloned())
    }

    fn set_pointer(&self, slot: PointerSlot, value: Option<&str>) -> Result<()> {
        let mut tables = self.tables.borrow_mut();
        match value {
            Some(value) => tables.pointers.insert(slot, value.to_string()),
            None => tables.pointers.remove(&slot),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_contract() {
        super::super::tests::exercise_store(&MemoryStore::new());
    }

    #[test]
    fn stores_are_independent() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        a.set_pointer(PointerSlot::PrimarySession, Some("x")).unwrap();
        assert_eq!(b.get_pointer(PointerSlot::PrimarySession).unwrap(), None);
    }
}
