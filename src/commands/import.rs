//! Import a day's puzzle from a source into the store

use crate::error::Result;
use crate::puzzle::PuzzleRecord;
use crate::render::RendererRegistry;
use crate::source::{PuzzleSource, fetch_puzzle};
use crate::store::RecordStore;

/// What an import stored
pub struct ImportResult {
    pub puzzle: PuzzleRecord,
    pub replaced: bool,
    pub template: Option<String>,
}

/// Fetch, validate and persist a puzzle, optionally rendering it with a random template
///
/// Importing a day that is already stored overwrites it.
///
/// # Errors
///
/// Returns an error if the source data is malformed, rendering fails, or the
/// store cannot be written.
pub fn import_puzzle(
    store: &dyn RecordStore,
    source: &dyn PuzzleSource,
    renderers: Option<&RendererRegistry>,
) -> Result<ImportResult> {
    let puzzle = fetch_puzzle(source)?;
    let replaced = store.get_puzzle(puzzle.day())?.is_some();
    let mut bound = puzzle.persist(store)?;

    let mut template = None;
    if let Some(renderer) = renderers.and_then(RendererRegistry::random) {
        bound.render(renderer)?;
        template = Some(renderer.name().to_string());
    }

    Ok(ImportResult {
        puzzle: bound.record().clone(),
        replaced,
        template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::fixtures::raw_puzzle;
    use crate::source::TextSource;
    use crate::store::{MemoryStore, PuzzleKey};

    fn source() -> TextSource {
        TextSource(serde_json::to_string(&raw_puzzle()).unwrap())
    }

    #[test]
    fn import_stores_puzzle() {
        let store = MemoryStore::new();
        let result = import_puzzle(&store, &source(), None).unwrap();
        assert!(!result.replaced);
        assert!(result.template.is_none());
        let latest = store.resolve_puzzle(&PuzzleKey::Latest).unwrap();
        assert_eq!(latest, result.puzzle);
    }

    #[test]
    fn import_twice_overwrites() {
        let store = MemoryStore::new();
        import_puzzle(&store, &source(), None).unwrap();
        let result = import_puzzle(&store, &source(), None).unwrap();
        assert!(result.replaced);
        assert_eq!(store.list_days().unwrap().len(), 1);
    }

    #[test]
    fn import_with_render() {
        let store = MemoryStore::new();
        let registry = RendererRegistry::with_defaults();
        let result = import_puzzle(&store, &source(), Some(&registry)).unwrap();
        assert!(result.template.is_some());
        let stored = store.get_puzzle(result.puzzle.day()).unwrap().unwrap();
        assert!(stored.image().is_some());
    }

    #[test]
    fn import_malformed_stores_nothing() {
        let store = MemoryStore::new();
        let bad = TextSource(r#"{"printDate":"2022-01-16"}"#.to_string());
        assert!(import_puzzle(&store, &bad, None).is_err());
        assert!(store.list_days().unwrap().is_empty());
    }
}
