//! Render a stored puzzle and save the image

use crate::error::{BeeError, Result};
use crate::puzzle::PuzzleRecord;
use crate::render::RendererRegistry;
use crate::store::{PuzzleKey, RecordStore};
use chrono::NaiveDate;

pub struct RenderResult {
    pub day: NaiveDate,
    pub template: String,
    pub format: String,
    pub bytes: Vec<u8>,
}

/// Render with the named template, or a random one, and store the image
///
/// # Errors
///
/// Returns `BeeError::Render` for an unknown template, `BeeError::UnknownStoreKey`
/// if the puzzle is missing, or a storage error if the save fails.
pub fn render_puzzle(
    store: &dyn RecordStore,
    key: &PuzzleKey,
    registry: &RendererRegistry,
    template: Option<&str>,
) -> Result<RenderResult> {
    let renderer = match template {
        Some(name) => registry.get(name).ok_or_else(|| {
            BeeError::Render(format!(
                "unknown template {name:?}; available: {}",
                registry.names().join(", ")
            ))
        })?,
        None => registry
            .random()
            .ok_or_else(|| BeeError::Render("no templates registered".to_string()))?,
    };

    let mut puzzle = PuzzleRecord::retrieve_saved(store, key)?;
    puzzle.render(renderer)?;

    Ok(RenderResult {
        day: puzzle.day(),
        template: renderer.name().to_string(),
        format: puzzle.image_format().unwrap_or_default().to_string(),
        bytes: puzzle.image().unwrap_or_default().to_vec(),
    })
}
