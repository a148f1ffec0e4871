//! Puzzle image rendering
//!
//! Renderers read a puzzle's letters and answers and hand back opaque bytes
//! plus a format name. The puzzle stores whatever comes back without looking
//! inside it.

mod hive;

pub use hive::{SvgHiveRenderer, TextHiveRenderer};

use crate::error::Result;
use crate::puzzle::PuzzleRecord;
use rand::seq::IndexedRandom;

/// Bytes produced by a renderer and the format they are in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub format: String,
}

impl RenderedImage {
    #[must_use]
    pub fn new(bytes: Vec<u8>, format: impl Into<String>) -> Self {
        Self {
            bytes,
            format: format.into(),
        }
    }
}

/// A named image template
pub trait Renderer: Send + Sync {
    /// Name the template is registered under
    fn name(&self) -> &str;

    /// Render a read-only view of the puzzle
    ///
    /// # Errors
    /// Returns `BeeError::Render` if the template cannot produce an image.
    fn render(&self, puzzle: &PuzzleRecord) -> Result<RenderedImage>;
}

/// Lookup table of available templates
#[derive(Default)]
pub struct RendererRegistry {
    renderers: Vec<Box<dyn Renderer>>,
}

impl RendererRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in hive templates
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SvgHiveRenderer::default()));
        registry.register(Box::new(TextHiveRenderer));
        registry
    }

    /// Add a template; a later registration shadows an earlier one of the same name
    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers.retain(|r| r.name() != renderer.name());
        self.renderers.push(renderer);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        self.renderers
            .iter()
            .find(|r| r.name() == name)
            .map(|r| &**r)
    }

    /// Any registered template, chosen uniformly
    #[must_use]
    pub fn random(&self) -> Option<&dyn Renderer> {
        self.renderers.choose(&mut rand::rng()).map(|r| &**r)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }
}

/// Guess an image format from its leading magic bytes
#[must_use]
pub fn sniff_image_format(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG") {
        Some("png")
    } else if bytes.starts_with(b"GIF") {
        Some("gif")
    } else if bytes.starts_with(b"\xff\xd8") {
        Some("jpg")
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        Some("svg")
    } else {
        None
    }
}
