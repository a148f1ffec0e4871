//! Spelling Bee
//!
//! A daily seven-letter word puzzle engine: a center letter and six outside
//! letters, an official answer list, points per word, ranks by share of the
//! maximum score, hint tables, and guessing sessions saved in a store.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::LetterSet;
//! use spelling_bee::puzzle::{PuzzleRecord, parse_day};
//! use spelling_bee::session::SessionRecord;
//! use spelling_bee::store::MemoryStore;
//!
//! let letters = LetterSet::new('h', &['c', 'd', 'e', 'k', 'n', 'u'])?;
//! let puzzle = PuzzleRecord::new(
//!     parse_day("2022-01-16")?,
//!     letters,
//!     &["hunk", "chunk", "chunked"],
//!     &["chunked"],
//! )?;
//! assert_eq!(puzzle.max_points(), 1 + 5 + 14);
//!
//! let store = MemoryStore::new();
//! let puzzle = puzzle.persist(&store)?;
//! let mut session = SessionRecord::new(puzzle.day()).persist(&store)?;
//! assert!(session.guess("chunked")?.is_pangram());
//! assert_eq!(session.points_scored()?, 14);
//! # Ok::<(), spelling_bee::BeeError>(())
//! ```

// Core domain types
pub mod core;

// Error type shared by the library
pub mod error;

// Puzzle records and raw puzzle data
pub mod puzzle;

// Guessing sessions
pub mod session;

// Persistence
pub mod store;

// Puzzle data sources
pub mod source;

// Puzzle image renderers
pub mod render;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{BeeError, Result};
