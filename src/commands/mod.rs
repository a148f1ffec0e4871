//! Command implementations
//!
//! Each command does its work against a store and returns a plain result
//! struct; printing lives in [`crate::output`].

pub mod alternatives;
pub mod import;
pub mod render;
pub mod session;
pub mod show;

pub use alternatives::{AlternativesResult, find_alternatives};
pub use import::{ImportResult, import_puzzle};
pub use render::{RenderResult, render_puzzle};
pub use session::{
    GuessOutcome, SessionListing, SessionStatus, guess_words, list_sessions, new_session,
    remaining_words, session_status,
};
pub use show::{PuzzleSummary, show_puzzle};
