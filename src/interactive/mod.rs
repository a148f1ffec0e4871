//! Interactive play mode
//!
//! A ratatui screen bound to one stored session; every accepted guess is
//! written through to the store as it is made.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
