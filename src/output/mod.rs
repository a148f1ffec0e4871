//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_alternatives, print_guess_outcome, print_hints, print_import_result, print_new_session,
    print_puzzle_summary, print_remaining_words, print_render_result, print_session_status,
    print_sessions,
};
