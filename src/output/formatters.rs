//! Formatting utilities for terminal output

use crate::core::{Judgement, LetterSet, Rank};

/// Short symbol for a judgement
#[must_use]
pub fn judgement_symbol(judgement: Judgement) -> &'static str {
    if !judgement.is_accepted() {
        "✗"
    } else if judgement.is_already_gotten() {
        "↺"
    } else if judgement.is_pangram() {
        "★"
    } else {
        "✓"
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Every rank on one line, the current one bracketed
///
/// `"Beginner › Good Start › [Good] › Solid › ..."`
#[must_use]
pub fn rank_ladder(current: Rank) -> String {
    Rank::TABLE
        .iter()
        .map(|&(_, rank)| {
            if rank == current {
                format!("[{rank}]")
            } else {
                rank.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Letters spaced out with the center letter first
#[must_use]
pub fn letters_line(letters: &LetterSet) -> String {
    let outside: Vec<String> = letters.outside().iter().map(char::to_string).collect();
    format!("{}  {}", letters.center(), outside.join(" "))
}
