//! Display functions for command results

use super::formatters::{create_progress_bar, judgement_symbol, letters_line, rank_ladder};
use crate::commands::{
    AlternativesResult, GuessOutcome, ImportResult, PuzzleSummary, RenderResult, SessionListing,
    SessionStatus,
};
use crate::core::HintTable;
use crate::puzzle::DAY_FORMAT;
use crate::session::SessionRecord;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print what an import stored
pub fn print_import_result(result: &ImportResult) {
    let verb = if result.replaced { "Replaced" } else { "Imported" };
    println!(
        "{} puzzle for {}",
        verb.green().bold(),
        result.puzzle.day().format(DAY_FORMAT).to_string().bright_yellow()
    );
    println!("   Letters:  {}", letters_line(result.puzzle.letters()).bold());
    println!(
        "   Answers:  {} ({} pangrams, {} points)",
        result.puzzle.answers().len(),
        result.puzzle.pangrams().len(),
        result.puzzle.max_points()
    );
    if let Some(template) = &result.template {
        println!("   Rendered: {template}");
    }
}

/// Print a puzzle and its hint table
pub fn print_puzzle_summary(summary: &PuzzleSummary) {
    let puzzle = &summary.puzzle;
    banner(&format!("PUZZLE {}", puzzle.day().format(DAY_FORMAT)));

    println!("\n🐝 {}", letters_line(puzzle.letters()).bright_yellow().bold());
    println!(
        "   {} words, {} pangrams, {} points",
        puzzle.answers().len(),
        puzzle.pangrams().len(),
        puzzle.max_points()
    );
    if let Some(format) = puzzle.image_format() {
        println!("   Image: {format}");
    }

    println!();
    print_hints(&summary.hints);

    if summary.reveal {
        println!("\n📖 {}", "Answers:".bright_cyan().bold());
        for word in puzzle.answers() {
            if puzzle.pangrams().contains(word) {
                println!("   {}", word.bright_yellow().bold());
            } else {
                println!("   {word}");
            }
        }
    }
}

/// Print a hint table with its summary lines
pub fn print_hints(hints: &HintTable) {
    println!("{}", hints.format_summary());
}

/// Print per-word judgements and the resulting score
pub fn print_guess_outcome(outcome: &GuessOutcome) {
    for (word, judgement, points) in &outcome.judgements {
        let symbol = judgement_symbol(*judgement);
        let line = format!("{symbol} {:<12} {judgement}", word.to_uppercase());
        if !judgement.is_accepted() {
            println!("{}", line.red());
        } else if judgement.is_already_gotten() {
            println!("{}", line.bright_black());
        } else if judgement.is_pangram() {
            println!("{} {}", line.bright_yellow().bold(), format!("+{points}").green());
        } else {
            println!("{} {}", line.green(), format!("+{points}").green());
        }
    }

    let gained = outcome.new_points();
    println!(
        "\n{} {} / {} points ({})",
        if gained > 0 { "⬆" } else { "•" },
        outcome.points.to_string().bright_yellow().bold(),
        outcome.max_points,
        outcome.rank.to_string().bright_cyan()
    );
}

/// Print a session's progress
pub fn print_session_status(status: &SessionStatus) {
    let session = &status.session;
    banner(&format!(
        "SESSION {} ({})",
        session.session_id(),
        session.puzzle_day().format(DAY_FORMAT)
    ));

    let bar = create_progress_bar(
        f64::from(status.points),
        f64::from(status.max_points),
        30,
    );
    println!(
        "\n📊 [{}] {}",
        bar.green(),
        format!("{} / {} points", status.points, status.max_points).bright_yellow()
    );
    println!(
        "   Words:   {} / {} ({:.1}%)",
        session.gotten_words().len(),
        status.answer_count,
        status.words_percentage
    );
    println!("   Points:  {:.1}%", status.points_percentage);
    println!("   Rank:    {}", status.rank.to_string().bright_cyan().bold());
    println!("   {}", rank_ladder(status.rank).bright_black());
    match status.next_rank() {
        Some((next, needed)) => println!("   {needed} more points to {next}"),
        None => println!("   {}", "All words found!".green().bold()),
    }

    if !session.gotten_words().is_empty() {
        println!("\n✅ {}", "Found:".bright_cyan().bold());
        let words: Vec<&str> = session.gotten_words().iter().map(String::as_str).collect();
        println!("   {}", words.join(", "));
    }

    println!();
    print_hints(&status.hints);
}

/// Print a newly started session
pub fn print_new_session(session: &SessionRecord, primary: bool) {
    println!(
        "{} session {} for {}{}",
        "Started".green().bold(),
        session.session_id().to_string().bright_yellow(),
        session.puzzle_day().format(DAY_FORMAT),
        if primary { " (primary)" } else { "" }
    );
}

/// Print the session listing
pub fn print_sessions(listings: &[SessionListing]) {
    if listings.is_empty() {
        println!("No saved sessions.");
        return;
    }
    for listing in listings {
        let marker = if listing.primary { "*".bright_yellow().bold() } else { " ".normal() };
        println!(
            "{marker} {}  {}  {} found",
            listing.session_id,
            listing.puzzle_day.format(DAY_FORMAT),
            listing.found
        );
    }
}

/// Print the words a session has yet to find
pub fn print_remaining_words(words: &[String], by_rarity: bool) {
    if words.is_empty() {
        println!("{}", "All words found!".green().bold());
        return;
    }
    let order = if by_rarity { "rarest first" } else { "alphabetical" };
    println!(
        "{} words remaining ({order})",
        words.len().to_string().bright_yellow().bold()
    );
    for word in words {
        println!("   {word}");
    }
}

/// Print lexicon words the puzzle left out
pub fn print_alternatives(result: &AlternativesResult) {
    println!(
        "{} of {} lexicon words fit {} but are not answers",
        result.words.len().to_string().bright_yellow().bold(),
        result.lexicon_size,
        result.day.format(DAY_FORMAT)
    );
    for word in &result.words {
        println!("   {word}");
    }
}

/// Print where a rendered image went
pub fn print_render_result(result: &RenderResult, written_to: Option<&str>) {
    println!(
        "{} {} with {} ({} bytes, {})",
        "Rendered".green().bold(),
        result.day.format(DAY_FORMAT),
        result.template.bright_yellow(),
        result.bytes.len(),
        result.format
    );
    if let Some(path) = written_to {
        println!("   Written to {path}");
    }
}
