//! TUI rendering with ratatui
//!
//! Hive, found words, rank progress and hints for the play screen.

use super::app::{App, MessageStyle};
use crate::puzzle::DAY_FORMAT;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🐝 SPELLING BEE - {}",
        app.puzzle.day().format(DAY_FORMAT)
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    render_hive(f, app, chunks[0]);
    render_found_words(f, app, chunks[1]);
}

fn letter_span(letter: char) -> Span<'static> {
    Span::styled(
        letter.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )
}

fn render_hive(f: &mut Frame, app: &App, area: Rect) {
    let o = app.outside;
    let center = Span::styled(
        format!("[{}]", app.puzzle.letters().center()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let content = vec![
        Line::from(vec![letter_span(o[5]), Span::raw("   "), letter_span(o[0])]),
        Line::from(vec![
            letter_span(o[4]),
            Span::raw("  "),
            center,
            Span::raw("  "),
            letter_span(o[1]),
        ]),
        Line::from(vec![letter_span(o[3]), Span::raw("   "), letter_span(o[2])]),
    ];

    let hive = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Hive ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hive, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let pangrams = app.puzzle.pangrams();
    let words: Vec<Span> = app
        .session
        .gotten_words()
        .iter()
        .map(|word| {
            let style = if pangrams.contains(word) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            Span::styled(format!("{word}  "), style)
        })
        .collect();

    let title = format!(
        " Found {}/{} ",
        app.found_count(),
        app.puzzle.answers().len()
    );
    let found = Paragraph::new(Line::from(words))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(found, area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Rank gauge
            Constraint::Min(6),    // Hints
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_rank(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_rank(f: &mut Frame, app: &App, area: Rect) {
    let points = app.points();
    let max_points = app.puzzle.max_points();
    let rank = app.rank();
    let ratio = if max_points == 0 {
        0.0
    } else {
        (f64::from(points) / f64::from(max_points)).min(1.0)
    };

    let next = rank.next().map_or_else(String::new, |next| {
        let needed = next.min_points(max_points).saturating_sub(points);
        format!(" | {needed} to {next}")
    });

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {rank} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(ratio)
        .label(format!("{points}/{max_points} points{next}"));
    f.render_widget(gauge, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.hints();
    let table = hints.format_table();
    let mut lines: Vec<Line> = table.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hints.format_pangram_count(),
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Tab: Shuffle | Backspace: Delete | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
