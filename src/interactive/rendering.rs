//! TUI rendering with ratatui
//!
//! Board, palette, and message panels for the game interface.

use super::app::{App, MessageStyle, Phase, Row};
use crate::game::SecretSource;
use crate::output::score_pins;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: SecretSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Key help
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Palette + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.evaluator.palette().len() as u16 + 2),
            Constraint::Min(5),
        ])
        .split(main_chunks[1]);

    render_palette(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    // Key help
    render_help(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| board_line(app, i, row))
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn board_line<'a, S: SecretSource>(app: &App<S>, index: usize, row: &'a Row) -> Line<'a> {
    let active = index == app.current_row && app.phase == Phase::Guessing;

    let marker = if active {
        Span::styled("▶ ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("  ")
    };

    let mut spans = vec![
        marker,
        Span::styled(
            format!("{:>2} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    for slot in &row.slots {
        match slot {
            Some(color) => spans.push(Span::styled(
                "● ",
                Style::default().fg(Color::Rgb(color.r, color.g, color.b)),
            )),
            None => spans.push(Span::styled("· ", Style::default().fg(Color::DarkGray))),
        }
    }

    spans.push(Span::raw("  "));

    match row.score {
        Some(score) => spans.push(Span::styled(
            score_pins(score, app.code_length()),
            Style::default().fg(Color::White),
        )),
        None => spans.push(Span::styled(
            "·".repeat(app.code_length()),
            Style::default().fg(Color::DarkGray),
        )),
    }

    Line::from(spans)
}

fn render_palette<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.evaluator.palette();

    let items: Vec<ListItem> = palette
        .colors()
        .iter()
        .zip(palette.labels())
        .enumerate()
        .map(|(i, (&color, &label))| {
            let marker = if i == app.selected { "▶" } else { " " };
            let style = if i == app.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} {} ", i + 1), style),
                Span::styled(
                    "● ",
                    Style::default().fg(Color::Rgb(color.r, color.g, color.b)),
                ),
                Span::styled(label.to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_messages<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_help<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let text = match app.phase {
        Phase::Guessing => {
            "←/→ or 1-9 select · space place · label keys place · backspace undo · enter check · n new · q quit"
        }
        Phase::Won | Phase::Lost => "n new game · q quit",
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(help, area);
}

fn render_status<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let round = (app.current_row + 1).min(app.rounds);
    let outcome = match app.phase {
        Phase::Guessing => "",
        Phase::Won => " · WON",
        Phase::Lost => " · LOST",
    };

    let status = format!(
        "Round {round}/{}{outcome} │ Games {} · Won {}",
        app.rounds, app.stats.played, app.stats.won
    );

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(bar, area);
}
