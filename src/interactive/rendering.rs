//! TUI rendering with ratatui
//!
//! The single game screen: root word, found words, score, messages, input.

use super::app::{App, MessageStyle};
use crate::output::formatters::length_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Found words
            Constraint::Percentage(45), // Score + messages
        ])
        .split(chunks[1]);

    render_found_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let root = app.root().to_uppercase();
    let spaced: String = root
        .chars()
        .flat_map(|c| [c, ' '])
        .collect::<String>()
        .trim_end()
        .to_string();

    let header = Paragraph::new(format!("🔤 WORD SCRAMBLE — {spaced}"))
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

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.used_words().is_empty() {
        vec![ListItem::new("No words yet — start typing!").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.used_words()
            .iter()
            .map(|word| {
                let badge = length_badge(word.chars().count());
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {badge} "), Style::default().fg(Color::Green)),
                    Span::styled(word.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect()
    };

    let title = format!(" Found Words ({}) ", app.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Score
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.score().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Best:  "),
            Span::styled(
                app.stats.best_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
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
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter a word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let sessions = Paragraph::new(format!("Sessions: {}", app.stats.sessions_played))
        .alignment(Alignment::Center);
    f.render_widget(sessions, chunks[0]);

    let found = Paragraph::new(format!("Words found: {}", app.stats.words_found))
        .alignment(Alignment::Center);
    f.render_widget(found, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
