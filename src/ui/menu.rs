use crate::deck::deck_name;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::path::{Path, PathBuf};

pub fn draw_menu(
    f: &mut Frame,
    deck_files: &[PathBuf],
    selected_index: usize,
    decks_dir: &Path,
    status: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Listening Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = if deck_files.is_empty() {
        vec![ListItem::new(Span::styled(
            format!("No *.json decks found in {}", decks_dir.display()),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        deck_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Span::styled(deck_name(path), style))
            })
            .collect()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Decks"));
    f.render_widget(list, chunks[1]);

    let status_line = Paragraph::new(status.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_line, chunks[2]);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", key),
        Span::from(" Select  "),
        Span::styled("Enter", key),
        Span::from(" Start  "),
        Span::styled("q", key),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
