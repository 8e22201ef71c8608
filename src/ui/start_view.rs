use crate::ui::name_entry::NameEntry;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the start screen: a title and the two name fields.
pub fn render(frame: &mut Frame, entry: &NameEntry) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Connect Four")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_form(frame, entry, chunks[1]);

    let hints = Paragraph::new("Tab: Switch field  |  Enter: Start  |  Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, chunks[2]);
}

fn render_form(frame: &mut Frame, entry: &NameEntry, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(""),
        field_line("Player 1 :", entry.field(0), entry.focus() == 0),
        Line::from(""),
        field_line("Player 2 :", entry.field(1), entry.focus() == 1),
        Line::from(""),
    ];

    if let Some(warning) = entry.warning() {
        lines.push(Line::from(Span::styled(
            warning.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let form = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Who is playing?"));
    frame.render_widget(form, area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let cursor = if focused { "█" } else { " " };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(format!("{label} ")),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}
