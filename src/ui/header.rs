//! Panel header and bottom bar rendering

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

pub const ACTION_ADD: &str = "[a] Add deliverable";

/// Render the panel header: title, total count, and the add action
pub fn render_header(
    area: Rect,
    project_name: &str,
    total: usize,
    completed: usize,
    can_edit: bool,
    frame: &mut Frame,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(ACTION_ADD.len() as u16 + 2)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "Deliverables",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", project_name), Style::default().fg(TEXT_MUTED)),
    ]);
    let summary = Line::from(Span::styled(
        format!("{} deliverables in total · {} completed", total, completed),
        Style::default().fg(TEXT_MUTED),
    ));
    frame.render_widget(Paragraph::new(vec![title, summary]), columns[0]);

    if can_edit {
        let action = Paragraph::new(Line::from(Span::styled(
            ACTION_ADD,
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(action, columns[1]);
    }
}

/// Render the keybinding hints line
pub fn render_bottom_bar(area: Rect, hints: &str, loading: bool, frame: &mut Frame) {
    let mut spans = vec![Span::raw(format!(" {} ", hints))];
    if loading {
        spans.push(Span::styled(
            " Working... ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(bar, area);
}
