//! Deliverable card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{truncate, wrap_text};
use crate::models::ProjectDeliverable;
use crate::theme::{
    status_badge, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::format_due_date;

pub const EMPTY_STATE: &str = "No deliverables yet";
pub const ACTION_UPLOAD: &str = "[u] Upload file";
pub const ACTION_COMPLETE: &str = "[c] Mark as completed";

/// Build the content lines of a card for a given inner width
pub fn card_lines(
    deliverable: &ProjectDeliverable,
    inner_width: usize,
    can_edit: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Title row: name on the left, status badge on the right
    let badge = status_badge(deliverable.status);
    let badge_text = format!("{} {}", badge.icon, badge.label);
    let badge_len = badge_text.chars().count();
    let name = truncate(&deliverable.name, inner_width.saturating_sub(badge_len + 1));
    let gap = inner_width
        .saturating_sub(name.chars().count() + badge_len)
        .max(1);
    lines.push(Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            badge_text,
            Style::default().fg(badge.color).add_modifier(Modifier::BOLD),
        ),
    ]));

    lines.push(Line::from(Span::styled(
        format!("Assigned to: {}", deliverable.assigned_to),
        Style::default().fg(TEXT_MUTED),
    )));

    for text in wrap_text(&deliverable.description, inner_width) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!("Due: {}", format_due_date(&deliverable.due_date)),
        Style::default().fg(TEXT_MUTED),
    )));

    if !deliverable.attachments.is_empty() {
        lines.push(Line::from(Span::styled(
            "Attachments:",
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        )));
        for (index, url) in deliverable.attachments.iter().enumerate() {
            let label = format!("[{}] File {} ", index + 1, index + 1);
            let url_width = inner_width.saturating_sub(label.chars().count());
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().fg(CYAN_PRIMARY)),
                Span::styled(
                    truncate(url, url_width),
                    Style::default()
                        .fg(TEXT_MUTED)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
    }

    if can_edit {
        let mut actions = vec![Span::styled(ACTION_UPLOAD, Style::default().fg(CYAN_PRIMARY))];
        if !deliverable.status.is_completed() {
            actions.push(Span::raw("   "));
            actions.push(Span::styled(
                ACTION_COMPLETE,
                Style::default().fg(CYAN_PRIMARY),
            ));
        }
        lines.push(Line::from(actions));
    }

    lines
}

/// Total card height including borders
pub fn card_height(deliverable: &ProjectDeliverable, width: u16, can_edit: bool) -> u16 {
    let inner_width = width.saturating_sub(4) as usize;
    card_lines(deliverable, inner_width, can_edit).len() as u16 + 2
}

/// Render a single deliverable card
pub fn render_deliverable_card(
    area: Rect,
    deliverable: &ProjectDeliverable,
    can_edit: bool,
    selected: bool,
    frame: &mut Frame,
) {
    let (border_color, bg_color) = if selected {
        (CYAN_PRIMARY, BG_TERTIARY)
    } else {
        (BORDER_SUBTLE, BG_SECONDARY)
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color))
        .padding(ratatui::widgets::Padding::horizontal(1));

    let inner_width = area.width.saturating_sub(4) as usize;
    let paragraph = Paragraph::new(card_lines(deliverable, inner_width, can_edit)).block(card_block);
    frame.render_widget(paragraph, area);
}

/// First card to draw so that the selected card is fully visible
fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = selected;
    let mut used = heights[selected];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    start
}

/// Render the list of cards, or the empty state
pub fn render_deliverable_list(
    area: Rect,
    deliverables: &[ProjectDeliverable],
    can_edit: bool,
    selected_index: usize,
    frame: &mut Frame,
) {
    if deliverables.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_STATE,
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        let y = area.y + area.height / 2;
        frame.render_widget(empty, Rect::new(area.x, y, area.width, area.height.min(1)));
        return;
    }

    let heights: Vec<u16> = deliverables
        .iter()
        .map(|d| card_height(d, area.width, can_edit))
        .collect();
    let start = first_visible(&heights, selected_index, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, deliverable) in deliverables.iter().enumerate().skip(start) {
        let height = heights[index];
        if y >= bottom {
            break;
        }
        // Clip the last card rather than skipping it
        let visible = height.min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, visible);
        render_deliverable_card(card_area, deliverable, can_edit, index == selected_index, frame);
        y += visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliverableStatus;
    use crate::panel::tests::deliverable;
    use crate::ui::tests::{buffer_text, draw};

    fn lines_text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_card_shows_fields() {
        let mut item = deliverable("d-1", DeliverableStatus::InProgress);
        item.attachments = vec!["https://files.example.com/plan.pdf".to_string()];
        let text = lines_text(&card_lines(&item, 60, false)).join("\n");

        assert!(text.contains("Deliverable d-1"));
        assert!(text.contains("◐ In Progress"));
        assert!(text.contains("Assigned to: ana"));
        assert!(text.contains("Description of d-1"));
        assert!(text.contains("Due: 01/11/2026"));
        assert!(text.contains("[1] File 1 https://files.example.com/plan.pdf"));
    }

    #[test]
    fn test_badge_label_and_color_per_status() {
        for status in DeliverableStatus::ALL {
            let item = deliverable("d-1", status);
            let lines = card_lines(&item, 60, false);
            let badge_span = lines[0].spans.last().unwrap();
            let badge = status_badge(status);
            assert!(badge_span.content.ends_with(badge.label));
            assert_eq!(badge_span.style.fg, Some(badge.color));
        }
    }

    #[test]
    fn test_actions_only_when_editable() {
        let item = deliverable("d-1", DeliverableStatus::Pending);
        let read_only = lines_text(&card_lines(&item, 60, false)).join("\n");
        assert!(!read_only.contains(ACTION_UPLOAD));
        assert!(!read_only.contains(ACTION_COMPLETE));

        let editable = lines_text(&card_lines(&item, 60, true)).join("\n");
        assert!(editable.contains(ACTION_UPLOAD));
        assert!(editable.contains(ACTION_COMPLETE));
    }

    #[test]
    fn test_completed_card_has_no_complete_action() {
        let item = deliverable("d-1", DeliverableStatus::Completed);
        let text = lines_text(&card_lines(&item, 60, true)).join("\n");
        assert!(text.contains(ACTION_UPLOAD));
        assert!(!text.contains(ACTION_COMPLETE));
    }

    #[test]
    fn test_card_height_grows_with_attachments() {
        let plain = deliverable("d-1", DeliverableStatus::Pending);
        let mut with_files = plain.clone();
        with_files.attachments = vec!["a".to_string(), "b".to_string()];
        // Header line plus one per file
        assert_eq!(
            card_height(&with_files, 60, true),
            card_height(&plain, 60, true) + 3
        );
    }

    #[test]
    fn test_first_visible_keeps_selection_on_screen() {
        let heights = [8, 8, 8, 8];
        assert_eq!(first_visible(&heights, 0, 20), 0);
        assert_eq!(first_visible(&heights, 1, 20), 0);
        assert_eq!(first_visible(&heights, 3, 20), 2);
        assert_eq!(first_visible(&[], 3, 20), 0);
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        let buffer = draw(50, 10, |frame| {
            render_deliverable_list(frame.area(), &[], true, 0, frame);
        });
        let text = buffer_text(&buffer);
        assert!(text.contains(EMPTY_STATE));
        assert!(!text.contains("Assigned to"));
    }

    #[test]
    fn test_list_renders_one_card_per_deliverable() {
        let list = vec![
            deliverable("d-1", DeliverableStatus::Pending),
            deliverable("d-2", DeliverableStatus::Completed),
        ];
        let buffer = draw(60, 30, |frame| {
            render_deliverable_list(frame.area(), &list, true, 0, frame);
        });
        let text = buffer_text(&buffer);
        assert!(text.contains("Deliverable d-1"));
        assert!(text.contains("Deliverable d-2"));
        assert_eq!(text.matches("Assigned to").count(), 2);
        assert_eq!(text.matches(ACTION_COMPLETE).count(), 1);
        assert!(!text.contains(EMPTY_STATE));
    }
}
