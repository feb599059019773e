//! Modal rendering: the add-deliverable form and the file picker

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::{centered_rect, truncate};
use crate::panel::draft::{AddDeliverableDraft, DraftField, DraftFocus};
use crate::panel::upload::FilePicker;
use crate::theme::{BG_TERTIARY, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

pub const SUBMIT_LABEL: &str = "Add deliverable";
pub const SUBMIT_LOADING_LABEL: &str = "Saving...";

fn modal_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CYAN_PRIMARY))
        .style(Style::default().bg(BG_TERTIARY))
        .padding(ratatui::widgets::Padding::horizontal(1))
}

fn input_line(label: &str, value: &str, placeholder: &str, focused: bool, width: usize) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(TEXT_MUTED);
    let value_style = if focused {
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    let shown = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), Style::default().fg(TEXT_MUTED))
    } else {
        // Keep the end of long input visible while typing
        let chars: Vec<char> = value.chars().collect();
        let max = width.saturating_sub(1);
        let tail: String = chars[chars.len().saturating_sub(max)..].iter().collect();
        let cursor = if focused { "_" } else { "" };
        Span::styled(format!("{}{}", tail, cursor), value_style)
    };

    vec![Line::from(Span::styled(label.to_string(), label_style)), Line::from(shown)]
}

fn button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let mut style = Style::default().fg(if enabled { CYAN_PRIMARY } else { TEXT_MUTED });
    if focused {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(format!("[ {} ]", label), style)
}

/// Render the add-deliverable modal centered in `area`
pub fn render_add_modal(area: Rect, draft: &AddDeliverableDraft, is_loading: bool, frame: &mut Frame) {
    let modal_area = centered_rect(56, 16, area);
    frame.render_widget(Clear, modal_area);

    let block = modal_block("Add deliverable");
    let inner_width = modal_area.width.saturating_sub(4) as usize;

    let mut lines = Vec::new();
    for field in DraftField::ALL {
        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let focused = draft.focus == DraftFocus::Field(field);
        lines.extend(input_line(&label, draft.value(field), field.placeholder(), focused, inner_width));
    }

    lines.push(Line::raw(""));
    let submit_label = if is_loading { SUBMIT_LOADING_LABEL } else { SUBMIT_LABEL };
    lines.push(
        Line::from(vec![
            button("Cancel", draft.focus == DraftFocus::CancelButton, true),
            Span::raw("  "),
            button(submit_label, draft.focus == DraftFocus::SubmitButton, !is_loading),
        ])
        .alignment(Alignment::Right),
    );
    lines.push(Line::from(Span::styled(
        "Tab: next field  Enter: confirm  Esc: cancel",
        Style::default().fg(TEXT_MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}

/// Render the file picker prompt for the upload target
pub fn render_file_picker(area: Rect, picker: &FilePicker, target_name: &str, frame: &mut Frame) {
    let modal_area = centered_rect(64, 7, area);
    frame.render_widget(Clear, modal_area);

    let inner_width = modal_area.width.saturating_sub(4) as usize;
    let title = format!("Upload file to {}", truncate(target_name, 40));
    let mut lines = input_line("File path", &picker.input, "", true, inner_width);
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Enter: upload  Esc: cancel",
        Style::default().fg(TEXT_MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).block(modal_block(&title)), modal_area);
}
