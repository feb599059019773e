//! Toast rendering

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::truncate;
use crate::theme::{BG_TERTIARY, CYAN_PRIMARY, TEXT_PRIMARY};
use crate::toast::ToastQueue;

const TOAST_WIDTH: u16 = 44;

/// Stack visible toasts in the bottom-right corner of `area`, newest lowest
pub fn render_toasts(area: Rect, toasts: &ToastQueue, frame: &mut Frame) {
    if toasts.is_empty() || area.width == 0 {
        return;
    }
    let width = TOAST_WIDTH.min(area.width);
    let visible: Vec<_> = toasts.visible().collect();
    let mut bottom = area.y + area.height;

    for toast in visible.iter().rev() {
        if bottom < area.y + 3 {
            break;
        }
        let toast_area = Rect::new(area.x + area.width - width, bottom - 3, width, 3);
        frame.render_widget(Clear, toast_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CYAN_PRIMARY))
            .style(Style::default().bg(BG_TERTIARY));
        let text = truncate(&toast.message, width.saturating_sub(4) as usize);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(TEXT_PRIMARY),
        )))
        .block(block);
        frame.render_widget(paragraph, toast_area);

        bottom -= 3;
    }
}
