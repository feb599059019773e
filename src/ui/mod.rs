//! UI module for deliverables-tui
//!
//! Rendering functions for the dashboard: header, deliverable cards, modals
//! and toasts. Everything here is a pure function of application state.

mod cards;
mod header;
mod helpers;
mod modal;
mod toasts;

pub use cards::render_deliverable_list;
pub use header::{render_bottom_bar, render_header};
pub use modal::{render_add_modal, render_file_picker};
pub use toasts::render_toasts;

use ratatui::prelude::*;

use crate::app::App;

const HINTS_LIST_EDIT: &str =
    "q: Quit | ↑/↓: Select | a: Add | c: Complete | u: Upload | 1-9: Open file | r: Refresh";
const HINTS_LIST_READ_ONLY: &str = "q: Quit | ↑/↓: Select | 1-9: Open file | r: Refresh";
const HINTS_MODAL: &str = "Tab/Shift+Tab: Move | Enter: Confirm | Ctrl+U: Clear field | Esc: Cancel";
const HINTS_PICKER: &str = "Type a path | Enter: Upload | Esc: Cancel";

fn hints(app: &App) -> &'static str {
    if app.panel.draft.is_open {
        HINTS_MODAL
    } else if app.panel.file_picker.is_open {
        HINTS_PICKER
    } else if app.panel.can_edit {
        HINTS_LIST_EDIT
    } else {
        HINTS_LIST_READ_ONLY
    }
}

/// Draw the whole dashboard
pub fn render_dashboard(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    let completed = app
        .deliverables
        .iter()
        .filter(|d| d.status.is_completed())
        .count();
    render_header(
        main_layout[0],
        &app.project_name,
        app.deliverables.len(),
        completed,
        app.panel.can_edit,
        frame,
    );

    if app.loaded {
        render_deliverable_list(
            main_layout[1],
            &app.deliverables,
            app.panel.can_edit,
            app.panel.selected_index,
            frame,
        );
    }

    render_bottom_bar(main_layout[2], hints(app), app.panel.is_loading, frame);

    if app.panel.draft.is_open {
        render_add_modal(area, &app.panel.draft, app.panel.is_loading, frame);
    } else if app.panel.file_picker.is_open {
        let target_name = app
            .panel
            .upload_target
            .as_deref()
            .and_then(|id| app.deliverables.iter().find(|d| d.id == id))
            .map(|d| d.name.as_str())
            .unwrap_or("deliverable");
        render_file_picker(area, &app.panel.file_picker, target_name, frame);
    }

    render_toasts(main_layout[1], &app.panel.toasts, frame);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::cards::{ACTION_COMPLETE, ACTION_UPLOAD, EMPTY_STATE};
    use crate::cli::CliConfig;
    use crate::dispatch::Outcome;
    use crate::models::DeliverableStatus;
    use crate::panel::tests::deliverable;

    /// Draw into an off-screen buffer
    pub(crate) fn draw<F>(width: u16, height: u16, render: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(render).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as text, one line per row
    pub(crate) fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(can_edit: bool) -> App {
        App::new(&CliConfig {
            store_path: "deliverables.json".into(),
            project_id: "p-1".to_string(),
            project_name: "Website".to_string(),
            can_edit,
            upload_delay: std::time::Duration::ZERO,
            log_dir: None,
        })
    }

    #[test]
    fn test_dashboard_empty_project() {
        let mut app = app(true);
        app.apply_outcome(Outcome::Refreshed(Ok(Vec::new())));
        let buffer = draw(100, 30, |frame| render_dashboard(&app, frame));
        let text = buffer_text(&buffer);
        assert!(text.contains(EMPTY_STATE));
        assert!(text.contains("0 deliverables in total"));
        assert!(!text.contains(ACTION_UPLOAD));
    }

    #[test]
    fn test_dashboard_read_only_has_no_actions() {
        let mut app = app(false);
        app.apply_outcome(Outcome::Refreshed(Ok(vec![deliverable(
            "d-1",
            DeliverableStatus::Pending,
        )])));
        let buffer = draw(100, 30, |frame| render_dashboard(&app, frame));
        let text = buffer_text(&buffer);
        assert!(text.contains("Deliverable d-1"));
        assert!(!text.contains(ACTION_UPLOAD));
        assert!(!text.contains(ACTION_COMPLETE));
        assert!(!text.contains("[a] Add deliverable"));
    }

    #[test]
    fn test_dashboard_shows_modal_over_list() {
        let mut app = app(true);
        app.apply_outcome(Outcome::Refreshed(Ok(vec![deliverable(
            "d-1",
            DeliverableStatus::Pending,
        )])));
        app.panel.open_add_modal();
        let buffer = draw(100, 30, |frame| render_dashboard(&app, frame));
        let text = buffer_text(&buffer);
        assert!(text.contains("Due date *"));
        assert!(text.contains(HINTS_MODAL));
    }

    #[test]
    fn test_dashboard_picker_names_upload_target() {
        let mut app = app(true);
        app.apply_outcome(Outcome::Refreshed(Ok(vec![
            deliverable("d-1", DeliverableStatus::Pending),
            deliverable("d-2", DeliverableStatus::Pending),
        ])));
        let target = app.deliverables[1].clone();
        app.panel.begin_upload(&target);
        let buffer = draw(100, 30, |frame| render_dashboard(&app, frame));
        assert!(buffer_text(&buffer).contains("Upload file to Deliverable d-2"));
    }
}
