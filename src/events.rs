//! Key handling for the dashboard.
//!
//! Translates key presses into panel operations. Anything that has to leave
//! the event loop (service calls, opening a browser, quitting) is returned as
//! a `KeyAction` for the caller to perform.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::dispatch::Request;
use crate::panel::draft::{DraftField, DraftFocus};

#[derive(Debug, PartialEq)]
pub enum KeyAction {
    None,
    Quit,
    Dispatch(Request),
    OpenUrl(String),
}

impl From<Option<Request>> for KeyAction {
    fn from(request: Option<Request>) -> Self {
        request.map_or(KeyAction::None, KeyAction::Dispatch)
    }
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    if app.panel.draft.is_open {
        return handle_modal_key(app, key);
    }
    if app.panel.file_picker.is_open {
        return handle_picker_key(app, key);
    }
    handle_list_key(app, key)
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> KeyAction {
    let len = app.deliverables.len();
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => {
            app.panel.select_previous();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.panel.select_next(len);
            KeyAction::None
        }
        KeyCode::Char('a') => {
            app.panel.open_add_modal();
            KeyAction::None
        }
        KeyCode::Char('c') => app.panel.mark_selected_completed(&app.deliverables).into(),
        KeyCode::Char('u') => {
            app.panel.begin_upload_selected(&app.deliverables);
            KeyAction::None
        }
        KeyCode::Char('r') => KeyAction::Dispatch(app.refresh_request()),
        KeyCode::Char(ch @ '1'..='9') => {
            let number = ch.to_digit(10).unwrap_or(0) as usize;
            app.panel
                .attachment_url(&app.deliverables, number)
                .map_or(KeyAction::None, |url| KeyAction::OpenUrl(url.to_string()))
        }
        _ => KeyAction::None,
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
        if let DraftFocus::Field(field) = app.panel.draft.focus {
            app.panel.edit_field(field, String::new());
        }
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Esc => {
            app.panel.cancel_add_modal();
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::Down => {
            app.panel.draft.focus_next();
            KeyAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.panel.draft.focus_previous();
            KeyAction::None
        }
        KeyCode::Backspace => {
            app.panel.draft.pop_char();
            KeyAction::None
        }
        KeyCode::Enter => match app.panel.draft.focus {
            DraftFocus::CancelButton => {
                app.panel.cancel_add_modal();
                KeyAction::None
            }
            DraftFocus::SubmitButton => app.panel.submit_add().into(),
            DraftFocus::Field(DraftField::AssignedTo) => {
                app.panel.draft.focus = DraftFocus::SubmitButton;
                KeyAction::None
            }
            DraftFocus::Field(_) => {
                app.panel.draft.focus_next();
                KeyAction::None
            }
        },
        KeyCode::Char(ch) => {
            app.panel.draft.push_char(ch);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            app.panel.cancel_upload();
            KeyAction::None
        }
        KeyCode::Enter => app.panel.confirm_file_picker().into(),
        KeyCode::Backspace => {
            app.panel.file_picker.pop_char();
            KeyAction::None
        }
        KeyCode::Char(ch) => {
            app.panel.file_picker.push_char(ch);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::cli::CliConfig;
    use crate::dispatch::Outcome;
    use crate::models::DeliverableStatus;
    use crate::panel::tests::deliverable;
    use crate::panel::MSG_REQUIRED_FIELDS;

    fn app_with(list: Vec<crate::models::ProjectDeliverable>) -> App {
        let mut app = App::new(&CliConfig {
            store_path: PathBuf::from("deliverables.json"),
            project_id: "p-1".to_string(),
            project_name: "Website".to_string(),
            can_edit: true,
            upload_delay: std::time::Duration::ZERO,
            log_dir: None,
        });
        app.apply_outcome(Outcome::Refreshed(Ok(list)));
        app
    }

    fn press(app: &mut App, code: KeyCode) -> KeyAction {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(Vec::new());
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&mut app, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_typing_in_modal_does_not_trigger_list_keys() {
        let mut app = app_with(vec![deliverable("d-1", DeliverableStatus::Pending)]);
        press(&mut app, KeyCode::Char('a'));
        assert!(app.panel.draft.is_open);

        // 'q' and 'c' are text here, not quit/complete
        type_text(&mut app, "qc");
        assert_eq!(app.panel.draft.name, "qc");
        assert!(!app.panel.is_loading);
    }

    #[test]
    fn test_full_add_flow_through_keys() {
        let mut app = app_with(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Launch plan");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Go-live steps");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "2026-12-01");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.panel.draft.focus, DraftFocus::SubmitButton);

        match press(&mut app, KeyCode::Enter) {
            KeyAction::Dispatch(Request::AddDeliverable { deliverable, .. }) => {
                assert_eq!(deliverable.name, "Launch plan");
                assert_eq!(deliverable.due_date, "2026-12-01");
                assert_eq!(deliverable.assigned_to, "");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_submit_with_empty_fields_shows_validation() {
        let mut app = app_with(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(press(&mut app, KeyCode::Enter), KeyAction::None);
        assert_eq!(
            app.panel.toasts.latest().unwrap().message,
            MSG_REQUIRED_FIELDS
        );
        assert!(app.panel.draft.is_open);
    }

    #[test]
    fn test_escape_cancels_modal() {
        let mut app = app_with(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);
        assert!(!app.panel.draft.is_open);
        assert!(app.panel.draft.name.is_empty());
    }

    #[test]
    fn test_ctrl_u_clears_focused_field() {
        let mut app = app_with(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Old name");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Keep me");
        press(&mut app, KeyCode::BackTab);
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&mut app, ctrl_u), KeyAction::None);
        assert!(app.panel.draft.name.is_empty());
        assert_eq!(app.panel.draft.description, "Keep me");
    }

    #[test]
    fn test_complete_key_targets_selection() {
        let mut app = app_with(vec![
            deliverable("d-1", DeliverableStatus::Completed),
            deliverable("d-2", DeliverableStatus::Pending),
        ]);
        assert_eq!(press(&mut app, KeyCode::Char('c')), KeyAction::None);
        press(&mut app, KeyCode::Down);
        match press(&mut app, KeyCode::Char('c')) {
            KeyAction::Dispatch(Request::UpdateStatus { deliverable_id, status, .. }) => {
                assert_eq!(deliverable_id, "d-2");
                assert_eq!(status, DeliverableStatus::Completed);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_upload_flow_through_keys() {
        let mut app = app_with(vec![
            deliverable("d-1", DeliverableStatus::Pending),
            deliverable("d-2", DeliverableStatus::Pending),
        ]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('u'));
        assert!(app.panel.file_picker.is_open);
        type_text(&mut app, "/tmp/x.pdf");
        match press(&mut app, KeyCode::Enter) {
            KeyAction::Dispatch(Request::UploadFile { deliverable_id, path }) => {
                assert_eq!(deliverable_id, "d-2");
                assert_eq!(path, PathBuf::from("/tmp/x.pdf"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_number_opens_attachment() {
        let mut item = deliverable("d-1", DeliverableStatus::Pending);
        item.attachments = vec!["https://files.example.com/a.pdf".to_string()];
        let mut app = app_with(vec![item]);
        assert_eq!(
            press(&mut app, KeyCode::Char('1')),
            KeyAction::OpenUrl("https://files.example.com/a.pdf".to_string())
        );
        assert_eq!(press(&mut app, KeyCode::Char('2')), KeyAction::None);
    }

    #[test]
    fn test_refresh_key() {
        let mut app = app_with(Vec::new());
        assert_eq!(
            press(&mut app, KeyCode::Char('r')),
            KeyAction::Dispatch(app.refresh_request())
        );
    }
}
