//! Deliverables panel state and actions.
//!
//! The panel does not own the deliverable list; its parent passes the current
//! list into every call that needs it. Actions that reach the project service
//! return a `Request` for the event loop to run, and the result is fed back
//! through `apply_outcome`.

pub mod draft;
pub mod upload;

use std::path::PathBuf;

use tracing::{error, info};

use crate::dispatch::{Outcome, Request};
use crate::models::{DeliverableStatus, ProjectDeliverable};
use crate::toast::{Toast, ToastQueue};

use draft::{AddDeliverableDraft, DraftField};
use upload::FilePicker;

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const MSG_ADD_SUCCESS: &str = "Deliverable added successfully";
pub const MSG_ADD_ERROR: &str = "Error adding deliverable";
pub const MSG_STATUS_SUCCESS: &str = "Status updated successfully";
pub const MSG_STATUS_ERROR: &str = "Error updating status";
pub const MSG_UPLOAD_SUCCESS: &str = "File uploaded successfully";
pub const MSG_UPLOAD_ERROR: &str = "Error uploading file";

pub struct DeliverablesPanel {
    pub project_id: String,
    pub can_edit: bool,
    /// Shared by every in-flight action
    pub is_loading: bool,
    pub selected_index: usize,
    /// Deliverable the next selected file belongs to
    pub upload_target: Option<String>,
    pub draft: AddDeliverableDraft,
    pub file_picker: FilePicker,
    pub toasts: ToastQueue,
}

impl DeliverablesPanel {
    pub fn new(project_id: impl Into<String>, can_edit: bool) -> Self {
        Self {
            project_id: project_id.into(),
            can_edit,
            is_loading: false,
            selected_index: 0,
            upload_target: None,
            draft: AddDeliverableDraft::default(),
            file_picker: FilePicker::default(),
            toasts: ToastQueue::new(),
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message));
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn selected<'a>(&self, deliverables: &'a [ProjectDeliverable]) -> Option<&'a ProjectDeliverable> {
        deliverables.get(self.selected_index)
    }

    // ---------------------------------------------------------------------
    // Add deliverable
    // ---------------------------------------------------------------------

    pub fn open_add_modal(&mut self) {
        if self.can_edit {
            self.draft.open();
        }
    }

    pub fn cancel_add_modal(&mut self) {
        self.draft.discard();
    }

    pub fn edit_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Validate the draft and build the add request.
    ///
    /// Returns `None` when the modal is closed, a call is already in flight,
    /// or a required field is empty (the latter also raises a toast).
    pub fn submit_add(&mut self) -> Option<Request> {
        if !self.draft.is_open || self.is_loading {
            return None;
        }

        if !self.draft.missing_required().is_empty() {
            self.notify(MSG_REQUIRED_FIELDS);
            return None;
        }

        self.is_loading = true;
        Some(Request::AddDeliverable {
            project_id: self.project_id.clone(),
            deliverable: self.draft.to_new_deliverable(),
        })
    }

    // ---------------------------------------------------------------------
    // Status
    // ---------------------------------------------------------------------

    pub fn update_status(&mut self, deliverable_id: &str, status: DeliverableStatus) -> Request {
        self.is_loading = true;
        Request::UpdateStatus {
            project_id: self.project_id.clone(),
            deliverable_id: deliverable_id.to_string(),
            status,
        }
    }

    /// "Mark as completed" on the selected card
    pub fn mark_selected_completed(&mut self, deliverables: &[ProjectDeliverable]) -> Option<Request> {
        if !self.can_edit {
            return None;
        }
        let deliverable = self.selected(deliverables)?;
        if deliverable.status.is_completed() {
            return None;
        }
        let id = deliverable.id.clone();
        Some(self.update_status(&id, DeliverableStatus::Completed))
    }

    // ---------------------------------------------------------------------
    // Upload
    // ---------------------------------------------------------------------

    /// Remember the target deliverable and open the file picker
    pub fn begin_upload(&mut self, deliverable: &ProjectDeliverable) {
        if !self.can_edit {
            return;
        }
        self.upload_target = Some(deliverable.id.clone());
        self.file_picker.open();
    }

    pub fn begin_upload_selected(&mut self, deliverables: &[ProjectDeliverable]) {
        if let Some(deliverable) = self.selected(deliverables) {
            self.begin_upload(deliverable);
        }
    }

    pub fn cancel_upload(&mut self) {
        self.file_picker.close();
    }

    /// Route a chosen file to the recorded target
    pub fn select_file(&mut self, file: Option<PathBuf>) -> Option<Request> {
        let path = file?;
        let deliverable_id = self.upload_target.clone()?;
        self.is_loading = true;
        Some(Request::UploadFile {
            deliverable_id,
            path,
        })
    }

    /// Confirm whatever path is typed into the picker
    pub fn confirm_file_picker(&mut self) -> Option<Request> {
        let selection = self.file_picker.take_selection();
        self.select_file(selection)
    }

    // ---------------------------------------------------------------------
    // Attachments
    // ---------------------------------------------------------------------

    /// URL of the selected card's attachment `number` (1-based)
    pub fn attachment_url<'a>(
        &self,
        deliverables: &'a [ProjectDeliverable],
        number: usize,
    ) -> Option<&'a str> {
        let deliverable = self.selected(deliverables)?;
        let index = number.checked_sub(1)?;
        deliverable.attachments.get(index).map(String::as_str)
    }

    // ---------------------------------------------------------------------
    // Outcomes
    // ---------------------------------------------------------------------

    pub fn apply_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::DeliverableAdded(Ok(())) => {
                self.is_loading = false;
                info!(project_id = %self.project_id, "deliverable added");
                self.notify(MSG_ADD_SUCCESS);
                // Values stay in the draft and show up again on the next open
                self.draft.close();
            }
            Outcome::DeliverableAdded(Err(err)) => {
                self.is_loading = false;
                error!(error = %err, "error adding deliverable");
                self.notify(MSG_ADD_ERROR);
            }
            Outcome::StatusUpdated {
                deliverable_id,
                result,
            } => {
                self.is_loading = false;
                match result {
                    Ok(()) => self.notify(MSG_STATUS_SUCCESS),
                    Err(err) => {
                        error!(deliverable_id = %deliverable_id, error = %err, "error updating status");
                        self.notify(MSG_STATUS_ERROR);
                    }
                }
            }
            Outcome::FileUploaded {
                deliverable_id,
                result,
            } => {
                self.is_loading = false;
                match result {
                    Ok(()) => self.notify(MSG_UPLOAD_SUCCESS),
                    Err(err) => {
                        error!(deliverable_id = %deliverable_id, error = %err, "error uploading file");
                        self.notify(MSG_UPLOAD_ERROR);
                    }
                }
            }
            Outcome::Refreshed(_) => {}
        }
    }
}
