//! Add-deliverable form state

use crate::models::{ApprovalStatus, DeliverableStatus, NewDeliverable};

/// Editable fields of the add form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    DueDate,
    AssignedTo,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::DueDate,
        DraftField::AssignedTo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::DueDate => "Due date",
            DraftField::AssignedTo => "Assign to",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::DueDate => "YYYY-MM-DD",
            _ => "",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::AssignedTo)
    }
}

/// Focus targets inside the modal: the four fields, then the two buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFocus {
    Field(DraftField),
    CancelButton,
    SubmitButton,
}

impl DraftFocus {
    const ORDER: [DraftFocus; 6] = [
        DraftFocus::Field(DraftField::Name),
        DraftFocus::Field(DraftField::Description),
        DraftFocus::Field(DraftField::DueDate),
        DraftFocus::Field(DraftField::AssignedTo),
        DraftFocus::CancelButton,
        DraftFocus::SubmitButton,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Unsaved values of the add-deliverable modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDeliverableDraft {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub assigned_to: String,
    pub is_open: bool,
    pub focus: DraftFocus,
}

impl Default for AddDeliverableDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            due_date: String::new(),
            assigned_to: String::new(),
            is_open: false,
            focus: DraftFocus::Field(DraftField::Name),
        }
    }
}

impl AddDeliverableDraft {
    /// Show the modal. Values left over from a previous submit are kept.
    pub fn open(&mut self) {
        self.is_open = true;
        self.focus = DraftFocus::Field(DraftField::Name);
    }

    /// Hide the modal without touching the values
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Discard all values and close
    pub fn discard(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::DueDate => &self.due_date,
            DraftField::AssignedTo => &self.assigned_to,
        }
    }

    fn value_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::DueDate => &mut self.due_date,
            DraftField::AssignedTo => &mut self.assigned_to,
        }
    }

    /// Replace one field, keeping the others
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Append a character to the focused field (no-op on buttons)
    pub fn push_char(&mut self, ch: char) {
        if let DraftFocus::Field(field) = self.focus {
            self.value_mut(field).push(ch);
        }
    }

    /// Remove the last character of the focused field (no-op on buttons)
    pub fn pop_char(&mut self) {
        if let DraftFocus::Field(field) = self.focus {
            self.value_mut(field).pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Required fields that are still empty
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.value(*f).trim().is_empty())
            .collect()
    }

    /// Payload for the service: a fresh pending deliverable at version 1.
    /// Values are sent trimmed, matching how they are validated.
    pub fn to_new_deliverable(&self) -> NewDeliverable {
        NewDeliverable {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: DeliverableStatus::Pending,
            due_date: self.due_date.trim().to_string(),
            assigned_to: self.assigned_to.trim().to_string(),
            attachments: Vec::new(),
            version: 1,
            reviewers: Vec::new(),
            approval_status: ApprovalStatus::Pending,
        }
    }
}
