//! Project deliverable data structures
//!
//! A deliverable is owned by the project service; the dashboard only reads
//! it and asks the service to create or update it.

use serde::{Deserialize, Serialize};

use super::enums::{ApprovalStatus, DeliverableStatus};

/// A trackable project output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeliverable {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: DeliverableStatus,
    pub due_date: String,
    #[serde(default)]
    pub assigned_to: String,
    /// Attachment URLs, in upload order
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub reviewers: Vec<String>,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
}

fn default_version() -> u32 {
    1
}

/// Payload for creating a deliverable (everything but the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliverable {
    pub name: String,
    pub description: String,
    pub status: DeliverableStatus,
    pub due_date: String,
    pub assigned_to: String,
    pub attachments: Vec<String>,
    pub version: u32,
    pub reviewers: Vec<String>,
    pub approval_status: ApprovalStatus,
}

impl NewDeliverable {
    /// Attach a service-assigned id
    pub fn with_id(self, id: impl Into<String>) -> ProjectDeliverable {
        ProjectDeliverable {
            id: id.into(),
            name: self.name,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
            attachments: self.attachments,
            version: self.version,
            reviewers: self.reviewers,
            approval_status: self.approval_status,
        }
    }
}
