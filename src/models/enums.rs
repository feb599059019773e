//! Enums used throughout the deliverables dashboard
//!
//! Status and priority enums shared by deliverables and tasks. Wire names are
//! snake_case to match the JSON the project service stores.

use serde::{Deserialize, Serialize};

/// Delivery status of a project deliverable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl DeliverableStatus {
    #[cfg(test)]
    pub const ALL: [DeliverableStatus; 3] = [
        DeliverableStatus::Pending,
        DeliverableStatus::InProgress,
        DeliverableStatus::Completed,
    ];

    /// Fixed badge label
    pub fn label(&self) -> &'static str {
        match self {
            DeliverableStatus::Pending => "Pending",
            DeliverableStatus::InProgress => "In Progress",
            DeliverableStatus::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == DeliverableStatus::Completed
    }
}

/// Review workflow state, separate from delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}
