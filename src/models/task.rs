//! Task data structures
//!
//! Shape contract for tasks, their comments and their attachments. Comments
//! and attachments point back at their task through `task_id`.

use serde::{Deserialize, Serialize};

use super::enums::{TaskPriority, TaskStatus};

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub user_id: String,
    pub created_at: String,
    pub task_id: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub uploaded_by: String,
    pub uploaded_at: String,
    pub task_id: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_time: String,
    pub end_time: String,
    pub assigned_to: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: String,
    pub updated_at: String,
}
