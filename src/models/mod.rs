//! Data models for the deliverables dashboard
//!
//! This module contains the core data structures:
//! - Project deliverables and the payload for creating one
//! - Task, comment and attachment records
//! - Status and priority enums

pub mod deliverable;
pub mod enums;
pub mod task;

// Re-exports for convenient access
pub use deliverable::{NewDeliverable, ProjectDeliverable};
pub use enums::{ApprovalStatus, DeliverableStatus};
#[allow(unused_imports)]
pub use enums::{TaskPriority, TaskStatus};
#[allow(unused_imports)]
pub use task::{Attachment, Comment, Task};
