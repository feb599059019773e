//! Project service seam.
//!
//! The dashboard never touches persistence directly; every change goes
//! through a `ProjectService`. The bundled implementation is a JSON file
//! store.

mod error;
mod json_store;

pub use error::{ServiceError, ServiceResult};
pub use json_store::{JsonProjectStore, ProjectSummary};

use async_trait::async_trait;

use crate::models::{DeliverableStatus, NewDeliverable, ProjectDeliverable};

/// Operations the dashboard needs from the project backend.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Create a deliverable under `project_id`. The service assigns the id.
    async fn add_deliverable(
        &self,
        project_id: &str,
        deliverable: NewDeliverable,
    ) -> ServiceResult<()>;

    /// Move a deliverable to `status`.
    async fn update_deliverable_status(
        &self,
        project_id: &str,
        deliverable_id: &str,
        status: DeliverableStatus,
    ) -> ServiceResult<()>;

    /// Current deliverables of a project, in stored order.
    async fn list_deliverables(&self, project_id: &str) -> ServiceResult<Vec<ProjectDeliverable>>;
}
