//! JSON file backed project store
//!
//! Layout of the store file:
//!
//! ```json
//! { "projects": [ { "id": "...", "name": "...", "deliverables": [ ... ] } ] }
//! ```
//!
//! Every operation re-reads the file so edits made outside the dashboard are
//! picked up, then writes it back pretty-printed.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{ProjectService, ServiceError, ServiceResult};
use crate::models::{DeliverableStatus, NewDeliverable, ProjectDeliverable};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    projects: Vec<StoredProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredProject {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    deliverables: Vec<ProjectDeliverable>,
}

impl StoreFile {
    fn project_mut(&mut self, project_id: &str) -> ServiceResult<&mut StoredProject> {
        self.projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| ServiceError::ProjectNotFound(project_id.to_string()))
    }
}

/// Project list entry for selection prompts
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub total: usize,
    pub completed: usize,
}

/// `ProjectService` over a single JSON file
#[derive(Debug)]
pub struct JsonProjectStore {
    path: PathBuf,
    // Serializes read-modify-write cycles from concurrent requests
    write_lock: Mutex<()>,
}

impl JsonProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load project summaries synchronously (used before the runtime UI starts)
    pub fn load_projects(path: &Path) -> io::Result<Vec<ProjectSummary>> {
        let content = std::fs::read_to_string(path)?;
        let store: StoreFile = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(store
            .projects
            .iter()
            .map(|p| ProjectSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                total: p.deliverables.len(),
                completed: p
                    .deliverables
                    .iter()
                    .filter(|d| d.status.is_completed())
                    .count(),
            })
            .collect())
    }

    async fn read_store(&self) -> ServiceResult<StoreFile> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write to a sibling file and rename it over the store, so readers
    /// never see a truncated document
    async fn write_store(&self, store: &StoreFile) -> ServiceResult<()> {
        let content = serde_json::to_string_pretty(store)?;
        let mut staging = self.path.as_os_str().to_owned();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        tokio::fs::write(&staging, content).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectService for JsonProjectStore {
    async fn add_deliverable(
        &self,
        project_id: &str,
        deliverable: NewDeliverable,
    ) -> ServiceResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.read_store().await?;

        let id = uuid::Uuid::new_v4().to_string();
        let project = store.project_mut(project_id)?;
        project.deliverables.push(deliverable.with_id(id.clone()));

        self.write_store(&store).await?;
        info!(project_id, deliverable_id = %id, "deliverable added");
        Ok(())
    }

    async fn update_deliverable_status(
        &self,
        project_id: &str,
        deliverable_id: &str,
        status: DeliverableStatus,
    ) -> ServiceResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.read_store().await?;

        let project = store.project_mut(project_id)?;
        let deliverable = project
            .deliverables
            .iter_mut()
            .find(|d| d.id == deliverable_id)
            .ok_or_else(|| ServiceError::DeliverableNotFound(deliverable_id.to_string()))?;
        deliverable.status = status;

        self.write_store(&store).await?;
        info!(project_id, deliverable_id, status = status.label(), "deliverable status updated");
        Ok(())
    }

    async fn list_deliverables(&self, project_id: &str) -> ServiceResult<Vec<ProjectDeliverable>> {
        let store = {
            let _guard = self.write_lock.lock().await;
            self.read_store().await?
        };
        let project = store
            .projects
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| ServiceError::ProjectNotFound(project_id.to_string()))?;
        debug!(project_id, count = project.deliverables.len(), "deliverables loaded");
        Ok(project.deliverables)
    }
}
