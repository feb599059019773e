//! Errors returned by project service implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to access project store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Project store is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Deliverable not found: {0}")]
    DeliverableNotFound(String),

    #[error("Upload failed: {0}")]
    Upload(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
