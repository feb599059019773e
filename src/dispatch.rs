//! Asynchronous requests issued by the dashboard and their outcomes.
//!
//! UI handlers never await the service themselves. They return a `Request`;
//! the event loop spawns it on the runtime and the matching `Outcome` comes
//! back over a channel to be applied on the loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::models::{DeliverableStatus, NewDeliverable, ProjectDeliverable};
use crate::service::{ProjectService, ServiceError, ServiceResult};

/// Default simulated upload time
pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    AddDeliverable {
        project_id: String,
        deliverable: NewDeliverable,
    },
    UpdateStatus {
        project_id: String,
        deliverable_id: String,
        status: DeliverableStatus,
    },
    UploadFile {
        deliverable_id: String,
        path: PathBuf,
    },
    Refresh {
        project_id: String,
    },
}

#[derive(Debug)]
pub enum Outcome {
    DeliverableAdded(ServiceResult<()>),
    StatusUpdated {
        deliverable_id: String,
        result: ServiceResult<()>,
    },
    FileUploaded {
        deliverable_id: String,
        result: ServiceResult<()>,
    },
    Refreshed(ServiceResult<Vec<ProjectDeliverable>>),
}

/// Run a single request against the service
pub async fn execute(
    service: Arc<dyn ProjectService>,
    request: Request,
    upload_delay: Duration,
) -> Outcome {
    match request {
        Request::AddDeliverable {
            project_id,
            deliverable,
        } => Outcome::DeliverableAdded(service.add_deliverable(&project_id, deliverable).await),
        Request::UpdateStatus {
            project_id,
            deliverable_id,
            status,
        } => {
            let result = service
                .update_deliverable_status(&project_id, &deliverable_id, status)
                .await;
            Outcome::StatusUpdated {
                deliverable_id,
                result,
            }
        }
        Request::UploadFile {
            deliverable_id,
            path,
        } => {
            let result = simulate_upload(&path, upload_delay).await;
            Outcome::FileUploaded {
                deliverable_id,
                result,
            }
        }
        Request::Refresh { project_id } => {
            Outcome::Refreshed(service.list_deliverables(&project_id).await)
        }
    }
}

/// Spawn a request on the runtime; the outcome is sent to `outcomes`
pub fn spawn(
    service: Arc<dyn ProjectService>,
    request: Request,
    upload_delay: Duration,
    outcomes: UnboundedSender<Outcome>,
) {
    tokio::spawn(async move {
        let outcome = execute(service, request, upload_delay).await;
        if outcomes.send(outcome).is_err() {
            debug!("outcome dropped, event loop has exited");
        }
    });
}

// TODO: transfer the file to the project service and append the resulting URL
// to the deliverable's attachments once the service exposes an upload call.
async fn simulate_upload(path: &Path, delay: Duration) -> ServiceResult<()> {
    if let Err(err) = tokio::fs::metadata(path).await {
        warn!(path = %path.display(), error = %err, "selected file is not readable");
        return Err(ServiceError::Upload(format!("{}: {}", path.display(), err)));
    }
    tokio::time::sleep(delay).await;
    Ok(())
}
