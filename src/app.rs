//! Application state and core logic for the deliverables dashboard.
//!
//! `App` is the parent of the deliverables panel: it owns the project's
//! deliverable list and replaces it whenever the service answers a refresh.
//! The panel itself never edits the list.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::cli::CliConfig;
use crate::dispatch::{Outcome, Request};
use crate::models::ProjectDeliverable;
use crate::panel::DeliverablesPanel;

/// Application state
pub struct App {
    pub project_id: String,
    pub project_name: String,
    pub deliverables: Vec<ProjectDeliverable>,
    pub panel: DeliverablesPanel,
    /// Set by the store watcher when the backing file changes
    pub store_needs_reload: Arc<Mutex<bool>>,
    // Whether the first refresh has come back yet
    pub loaded: bool,
}

impl App {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            project_name: config.project_name.clone(),
            deliverables: Vec::new(),
            panel: DeliverablesPanel::new(config.project_id.clone(), config.can_edit),
            store_needs_reload: Arc::new(Mutex::new(false)),
            loaded: false,
        }
    }

    pub fn refresh_request(&self) -> Request {
        Request::Refresh {
            project_id: self.project_id.clone(),
        }
    }

    /// Consume the watcher flag; returns a refresh if the store changed
    pub fn reload_if_needed(&mut self) -> Option<Request> {
        let needs_reload = {
            let Ok(mut flag) = self.store_needs_reload.lock() else {
                return None;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };

        if needs_reload {
            debug!(project_id = %self.project_id, "store changed on disk");
            Some(self.refresh_request())
        } else {
            None
        }
    }

    /// Apply an outcome; returns a follow-up refresh when data changed
    pub fn apply_outcome(&mut self, outcome: Outcome) -> Option<Request> {
        match outcome {
            Outcome::Refreshed(Ok(deliverables)) => {
                self.deliverables = deliverables;
                self.loaded = true;
                self.panel.clamp_selection(self.deliverables.len());
                None
            }
            Outcome::Refreshed(Err(err)) => {
                // Keep showing the last list we had
                warn!(project_id = %self.project_id, error = %err, "failed to refresh deliverables");
                None
            }
            other => {
                let changed = matches!(
                    other,
                    Outcome::DeliverableAdded(Ok(())) | Outcome::StatusUpdated { result: Ok(()), .. }
                );
                self.panel.apply_outcome(&other);
                changed.then(|| self.refresh_request())
            }
        }
    }
}
