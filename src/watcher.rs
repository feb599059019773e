//! Store file watching.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

/// True if any event path refers to the store file
fn event_touches_store(paths: &[PathBuf], canonical_store: &Path, store_name: Option<&std::ffi::OsStr>) -> bool {
    paths.iter().any(|p| {
        // Try canonical path comparison first
        if let Ok(canonical) = p.canonicalize() {
            if canonical == canonical_store {
                return true;
            }
        }
        // Editors that replace the file leave nothing to canonicalize
        match (store_name, p.file_name()) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    })
}

/// Set up a file watcher that flags `needs_reload` when the store changes
pub fn setup_store_watcher(
    store_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical_store = store_path
        .canonicalize()
        .unwrap_or_else(|_| store_path.clone());
    let store_name = store_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if event_touches_store(&event.paths, &canonical_store, store_name.as_deref()) {
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
            Err(err) => warn!(error = %err, "store watcher error"),
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            let parent = store_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            if let Err(err) = watcher.watch(parent, RecursiveMode::NonRecursive) {
                warn!(path = %parent.display(), error = %err, "failed to watch store directory");
            } else {
                debug!(path = %store_path.display(), "watching store file");
            }
            Some(watcher)
        }
        Err(err) => {
            warn!(error = %err, "store watcher unavailable, external edits need a manual refresh");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_matches_by_file_name() {
        let store = PathBuf::from("/data/projects/deliverables.json");
        let name = store.file_name();
        assert!(event_touches_store(
            &[PathBuf::from("/elsewhere/deliverables.json")],
            &store,
            name
        ));
        assert!(!event_touches_store(
            &[PathBuf::from("/data/projects/notes.txt")],
            &store,
            name
        ));
        assert!(!event_touches_store(&[], &store, name));
    }

    #[test]
    fn test_event_matches_canonical_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store.json");
        std::fs::write(&store, "{}").unwrap();
        let canonical = store.canonicalize().unwrap();
        assert!(event_touches_store(&[store.clone()], &canonical, None));
    }
}
