//! Utility functions for common operations.

use std::io;
use std::process::Command;
use std::thread::JoinHandle;

use chrono::{DateTime, NaiveDate};
use tracing::debug;

/// Format a due date as DD/MM/YYYY.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp; anything else
/// is returned unchanged.
pub fn format_due_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.date_naive().format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

/// Open a URL in the system's default handler
pub fn open_external(url: &str) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    spawn_reaped(&mut command).map(|_| ())
}

/// Spawn `command` and wait for it on a helper thread so it never lingers
/// as a zombie. The handle finishes once the child has exited.
fn spawn_reaped(command: &mut Command) -> io::Result<JoinHandle<()>> {
    let mut child = command.spawn()?;
    Ok(std::thread::spawn(move || {
        if let Err(err) = child.wait() {
            debug!(error = %err, "failed to wait for opener process");
        }
    }))
}
