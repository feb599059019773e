//! Toast notifications.
//!
//! The panel reports every user-visible success or failure as a toast. Toasts
//! live for a fixed time and only the most recent few are displayed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Maximum number of toasts shown at once
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Notification sink with expiry
#[derive(Debug, Default)]
pub struct ToastQueue {
    entries: VecDeque<(Toast, Instant)>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.push_at(toast, Instant::now());
    }

    pub fn push_at(&mut self, toast: Toast, now: Instant) {
        self.entries.push_back((toast, now));
        while self.entries.len() > MAX_VISIBLE_TOASTS {
            self.entries.pop_front();
        }
    }

    /// Drop toasts older than `TOAST_TTL`
    pub fn prune(&mut self, now: Instant) {
        self.entries
            .retain(|(_, shown_at)| now.duration_since(*shown_at) < TOAST_TTL);
    }

    /// Visible toasts, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|(toast, _)| toast)
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.entries.back().map(|(toast, _)| toast)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut queue = ToastQueue::new();
        assert!(queue.latest().is_none());
        queue.push(Toast::new("first"));
        queue.push(Toast::new("second"));
        assert_eq!(queue.latest().unwrap().message, "second");
    }

    #[test]
    fn test_caps_visible_toasts() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(Toast::new(format!("toast {}", i)));
        }
        let messages: Vec<&str> = queue.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_prune_expired() {
        let start = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at(Toast::new("old"), start);
        queue.push_at(Toast::new("new"), start + Duration::from_secs(3));

        queue.prune(start + TOAST_TTL);
        let messages: Vec<&str> = queue.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["new"]);

        queue.prune(start + Duration::from_secs(3) + TOAST_TTL);
        assert!(queue.is_empty());
    }
}
