//! Transient notifications

use super::record::FormRecord;
use super::wizard::SubmissionHandler;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A notification shown for a limited time
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= lifetime
    }
}

/// Queue of toasts; the oldest live one is displayed
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts.retain(|t| !t.is_expired_at(now, lifetime));
    }
}

impl SubmissionHandler for ToastQueue {
    fn on_submit(&mut self, _record: &FormRecord) {
        self.push(Toast::new(
            "Form Submitted",
            "Your form has been successfully submitted!",
        ));
    }
}
