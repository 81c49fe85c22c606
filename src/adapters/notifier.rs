use crate::core::{Notification, Notifier, Severity};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Holds raised notifications until their time-to-live runs out.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Mutex<Vec<(Instant, Notification)>>,
    ttl_override: Option<Duration>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification raised here lives for `ttl` instead of its own.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            ttl_override: Some(ttl),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<(Instant, Notification)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn active(&self) -> Vec<Notification> {
        self.active_at(Instant::now())
    }

    /// Drops notifications expired at `now` and returns the rest, oldest first.
    pub fn active_at(&self, now: Instant) -> Vec<Notification> {
        let mut entries = self.entries();
        entries.retain(|(raised, n)| now.saturating_duration_since(*raised) < n.ttl);
        entries.iter().map(|(_, n)| n.clone()).collect()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, mut notification: Notification) {
        if let Some(ttl) = self.ttl_override {
            notification.ttl = ttl;
        }

        match notification.severity {
            Severity::Error => tracing::error!("🔔 {}", notification.message),
            Severity::Warning => tracing::warn!("🔔 {}", notification.message),
            Severity::Info | Severity::Success => tracing::info!("🔔 {}", notification.message),
        }

        let now = Instant::now();
        let mut entries = self.entries();
        entries.retain(|(raised, n)| now.saturating_duration_since(*raised) < n.ttl);
        entries.push((now, notification));
    }
}
