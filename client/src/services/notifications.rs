//! # Notifications
//!
//! Toast queue shared by the facades and rendered by the UI overlay.
//!
//! Instead of timers, every notification with a positive duration carries an
//! expiry instant; [`NotificationCenter::active`] prunes expired entries each time the
//! UI asks for the queue.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Auto-dismiss delay. Zero means the toast stays until dismissed.
    pub fn default_duration(&self) -> Duration {
        match self {
            NotificationKind::Success | NotificationKind::Info => Duration::from_millis(3000),
            NotificationKind::Warning => Duration::from_millis(4000),
            NotificationKind::Error => Duration::ZERO,
        }
    }
}

/// Button shown inside a toast.
#[derive(Clone)]
pub struct NotificationAction {
    pub label: String,
    pub callback: Arc<dyn Fn() + Send + Sync>,
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration: Duration,
    pub created_at: Instant,
    pub action: Option<NotificationAction>,
}

impl Notification {
    pub fn expires_at(&self) -> Option<Instant> {
        if self.duration.is_zero() {
            None
        } else {
            Some(self.created_at + self.duration)
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|deadline| now >= deadline)
    }
}

#[derive(Debug, Default)]
struct Queue {
    items: Vec<Notification>,
    counter: u64,
}

/// Cloneable handle to the shared toast queue.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    queue: Arc<Mutex<Queue>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, title: &str, message: &str) -> String {
        self.show(NotificationKind::Success, title, message, None)
    }

    pub fn error(&self, title: &str, message: &str) -> String {
        self.show(NotificationKind::Error, title, message, None)
    }

    pub fn error_with_action(&self, title: &str, message: &str, action: NotificationAction) -> String {
        self.show(NotificationKind::Error, title, message, Some(action))
    }

    pub fn warning(&self, title: &str, message: &str) -> String {
        self.show(NotificationKind::Warning, title, message, None)
    }

    pub fn info(&self, title: &str, message: &str) -> String {
        self.show(NotificationKind::Info, title, message, None)
    }

    fn show(&self, kind: NotificationKind, title: &str, message: &str, action: Option<NotificationAction>) -> String {
        let mut queue = self.queue.lock();
        queue.counter += 1;
        let id = format!("notification-{}", queue.counter);

        tracing::debug!(%id, ?kind, title, "Notification shown");
        queue.items.push(Notification {
            id: id.clone(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            duration: kind.default_duration(),
            created_at: Instant::now(),
            action,
        });
        id
    }

    pub fn dismiss(&self, id: &str) {
        self.queue.lock().items.retain(|n| n.id != id);
    }

    pub fn dismiss_all(&self) {
        self.queue.lock().items.clear();
    }

    pub fn dismiss_by_kind(&self, kind: NotificationKind) {
        self.queue.lock().items.retain(|n| n.kind != kind);
    }

    /// Drop every notification whose duration has elapsed at `now`.
    pub fn prune_expired(&self, now: Instant) {
        self.queue.lock().items.retain(|n| !n.is_expired(now));
    }

    /// Current queue, oldest first, after pruning.
    pub fn active(&self) -> Vec<Notification> {
        self.prune_expired(Instant::now());
        self.queue.lock().items.clone()
    }

    /// Earliest pending expiry, used to schedule the next repaint.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.queue.lock().items.iter().filter_map(Notification::expires_at).min()
    }
}
