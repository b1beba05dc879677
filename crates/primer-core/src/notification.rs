// Transient toast notifications. Each one auto-dismisses three seconds
// after it was shown; several may be visible at once.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// How long a toast stays up.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<(Notification, Instant)>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        self.next_id += 1;
        let note = Notification {
            id: self.next_id,
            message: message.into(),
            level,
        };
        tracing::debug!(id = note.id, ?level, message = %note.message, "notification");
        self.active.push((note, Instant::now()));
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationLevel::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationLevel::Error)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationLevel::Info)
    }

    /// Drop toasts older than [`NOTIFICATION_TTL`]. Returns whether any
    /// were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.active.len();
        self.active
            .retain(|(_, shown)| now.saturating_duration_since(*shown) < NOTIFICATION_TTL);
        self.active.len() != before
    }

    /// Close one toast early.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|(n, _)| n.id != id);
        self.active.len() != before
    }

    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn toasts_expire_after_three_seconds() {
        let mut center = NotificationCenter::default();
        center.success("Added to favorites");
        tokio::time::advance(Duration::from_secs(2)).await;
        center.info("Removed from favorites");

        tokio::time::advance(Duration::from_millis(1_500)).await;
        assert!(center.expire(Instant::now()));
        let left: Vec<_> = center.active().map(|n| n.message.as_str()).collect();
        assert_eq!(left, ["Removed from favorites"]);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(center.expire(Instant::now()));
        assert!(center.is_empty());
        assert!(!center.expire(Instant::now()));
    }

    #[test]
    fn dismiss_by_id() {
        let mut center = NotificationCenter::default();
        let a = center.error("boom");
        let b = center.info("hello");
        assert!(center.dismiss(a));
        assert!(!center.dismiss(a));
        assert_eq!(center.active().map(|n| n.id).collect::<Vec<_>>(), [b]);
    }
}
