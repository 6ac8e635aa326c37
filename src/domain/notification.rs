//! Transient toast notifications.

use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NotificationLevel {
    Info,
    Warn,
}

/// Toast shown over the active panel for a limited time.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// First time the toast was drawn.
    pub displayed_at: Option<Instant>,
    /// Visible time once displayed.
    pub duration: Duration,
}

impl Notification {
    /// Creates notification with the default duration.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: DEFAULT_DURATION,
        }
    }

    /// Sets visible time.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns whether the toast has been visible for its full duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Starts the visibility timer on first draw.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationLevel::Warn, "Погода", "Демо-данные");
        assert_eq!(n.level, NotificationLevel::Warn);
        assert_eq!(n.title, "Погода");
        assert_eq!(n.duration, DEFAULT_DURATION);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expires_only_after_display() {
        let mut n = Notification::new(NotificationLevel::Info, "Курсы", "Обновлено")
            .with_duration(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(1));
        assert!(!n.is_expired());

        n.mark_displayed();
        std::thread::sleep(Duration::from_millis(1));
        assert!(n.is_expired());
    }
}
