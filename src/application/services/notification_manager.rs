//! Queue of toast notifications shown one at a time.

use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

const MAX_QUEUED: usize = 4;

/// FIFO of toasts; only the front one is visible.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl NotificationManager {
    /// Creates manager with the given visible time per toast.
    #[must_use]
    pub const fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues a toast.
    ///
    /// An identical toast already waiting is not queued twice, and the oldest
    /// waiting toast is dropped once the queue is full.
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);

        let duplicate = self.queue.iter().any(|queued| {
            queued.level == notification.level
                && queued.title == notification.title
                && queued.message == notification.message
        });
        if duplicate {
            return;
        }

        if self.queue.len() >= MAX_QUEUED {
            self.queue.remove(1);
        }
        self.queue.push_back(notification);
    }

    /// Queues informational toast.
    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    /// Queues warning toast.
    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, title, message);
    }

    /// Advances display timers; expired toasts make way for the next one.
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Returns the visible toast.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_notification_flow() {
        let mut manager = NotificationManager::default();

        manager.warn("Погода", "Демо-данные");
        assert!(manager.current_notification().is_some());

        manager.tick();
        assert!(manager.current_notification().is_some());

        manager.queue.front_mut().unwrap().displayed_at =
            Some(Instant::now().checked_sub(Duration::from_secs(10)).unwrap());
        manager.tick();
        assert!(manager.current_notification().is_none());
    }

    #[test]
    fn test_queueing() {
        let mut manager = NotificationManager::default();
        manager.info("1", "First");
        manager.info("2", "Second");

        assert_eq!(manager.current_notification().unwrap().title, "1");

        manager.tick();

        manager.queue.front_mut().unwrap().displayed_at =
            Some(Instant::now().checked_sub(Duration::from_secs(10)).unwrap());

        manager.tick();

        assert_eq!(manager.current_notification().unwrap().title, "2");

        let second = manager.current_notification().unwrap();
        assert!(second.displayed_at.unwrap().elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let mut manager = NotificationManager::default();
        manager.warn("Курсы", "Демо-данные");
        manager.warn("Курсы", "Демо-данные");
        manager.warn("Погода", "Демо-данные");

        assert_eq!(manager.queue.len(), 2);
    }

    #[test]
    fn test_queue_is_bounded_and_keeps_visible_toast() {
        let mut manager = NotificationManager::default();
        for i in 0..10 {
            manager.warn(format!("{i}"), "boom");
        }

        assert_eq!(manager.queue.len(), MAX_QUEUED);
        assert_eq!(manager.current_notification().unwrap().title, "0");
        assert_eq!(manager.queue.back().unwrap().title, "9");
    }
}
