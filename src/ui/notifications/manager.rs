// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! The first [`MAX_VISIBLE_TOASTS`] entries are on screen, the rest wait.
//! Pushing a toast that repeats one already queued replaces it instead of
//! stacking a copy, so saving twice shows one "saved" toast.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::MAX_VISIBLE_TOASTS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if notification.severity() == Severity::Warning {
            log::warn!("toast: {}", notification.key());
        }

        match self
            .entries
            .iter_mut()
            .find(|existing| existing.says_same_as(&notification))
        {
            Some(existing) => *existing = notification,
            None => self.entries.push_back(notification),
        }
        self.start_visible_timers(Instant::now());
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id() != id);
        self.start_visible_timers(Instant::now());
        self.entries.len() != before
    }

    /// Drops expired toasts; waiting ones move up and start their timers.
    pub fn tick(&mut self, now: Instant) {
        self.entries.retain(|n| !n.is_expired(now));
        self.start_visible_timers(now);
    }

    fn start_visible_timers(&mut self, now: Instant) {
        for notification in self.entries.iter_mut().take(MAX_VISIBLE_TOASTS) {
            notification.mark_shown(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE_TOASTS)
    }

    #[must_use]
    pub fn waiting(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE_TOASTS)
    }

    /// The tick subscription only runs while this is true.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_manager() -> (Manager, Vec<NotificationId>) {
        let mut manager = Manager::new();
        let ids = (0..=MAX_VISIBLE_TOASTS)
            .map(|i| {
                let toast = Notification::success(format!("toast-{i}"));
                let id = toast.id();
                manager.push(toast);
                id
            })
            .collect();
        (manager, ids)
    }

    #[test]
    fn overflow_waits_for_a_free_slot() {
        let (mut manager, ids) = full_manager();
        assert_eq!(manager.visible().count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.waiting(), 1);

        assert!(manager.dismiss(ids[0]));
        assert_eq!(manager.waiting(), 0);
        assert!(manager.visible().any(|n| n.id() == ids[MAX_VISIBLE_TOASTS]));
    }

    #[test]
    fn repeated_toast_replaces_the_old_one() {
        let mut manager = Manager::new();
        let saved = || Notification::success("notification-image-saved").with_arg("path", "out.png");
        manager.push(saved());
        let second = saved();
        let second_id = second.id();
        manager.push(second);

        let visible: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_eq!(visible, vec![second_id]);
    }

    #[test]
    fn tick_expires_only_shown_toasts() {
        let (mut manager, ids) = full_manager();
        let later = Instant::now() + Severity::Warning.lifetime();

        manager.tick(later);
        // The waiting toast had not been on screen, so its timer starts now.
        let left: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_eq!(left, vec![ids[MAX_VISIBLE_TOASTS]]);

        manager.tick(later);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut manager = Manager::new();
        let toast = Notification::warning("notification-config-load-error");
        let id = toast.id();
        manager.push(toast);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
        assert!(!manager.dismiss(id));
    }
}
