// SPDX-License-Identifier: MPL-2.0
//! A single toast: what to say, how urgent it is and when it goes away.
//!
//! Toasts only carry non-blocking feedback. Failures go to the modal error
//! dialog instead, so there is no error severity here.

use crate::app::config::{TOAST_DURATION_SECS, WARNING_TOAST_DURATION_SECS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An action finished (image saved, frame captured).
    Success,
    /// Something was skipped or reset but the app keeps working.
    Warning,
}

impl Severity {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Warnings stay up longer so they are not missed at startup.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        Duration::from_secs(match self {
            Severity::Success => TOAST_DURATION_SECS,
            Severity::Warning => WARNING_TOAST_DURATION_SECS,
        })
    }
}

/// A localized toast. The text is resolved at render time so a language
/// switch applies to toasts already on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    /// Set when the toast first reaches the screen.
    shown_until: Option<Instant>,
}

impl Notification {
    fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            shown_until: None,
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    /// Adds a Fluent argument, e.g. the saved file path.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Starts the display timer. Later calls keep the first deadline.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        if self.shown_until.is_none() {
            self.shown_until = Some(now + self.severity.lifetime());
        }
    }

    /// Toasts that never reached the screen do not expire.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.shown_until.is_some_and(|deadline| now >= deadline)
    }

    /// Same key and same arguments: a repeat of the same toast.
    #[must_use]
    pub fn says_same_as(&self, other: &Notification) -> bool {
        self.key == other.key && self.args == other.args
    }

    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            return i18n.tr(&self.key);
        }
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.key, &args)
    }
}
