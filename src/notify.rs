//! Transient user notifications (toasts)
//!
//! Every user-facing action reports exactly one `Notification`. The `Notifier` keeps
//! at most one visible at a time: posting a new one replaces the previous one.

use std::time::{Duration, Instant};

/// Default display duration for a notification
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Action succeeded
    Success,
    /// Action failed
    Error,
    /// Action refused (e.g. empty input)
    Warning,
    /// Neutral information
    Info,
}

impl Severity {
    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A single transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// Severity
    pub severity: Severity,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    /// Create a notification with the default duration
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: DEFAULT_DURATION,
        }
    }

    /// Success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Override the display duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Holds the single visible notification
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<(Notification, Instant)>,
    posted: usize,
}

impl Notifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification now, replacing any visible one
    pub fn post(&mut self, notification: Notification) {
        self.post_at(notification, Instant::now());
    }

    /// Show a notification as of `at`
    pub fn post_at(&mut self, notification: Notification, at: Instant) {
        match notification.severity {
            Severity::Error => tracing::warn!("Notification: {}", notification.message),
            _ => tracing::debug!("Notification ({}): {}", notification.severity.name(), notification.message),
        }
        self.current = Some((notification, at));
        self.posted += 1;
    }

    /// Notification visible at `now`, if it has not expired
    pub fn current_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(n, shown)| now.saturating_duration_since(*shown) < n.duration)
            .map(|(n, _)| n)
    }

    /// Notification visible right now
    pub fn current(&self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    /// Most recently posted notification, expired or not
    pub fn last(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// Hide the visible notification
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Total number of notifications posted so far
    pub fn posted_count(&self) -> usize {
        self.posted
    }
}
