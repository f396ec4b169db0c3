use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Single-slot message surface. While a message is visible, further
/// messages are dropped.
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    default_duration: Duration,
    current: Option<Notification>,
}

impl NotificationChannel {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            default_duration,
            current: None,
        }
    }

    /// Returns false when the message was dropped because another is visible.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> bool {
        let message = message.into();

        if let Some(active) = &self.current {
            debug!(dropped = %message, active = %active.message, "Notification slot busy");
            return false;
        }

        self.current = Some(Notification {
            message,
            severity,
            duration: duration.unwrap_or(self.default_duration),
            shown_at: Instant::now(),
        });
        true
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }

    /// Hide the visible message once its duration has elapsed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if n.is_expired(now) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
