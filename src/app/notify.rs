//! Transient notifications

use std::time::{Duration, Instant};

use crate::constants::MESSAGE_TIMEOUT;
use crate::models::MessageKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub text: String,
    pub kind: MessageKind,
    shown_at: Instant,
}

/// Single notification surface; each `show` replaces the previous message
/// and restarts the hide timer.
#[derive(Debug)]
pub struct Notifier {
    current: Option<Notification>,
    timeout: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Notifier {
            current: None,
            timeout: MESSAGE_TIMEOUT,
        }
    }

    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind, now: Instant) {
        let text = text.into();
        tracing::debug!(text = %text, kind = ?kind, "Notification");
        self.current = Some(Notification {
            text,
            kind,
            shown_at: now,
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.show(text, MessageKind::Info, Instant::now());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(text, MessageKind::Error, Instant::now());
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Hide the notification once its timeout has passed. Returns true if
    /// something was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now.duration_since(n.shown_at) >= self.timeout => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
