//! Transient feedback messages with timed expiry.

use crate::constants::MESSAGE_TIMEOUT_SECS;
use std::time::{Duration, Instant};

/// Holds the feedback message currently on screen, if any.
///
/// A message expires a fixed delay after the latest `show`. Showing a new
/// message replaces the pending deadline outright, so a stale deadline can
/// never blank a newer message.
#[derive(Debug)]
pub struct MessageArea {
    current: Option<Message>,
}

#[derive(Debug)]
struct Message {
    text: String,
    shown_at: Instant,
}

impl MessageArea {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Shows a message, restarting the expiry countdown.
    pub fn show(&mut self, text: impl Into<String>) {
        self.show_at(text.into(), Instant::now());
    }

    fn show_at(&mut self, text: String, now: Instant) {
        self.current = Some(Message {
            text,
            shown_at: now,
        });
    }

    /// Clears the message once its timeout has elapsed. Called every pass
    /// of the draw loop.
    pub fn expire_stale(&mut self, now: Instant) {
        if let Some(message) = &self.current {
            let age = now.duration_since(message.shown_at);
            if age >= Duration::from_secs(MESSAGE_TIMEOUT_SECS) {
                self.current = None;
            }
        }
    }

    /// The text currently on screen, if any.
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|message| message.text.as_str())
    }
}

impl Default for MessageArea {
    fn default() -> Self {
        Self::new()
    }
}
