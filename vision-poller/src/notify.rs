//! Notification sink for poll progress
//!
//! The poller reports progress and success through a [`Notifier`] handed to
//! it, so it runs the same with a terminal, a UI toast layer, or nothing at
//! all attached.

use std::sync::{Arc, Mutex};

use tracing::{error, info};
use vision_core::domain::notice::{Notice, NoticeLevel};

/// Fire-and-forget sink for user-facing messages
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);

    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Notifier that writes every message to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        info!(target: "vision::notice", "{}", message);
    }

    fn success(&self, message: &str) {
        info!(target: "vision::notice", success = true, "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "vision::notice", "{}", message);
    }
}

/// Notifier that keeps messages in memory until drained
///
/// Useful for front-ends that render notices on their own schedule.
#[derive(Debug, Clone, Default)]
pub struct BufferedNotifier {
    buffer: Arc<Mutex<Vec<Notice>>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all buffered notices and clears the buffer
    pub fn drain(&self) -> Vec<Notice> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.drain(..).collect()
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.push(Notice::new(level, message));
    }
}

impl Notifier for BufferedNotifier {
    fn info(&self, message: &str) {
        self.push(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.push(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}
