use tracing::{error, info, warn};

use crate::frame::Frame;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A non-blocking, user-visible message (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub frame_index: u64,
    pub severity: Severity,
    pub message: String,
}

/// Queue of notifications raised while handling events.
///
/// The front end drains it after every frame; nothing here blocks.
#[derive(Debug, Default)]
pub struct NotificationBus {
    pending: Vec<Notification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn emit(&mut self, frame: Frame, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Error => error!(frame = frame.index, "{message}"),
            Severity::Warning => warn!(frame = frame.index, "{message}"),
            Severity::Info | Severity::Success => info!(frame = frame.index, "{message}"),
        }
        self.pending.push(Notification {
            frame_index: frame.index,
            severity,
            message,
        });
    }

    pub fn info(&mut self, frame: Frame, message: impl Into<String>) {
        self.emit(frame, Severity::Info, message);
    }

    pub fn success(&mut self, frame: Frame, message: impl Into<String>) {
        self.emit(frame, Severity::Success, message);
    }

    pub fn warning(&mut self, frame: Frame, message: impl Into<String>) {
        self.emit(frame, Severity::Warning, message);
    }

    pub fn error(&mut self, frame: Frame, message: impl Into<String>) {
        self.emit(frame, Severity::Error, message);
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}
