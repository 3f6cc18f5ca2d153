//! User-visible notices raised where a failure is absorbed.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Success => write!(f, "success"),
            NoticeLevel::Warning => write!(f, "warning"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// A one-line message for the person using the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Where notices go. The terminal front end prints them; tests record them.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Keeps every notice in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, notice: Notice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }
}

impl<T: NoticeSink + ?Sized> NoticeSink for std::sync::Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order() {
        let sink = RecordingNotices::new();
        sink.notify(Notice::warning("first"));
        sink.notify(Notice::error("second"));
        let notices = sink.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0], Notice::warning("first"));
        assert_eq!(notices[1].level, NoticeLevel::Error);
    }

    #[test]
    fn arc_forwards_to_inner_sink() {
        let sink = std::sync::Arc::new(RecordingNotices::new());
        let shared = std::sync::Arc::clone(&sink);
        shared.notify(Notice::info("hello"));
        assert_eq!(sink.notices(), vec![Notice::info("hello")]);
    }
}
