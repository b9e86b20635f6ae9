//! Transient notices (toasts)
//!
//! Success/error notices shown after an action auto-dismiss after a fixed
//! interval; the clock is injected so expiry is testable.

use std::time::{Duration, Instant};

/// How long a notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Visual flavor of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Action completed
    Success,
    /// Action failed
    Error,
}

/// A transient message with its creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    kind: NoticeKind,
    created: Instant,
}

impl Notice {
    /// Success notice created now
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::created_at(message, NoticeKind::Success, Instant::now())
    }

    /// Error notice created now
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::created_at(message, NoticeKind::Error, Instant::now())
    }

    /// Notice with an explicit creation time (tests)
    #[must_use]
    pub fn created_at(message: impl Into<String>, kind: NoticeKind, created: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            created,
        }
    }

    /// The message text
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The notice kind
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Whether the notice should be dismissed at `now`
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= NOTICE_TTL
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notice_expires_after_ttl() {
        let start = Instant::now();
        let notice = Notice::created_at("Course saved successfully!", NoticeKind::Success, start);

        assert!(!notice.is_expired(start));
        assert!(!notice.is_expired(start + Duration::from_secs(4)));
        assert!(notice.is_expired(start + NOTICE_TTL));
        assert!(notice.is_expired(start + Duration::from_secs(60)));
    }

    #[test]
    fn test_notice_accessors() {
        let notice = Notice::error("Failed to upload thumbnail.");
        assert_eq!(notice.message(), "Failed to upload thumbnail.");
        assert_eq!(notice.kind(), NoticeKind::Error);
    }
}
