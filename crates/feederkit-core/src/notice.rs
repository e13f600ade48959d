//! Transient notifications
//!
//! Provides:
//! - Notice levels and their default display durations
//! - A single-slot notifier where each new notice replaces the visible one
//!
//! Expiry is evaluated against a caller-supplied `Instant`, so hosts decide
//! when to poll and tests never sleep.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Action completed
    Success,
    /// Action rejected
    Failure,
    /// Neutral information
    Info,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Failure => write!(f, "FAILURE"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// How long each level stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeDelays {
    pub success_ms: u64,
    pub failure_ms: u64,
    pub info_ms: u64,
}

impl Default for NoticeDelays {
    fn default() -> Self {
        Self {
            success_ms: 3000,
            failure_ms: 5000,
            info_ms: 3000,
        }
    }
}

impl NoticeDelays {
    pub fn for_level(&self, level: NoticeLevel) -> Duration {
        let ms = match level {
            NoticeLevel::Success => self.success_ms,
            NoticeLevel::Failure => self.failure_ms,
            NoticeLevel::Info => self.info_ms,
        };
        Duration::from_millis(ms)
    }
}

/// A message shown to the user until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Holds at most one visible notice; the last one shown wins
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    delays: NoticeDelays,
    current: Option<Notice>,
}

impl Notifier {
    pub fn new(delays: NoticeDelays) -> Self {
        Self {
            delays,
            current: None,
        }
    }

    /// Show a notice starting at `now`, replacing any visible one
    pub fn show_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) -> &Notice {
        let notice = Notice {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            expires_at: now + self.delays.for_level(level),
        };
        match level {
            NoticeLevel::Failure => tracing::warn!(notice = %notice.message, "Notice"),
            _ => tracing::info!(notice = %notice.message, "Notice"),
        }
        self.current.insert(notice)
    }

    /// Show a notice starting now
    pub fn show(&mut self, level: NoticeLevel, message: impl Into<String>) -> &Notice {
        self.show_at(level, message, Instant::now())
    }

    pub fn success(&mut self, message: impl Into<String>) -> &Notice {
        self.show(NoticeLevel::Success, message)
    }

    pub fn failure(&mut self, message: impl Into<String>) -> &Notice {
        self.show(NoticeLevel::Failure, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> &Notice {
        self.show(NoticeLevel::Info, message)
    }

    /// The notice visible at `now`, if it has not expired
    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        self.current.as_ref().filter(|n| !n.is_expired(now))
    }

    /// The most recent notice regardless of expiry
    pub fn last(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Dismiss the notice with `id`; a newer notice is left alone
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Drop the visible notice if it has expired at `now`
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn delays(&self) -> &NoticeDelays {
        &self.delays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let delays = NoticeDelays::default();
        assert_eq!(delays.for_level(NoticeLevel::Success), Duration::from_secs(3));
        assert_eq!(delays.for_level(NoticeLevel::Failure), Duration::from_secs(5));
    }

    #[test]
    fn test_notice_expires() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.show_at(NoticeLevel::Success, "Saved", start);

        assert!(notifier.visible(start + Duration::from_millis(2999)).is_some());
        assert!(notifier.visible(start + Duration::from_millis(3000)).is_none());
    }

    #[test]
    fn test_failure_stays_longer() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.show_at(NoticeLevel::Failure, "Missing data", start);
        assert!(notifier.visible(start + Duration::from_secs(4)).is_some());
        notifier.tick(start + Duration::from_secs(5));
        assert!(notifier.last().is_none());
    }

    #[test]
    fn test_last_notice_wins() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        let first = notifier.show_at(NoticeLevel::Failure, "first", start).id;
        notifier.show_at(NoticeLevel::Success, "second", start);

        assert_eq!(notifier.visible(start).unwrap().message, "second");
        assert!(!notifier.dismiss(first));
        assert_eq!(notifier.visible(start).unwrap().message, "second");
    }

    #[test]
    fn test_dismiss_current() {
        let mut notifier = Notifier::default();
        let id = notifier.info("hello").id;
        assert!(notifier.dismiss(id));
        assert!(notifier.last().is_none());
    }
}
