mod client;
mod error;
mod names;

pub use client::{parse_session_line, parse_session_list, TmuxClient, DEFAULT_TIMEOUT, LIST_FORMAT};
pub use error::TmuxError;
pub use names::{is_valid_name, INVALID_NAME_CHARS};

use chrono::{DateTime, Utc};

use crate::time::format_relative;

/// Represents a tmux session as reported by `list-sessions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session name
    pub name: String,
    /// Number of windows in the session
    pub windows: u32,
    /// Unix timestamp when session was created
    pub created_at: i64,
    /// Whether a client is attached
    pub attached: bool,
    /// Unix timestamp of the last activity
    pub activity_at: i64,
}

impl Session {
    /// Status indicator shown in the subtitle
    pub fn status_label(&self) -> &'static str {
        if self.attached {
            "🟢 attached"
        } else {
            "⚪ detached"
        }
    }

    pub fn created_ago(&self, now: DateTime<Utc>) -> String {
        format_relative(self.created_at, now)
    }

    pub fn activity_ago(&self, now: DateTime<Utc>) -> String {
        format_relative(self.activity_at, now)
    }

    /// One-line summary: status, window count and both ages
    pub fn subtitle(&self, now: DateTime<Utc>) -> String {
        format!(
            "{} • {} windows • created {} • active {}",
            self.status_label(),
            self.windows,
            self.created_ago(now),
            self.activity_ago(now)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle() {
        let now = DateTime::from_timestamp(1_700_007_200, 0).unwrap();
        let session = Session {
            name: "work".to_string(),
            windows: 3,
            created_at: 1_700_000_000,
            attached: true,
            activity_at: 1_700_003_600,
        };

        assert_eq!(
            session.subtitle(now),
            "🟢 attached • 3 windows • created 2h ago • active 1h ago"
        );
    }

    #[test]
    fn test_detached_label() {
        let session = Session {
            name: "idle".to_string(),
            windows: 1,
            created_at: 0,
            attached: false,
            activity_at: 0,
        };
        assert_eq!(session.status_label(), "⚪ detached");
    }
}
