//! Append-only activity log shown next to the controls.

use crate::record::TIME_FORMAT;
use chrono::NaiveDateTime;
use std::fmt;

/// Something the user did that is worth a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Initialized,
    Generated { length: usize },
    Copied,
    Saved { file_name: String },
    Unmasked,
    Masked,
    Cleared,
    TagApplied(String),
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Initialized => f.write_str("ShadowPass initialized."),
            Activity::Generated { length } => write!(f, "Generated password (len={length})"),
            Activity::Copied => f.write_str("Password copied to clipboard"),
            Activity::Saved { file_name } => write!(f, "Saved password to {file_name}"),
            Activity::Unmasked => f.write_str("Password unmasked"),
            Activity::Masked => f.write_str("Password masked"),
            Activity::Cleared => f.write_str("Cleared password field"),
            Activity::TagApplied(tag) => write!(f, "Tagline applied: {tag}"),
        }
    }
}

/// A timestamped log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub time: NaiveDateTime,
    pub activity: Activity,
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The startup line carries the date, later lines only the time.
        let format = match self.activity {
            Activity::Initialized => TIME_FORMAT,
            _ => "%H:%M:%S",
        };
        write!(f, "[{}] {}", self.time.format(format), self.activity)
    }
}

/// The session's activity history. Entries are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, activity: Activity) {
        self.record_at(chrono::Local::now().naive_local(), activity);
    }

    pub fn record_at(&mut self, time: NaiveDateTime, activity: Activity) {
        tracing::info!("{}", activity);
        self.entries.push(ActivityEntry { time, activity });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ActivityEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole log as text, one newline-terminated line per entry.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }
}
