//! The text file written by an explicit save.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use std::fmt;
use std::path::{Path, PathBuf};

/// First line of every save file.
pub const HEADER: &str = "ShadowPass — saved password";

/// Timestamp format used in save files and the activity log.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A password snapshot ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    pub time: NaiveDateTime,
    pub tag: String,
    pub password: String,
}

impl SaveRecord {
    /// Create a record stamped with the current local time.
    pub fn new(tag: impl Into<String>, password: impl Into<String>) -> Self {
        Self::at(chrono::Local::now().naive_local(), tag, password)
    }

    /// Create a record with an explicit timestamp.
    pub fn at(time: NaiveDateTime, tag: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            time,
            tag: tag.into(),
            password: password.into(),
        }
    }

    /// File name offered in the save dialog, e.g. `shadowpass_20240131_235959.txt`.
    pub fn suggested_file_name(&self) -> String {
        format!("shadowpass_{}.txt", self.time.format("%Y%m%d_%H%M%S"))
    }

    /// Write the record to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Give `path` a `.txt` extension when the user typed a bare file name.
pub fn with_default_extension(path: impl Into<PathBuf>) -> PathBuf {
    let mut path = path.into();
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    path
}

impl fmt::Display for SaveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "Time: {}", self.time.format(TIME_FORMAT))?;
        writeln!(f, "Tag: {}", self.tag)?;
        writeln!(f, "Password: {}", self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 7)
            .unwrap()
    }

    #[test]
    fn test_format_is_four_lines() {
        let record = SaveRecord::at(fixed_time(), "work laptop", "Abc123!?");
        assert_eq!(
            record.to_string(),
            "ShadowPass — saved password\n\
             Time: 2024-01-31 23:59:07\n\
             Tag: work laptop\n\
             Password: Abc123!?\n"
        );
    }

    #[test]
    fn test_empty_tag_still_writes_tag_line() {
        let record = SaveRecord::at(fixed_time(), "", "pw");
        let text = record.to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().nth(2), Some("Tag: "));
    }

    #[test]
    fn test_suggested_file_name() {
        let record = SaveRecord::at(fixed_time(), "", "pw");
        assert_eq!(record.suggested_file_name(), "shadowpass_20240131_235907.txt");
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(with_default_extension("/tmp/out"), PathBuf::from("/tmp/out.txt"));
        assert_eq!(with_default_extension("/tmp/out.log"), PathBuf::from("/tmp/out.log"));
        assert_eq!(with_default_extension("notes.txt"), PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = SaveRecord::at(fixed_time(), "", "pw").write_to(&path).unwrap_err();
        match err {
            Error::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents that are much longer than the record\n".repeat(10))
            .unwrap();

        let record = SaveRecord::at(fixed_time(), "t", "pw");
        record.write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), record.to_string());
    }
}
