//! Session state shared by the frontends.
//!
//! A frontend owns one [`Session`] and translates its toolkit events into
//! calls on it, then redraws from the accessors. Nothing here touches a UI.

use crate::activity::{Activity, ActivityLog};
use crate::error::{Error, Result};
use crate::generator;
use crate::record::SaveRecord;
use crate::strength::Strength;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::path::{Path, PathBuf};

/// Tag text shown before the user types their own.
pub const DEFAULT_TAG: &str = "This is a hacking tool";

/// Banner text before any tag is applied.
pub const DEFAULT_BANNER: &str = "SHADOWPASS";

/// Applied tags are cut to this many characters in the banner.
pub const BANNER_MAX_CHARS: usize = 24;

/// Display state of the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Unmasked,
}

impl Visibility {
    pub fn is_masked(self) -> bool {
        self == Visibility::Masked
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Unmasked,
            Visibility::Unmasked => Visibility::Masked,
        }
    }

    /// Label for the button that flips the state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Visibility::Masked => "Show",
            Visibility::Unmasked => "Hide",
        }
    }
}

/// Initial field contents for a new session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub length_input: String,
    pub tag: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            length_input: generator::DEFAULT_LENGTH.to_string(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

/// A pending save: the record to write and the file name to suggest.
///
/// Produced by [`Session::begin_save`] before the path dialog opens, so the
/// written password is the one present when the user pressed Save.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    record: SaveRecord,
}

impl SaveRequest {
    pub fn suggested_file_name(&self) -> String {
        self.record.suggested_file_name()
    }
}

/// Everything the password window shows.
#[derive(Debug, Clone)]
pub struct Session {
    password: String,
    visibility: Visibility,
    length_input: String,
    tag_input: String,
    banner: String,
    strength: Strength,
    log: ActivityLog,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        let mut log = ActivityLog::new();
        log.record(Activity::Initialized);

        Self {
            password: String::new(),
            visibility: Visibility::Masked,
            length_input: settings.length_input,
            tag_input: settings.tag,
            banner: DEFAULT_BANNER.to_string(),
            strength: Strength::default(),
            log,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Banner framed for display, e.g. `╔═[ SHADOWPASS ]═╗`.
    pub fn banner_title(&self) -> String {
        format!("╔═[ {} ]═╗", self.banner)
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn set_length_input(&mut self, text: impl Into<String>) {
        self.length_input = text.into();
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Generate a password from the OS random source.
    pub fn generate(&mut self) -> Result<usize> {
        self.generate_with(&mut OsRng)
    }

    /// Generate a password of the length currently typed in the length field.
    ///
    /// On success the new password replaces the old one and is unmasked so
    /// the user can check it. On a validation error nothing changes.
    pub fn generate_with<R>(&mut self, rng: &mut R) -> Result<usize>
    where
        R: RngCore + CryptoRng,
    {
        let length = generator::parse_length(&self.length_input)?;
        let password = generator::generate_with(length, rng)?;

        self.set_password(password);
        self.visibility = Visibility::Unmasked;
        self.log.record(Activity::Generated { length });
        Ok(length)
    }

    /// The user typed in the password field.
    pub fn edit_password(&mut self, text: impl Into<String>) {
        self.set_password(text.into());
    }

    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.log.record(match self.visibility {
            Visibility::Unmasked => Activity::Unmasked,
            Visibility::Masked => Activity::Masked,
        });
        self.visibility
    }

    /// Empty the password field and mask it again.
    pub fn clear(&mut self) {
        self.set_password(String::new());
        self.visibility = Visibility::Masked;
        self.log.record(Activity::Cleared);
    }

    /// Put the tag into the banner. Returns whether anything was applied.
    pub fn apply_tag(&mut self) -> bool {
        let tag = self.tag_input.trim();
        if tag.is_empty() {
            return false;
        }

        self.banner = tag.chars().take(BANNER_MAX_CHARS).collect();
        self.log.record(Activity::TagApplied(tag.to_string()));
        true
    }

    /// Copy the password with `write`, which puts it on the clipboard.
    ///
    /// The copy is logged only when `write` succeeds.
    pub fn copy_with<F, E>(&mut self, write: F) -> Result<()>
    where
        F: FnOnce(&str) -> std::result::Result<(), E>,
        E: fmt::Display,
    {
        if self.password.is_empty() {
            return Err(Error::EmptyInput { action: "copy" });
        }
        write(&self.password).map_err(|e| Error::Clipboard(e.to_string()))?;
        self.log.record(Activity::Copied);
        Ok(())
    }

    /// Snapshot the password and tag for saving, before asking for a path.
    pub fn begin_save(&self) -> Result<SaveRequest> {
        if self.password.is_empty() {
            return Err(Error::EmptyInput { action: "save" });
        }
        Ok(SaveRequest {
            record: SaveRecord::new(self.tag_input.clone(), self.password.clone()),
        })
    }

    /// Write a pending save to the chosen path.
    ///
    /// `None` means the dialog was cancelled: nothing is written and nothing
    /// is reported. Returns the written path on success.
    pub fn finish_save(&mut self, request: SaveRequest, path: Option<&Path>) -> Result<Option<PathBuf>> {
        let Some(path) = path else {
            tracing::debug!("Save cancelled");
            return Ok(None);
        };

        request.record.write_to(path)?;
        tracing::info!("Wrote save file {}", path.display());

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.log.record(Activity::Saved { file_name });
        Ok(Some(path.to_path_buf()))
    }

    fn set_password(&mut self, password: String) {
        self.password = password;
        self.strength = Strength::of(&self.password);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn last_message(session: &Session) -> String {
        session
            .log()
            .last()
            .map(|entry| entry.activity.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::default();
        assert_eq!(session.password(), "");
        assert_eq!(session.visibility(), Visibility::Masked);
        assert_eq!(session.length_input(), "16");
        assert_eq!(session.tag_input(), DEFAULT_TAG);
        assert_eq!(session.banner_title(), "╔═[ SHADOWPASS ]═╗");
        assert_eq!(session.strength().score(), 0);
        assert_eq!(session.log().len(), 1);
        assert_eq!(last_message(&session), "ShadowPass initialized.");
    }

    #[test]
    fn test_generate_unmasks_and_rescores() {
        let mut session = Session::default();
        session.set_length_input("24");

        let length = session.generate_with(&mut ChaCha20Rng::seed_from_u64(3)).unwrap();
        assert_eq!(length, 24);
        assert_eq!(session.password().len(), 24);
        assert_eq!(session.visibility(), Visibility::Unmasked);
        assert_eq!(session.strength(), Strength::of(session.password()));
        assert_eq!(last_message(&session), "Generated password (len=24)");
    }

    #[test]
    fn test_invalid_length_mutates_nothing() {
        let mut session = Session::default();
        session.edit_password("keep me");
        let before_log = session.log().len();

        for input in ["abc", "3", "129"] {
            session.set_length_input(input);
            let err = session.generate().unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
            assert_eq!(err.title(), "Invalid length");
        }

        assert_eq!(session.password(), "keep me");
        assert_eq!(session.visibility(), Visibility::Masked);
        assert_eq!(session.log().len(), before_log);
    }

    #[test]
    fn test_empty_length_field_uses_default() {
        let mut session = Session::default();
        session.set_length_input("");
        assert_eq!(session.generate().unwrap(), generator::DEFAULT_LENGTH);
    }

    #[test]
    fn test_manual_edit_rescores_without_logging() {
        let mut session = Session::default();
        session.edit_password("Abcdefghijkl1!");
        assert_eq!(session.strength().score(), 5);
        assert_eq!(session.log().len(), 1);

        session.edit_password("");
        assert_eq!(session.strength().score(), 0);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut session = Session::default();
        assert_eq!(session.toggle_visibility(), Visibility::Unmasked);
        assert_eq!(last_message(&session), "Password unmasked");
        assert_eq!(session.visibility().toggle_label(), "Hide");

        assert_eq!(session.toggle_visibility(), Visibility::Masked);
        assert_eq!(last_message(&session), "Password masked");

        session.generate().unwrap();
        session.clear();
        assert_eq!(session.password(), "");
        assert_eq!(session.visibility(), Visibility::Masked);
        assert_eq!(session.strength().score(), 0);
        assert_eq!(last_message(&session), "Cleared password field");
    }

    #[test]
    fn test_apply_tag() {
        let mut session = Session::default();
        session.set_tag_input("   ");
        assert!(!session.apply_tag());
        assert_eq!(session.banner(), DEFAULT_BANNER);

        session.set_tag_input("  an extremely long tag line for the banner  ");
        assert!(session.apply_tag());
        assert_eq!(session.banner(), "an extremely long tag li");
        assert_eq!(
            last_message(&session),
            "Tagline applied: an extremely long tag line for the banner"
        );
    }

    #[test]
    fn test_copy_requires_password() {
        let mut session = Session::default();
        let mut written = None;
        let err = session
            .copy_with(|text| {
                written = Some(text.to_string());
                Ok::<_, String>(())
            })
            .unwrap_err();
        assert!(err.is_warning());
        assert_eq!(written, None);
        assert_eq!(session.log().len(), 1);

        session.edit_password("hunter2");
        session
            .copy_with(|text| {
                written = Some(text.to_string());
                Ok::<_, String>(())
            })
            .unwrap();
        assert_eq!(written.as_deref(), Some("hunter2"));
        assert_eq!(last_message(&session), "Password copied to clipboard");
    }

    #[test]
    fn test_failed_clipboard_write_is_not_logged() {
        let mut session = Session::default();
        session.edit_password("hunter2");

        let err = session.copy_with(|_| Err("no display")).unwrap_err();
        assert!(matches!(err, Error::Clipboard(ref reason) if reason == "no display"));
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn test_save_requires_password() {
        let session = Session::default();
        assert!(matches!(
            session.begin_save(),
            Err(Error::EmptyInput { action: "save" })
        ));
    }

    #[test]
    fn test_cancelled_save_is_silent() {
        let mut session = Session::default();
        session.edit_password("hunter2");

        let request = session.begin_save().unwrap();
        assert!(request.suggested_file_name().starts_with("shadowpass_"));
        assert_eq!(session.finish_save(request, None).unwrap(), None);

        assert_eq!(session.log().len(), 1);
        assert_eq!(last_message(&session), "ShadowPass initialized.");
    }

    #[test]
    fn test_save_uses_snapshot_taken_before_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.txt");
        let mut session = Session::default();
        session.edit_password("first");

        let request = session.begin_save().unwrap();
        session.edit_password("second");
        session.finish_save(request, Some(&path)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("Password: first\n"));
        assert_eq!(last_message(&session), "Saved password to saved.txt");
    }

    #[test]
    fn test_failed_save_is_reported_and_session_survives() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::default();
        session.edit_password("hunter2");

        let request = session.begin_save().unwrap();
        let bad_path = dir.path().join("no").join("such").join("dir.txt");
        let err = session.finish_save(request, Some(&bad_path)).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.title(), "Error");

        session.generate().unwrap();
        assert_eq!(session.password().len(), 16);
    }
}
