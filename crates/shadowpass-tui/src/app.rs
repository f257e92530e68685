//! Application state management.

use shadowpass_core::{record, Error, SaveRequest, Session, SessionSettings};

/// Application state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Running,
    /// Application should quit.
    Quit,
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    /// Keys trigger actions.
    Normal,
    /// Typing into the password field.
    Password,
    /// Typing into the length field.
    Length,
    /// Typing into the tag field.
    Tag,
    /// Typing the destination of a pending save.
    SavePath,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Message shown in the status line until the next action.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Password, fields, strength and log.
    pub session: Session,
    /// Text of the line being edited.
    pub input: String,
    /// Last notice to display.
    pub notice: Option<Notice>,
    pending_save: Option<SaveRequest>,
    clipboard: Option<arboard::Clipboard>,
}

impl App {
    /// Create a new application instance.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            state: AppState::Running,
            input_mode: InputMode::Normal,
            session: Session::new(settings),
            input: String::new(),
            notice: None,
            pending_save: None,
            clipboard: None,
        }
    }

    /// Start typing into a field, seeded with its current text.
    pub fn start_edit(&mut self, mode: InputMode) {
        self.input = match mode {
            InputMode::Password => self.session.password().to_string(),
            InputMode::Length => self.session.length_input().to_string(),
            InputMode::Tag => self.session.tag_input().to_string(),
            InputMode::Normal | InputMode::SavePath => return,
        };
        self.input_mode = mode;
        self.notice = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.apply_input();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.apply_input();
    }

    /// Enter in a field: the length field generates, the tag field applies.
    pub fn submit_field(&mut self) {
        let mode = self.input_mode;
        self.leave_field();
        match mode {
            InputMode::Length => self.generate(),
            InputMode::Tag => self.apply_tag(),
            _ => {}
        }
    }

    /// Stop editing. Field edits are already applied as they are typed.
    pub fn leave_field(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    // Fields update the session on every keystroke so the strength meter
    // follows the typed password.
    fn apply_input(&mut self) {
        match self.input_mode {
            InputMode::Password => self.session.edit_password(self.input.clone()),
            InputMode::Length => self.session.set_length_input(self.input.clone()),
            InputMode::Tag => self.session.set_tag_input(self.input.clone()),
            InputMode::Normal | InputMode::SavePath => {}
        }
    }

    pub fn generate(&mut self) {
        self.notice = None;
        if let Err(e) = self.session.generate() {
            self.report(e);
        }
    }

    pub fn copy(&mut self) {
        self.notice = None;
        let clipboard = &mut self.clipboard;
        let result = self.session.copy_with(|text| -> Result<(), arboard::Error> {
            if clipboard.is_none() {
                *clipboard = Some(arboard::Clipboard::new()?);
            }
            clipboard.as_mut().map_or(Ok(()), |cb| cb.set_text(text))
        });
        match result {
            Ok(()) => self.inform("Copied", "Password copied to clipboard ✅".to_string()),
            Err(e) => self.report(e),
        }
    }

    /// Snapshot the password and ask for a destination.
    pub fn save(&mut self) {
        self.notice = None;
        match self.session.begin_save() {
            Ok(request) => {
                self.input = request.suggested_file_name();
                self.pending_save = Some(request);
                self.input_mode = InputMode::SavePath;
            }
            Err(e) => self.report(e),
        }
    }

    /// Write the pending save to the typed path. An empty path cancels.
    pub fn confirm_save(&mut self) {
        let typed = self.input.trim().to_string();
        self.leave_field();
        let Some(request) = self.pending_save.take() else {
            return;
        };

        let path = (!typed.is_empty()).then(|| record::with_default_extension(typed));
        match self.session.finish_save(request, path.as_deref()) {
            Ok(Some(saved)) => self.inform("Saved", format!("Saved to {}", saved.display())),
            Ok(None) => {}
            Err(e) => self.report(e),
        }
    }

    /// Drop the pending save without writing anything.
    pub fn cancel_save(&mut self) {
        self.leave_field();
        self.pending_save = None;
    }

    pub fn clear(&mut self) {
        self.notice = None;
        self.session.clear();
    }

    pub fn toggle_visibility(&mut self) {
        self.session.toggle_visibility();
    }

    pub fn apply_tag(&mut self) {
        self.session.apply_tag();
    }

    /// Password as it should be drawn.
    pub fn displayed_password(&self) -> String {
        let password = self.session.password();
        if self.session.visibility().is_masked() {
            "*".repeat(password.chars().count())
        } else {
            password.to_string()
        }
    }

    fn inform(&mut self, title: &str, message: String) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message,
        });
    }

    fn report(&mut self, error: Error) {
        tracing::warn!("{}: {}", error.title(), error);
        let kind = if error.is_warning() {
            NoticeKind::Warning
        } else {
            NoticeKind::Error
        };
        self.notice = Some(Notice {
            kind,
            title: error.title().to_string(),
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowpass_core::Visibility;

    #[test]
    fn test_password_edit_rescores_live() {
        let mut app = App::new(SessionSettings::default());
        app.start_edit(InputMode::Password);
        for c in "Abcdefghijkl1!".chars() {
            app.push_char(c);
        }
        assert_eq!(app.session.strength().score(), 5);

        app.pop_char();
        assert_eq!(app.session.password(), "Abcdefghijkl1");
        assert_eq!(app.session.strength().score(), 4);

        app.leave_field();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.password(), "Abcdefghijkl1");
    }

    #[test]
    fn test_length_field_submit_generates() {
        let mut app = App::new(SessionSettings::default());
        app.start_edit(InputMode::Length);
        app.pop_char();
        app.pop_char();
        app.push_char('9');
        app.submit_field();

        assert_eq!(app.session.password().len(), 9);
        assert_eq!(app.session.visibility(), Visibility::Unmasked);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_invalid_length_sets_error_notice() {
        let mut app = App::new(SessionSettings {
            length_input: "200".into(),
            ..SessionSettings::default()
        });
        app.generate();

        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Invalid length");
        assert_eq!(app.session.password(), "");
    }

    #[test]
    fn test_empty_copy_and_save_warn() {
        let mut app = App::new(SessionSettings::default());
        app.copy();
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));

        app.save();
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_save_to_typed_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(SessionSettings::default());
        app.session.edit_password("hunter2");

        app.save();
        assert_eq!(app.input_mode, InputMode::SavePath);
        assert!(app.input.starts_with("shadowpass_"));

        app.input = dir.path().join("export").display().to_string();
        app.confirm_save();

        let text = std::fs::read_to_string(dir.path().join("export.txt")).unwrap();
        assert!(text.ends_with("Password: hunter2\n"));
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Info));
    }

    #[test]
    fn test_cancelled_save_writes_nothing() {
        let mut app = App::new(SessionSettings::default());
        app.session.edit_password("hunter2");
        let logged = app.session.log().len();

        app.save();
        app.cancel_save();
        assert!(app.pending_save.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.notice.is_none());
        assert_eq!(app.session.log().len(), logged);

        // An empty path is treated as cancel too.
        app.save();
        app.input.clear();
        app.confirm_save();
        assert!(app.notice.is_none());
        assert_eq!(app.session.log().len(), logged);
    }

    #[test]
    fn test_masking() {
        let mut app = App::new(SessionSettings::default());
        app.session.edit_password("pässword");
        assert_eq!(app.displayed_password(), "********");
        app.toggle_visibility();
        assert_eq!(app.displayed_password(), "pässword");
    }
}
