//! Keyboard event handling.

use crate::app::{App, AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle a key event. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Some terminals also report releases
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl+C quits from any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.state = AppState::Quit;
        return true;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::SavePath => handle_save_path_key(app, key),
        InputMode::Password | InputMode::Length | InputMode::Tag => handle_field_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::Quit;
            return true;
        }
        KeyCode::Char('g') => app.generate(),
        KeyCode::Char('c') => app.copy(),
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('x') => app.clear(),
        KeyCode::Char('v') => app.toggle_visibility(),
        KeyCode::Char('a') => app.apply_tag(),
        KeyCode::Char('e') => app.start_edit(InputMode::Password),
        KeyCode::Char('l') => app.start_edit(InputMode::Length),
        KeyCode::Char('t') => app.start_edit(InputMode::Tag),
        KeyCode::Esc => app.notice = None,
        _ => {}
    }
    false
}

fn handle_field_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_field(),
        KeyCode::Esc | KeyCode::Tab => app.leave_field(),
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        _ => {}
    }
    false
}

fn handle_save_path_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.confirm_save(),
        KeyCode::Esc => app.cancel_save(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        _ => {}
    }
    false
}
