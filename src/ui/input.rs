use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the app.
///
/// `q`, `Esc` and `Ctrl+C` quit. `Enter`, `Space` and the configured
/// increment key press the button. Repeats and releases are ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    if is_increment(key, app.increment_key()) {
        app.press_increment();
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('q')) && key.modifiers.is_empty())
        || is_ctrl_char(key, 'c')
}

fn is_increment(key: KeyEvent, increment_key: char) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => true,
        KeyCode::Char(ch) => ch == increment_key,
        _ => false,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
