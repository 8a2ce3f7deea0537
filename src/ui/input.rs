//! Key handling for the summarizer view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::summarizer::SummarizerIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }

    if is_ctrl_char(key, 'y') {
        app.copy_to_clipboard();
        return;
    }

    if is_ctrl_char(key, 'x') {
        app.dispatch(SummarizerIntent::ClearInput);
        return;
    }

    match key.code {
        KeyCode::Esc => app.dispatch(SummarizerIntent::DismissMessages),
        KeyCode::Enter => app.dispatch(SummarizerIntent::InsertChar('\n')),
        KeyCode::Tab => app.dispatch(SummarizerIntent::InsertText("    ".to_string())),
        KeyCode::Backspace => app.dispatch(SummarizerIntent::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(SummarizerIntent::InsertChar(c));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
