//! Keyboard event handling
//!
//! Routes keys between the modal, the bubble layer, and the editor widget.
//! Every handled key counts as user activity for the trigger controller.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();

    // The modal swallows everything while visible
    if app.session.modal.is_visible() {
        match key.code {
            KeyCode::Esc => app.session.modal.dismiss(),
            KeyCode::Enter => {
                if let Some(text) = app.session.take_modal_insert() {
                    app.insert_at_caret(&text);
                    let doc = app.text();
                    app.session.text_changed(&doc);
                }
            }
            _ => {}
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('i') if ctrl => {
            let doc = app.text();
            app.session.request_hotkey_suggestion(&doc, now);
            return;
        }
        KeyCode::Char('y') if ctrl => {
            app.session.copy_focused();
            return;
        }
        KeyCode::F(2) => {
            app.session.diagnostics.toggle();
            return;
        }
        KeyCode::Tab if app.session.bubbles.focused().is_some() => {
            if let Some(text) = app.session.insert_focused() {
                app.insert_at_caret(&text);
                let doc = app.text();
                app.session.text_changed(&doc);
                app.session.note_activity(&doc, now);
            }
            return;
        }
        KeyCode::Delete | KeyCode::Backspace if !app.session.bubbles.selected().is_empty() => {
            app.session.bubbles.remove_selected();
            return;
        }
        KeyCode::Esc => {
            app.session.bubbles.blur();
            app.session.bubbles.clear_selection();
            return;
        }
        _ => {}
    }

    // Everything else belongs to the editor widget
    let modified = app.textarea.input(key);
    let doc = app.text();
    if modified {
        app.session.text_changed(&doc);
    }
    app.session.note_activity(&doc, now);
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
