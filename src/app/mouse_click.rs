//! Mouse button handling
//!
//! Left-down on a bubble focuses it and starts a drag; left-down on empty
//! editor space starts a marquee selection. Left-up resolves whichever was
//! in progress.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;

pub fn handle_mouse_down(app: &mut App, mouse: MouseEvent) {
    let now = Instant::now();

    if app.layout_regions.region_at(mouse.column, mouse.row) != Some(Region::Editor) {
        return;
    }
    let Some(point) = app.layout_regions.to_editor_cell(mouse.column, mouse.row) else {
        return;
    };

    // Pointer-down is user activity for the trigger controller
    let doc = app.text();
    app.session.note_activity(&doc, now);

    if let Some(id) = app.session.bubbles.bubble_at(point) {
        app.session.bubbles.focus(id);
        app.session.bubbles.start_drag(id, point);
    } else {
        app.session.bubbles.blur();
        app.session.bubbles.begin_marquee(point);
    }
}

pub fn handle_mouse_up(app: &mut App, _mouse: MouseEvent) {
    if !app.session.bubbles.end_drag() {
        app.session.bubbles.finish_marquee();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
