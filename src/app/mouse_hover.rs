//! Mouse movement handling
//!
//! Plain movement drives hover expansion; movement with the button held
//! drives the active drag or marquee.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;

/// Movement with the left button held down
pub fn handle_mouse_drag(app: &mut App, mouse: MouseEvent) {
    let Some(point) = app.layout_regions.to_editor_cell(mouse.column, mouse.row) else {
        return;
    };

    if app.session.bubbles.dragged().is_some() {
        app.session.bubbles.drag_to(point);
    } else {
        app.session.bubbles.update_marquee(point);
    }
}

/// Plain movement: hover enter/leave transitions
pub fn handle_mouse_move(app: &mut App, mouse: MouseEvent) {
    let now = Instant::now();
    let hit = app
        .layout_regions
        .to_editor_cell(mouse.column, mouse.row)
        .and_then(|point| app.session.bubbles.bubble_at(point));
    app.session.bubbles.update_hover(hit, now);
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
