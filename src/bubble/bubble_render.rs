//! Bubble overlay rendering
//!
//! Draws collapsed dots, expanded bubbles with their action row, and the
//! marquee rectangle on top of the editor area.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::widgets::popup::clear_area;

use super::bubble_state::{Bubble, BubbleStore};

const DOT: &str = "\u{25cf}";

/// Render all bubbles and the marquee, clipped to the editor area
pub fn render_bubbles(frame: &mut Frame, editor: Rect, store: &BubbleStore) {
    for bubble in store.bubbles() {
        let selected = store.selected().contains(&bubble.id);
        let focused = store.focused() == Some(bubble.id);
        let dragging = store.dragged() == Some(bubble.id);
        if bubble.expanded {
            render_expanded(frame, editor, bubble, selected, focused, dragging);
        } else {
            render_dot(frame, editor, bubble, selected, dragging);
        }
    }

    if let Some(marquee) = store.marquee() {
        render_marquee(frame, editor, marquee.corners());
    }
}

fn render_dot(frame: &mut Frame, editor: Rect, bubble: &Bubble, selected: bool, dragging: bool) {
    let Some(area) = clip(editor, bubble.position.left, bubble.position.top, 1, 1) else {
        return;
    };
    let color = if dragging {
        Color::Cyan
    } else if selected {
        Color::Red
    } else {
        Color::DarkGray
    };
    frame.render_widget(
        Paragraph::new(DOT).style(Style::default().fg(color)),
        area,
    );
}

fn render_expanded(
    frame: &mut Frame,
    editor: Rect,
    bubble: &Bubble,
    selected: bool,
    focused: bool,
    dragging: bool,
) {
    let bounds = bubble.bounds();
    let Some(area) = clip(editor, bounds.left, bounds.top, bounds.width, bounds.height) else {
        return;
    };

    let background = if dragging {
        Color::Cyan
    } else if selected {
        Color::Red
    } else {
        Color::Black
    };
    let base = Style::default().fg(Color::White).bg(background);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", bubble.text), base),
        Span::styled("\u{00d7}", base.fg(Color::DarkGray)),
    ])];

    let mut buttons: Vec<Span> = Vec::new();
    if focused && bubble.actions.len() == 1 {
        // Only dismiss available: hint the keyboard path instead
        buttons.push(Span::styled(
            " Tab to insert ",
            base.fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }
    for action in &bubble.actions {
        let style = match action.dispatch {
            Some(_) => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            None => base.fg(Color::Gray),
        };
        buttons.push(Span::styled(format!("[{}] ", action.label), style));
    }
    lines.push(Line::from(buttons));

    clear_area(frame, area);
    frame.render_widget(Paragraph::new(lines).style(base), area);
}

fn render_marquee(frame: &mut Frame, editor: Rect, corners: (u16, u16, u16, u16)) {
    let (min_x, min_y, max_x, max_y) = corners;
    let Some(area) = clip(
        editor,
        min_x,
        min_y,
        max_x.saturating_sub(min_x).saturating_add(1),
        max_y.saturating_sub(min_y).saturating_add(1),
    ) else {
        return;
    };
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(Color::Rgb(40, 70, 90))),
        area,
    );
}

/// Translate editor-relative cells to a screen Rect, clipped to the editor
fn clip(editor: Rect, left: u16, top: u16, width: u16, height: u16) -> Option<Rect> {
    if left >= editor.width || top >= editor.height {
        return None;
    }
    let width = width.min(editor.width - left);
    let height = height.min(editor.height - top);
    if width == 0 || height == 0 {
        return None;
    }
    Some(Rect {
        x: editor.x + left,
        y: editor.y + top,
        width,
        height,
    })
}
