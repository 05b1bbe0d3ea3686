//! Frame rendering
//!
//! Title bar, editor surface, bubble overlay, hotkey modal, diagnostics
//! panel, and the status line. Region rectangles are recorded on the app
//! for mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::bubble::render_bubbles;
use crate::modal::ModalState;
use crate::trigger::TriggerPhase;
use crate::widgets::popup::{centered_popup, clear_area};

use super::app_state::App;

const DEBUG_PANEL_WIDTH: u16 = 40;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let (editor_area, debug_area) = if app.session.diagnostics.visible {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(DEBUG_PANEL_WIDTH)])
            .split(chunks[0]);
        (columns[0], Some(columns[1]))
    } else {
        (chunks[0], None)
    };

    // Editor surface; the inner rect is the cell space bubbles live in
    frame.render_widget(&app.textarea, editor_area);
    let editor_inner = inner(editor_area);
    app.layout_regions.editor = Some(editor_inner);

    render_bubbles(frame, editor_inner, &app.session.bubbles);

    app.layout_regions.debug_panel = debug_area;
    if let Some(area) = debug_area {
        render_debug_panel(app, frame, area);
    }

    app.layout_regions.modal = render_modal(app, frame);

    render_status_line(app, frame, chunks[1]);
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn render_modal(app: &App, frame: &mut Frame) -> Option<Rect> {
    if !app.session.modal.is_visible() {
        return None;
    }
    let area = centered_popup(frame.area(), 56, 9);
    clear_area(frame, area);

    let (title, body) = match &app.session.modal {
        ModalState::Waiting => (" Assistant ".to_string(), "Thinking...".to_string()),
        ModalState::Empty => (
            " Assistant ".to_string(),
            "No suggestion available.".to_string(),
        ),
        ModalState::Ready { text, kind } => (format!(" {} ", kind.label()), text.clone()),
        ModalState::Hidden => return None,
    };

    let hint = match &app.session.modal {
        ModalState::Ready { .. } => "Enter to insert \u{00b7} Esc to dismiss",
        _ => "Esc to dismiss",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(vec![
        Line::from(body),
        Line::from(""),
        Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(block);

    frame.render_widget(paragraph, area);
    Some(area)
}

fn render_debug_panel(app: &App, frame: &mut Frame, area: Rect) {
    let diag = &app.session.diagnostics;
    let mut lines = vec![
        Line::from(format!(
            "request in progress: {}",
            if diag.request_in_progress { "yes" } else { "no" }
        )),
        Line::from(format!("requests: {}  failures: {}", diag.requests_sent, diag.failures)),
        Line::from(format!("context words: {}", diag.context_word_count)),
        Line::from(format!(
            "last kind: {}",
            diag.last_kind.map_or("-", |k| k.label())
        )),
    ];

    if let Some(failure) = &diag.last_failure {
        lines.push(Line::from(Span::styled(
            format!("last failure: {failure}"),
            Style::default().fg(Color::Red),
        )));
    }
    if !diag.last_response.is_empty() {
        lines.push(Line::from(format!("last response: {}", diag.last_response)));
    }

    lines.push(Line::from(""));
    for (stamp, message) in diag.events().take(12) {
        lines.push(Line::from(Span::styled(
            format!("{} {}", stamp.format("%H:%M:%S"), message),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Diagnostics ")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    let phase = match app
        .session
        .trigger
        .phase(std::time::Instant::now())
    {
        TriggerPhase::Idle => "idle",
        TriggerPhase::PendingSuggestion => "listening",
        TriggerPhase::Cooldown => "cooldown",
    };

    let line = Line::from(vec![
        Span::styled(
            " Ctrl+I suggest \u{00b7} Tab insert \u{00b7} F2 diagnostics \u{00b7} Ctrl+Q quit ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{phase}] {} bubble(s)", app.session.bubbles.len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
