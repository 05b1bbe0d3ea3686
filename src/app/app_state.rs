//! Application state
//!
//! Owns the editor widget and the per-document session. The editor surface
//! exposes exactly three primitives to the core: current text, caret cell,
//! and insert-at-caret.

use std::time::Instant;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::session::Session;
use crate::workspace::sample_workspace;

pub struct App {
    pub textarea: TextArea<'static>,
    pub session: Session,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub title: String,
}

impl App {
    pub fn new(config: &Config, initial_text: Option<String>, title: String) -> Self {
        let lines: Vec<String> = match initial_text {
            Some(text) => text.lines().map(str::to_string).collect(),
            None => Vec::new(),
        };

        let mut textarea = TextArea::new(lines);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Start writing...");

        Self {
            textarea,
            session: Session::new(config, sample_workspace()),
            layout_regions: LayoutRegions::default(),
            should_quit: false,
            title,
        }
    }

    /// Current full text of the document
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Caret cell relative to the editor surface origin, if visible
    pub fn caret_pos(&self) -> Option<(u16, u16)> {
        let editor = self.layout_regions.editor?;
        let (row, col) = self.textarea.cursor();
        if row >= editor.height as usize || col >= editor.width as usize {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Insert text at the caret
    pub fn insert_at_caret(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    /// Run the session's timers and drain worker responses
    pub fn tick(&mut self, now: Instant) {
        let doc = self.text();
        let caret = self.caret_pos();
        self.session.tick(&doc, caret, now);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
