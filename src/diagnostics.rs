//! Diagnostics state
//!
//! Everything the suggestion pipeline wants to show on the debug panel:
//! request progress, the last prompt/response pair, failure reasons, and a
//! capped event log. Failures land here and nowhere else; there is no
//! user-facing error dialog.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::ai::SuggestionKind;

/// Event log entries kept before old ones roll off
const MAX_EVENTS: usize = 32;

pub struct DiagnosticsState {
    /// Whether the debug panel is shown
    pub visible: bool,
    pub request_in_progress: bool,
    pub last_prompt: String,
    pub last_response: String,
    pub last_kind: Option<SuggestionKind>,
    pub last_failure: Option<String>,
    /// Word count of the most recent rolling context
    pub context_word_count: usize,
    pub requests_sent: u64,
    pub failures: u64,
    events: VecDeque<(DateTime<Local>, String)>,
}

impl DiagnosticsState {
    pub fn new() -> Self {
        Self {
            visible: false,
            request_in_progress: false,
            last_prompt: String::new(),
            last_response: String::new(),
            last_kind: None,
            last_failure: None,
            context_word_count: 0,
            requests_sent: 0,
            failures: 0,
            events: VecDeque::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn record_request(&mut self, prompt: &str, context_word_count: usize) {
        self.request_in_progress = true;
        self.last_prompt = prompt.to_string();
        self.last_failure = None;
        self.context_word_count = context_word_count;
        self.requests_sent += 1;
        self.push_event("request sent".to_string());
    }

    pub fn record_response(&mut self, text: &str, kind: SuggestionKind) {
        self.request_in_progress = false;
        self.last_response = text.to_string();
        self.last_kind = Some(kind);
        self.push_event(format!("response: {}", kind.label()));
    }

    pub fn record_empty(&mut self) {
        self.request_in_progress = false;
        self.last_response.clear();
        self.last_kind = None;
        self.push_event("empty response".to_string());
    }

    pub fn record_failure(&mut self, reason: &str) {
        self.request_in_progress = false;
        self.failures += 1;
        self.last_failure = Some(reason.to_string());
        self.push_event(format!("failure: {reason}"));
        log::debug!("suggestion request failed: {}", reason);
    }

    pub fn record_event(&mut self, message: String) {
        self.push_event(message);
    }

    /// Newest first
    pub fn events(&self) -> impl Iterator<Item = &(DateTime<Local>, String)> {
        self.events.iter().rev()
    }

    fn push_event(&mut self, message: String) {
        if self.events.len() == MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back((Local::now(), message));
    }
}

impl Default for DiagnosticsState {
    fn default() -> Self {
        Self::new()
    }
}
