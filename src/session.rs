//! Per-document session
//!
//! One session per open document owns the trigger controller, the bubble
//! store, the suggestion client channels, the hotkey modal, and the
//! diagnostics. Dropping the session closes the request channel, which
//! shuts the worker thread down.

use std::sync::mpsc;
use std::time::Instant;

use crate::ai::{AiResponse, AiState, Presentation, worker};
use crate::bubble::{ActionDispatch, BubbleId, BubbleStore};
use crate::clipboard::copy_to_clipboard;
use crate::config::{ClipboardBackend, Config};
use crate::context::{MAX_TOKENS, MIN_TOKENS, last_tokens, structured_context, tokenize};
use crate::diagnostics::DiagnosticsState;
use crate::modal::ModalState;
use crate::trigger::TriggerController;
use crate::workspace::{Page, PageBody, extract_keywords, filter_pages};

pub struct Session {
    pub trigger: TriggerController,
    pub bubbles: BubbleStore,
    pub ai: AiState,
    pub diagnostics: DiagnosticsState,
    pub modal: ModalState,
    pub workspace: Vec<Page>,
    style_profile: String,
    clipboard_backend: ClipboardBackend,
}

impl Session {
    /// Create a session and, when suggestions are enabled, spawn the worker
    /// thread behind its request/response channels.
    pub fn new(config: &Config, workspace: Vec<Page>) -> Self {
        let configured = config.ai.credential().is_some();
        let mut ai = AiState::new(config.ai.enabled, configured);

        if config.ai.enabled {
            let (request_tx, request_rx) = mpsc::channel();
            let (response_tx, response_rx) = mpsc::channel();
            worker::spawn_worker(&config.ai, request_rx, response_tx);
            ai.set_channels(request_tx, response_rx);
        }

        Self {
            trigger: TriggerController::new(&config.trigger),
            bubbles: BubbleStore::new(&config.bubble),
            ai,
            diagnostics: DiagnosticsState::new(),
            modal: ModalState::default(),
            workspace,
            style_profile: config.ai.style_profile.clone(),
            clipboard_backend: config.clipboard.backend,
        }
    }

    // =====================================================================
    // Event surface consumed by the app shell
    // =====================================================================

    /// User activity: keystroke, pointer-down, or selection change
    pub fn note_activity(&mut self, doc: &str, now: Instant) {
        let anchors = self.bubbles.anchors();
        if let Some(fire) = self.trigger.note_activity(doc, &anchors, now) {
            self.fire_request(doc, Some(fire.sentence), Presentation::Bubble);
        }
    }

    /// Periodic tick: fires due timers and drains worker responses.
    /// `caret` is the current caret cell for bubble placement.
    pub fn tick(&mut self, doc: &str, caret: Option<(u16, u16)>, now: Instant) {
        self.bubbles.tick(now);

        let anchors = self.bubbles.anchors();
        if let Some(fire) = self.trigger.poll(doc, &anchors, now) {
            self.fire_request(doc, Some(fire.sentence), Presentation::Bubble);
        }

        for response in self.ai.drain() {
            self.handle_response(response, caret);
        }
    }

    /// The document's text changed: reconcile the answered set and prune
    /// every bubble whose anchor sentence is gone.
    pub fn text_changed(&mut self, doc: &str) {
        let removed = self.trigger.reconcile(doc);
        let pruned = self.bubbles.prune_stale(doc);
        if pruned > 0 {
            self.diagnostics
                .record_event(format!("pruned {pruned} stale bubble(s)"));
        }
        for sentence in removed {
            log::debug!("answered sentence edited away: {}", sentence);
        }
    }

    /// Hotkey path: bypasses trigger gating, renders into the modal. Still
    /// opens a cooldown window for the automatic path.
    pub fn request_hotkey_suggestion(&mut self, doc: &str, now: Instant) {
        self.modal.begin_waiting();
        self.trigger.begin_cooldown(now);
        if !self.fire_request(doc, None, Presentation::Modal) {
            self.modal.set_empty();
        }
    }

    /// Tab on a focused bubble: remove it and hand its text back for
    /// insertion at the caret. The text joins the answered set.
    pub fn insert_focused(&mut self) -> Option<String> {
        let text = self.bubbles.insert_focused()?;
        self.trigger.record_inserted(&text);
        Some(text)
    }

    /// Enter on a ready modal: same contract as `insert_focused`
    pub fn take_modal_insert(&mut self) -> Option<String> {
        let (text, _kind) = self.modal.take_ready()?;
        self.trigger.record_inserted(&text);
        Some(text)
    }

    /// Route a bubble action. Returns the dispatch and the bubble's text so
    /// the host can act on dispatches it owns (e.g. applying an edit).
    pub fn apply_action(
        &mut self,
        id: BubbleId,
        action_id: &str,
    ) -> Option<(ActionDispatch, String)> {
        let text = self.bubbles.get(id)?.text.clone();
        let dispatch = self.bubbles.apply_action(id, action_id)?;
        self.handle_dispatch(dispatch, &text);
        Some((dispatch, text))
    }

    /// Copy the focused bubble's text to the clipboard
    pub fn copy_focused(&mut self) -> bool {
        let Some(id) = self.bubbles.focused() else {
            return false;
        };
        let Some(bubble) = self.bubbles.get(id) else {
            return false;
        };
        match copy_to_clipboard(&bubble.text, self.clipboard_backend) {
            Ok(()) => {
                self.diagnostics.record_event("suggestion copied".to_string());
                true
            }
            Err(e) => {
                self.diagnostics
                    .record_event(format!("clipboard copy failed: {e:?}"));
                false
            }
        }
    }

    // =====================================================================
    // Request/response plumbing
    // =====================================================================

    /// Assemble and send one suggestion request. Returns whether a request
    /// actually went out.
    fn fire_request(&mut self, doc: &str, anchor: Option<String>, presentation: Presentation) -> bool {
        if !self.ai.enabled {
            log::debug!("suggestions disabled; request dropped");
            return false;
        }
        if !self.ai.configured {
            // Missing credential short-circuits with no network call
            self.diagnostics
                .record_failure("missing API credential; request skipped");
            return false;
        }

        let context = structured_context(doc);
        let keywords = extract_keywords(&context.current_paragraph);
        let knowledge: Vec<String> = filter_pages(&self.workspace, &keywords)
            .iter()
            .map(|page| page.excerpt())
            .collect();

        let prompt = crate::ai::prompt::assemble_prompt(&context, &self.style_profile, &knowledge);
        let rolling = last_tokens(doc, MIN_TOKENS, MAX_TOKENS);
        self.diagnostics
            .record_request(&prompt, tokenize(&rolling).len());

        if self.ai.send(prompt, anchor, presentation).is_none() {
            self.diagnostics.record_failure("request channel closed");
            return false;
        }
        true
    }

    /// A worker response arrived. A bubble response whose anchor has been
    /// edited away still creates a bubble; the next text change prunes it.
    fn handle_response(&mut self, response: AiResponse, caret: Option<(u16, u16)>) {
        match response {
            AiResponse::Suggestion {
                text,
                kind,
                anchor,
                presentation: Presentation::Bubble,
                ..
            } => {
                self.diagnostics.record_response(&text, kind);
                if let Some(anchor) = &anchor {
                    self.trigger.mark_answered(anchor);
                }
                self.bubbles.create(text, kind, anchor, caret);
            }
            AiResponse::Suggestion {
                text,
                kind,
                presentation: Presentation::Modal,
                ..
            } => {
                self.diagnostics.record_response(&text, kind);
                self.modal.set_ready(text, kind);
            }
            AiResponse::Empty { presentation, .. } => {
                self.diagnostics.record_empty();
                if presentation == Presentation::Modal {
                    self.modal.set_empty();
                }
            }
            AiResponse::Failed {
                reason,
                presentation,
                ..
            } => {
                self.diagnostics.record_failure(&reason);
                if presentation == Presentation::Modal {
                    self.modal.set_empty();
                }
            }
        }
    }

    /// Side effects the session owns. Everything else is the host's job.
    fn handle_dispatch(&mut self, dispatch: ActionDispatch, text: &str) {
        match dispatch {
            ActionDispatch::AddTodo => {
                if self.add_todo_row(text) {
                    self.diagnostics
                        .record_event(format!("to-do added: {text}"));
                } else {
                    self.diagnostics
                        .record_event("to-do routed (no task table)".to_string());
                }
            }
            other => {
                self.diagnostics.record_event(format!("{other:?} routed"));
            }
        }
    }

    fn add_todo_row(&mut self, text: &str) -> bool {
        for page in &mut self.workspace {
            if let PageBody::Table { columns, rows } = &mut page.body
                && columns.first().is_some_and(|c| c == "Task")
            {
                let mut row = vec![text.to_string()];
                row.resize(columns.len(), String::new());
                if let Some(status) = columns.iter().position(|c| c == "Status") {
                    row[status] = "To Do".to_string();
                }
                rows.push(row);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
