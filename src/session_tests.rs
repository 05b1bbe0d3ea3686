//! Session-level tests
//!
//! These drive the whole suggestion lifecycle with a virtual timeline and a
//! hand-rolled worker: the test holds the far ends of the request/response
//! channels and plays the remote endpoint.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::*;
use crate::ai::{AiRequest, AiResponse, AiState, Presentation, SuggestionKind};
use crate::config::Config;
use crate::workspace::sample_workspace;

const IDLE: Duration = Duration::from_millis(9_000);
const COOLDOWN: Duration = Duration::from_millis(5_000);

fn harness() -> (Session, mpsc::Receiver<AiRequest>, mpsc::Sender<AiResponse>) {
    let config = Config::default();
    let mut session = Session::new(&config, sample_workspace());

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut ai = AiState::new(true, true);
    ai.set_channels(request_tx, response_rx);
    session.ai = ai;

    (session, request_rx, response_tx)
}

fn drain_requests(rx: &mpsc::Receiver<AiRequest>) -> Vec<AiRequest> {
    let mut requests = Vec::new();
    while let Ok(request) = rx.try_recv() {
        requests.push(request);
    }
    requests
}

fn bubble_suggestion(text: &str, anchor: &str, request_id: u64) -> AiResponse {
    AiResponse::Suggestion {
        text: text.to_string(),
        kind: SuggestionKind::DirectAnswer,
        anchor: Some(anchor.to_string()),
        presentation: Presentation::Bubble,
        request_id,
    }
}

// =========================================================================
// Trigger-to-request flow
// =========================================================================

#[test]
fn test_punctuated_sentence_fires_one_request() {
    let (mut session, request_rx, _response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Need to email Sarah about the deadline.";

    session.note_activity(doc, t0);
    // The pause elapsing adds nothing: the edge fire consumed the deadline
    session.tick(doc, None, t0 + IDLE);

    let requests = drain_requests(&request_rx);
    assert_eq!(requests.len(), 1);
    let AiRequest::Suggest { anchor, prompt, presentation, .. } = &requests[0];
    assert_eq!(anchor.as_deref(), Some("Need to email Sarah about the deadline."));
    assert_eq!(*presentation, Presentation::Bubble);
    assert!(prompt.contains("CURRENT PARAGRAPH"));
}

#[test]
fn test_pause_with_keyword_fires_one_request() {
    let (mut session, request_rx, _response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Earlier note here\nremember the deadline for the launch";

    session.note_activity(doc, t0);
    assert!(drain_requests(&request_rx).is_empty());

    session.tick(doc, None, t0 + IDLE);
    assert_eq!(drain_requests(&request_rx).len(), 1);
}

#[test]
fn test_failed_response_yields_no_bubble_and_records_reason() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Need to email Sarah about the deadline.";

    session.note_activity(doc, t0);
    assert_eq!(drain_requests(&request_rx).len(), 1);

    response_tx
        .send(AiResponse::Failed {
            reason: "API error (401): bad key".to_string(),
            presentation: Presentation::Bubble,
            request_id: 1,
        })
        .unwrap();
    session.tick(doc, None, t0 + Duration::from_millis(100));

    assert!(session.bubbles.is_empty());
    assert_eq!(session.diagnostics.failures, 1);
    assert_eq!(
        session.diagnostics.last_failure.as_deref(),
        Some("API error (401): bad key")
    );
}

#[test]
fn test_cooldown_spans_the_whole_session_surface() {
    let (mut session, request_rx, _response_tx) = harness();
    let t0 = Instant::now();

    session.note_activity("First thought.", t0);
    assert_eq!(drain_requests(&request_rx).len(), 1);

    // Second qualifying sentence inside the window: suppressed
    let within = t0 + COOLDOWN - Duration::from_millis(500);
    session.note_activity("First thought. Second thought.", within);
    assert!(drain_requests(&request_rx).is_empty());

    // Same text after the window: fires
    let after = t0 + COOLDOWN + Duration::from_millis(1);
    session.note_activity("First thought. Second thought.", after);
    assert_eq!(drain_requests(&request_rx).len(), 1);
}

#[test]
fn test_missing_credential_short_circuits() {
    let config = Config::default();
    let mut session = Session::new(&config, Vec::new());
    // Enabled but without a credential; no channels must be touched
    session.ai = AiState::new(true, false);
    let t0 = Instant::now();

    session.note_activity("A finished sentence.", t0);

    assert!(session.bubbles.is_empty());
    assert_eq!(session.diagnostics.failures, 1);
    assert!(
        session
            .diagnostics
            .last_failure
            .as_deref()
            .unwrap()
            .contains("credential")
    );
}

// =========================================================================
// Response handling and reconciliation
// =========================================================================

#[test]
fn test_response_creates_anchored_bubble_and_marks_answered() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Who wrote Dune?";

    session.note_activity(doc, t0);
    assert_eq!(drain_requests(&request_rx).len(), 1);

    response_tx
        .send(bubble_suggestion("Frank Herbert", "Who wrote Dune?", 1))
        .unwrap();
    session.tick(doc, Some((15, 0)), t0 + Duration::from_millis(200));

    assert_eq!(session.bubbles.len(), 1);
    let bubble = &session.bubbles.bubbles()[0];
    assert_eq!(bubble.text, "Frank Herbert");
    assert_eq!(bubble.anchor.as_deref(), Some("Who wrote Dune?"));
    assert!(session.trigger.is_answered("Who wrote Dune?"));

    // The same sentence does not trigger again, even past the cooldown
    session.note_activity(doc, t0 + COOLDOWN + Duration::from_millis(1));
    assert!(drain_requests(&request_rx).is_empty());
}

#[test]
fn test_deleting_answered_sentence_prunes_bubble_and_reenables() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Who wrote Dune?";

    session.note_activity(doc, t0);
    drain_requests(&request_rx);
    response_tx
        .send(bubble_suggestion("Frank Herbert", "Who wrote Dune?", 1))
        .unwrap();
    session.tick(doc, None, t0 + Duration::from_millis(200));
    assert_eq!(session.bubbles.len(), 1);

    // The sentence is edited away
    session.text_changed("Something else entirely");
    assert!(session.bubbles.is_empty());
    assert!(!session.trigger.is_answered("Who wrote Dune?"));
    assert!(session.trigger.last_answered().is_none());

    // Retyped later, it can fire again
    let later = t0 + COOLDOWN + Duration::from_millis(1);
    session.note_activity(doc, later);
    assert_eq!(drain_requests(&request_rx).len(), 1);
}

#[test]
fn test_all_stale_bubbles_pruned_not_just_latest() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();

    session.note_activity("First question?", t0);
    drain_requests(&request_rx);
    response_tx
        .send(bubble_suggestion("answer one", "First question?", 1))
        .unwrap();
    session.tick("First question?", None, t0 + Duration::from_millis(10));

    let t1 = t0 + COOLDOWN + Duration::from_millis(1);
    let doc2 = "First question? Second question?";
    session.note_activity(doc2, t1);
    drain_requests(&request_rx);
    response_tx
        .send(bubble_suggestion("answer two", "Second question?", 2))
        .unwrap();
    session.tick(doc2, None, t1 + Duration::from_millis(10));
    assert_eq!(session.bubbles.len(), 2);

    // Both anchors vanish at once; both bubbles go
    session.text_changed("fresh start");
    assert!(session.bubbles.is_empty());
}

#[test]
fn test_stale_response_still_creates_bubble_then_prunes() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Who wrote Dune?";

    session.note_activity(doc, t0);
    drain_requests(&request_rx);

    // The anchor is edited away while the request is in flight
    let edited = "totally different text";
    session.text_changed(edited);

    // The late response still lands as a bubble
    response_tx
        .send(bubble_suggestion("Frank Herbert", "Who wrote Dune?", 1))
        .unwrap();
    session.tick(edited, None, t0 + Duration::from_millis(300));
    assert_eq!(session.bubbles.len(), 1);

    // The next edit reconciles it away
    session.text_changed(edited);
    assert!(session.bubbles.is_empty());
}

// =========================================================================
// Insertion paths
// =========================================================================

#[test]
fn test_insert_focused_removes_bubble_and_suppresses_text() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Who wrote Dune?";

    session.note_activity(doc, t0);
    drain_requests(&request_rx);
    response_tx
        .send(bubble_suggestion("Frank Herbert", "Who wrote Dune?", 1))
        .unwrap();
    session.tick(doc, None, t0 + Duration::from_millis(10));

    let id = session.bubbles.bubbles()[0].id;
    session.bubbles.focus(id);

    assert_eq!(session.insert_focused(), Some("Frank Herbert".to_string()));
    assert!(session.bubbles.is_empty());
    assert!(session.bubbles.focused().is_none());
    assert!(session.trigger.is_answered("Frank Herbert"));
    // Only once
    assert!(session.insert_focused().is_none());
}

// =========================================================================
// Hotkey modal path
// =========================================================================

#[test]
fn test_hotkey_bypasses_gating_and_renders_in_modal() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    // No punctuation, no keyword, no pause: the automatic path would not fire
    let doc = "just some musings";

    session.request_hotkey_suggestion(doc, t0);
    assert_eq!(session.modal, crate::modal::ModalState::Waiting);

    let requests = drain_requests(&request_rx);
    assert_eq!(requests.len(), 1);
    let AiRequest::Suggest { presentation, anchor, .. } = &requests[0];
    assert_eq!(*presentation, Presentation::Modal);
    assert!(anchor.is_none());

    response_tx
        .send(AiResponse::Suggestion {
            text: "Consider an outline.".to_string(),
            kind: SuggestionKind::Suggestion,
            anchor: None,
            presentation: Presentation::Modal,
            request_id: 1,
        })
        .unwrap();
    session.tick(doc, None, t0 + Duration::from_millis(10));

    assert!(session.bubbles.is_empty(), "modal results never become bubbles");
    assert_eq!(
        session.take_modal_insert(),
        Some("Consider an outline.".to_string())
    );
    assert!(!session.modal.is_visible());
    assert!(session.trigger.is_answered("Consider an outline."));
}

#[test]
fn test_hotkey_opens_cooldown_for_automatic_path() {
    let (mut session, request_rx, _response_tx) = harness();
    let t0 = Instant::now();

    session.request_hotkey_suggestion("musings", t0);
    drain_requests(&request_rx);

    session.note_activity("A finished sentence.", t0 + Duration::from_millis(100));
    assert!(drain_requests(&request_rx).is_empty());
}

#[test]
fn test_hotkey_without_client_shows_empty_modal() {
    let config = Config::default();
    let mut session = Session::new(&config, Vec::new());
    let t0 = Instant::now();

    session.request_hotkey_suggestion("musings", t0);
    assert_eq!(session.modal, crate::modal::ModalState::Empty);
}

#[test]
fn test_modal_failure_shows_empty_state() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();

    session.request_hotkey_suggestion("musings", t0);
    drain_requests(&request_rx);

    response_tx
        .send(AiResponse::Failed {
            reason: "Network error: refused".to_string(),
            presentation: Presentation::Modal,
            request_id: 1,
        })
        .unwrap();
    session.tick("musings", None, t0 + Duration::from_millis(10));

    assert_eq!(session.modal, crate::modal::ModalState::Empty);
    assert_eq!(session.diagnostics.failures, 1);
}

// =========================================================================
// Actions
// =========================================================================

#[test]
fn test_add_todo_action_appends_to_task_table() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Fix the login flow today.";

    session.note_activity(doc, t0);
    drain_requests(&request_rx);
    response_tx
        .send(AiResponse::Suggestion {
            text: "Fix the login flow".to_string(),
            kind: SuggestionKind::ActionItem,
            anchor: Some("Fix the login flow today.".to_string()),
            presentation: Presentation::Bubble,
            request_id: 1,
        })
        .unwrap();
    session.tick(doc, None, t0 + Duration::from_millis(10));

    let id = session.bubbles.bubbles()[0].id;
    let result = session.apply_action(id, "add-todo");
    assert_eq!(
        result,
        Some((ActionDispatch::AddTodo, "Fix the login flow".to_string()))
    );
    assert!(session.bubbles.is_empty());

    let tasks = session
        .workspace
        .iter()
        .find(|p| p.id == "tasks-db")
        .unwrap();
    let PageBody::Table { rows, columns } = &tasks.body else {
        panic!("tasks-db must be a table");
    };
    let last = rows.last().unwrap();
    assert_eq!(last[0], "Fix the login flow");
    let status = columns.iter().position(|c| c == "Status").unwrap();
    assert_eq!(last[status], "To Do");
}

#[test]
fn test_dismiss_action_has_no_side_effects() {
    let (mut session, request_rx, response_tx) = harness();
    let t0 = Instant::now();
    let doc = "Fix the login flow today.";

    session.note_activity(doc, t0);
    drain_requests(&request_rx);
    response_tx
        .send(bubble_suggestion("a thought", "Fix the login flow today.", 1))
        .unwrap();
    session.tick(doc, None, t0 + Duration::from_millis(10));

    let id = session.bubbles.bubbles()[0].id;
    assert!(session.apply_action(id, "dismiss").is_none());
    assert!(session.bubbles.is_empty());
}
