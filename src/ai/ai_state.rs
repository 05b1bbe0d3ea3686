//! Suggestion client state
//!
//! Holds the channel handles to the worker thread and the request counter.
//! The session sends assembled prompts and drains classified responses on
//! every tick; it never blocks on the worker.

use std::sync::mpsc::{Receiver, Sender};

use super::suggestion::SuggestionKind;

/// Where a suggestion result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Floating bubble near the caret (automatic trigger path)
    Bubble,
    /// Centered modal (hotkey path)
    Modal,
}

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    Suggest {
        prompt: String,
        /// Sentence the resulting bubble will be anchored to, if any
        anchor: Option<String>,
        presentation: Presentation,
        /// Unique ID for this request, used for diagnostics
        request_id: u64,
    },
}

/// Response messages received from the AI worker thread
#[derive(Debug)]
pub enum AiResponse {
    /// The endpoint produced a classified suggestion
    Suggestion {
        text: String,
        kind: SuggestionKind,
        anchor: Option<String>,
        presentation: Presentation,
        request_id: u64,
    },
    /// The endpoint answered but produced no usable text; not an error
    Empty {
        presentation: Presentation,
        request_id: u64,
    },
    /// The request failed; the reason is recorded for diagnostics only
    Failed {
        reason: String,
        presentation: Presentation,
        request_id: u64,
    },
}

/// Channel handles and request bookkeeping for the suggestion client
pub struct AiState {
    /// Whether suggestions are enabled (from config)
    pub enabled: bool,
    /// Whether a credential is present (missing credential short-circuits
    /// before any request is sent)
    pub configured: bool,
    request_tx: Option<Sender<AiRequest>>,
    response_rx: Option<Receiver<AiResponse>>,
    request_id: u64,
}

impl AiState {
    pub fn new(enabled: bool, configured: bool) -> Self {
        Self {
            enabled,
            configured,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Whether requests can be sent at all
    pub fn ready(&self) -> bool {
        self.enabled && self.configured && self.request_tx.is_some()
    }

    /// Send a suggestion request. Returns the request id, or None when the
    /// channel is absent or closed.
    pub fn send(
        &mut self,
        prompt: String,
        anchor: Option<String>,
        presentation: Presentation,
    ) -> Option<u64> {
        let tx = self.request_tx.as_ref()?;
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        tx.send(AiRequest::Suggest {
            prompt,
            anchor,
            presentation,
            request_id,
        })
        .ok()?;

        Some(request_id)
    }

    /// Drain all responses that have arrived since the last tick
    pub fn drain(&mut self) -> Vec<AiResponse> {
        let Some(rx) = self.response_rx.as_ref() else {
            return Vec::new();
        };
        let mut responses = Vec::new();
        while let Ok(response) = rx.try_recv() {
            responses.push(response);
        }
        responses
    }

    /// Get the current request ID
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
