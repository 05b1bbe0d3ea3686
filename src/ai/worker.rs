//! AI worker thread
//!
//! Handles suggestion requests in a background thread to avoid blocking the
//! UI. Receives prompts via channel, makes one HTTP call per request, and
//! sends classified results back to the main thread. No retries: a failed
//! request is reported and forgotten.

use std::sync::mpsc::{Receiver, Sender};

use super::ai_state::{AiRequest, AiResponse};
use super::provider::{AiError, AiProvider};
use super::suggestion::classify;
use crate::config::ai_types::AiConfig;

/// Spawn the AI worker thread.
///
/// The thread runs until the request channel closes, which happens when the
/// owning session is dropped.
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let provider_result = AiProvider::from_config(config);

    std::thread::spawn(move || {
        worker_loop(provider_result, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    provider_result: Result<AiProvider, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let provider = match provider_result {
        Ok(p) => Some(p),
        Err(e) => {
            // Remembered and reported per request; the session normally
            // short-circuits before sending in this case
            log::debug!("AI provider not configured: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let AiRequest::Suggest {
            prompt,
            anchor,
            presentation,
            request_id,
        } = request;

        let response = match &provider {
            None => AiResponse::Failed {
                reason: "AI not configured: missing [ai] api_key".to_string(),
                presentation,
                request_id,
            },
            Some(provider) => match provider.complete(&prompt) {
                Ok(text) if text.trim().is_empty() => AiResponse::Empty {
                    presentation,
                    request_id,
                },
                Ok(text) => {
                    let (kind, text) = classify(&text);
                    if text.is_empty() {
                        AiResponse::Empty {
                            presentation,
                            request_id,
                        }
                    } else {
                        AiResponse::Suggestion {
                            text,
                            kind,
                            anchor,
                            presentation,
                            request_id,
                        }
                    }
                }
                Err(e) => AiResponse::Failed {
                    reason: e.to_string(),
                    presentation,
                    request_id,
                },
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("AI worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
