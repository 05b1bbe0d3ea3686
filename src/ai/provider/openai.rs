//! OpenAI-compatible chat completions client
//!
//! One non-streaming POST per request, driven by a current-thread runtime
//! owned by the worker thread that calls it.

use super::AiError;

/// OpenAI-style API client
#[derive(Debug)]
pub struct OpenAiClient {
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        endpoint: String,
        model: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<Self, AiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AiError::Network(e.to_string()))?;

        Ok(Self {
            api_key,
            endpoint,
            model,
            max_tokens,
            temperature,
            runtime,
            http: reqwest::Client::new(),
        })
    }

    /// Request a single completion.
    ///
    /// Non-2xx statuses surface as `AiError::Api` with the response body.
    /// A body that parses but carries no text yields an empty string, which
    /// callers treat as "no suggestion".
    pub fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let response = self
            .runtime
            .block_on(
                self.http
                    .post(&self.endpoint)
                    .bearer_auth(&self.api_key)
                    .header("content-type", "application/json")
                    .json(&request_body)
                    .send(),
            )
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = self
                .runtime
                .block_on(response.text())
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = match self.runtime.block_on(response.json()) {
            Ok(json) => json,
            Err(e) => {
                // Unparseable success body is "no suggestion", not a failure
                log::debug!("Discarding unparseable response body: {}", e);
                return Ok(String::new());
            }
        };

        Ok(extract_content(&body).unwrap_or_default())
    }
}

/// Pull the generated text out of a chat completions response body
fn extract_content(body: &serde_json::Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|text| text.trim().to_string())
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod openai_tests;
