//! Suggestion client
//!
//! Prompt assembly, the worker thread that owns the HTTP call, and
//! classification of responses into suggestion kinds.

pub mod ai_state;
pub mod prompt;
pub mod provider;
pub mod suggestion;
pub mod worker;

pub use ai_state::{AiRequest, AiResponse, AiState, Presentation};
pub use suggestion::SuggestionKind;
