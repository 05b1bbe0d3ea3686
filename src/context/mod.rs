//! Recent-text window extraction
//!
//! Derives the bounded context the assistant reasons over: trailing token
//! runs, the current/previous paragraph pair, and the last complete sentence.

mod extractor;

pub use extractor::{
    MAX_TOKENS, MIN_TOKENS, StructuredContext, ends_with_terminal_punctuation, last_sentence,
    last_tokens, structured_context, tokenize,
};
