use memchr::{memchr, memchr3};

/// Minimum number of trailing tokens to keep as rolling context
pub const MIN_TOKENS: usize = 1;

/// Maximum number of trailing tokens to keep as rolling context
pub const MAX_TOKENS: usize = 500;

/// Split text into whitespace-delimited tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Return the trailing token run of `text`, joined with single spaces.
///
/// The token count is clamped to `[min, max]`; when fewer than `min` tokens
/// exist, all available tokens are returned. Empty input yields an empty
/// string.
pub fn last_tokens(text: &str, min: usize, max: usize) -> String {
    let tokens = tokenize(text);
    let count = min.max(tokens.len().min(max)).min(tokens.len());
    tokens[tokens.len() - count..].join(" ")
}

/// The paragraph pair surrounding the caret, used to assemble prompts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuredContext {
    pub current_paragraph: String,
    pub previous_paragraph: String,
}

/// Split `full_text` on blank-line boundaries and return the last paragraph
/// as `current_paragraph` and the second-to-last as `previous_paragraph`
/// (empty when absent). Both are whitespace-trimmed.
pub fn structured_context(full_text: &str) -> StructuredContext {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in full_text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                paragraphs.push(current.trim().to_string());
            }
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        paragraphs.push(current.trim().to_string());
    }

    let current_paragraph = paragraphs.last().cloned().unwrap_or_default();
    let previous_paragraph = match paragraphs.len() {
        0 | 1 => String::new(),
        n => paragraphs[n - 2].clone(),
    };

    StructuredContext {
        current_paragraph,
        previous_paragraph,
    }
}

/// Return the last complete sentence of `text`, trimmed.
///
/// A sentence is a maximal run terminated by `.`, `!`, `?`, or newline. An
/// unterminated trailing clause is not a sentence; text containing no
/// terminator yields an empty string.
pub fn last_sentence(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut last: Option<(usize, usize)> = None;
    let mut i = 0;

    while i < bytes.len() {
        if is_terminator(bytes[i]) {
            i += 1;
            continue;
        }
        let start = i;
        let Some(rel) = next_terminator(&bytes[i..]) else {
            // Unterminated tail
            break;
        };
        let mut end = i + rel;
        while end < bytes.len() && is_terminator(bytes[end]) {
            end += 1;
        }
        last = Some((start, end));
        i = end;
    }

    match last {
        Some((start, end)) => text[start..end].trim().to_string(),
        None => String::new(),
    }
}

/// Whether the trimmed text ends with sentence-terminating punctuation
pub fn ends_with_terminal_punctuation(text: &str) -> bool {
    matches!(text.trim_end().chars().last(), Some('.' | '!' | '?'))
}

fn is_terminator(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?' | b'\n')
}

fn next_terminator(haystack: &[u8]) -> Option<usize> {
    match (memchr3(b'.', b'!', b'?', haystack), memchr(b'\n', haystack)) {
        (Some(punct), Some(newline)) => Some(punct.min(newline)),
        (punct, newline) => punct.or(newline),
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod extractor_tests;
