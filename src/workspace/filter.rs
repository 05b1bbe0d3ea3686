use std::collections::HashSet;

use super::page::Page;

/// At most this many pages are injected into one prompt
pub const MAX_CONTEXT_PAGES: usize = 3;

/// Keywords shorter than this are dropped as noise
const MIN_KEYWORD_LEN: usize = 4;

/// Extract lookup keywords from free text: lower-cased, split on
/// non-word-character runs, deduplicated in order of first occurrence,
/// short tokens dropped.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for token in lowered.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if token.len() >= MIN_KEYWORD_LEN && seen.insert(token.to_string()) {
            keywords.push(token.to_string());
        }
    }

    keywords
}

/// Retain pages whose flattened text contains any keyword as a
/// case-insensitive substring, capped at `MAX_CONTEXT_PAGES`. No keywords
/// means no context.
pub fn filter_pages<'a>(pages: &'a [Page], keywords: &[String]) -> Vec<&'a Page> {
    if keywords.is_empty() {
        return Vec::new();
    }

    pages
        .iter()
        .filter(|page| {
            let haystack = format!("{}\n{}", page.title, page.flattened()).to_lowercase();
            keywords.iter().any(|keyword| haystack.contains(keyword.as_str()))
        })
        .take(MAX_CONTEXT_PAGES)
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
