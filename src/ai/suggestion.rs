//! Suggestion classification
//!
//! The remote model is instructed to prefix its response with a bracketed
//! marker. Classification is a literal prefix match against an ordered
//! table, anchored at the start of the trimmed response; no marker means a
//! generic suggestion.

/// What kind of help a suggestion offers, driving its action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    DirectAnswer,
    DocLink,
    Summary,
    CalendarMissingInfo,
    ActionItem,
    Clarity,
    Flow,
    DraftEmail,
    ProbingQuestion,
    /// Fallback when no marker is recognized
    Suggestion,
}

impl SuggestionKind {
    /// Human-readable label shown in bubble and modal titles
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::DirectAnswer => "Direct Answer",
            SuggestionKind::DocLink => "Doc Link Suggestion",
            SuggestionKind::Summary => "Summary",
            SuggestionKind::CalendarMissingInfo => "Calendar Details Needed",
            SuggestionKind::ActionItem => "Action Item",
            SuggestionKind::Clarity => "Clarity",
            SuggestionKind::Flow => "Flow",
            SuggestionKind::DraftEmail => "Draft Email",
            SuggestionKind::ProbingQuestion => "Probing Question",
            SuggestionKind::Suggestion => "Suggestion",
        }
    }
}

/// Marker table, tested in priority order. New markers are additive.
pub const KIND_MARKERS: &[(&str, SuggestionKind)] = &[
    ("[Answer]", SuggestionKind::DirectAnswer),
    ("[Link Doc?]", SuggestionKind::DocLink),
    ("[Summary?]", SuggestionKind::Summary),
    ("[AskCalendar_Details?]", SuggestionKind::CalendarMissingInfo),
    ("[Action?]", SuggestionKind::ActionItem),
    ("[Clarity]", SuggestionKind::Clarity),
    ("[Flow]", SuggestionKind::Flow),
    ("[DraftEmail?]", SuggestionKind::DraftEmail),
    ("[Probe?]", SuggestionKind::ProbingQuestion),
];

/// Classify a raw response and strip the matched marker from the text.
///
/// The match is case- and position-sensitive: a marker anywhere but the
/// start of the trimmed response does not count.
pub fn classify(response: &str) -> (SuggestionKind, String) {
    let trimmed = response.trim();
    for (marker, kind) in KIND_MARKERS {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return (*kind, rest.trim_start().to_string());
        }
    }
    (SuggestionKind::Suggestion, trimmed.to_string())
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
