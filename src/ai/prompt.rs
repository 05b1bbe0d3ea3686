//! Prompt assembly
//!
//! Combines the instruction preamble, the user's style profile, filtered
//! workspace excerpts, and the structured paragraph context into the single
//! prompt sent to the suggestion endpoint.

use crate::context::StructuredContext;

/// Instruction preamble sent with every request. The marker list must stay
/// in sync with the classification table in `suggestion.rs`.
const PREAMBLE: &str = "\
You are an ambient writing assistant embedded in a notepad. You are not a \
chatbot: you read the user's recent writing and surface one concrete, \
context-aware suggestion only when it helps.

When giving an answer, state the definitive answer first, with no filler or \
hedging. Never ask the user to clarify when a best guess is possible; make \
the guess and state it directly. Never offer vague help. Neutral, \
professional tone; no emojis or chatter.

Start your response with exactly one of these markers so it can be routed: \
[Answer], [Action?], [Clarity], [Flow], [Summary?], [Link Doc?], \
[DraftEmail?], [AskCalendar_Details?], [Probe?]. Omit the marker only if \
none fits.";

/// Assemble the full prompt for one suggestion request.
///
/// `knowledge` holds pre-filtered workspace excerpts; empty sections are
/// omitted entirely.
pub fn assemble_prompt(
    context: &StructuredContext,
    style_profile: &str,
    knowledge: &[String],
) -> String {
    let mut prompt = String::from(PREAMBLE);

    if !style_profile.trim().is_empty() {
        prompt.push_str("\n\nMatch the user's style: ");
        prompt.push_str(style_profile.trim());
    }

    if !knowledge.is_empty() {
        prompt.push_str("\n\nWORKSPACE CONTEXT:\n");
        for excerpt in knowledge {
            prompt.push_str(excerpt);
            prompt.push('\n');
        }
    }

    if !context.previous_paragraph.is_empty() {
        prompt.push_str("\n\nPREVIOUS PARAGRAPH:\n");
        prompt.push_str(&context.previous_paragraph);
    }

    prompt.push_str("\n\nCURRENT PARAGRAPH:\n");
    prompt.push_str(&context.current_paragraph);

    prompt
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
