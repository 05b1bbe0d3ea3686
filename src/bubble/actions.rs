//! Per-kind bubble actions
//!
//! Each suggestion kind offers a fixed list of buttons. The list is data:
//! a dismiss entry is always present, and kind-specific entries are
//! prepended. Actions that do something carry an explicit dispatch value
//! the host routes on; dismiss carries none.

use crate::ai::SuggestionKind;

/// Visual weight of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    Primary,
    Secondary,
}

/// Side effect an action routes to. The store never implements these; it
/// hands them to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionDispatch {
    AddTodo,
    SendInvites,
    ApplyEdit,
    Summarize,
    DraftEmail,
    LinkDoc,
}

/// One button on an expanded bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleAction {
    pub id: &'static str,
    pub label: &'static str,
    pub variant: ActionVariant,
    pub dispatch: Option<ActionDispatch>,
}

const DISMISS: BubbleAction = BubbleAction {
    id: "dismiss",
    label: "Dismiss",
    variant: ActionVariant::Secondary,
    dispatch: None,
};

const ADD_TODO: BubbleAction = BubbleAction {
    id: "add-todo",
    label: "Add To-Do",
    variant: ActionVariant::Primary,
    dispatch: Some(ActionDispatch::AddTodo),
};

const SEND_INVITES: BubbleAction = BubbleAction {
    id: "send-invites",
    label: "Send invites",
    variant: ActionVariant::Primary,
    dispatch: Some(ActionDispatch::SendInvites),
};

const APPLY_EDIT: BubbleAction = BubbleAction {
    id: "apply-edit",
    label: "Apply Edit",
    variant: ActionVariant::Primary,
    dispatch: Some(ActionDispatch::ApplyEdit),
};

const SUMMARIZE: BubbleAction = BubbleAction {
    id: "summarize",
    label: "Summarize",
    variant: ActionVariant::Primary,
    dispatch: Some(ActionDispatch::Summarize),
};

const DRAFT_EMAIL: BubbleAction = BubbleAction {
    id: "draft-email",
    label: "Draft Email",
    variant: ActionVariant::Primary,
    dispatch: Some(ActionDispatch::DraftEmail),
};

const LINK_DOC: BubbleAction = BubbleAction {
    id: "link-doc",
    label: "Link Doc",
    variant: ActionVariant::Primary,
    dispatch: Some(ActionDispatch::LinkDoc),
};

/// Build the ordered action list for a suggestion kind. Dismiss is always
/// last; answer-like kinds offer no extra button (Tab-insert covers them).
pub fn actions_for(kind: SuggestionKind) -> Vec<BubbleAction> {
    let mut actions = match kind {
        SuggestionKind::ActionItem => vec![ADD_TODO],
        SuggestionKind::CalendarMissingInfo => vec![SEND_INVITES],
        SuggestionKind::Clarity | SuggestionKind::Flow => vec![APPLY_EDIT],
        SuggestionKind::Summary => vec![SUMMARIZE],
        SuggestionKind::DraftEmail => vec![DRAFT_EMAIL],
        SuggestionKind::DocLink => vec![LINK_DOC],
        SuggestionKind::DirectAnswer
        | SuggestionKind::ProbingQuestion
        | SuggestionKind::Suggestion => Vec::new(),
    };
    actions.push(DISMISS);
    actions
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod actions_tests;
