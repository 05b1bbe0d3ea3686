//! Hotkey suggestion modal
//!
//! The hotkey path renders its result in a centered modal instead of a
//! bubble. The modal waits for the in-flight request, then shows the
//! classified text until dismissed or inserted.

use crate::ai::SuggestionKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    /// A hotkey request is in flight
    Waiting,
    Ready {
        text: String,
        kind: SuggestionKind,
    },
    /// The request produced nothing usable
    Empty,
}

impl ModalState {
    pub fn begin_waiting(&mut self) {
        *self = ModalState::Waiting;
    }

    pub fn set_ready(&mut self, text: String, kind: SuggestionKind) {
        *self = ModalState::Ready { text, kind };
    }

    pub fn set_empty(&mut self) {
        // Only meaningful while a request is outstanding
        if *self == ModalState::Waiting {
            *self = ModalState::Empty;
        }
    }

    pub fn dismiss(&mut self) {
        *self = ModalState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalState::Hidden)
    }

    /// Take the ready suggestion for insertion, hiding the modal
    pub fn take_ready(&mut self) -> Option<(String, SuggestionKind)> {
        match std::mem::take(self) {
            ModalState::Ready { text, kind } => Some((text, kind)),
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiting_to_ready() {
        let mut modal = ModalState::default();
        assert!(!modal.is_visible());

        modal.begin_waiting();
        assert!(modal.is_visible());

        modal.set_ready("Paris".to_string(), SuggestionKind::DirectAnswer);
        assert_eq!(
            modal,
            ModalState::Ready {
                text: "Paris".to_string(),
                kind: SuggestionKind::DirectAnswer
            }
        );
    }

    #[test]
    fn test_take_ready_hides_and_yields_once() {
        let mut modal = ModalState::default();
        modal.set_ready("text".to_string(), SuggestionKind::Suggestion);

        let taken = modal.take_ready();
        assert_eq!(taken, Some(("text".to_string(), SuggestionKind::Suggestion)));
        assert!(!modal.is_visible());
        assert!(modal.take_ready().is_none());
    }

    #[test]
    fn test_take_ready_leaves_other_states_alone() {
        let mut modal = ModalState::Waiting;
        assert!(modal.take_ready().is_none());
        assert_eq!(modal, ModalState::Waiting);
    }

    #[test]
    fn test_set_empty_only_while_waiting() {
        let mut modal = ModalState::default();
        modal.set_empty();
        assert!(!modal.is_visible());

        modal.begin_waiting();
        modal.set_empty();
        assert_eq!(modal, ModalState::Empty);
    }

    #[test]
    fn test_dismiss_from_any_state() {
        let mut modal = ModalState::Empty;
        modal.dismiss();
        assert!(!modal.is_visible());
    }
}
