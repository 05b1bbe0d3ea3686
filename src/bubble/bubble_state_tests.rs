//! Tests for the bubble store

use std::time::{Duration, Instant};

use super::*;
use crate::ai::SuggestionKind;
use crate::config::BubbleConfig;

fn store() -> BubbleStore {
    BubbleStore::new(&BubbleConfig::default())
}

fn plain_bubble(store: &mut BubbleStore, text: &str) -> BubbleId {
    store.create(
        text.to_string(),
        SuggestionKind::Suggestion,
        None,
        Some((10, 5)),
    )
}

const COLLAPSE: Duration = Duration::from_millis(300);

// =========================================================================
// Creation and destruction
// =========================================================================

#[test]
fn test_create_positions_near_caret() {
    let mut store = store();
    let id = plain_bubble(&mut store, "hi");
    let bubble = store.get(id).unwrap();
    assert_eq!(bubble.position, Position { left: 12, top: 4 });
    assert!(!bubble.expanded);
}

#[test]
fn test_create_without_caret_uses_default_position() {
    let mut store = store();
    let id = store.create("hi".to_string(), SuggestionKind::Suggestion, None, None);
    assert_eq!(store.get(id).unwrap().position, DEFAULT_POSITION);
}

#[test]
fn test_ids_unique_and_stable() {
    let mut store = store();
    let a = plain_bubble(&mut store, "a");
    let b = plain_bubble(&mut store, "b");
    assert_ne!(a, b);

    store.close(a);
    let c = plain_bubble(&mut store, "c");
    assert_ne!(b, c);
}

#[test]
fn test_close_removes_and_clears_focus() {
    let mut store = store();
    let id = plain_bubble(&mut store, "bye");
    store.focus(id);
    assert_eq!(store.focused(), Some(id));

    store.close(id);
    assert!(!store.contains(id));
    assert!(store.focused().is_none());
    assert!(store.is_empty());
}

#[test]
fn test_close_unknown_id_is_noop() {
    let mut store = store();
    let id = plain_bubble(&mut store, "stay");
    store.close(id + 100);
    assert!(store.contains(id));
}

#[test]
fn test_actions_built_per_kind() {
    let mut store = store();
    let id = store.create(
        "Add these to tasks".to_string(),
        SuggestionKind::ActionItem,
        None,
        None,
    );
    let actions = &store.get(id).unwrap().actions;
    assert_eq!(actions[0].label, "Add To-Do");
    assert_eq!(actions.last().unwrap().id, "dismiss");
}

// =========================================================================
// Stale anchor pruning
// =========================================================================

#[test]
fn test_prune_stale_removes_vanished_anchors() {
    let mut store = store();
    let stale = store.create(
        "answer".to_string(),
        SuggestionKind::DirectAnswer,
        Some("Deleted sentence.".to_string()),
        None,
    );
    let kept = store.create(
        "other".to_string(),
        SuggestionKind::Suggestion,
        Some("Still here.".to_string()),
        None,
    );
    let unanchored = store.create("free".to_string(), SuggestionKind::Suggestion, None, None);

    let removed = store.prune_stale("Still here. More text follows");
    assert_eq!(removed, 1);
    assert!(!store.contains(stale));
    assert!(store.contains(kept));
    assert!(store.contains(unanchored));
}

#[test]
fn test_prune_stale_removes_multiple() {
    let mut store = store();
    for i in 0..3 {
        store.create(
            format!("s{i}"),
            SuggestionKind::Suggestion,
            Some(format!("Sentence {i}.")),
            None,
        );
    }
    assert_eq!(store.prune_stale("none of those remain"), 3);
    assert!(store.is_empty());
}

// =========================================================================
// Hover expansion
// =========================================================================

#[test]
fn test_hover_enter_expands_immediately() {
    let mut store = store();
    let id = plain_bubble(&mut store, "text");
    let t0 = Instant::now();

    store.hover_enter(id, t0);
    assert!(store.get(id).unwrap().expanded);
}

#[test]
fn test_hover_leave_collapses_after_delay() {
    let mut store = store();
    let id = plain_bubble(&mut store, "text");
    let t0 = Instant::now();

    store.hover_enter(id, t0);
    store.hover_leave(id, t0);

    // Not yet due
    store.tick(t0 + COLLAPSE - Duration::from_millis(1));
    assert!(store.get(id).unwrap().expanded);

    store.tick(t0 + COLLAPSE);
    assert!(!store.get(id).unwrap().expanded);
}

#[test]
fn test_reenter_cancels_pending_collapse() {
    let mut store = store();
    let id = plain_bubble(&mut store, "text");
    let t0 = Instant::now();

    store.hover_enter(id, t0);
    store.hover_leave(id, t0);
    // Pointer comes back before the deadline
    store.hover_enter(id, t0 + Duration::from_millis(100));

    store.tick(t0 + COLLAPSE * 2);
    assert!(store.get(id).unwrap().expanded, "collapse must have been canceled");
}

#[test]
fn test_update_hover_transitions_between_bubbles() {
    let mut store = store();
    let a = plain_bubble(&mut store, "a");
    let b = plain_bubble(&mut store, "b");
    let t0 = Instant::now();

    store.update_hover(Some(a), t0);
    assert!(store.get(a).unwrap().expanded);

    // Moving to b arms a's collapse and expands b
    store.update_hover(Some(b), t0 + Duration::from_millis(50));
    assert!(store.get(b).unwrap().expanded);

    store.tick(t0 + Duration::from_millis(50) + COLLAPSE);
    assert!(!store.get(a).unwrap().expanded);
    assert!(store.get(b).unwrap().expanded);
}

#[test]
fn test_collapse_deadline_dies_with_bubble() {
    let mut store = store();
    let id = plain_bubble(&mut store, "text");
    let t0 = Instant::now();

    store.hover_enter(id, t0);
    store.hover_leave(id, t0);
    store.close(id);

    // Must not panic or resurrect anything
    store.tick(t0 + COLLAPSE);
    assert!(store.is_empty());
}

// =========================================================================
// Focus and insert
// =========================================================================

#[test]
fn test_single_focus() {
    let mut store = store();
    let a = plain_bubble(&mut store, "a");
    let b = plain_bubble(&mut store, "b");

    store.focus(a);
    store.focus(b);
    assert_eq!(store.focused(), Some(b));
}

#[test]
fn test_focus_sticky_expands_without_touching_others() {
    let mut store = store();
    let a = plain_bubble(&mut store, "a");
    let b = plain_bubble(&mut store, "b");

    store.focus(a);
    assert!(store.get(a).unwrap().expanded);
    assert!(!store.get(b).unwrap().expanded);
}

#[test]
fn test_focus_unknown_id_ignored() {
    let mut store = store();
    store.focus(42);
    assert!(store.focused().is_none());
}

#[test]
fn test_insert_focused_yields_text_exactly_once() {
    let mut store = store();
    let id = plain_bubble(&mut store, "the suggestion");
    store.focus(id);

    assert_eq!(store.insert_focused(), Some("the suggestion".to_string()));
    assert!(!store.contains(id));
    assert!(store.focused().is_none());
    assert!(store.insert_focused().is_none());
}

#[test]
fn test_insert_without_focus_is_none() {
    let mut store = store();
    plain_bubble(&mut store, "unfocused");
    assert!(store.insert_focused().is_none());
}

// =========================================================================
// Drag
// =========================================================================

#[test]
fn test_drag_tracks_pointer_minus_grab_offset() {
    let mut store = store();
    let id = plain_bubble(&mut store, "drag me");
    // Bubble sits at (12, 4); grab it one cell in
    store.start_drag(id, (13, 4));
    assert_eq!(store.dragged(), Some(id));

    store.drag_to((20, 9));
    assert_eq!(store.get(id).unwrap().position, Position { left: 19, top: 9 });

    assert!(store.end_drag());
    assert!(store.dragged().is_none());
    assert!(!store.end_drag());
}

#[test]
fn test_drag_clamps_at_origin() {
    let mut store = store();
    let id = plain_bubble(&mut store, "drag me");
    store.start_drag(id, (13, 4));
    store.drag_to((0, 0));
    assert_eq!(store.get(id).unwrap().position, Position { left: 0, top: 0 });
}

#[test]
fn test_only_one_dragged_bubble() {
    let mut store = store();
    let a = plain_bubble(&mut store, "a");
    let b = plain_bubble(&mut store, "b");

    store.start_drag(a, (12, 4));
    store.start_drag(b, (12, 4));
    assert_eq!(store.dragged(), Some(b));
}

// =========================================================================
// Marquee selection
// =========================================================================

#[test]
fn test_marquee_selects_intersecting_bubbles_only() {
    let mut store = store();
    let a = store.create("a".to_string(), SuggestionKind::Suggestion, None, Some((2, 2)));
    let b = store.create("b".to_string(), SuggestionKind::Suggestion, None, Some((6, 4)));
    let c = store.create("c".to_string(), SuggestionKind::Suggestion, None, Some((30, 20)));

    // a lands at (4,1), b at (8,3), c at (32,19)
    store.begin_marquee((0, 0));
    store.update_marquee((12, 6));
    store.finish_marquee();

    assert!(store.selected().contains(&a));
    assert!(store.selected().contains(&b));
    assert!(!store.selected().contains(&c));
}

#[test]
fn test_remove_selected_removes_exactly_selection() {
    let mut store = store();
    let a = store.create("a".to_string(), SuggestionKind::Suggestion, None, Some((2, 2)));
    let b = store.create("b".to_string(), SuggestionKind::Suggestion, None, Some((6, 4)));
    let c = store.create("c".to_string(), SuggestionKind::Suggestion, None, Some((30, 20)));

    store.begin_marquee((0, 0));
    store.update_marquee((12, 6));
    store.finish_marquee();

    assert_eq!(store.remove_selected(), 2);
    assert!(!store.contains(a));
    assert!(!store.contains(b));
    assert!(store.contains(c));
    assert!(store.selected().is_empty());
}

#[test]
fn test_begin_marquee_clears_previous_selection() {
    let mut store = store();
    let a = store.create("a".to_string(), SuggestionKind::Suggestion, None, Some((2, 2)));
    store.begin_marquee((0, 0));
    store.update_marquee((20, 20));
    store.finish_marquee();
    assert!(store.selected().contains(&a));

    store.begin_marquee((50, 50));
    assert!(store.selected().is_empty());
}

// =========================================================================
// Actions
// =========================================================================

#[test]
fn test_dismiss_closes_without_dispatch() {
    let mut store = store();
    let id = store.create("x".to_string(), SuggestionKind::ActionItem, None, None);
    assert!(store.apply_action(id, "dismiss").is_none());
    assert!(!store.contains(id));
}

#[test]
fn test_action_dispatch_routed_and_bubble_closed() {
    let mut store = store();
    let id = store.create("x".to_string(), SuggestionKind::ActionItem, None, None);
    let dispatch = store.apply_action(id, "add-todo");
    assert_eq!(dispatch, Some(ActionDispatch::AddTodo));
    assert!(!store.contains(id));
}

#[test]
fn test_unknown_action_id_leaves_bubble_alone() {
    let mut store = store();
    let id = store.create("x".to_string(), SuggestionKind::ActionItem, None, None);
    assert!(store.apply_action(id, "no-such-action").is_none());
    assert!(store.contains(id));
}

// =========================================================================
// Hit testing
// =========================================================================

#[test]
fn test_bubble_at_prefers_topmost() {
    let mut store = store();
    let _under = store.create("under".to_string(), SuggestionKind::Suggestion, None, Some((5, 5)));
    let over = store.create("over".to_string(), SuggestionKind::Suggestion, None, Some((5, 5)));

    assert_eq!(store.bubble_at((7, 4)), Some(over));
}

#[test]
fn test_bubble_at_respects_proximity_padding() {
    let mut store = store();
    let id = plain_bubble(&mut store, "dot");
    // Dot is at (12, 4); one cell away still hits
    assert_eq!(store.bubble_at((11, 3)), Some(id));
    assert_eq!(store.bubble_at((12, 4)), Some(id));
    assert!(store.bubble_at((15, 4)).is_none());
}

#[test]
fn test_expanded_bubble_hit_area_covers_text_row() {
    let mut store = store();
    let id = plain_bubble(&mut store, "a fairly long suggestion");
    let t0 = Instant::now();
    store.hover_enter(id, t0);

    // Inside the expanded box, beyond the collapsed dot
    assert_eq!(store.bubble_at((20, 5)), Some(id));
}
