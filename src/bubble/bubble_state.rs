//! Bubble store
//!
//! An ordered collection of suggestion bubbles with expansion, focus, drag,
//! and marquee-selection state. All geometry is editor-relative cells; all
//! timing is deadline-based with the clock passed in by the caller.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

use crate::ai::SuggestionKind;
use crate::config::BubbleConfig;

use super::actions::{ActionDispatch, BubbleAction, actions_for};
use super::marquee::SelectionBox;

pub type BubbleId = u64;

/// Fallback placement when no caret position is available
pub const DEFAULT_POSITION: Position = Position { left: 4, top: 2 };

/// Horizontal gap between the caret and a new bubble
const CARET_GAP_X: u16 = 2;

/// Expanded bubbles wider than this are clipped by the renderer
const MAX_EXPANDED_WIDTH: u16 = 48;

/// Extra hit-test padding around a collapsed dot, in cells
const HOVER_PROXIMITY: u16 = 1;

/// Cell offset relative to the editor surface origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub left: u16,
    pub top: u16,
}

/// A bubble's bounding box in editor-relative cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn contains(&self, point: (u16, u16)) -> bool {
        point.0 >= self.left
            && point.0 < self.left.saturating_add(self.width)
            && point.1 >= self.top
            && point.1 < self.top.saturating_add(self.height)
    }
}

/// One floating suggestion affordance
#[derive(Debug, Clone)]
pub struct Bubble {
    pub id: BubbleId,
    pub position: Position,
    pub text: String,
    pub created_at: DateTime<Local>,
    pub expanded: bool,
    pub kind: SuggestionKind,
    pub actions: Vec<BubbleAction>,
    /// Sentence whose presence in the document keeps this bubble alive
    pub anchor: Option<String>,
}

impl Bubble {
    /// Visible bounding box: a single dot cell when collapsed, the clamped
    /// text row plus an action row when expanded
    pub fn bounds(&self) -> Bounds {
        if !self.expanded {
            return Bounds {
                left: self.position.left,
                top: self.position.top,
                width: 1,
                height: 1,
            };
        }
        let text_width = self.text.width() as u16;
        Bounds {
            left: self.position.left,
            top: self.position.top,
            width: text_width.clamp(6, MAX_EXPANDED_WIDTH).saturating_add(2),
            height: 2,
        }
    }

    /// Bounding box used for pointer hit-testing; collapsed dots get a
    /// proximity pad so they are hoverable without pixel-perfect aim
    pub fn hit_bounds(&self) -> Bounds {
        let bounds = self.bounds();
        if self.expanded {
            return bounds;
        }
        Bounds {
            left: bounds.left.saturating_sub(HOVER_PROXIMITY),
            top: bounds.top.saturating_sub(HOVER_PROXIMITY),
            width: bounds.width + HOVER_PROXIMITY * 2,
            height: bounds.height + HOVER_PROXIMITY * 2,
        }
    }
}

struct DragState {
    id: BubbleId,
    /// Pointer offset from the bubble origin at grab time
    grab: (i32, i32),
}

/// Ordered collection of live bubbles and their interaction state
pub struct BubbleStore {
    bubbles: Vec<Bubble>,
    next_id: BubbleId,
    focused: Option<BubbleId>,
    hovered: Option<BubbleId>,
    dragged: Option<DragState>,
    selected: HashSet<BubbleId>,
    marquee: Option<SelectionBox>,
    collapse_deadlines: HashMap<BubbleId, Instant>,
    hover_collapse: Duration,
}

impl BubbleStore {
    pub fn new(config: &BubbleConfig) -> Self {
        Self {
            bubbles: Vec::new(),
            next_id: 0,
            focused: None,
            hovered: None,
            dragged: None,
            selected: HashSet::new(),
            marquee: None,
            collapse_deadlines: HashMap::new(),
            hover_collapse: Duration::from_millis(config.hover_collapse_ms),
        }
    }

    // =====================================================================
    // Lifecycle
    // =====================================================================

    /// Create a bubble near the caret (or at the default position) and
    /// return its id. Bubbles start collapsed.
    pub fn create(
        &mut self,
        text: String,
        kind: SuggestionKind,
        anchor: Option<String>,
        caret: Option<(u16, u16)>,
    ) -> BubbleId {
        self.next_id += 1;
        let id = self.next_id;

        let position = match caret {
            Some((col, row)) => Position {
                left: col.saturating_add(CARET_GAP_X),
                top: row.saturating_sub(1),
            },
            None => DEFAULT_POSITION,
        };

        self.bubbles.push(Bubble {
            id,
            position,
            text,
            created_at: Local::now(),
            expanded: false,
            kind,
            actions: actions_for(kind),
            anchor,
        });
        id
    }

    /// Remove a bubble; all interaction state referencing it dies with it
    pub fn close(&mut self, id: BubbleId) {
        self.bubbles.retain(|b| b.id != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.dragged.as_ref().is_some_and(|d| d.id == id) {
            self.dragged = None;
        }
        self.selected.remove(&id);
        self.collapse_deadlines.remove(&id);
    }

    /// Drop every bubble whose anchor sentence no longer occurs in the
    /// document. Returns the number removed.
    pub fn prune_stale(&mut self, doc: &str) -> usize {
        let stale: Vec<BubbleId> = self
            .bubbles
            .iter()
            .filter(|b| b.anchor.as_ref().is_some_and(|a| !doc.contains(a.as_str())))
            .map(|b| b.id)
            .collect();
        for id in &stale {
            self.close(*id);
        }
        stale.len()
    }

    // =====================================================================
    // Hover expansion
    // =====================================================================

    /// Pointer entered a bubble: cancel its pending collapse and expand
    pub fn hover_enter(&mut self, id: BubbleId, _now: Instant) {
        self.collapse_deadlines.remove(&id);
        self.hovered = Some(id);
        if let Some(bubble) = self.get_mut(id) {
            bubble.expanded = true;
        }
    }

    /// Pointer left a bubble: arm the delayed collapse
    pub fn hover_leave(&mut self, id: BubbleId, now: Instant) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.contains(id) {
            self.collapse_deadlines.insert(id, now + self.hover_collapse);
        }
    }

    /// Route a pointer position to hover enter/leave transitions
    pub fn update_hover(&mut self, hit: Option<BubbleId>, now: Instant) {
        if hit == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.hover_leave(previous, now);
        }
        if let Some(id) = hit {
            self.hover_enter(id, now);
        }
    }

    /// Fire due collapse deadlines
    pub fn tick(&mut self, now: Instant) {
        let due: Vec<BubbleId> = self
            .collapse_deadlines
            .iter()
            .filter(|(_, deadline)| now >= **deadline)
            .map(|(id, _)| *id)
            .collect();
        for id in due {
            self.collapse_deadlines.remove(&id);
            if let Some(bubble) = self.get_mut(id) {
                bubble.expanded = false;
            }
        }
    }

    // =====================================================================
    // Focus
    // =====================================================================

    /// Focus a bubble for keyboard actions. Sticky-expands it; other
    /// bubbles are untouched.
    pub fn focus(&mut self, id: BubbleId) {
        if !self.contains(id) {
            return;
        }
        self.focused = Some(id);
        self.collapse_deadlines.remove(&id);
        if let Some(bubble) = self.get_mut(id) {
            bubble.expanded = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<BubbleId> {
        self.focused
    }

    /// Remove the focused bubble and hand its text back for insertion
    pub fn insert_focused(&mut self) -> Option<String> {
        let id = self.focused?;
        let text = self.get(id)?.text.clone();
        self.close(id);
        Some(text)
    }

    // =====================================================================
    // Drag
    // =====================================================================

    pub fn start_drag(&mut self, id: BubbleId, pointer: (u16, u16)) {
        let Some(bubble) = self.get(id) else { return };
        self.dragged = Some(DragState {
            id,
            grab: (
                pointer.0 as i32 - bubble.position.left as i32,
                pointer.1 as i32 - bubble.position.top as i32,
            ),
        });
    }

    /// Move the dragged bubble so it tracks the pointer minus the grab
    /// offset, clamped to the editor origin
    pub fn drag_to(&mut self, pointer: (u16, u16)) {
        let Some(drag) = &self.dragged else { return };
        let id = drag.id;
        let left = (pointer.0 as i32 - drag.grab.0).max(0) as u16;
        let top = (pointer.1 as i32 - drag.grab.1).max(0) as u16;
        if let Some(bubble) = self.get_mut(id) {
            bubble.position = Position { left, top };
        }
    }

    /// Returns true if a drag was in progress
    pub fn end_drag(&mut self) -> bool {
        self.dragged.take().is_some()
    }

    pub fn dragged(&self) -> Option<BubbleId> {
        self.dragged.as_ref().map(|d| d.id)
    }

    // =====================================================================
    // Marquee selection
    // =====================================================================

    pub fn begin_marquee(&mut self, point: (u16, u16)) {
        self.marquee = Some(SelectionBox::new(point));
        self.selected.clear();
    }

    pub fn update_marquee(&mut self, point: (u16, u16)) {
        if let Some(marquee) = &mut self.marquee {
            marquee.update(point);
        }
    }

    /// Resolve the marquee: select every bubble whose bounds intersect it
    pub fn finish_marquee(&mut self) {
        let Some(marquee) = self.marquee.take() else { return };
        self.selected = self
            .bubbles
            .iter()
            .filter(|b| marquee.intersects(b.bounds()))
            .map(|b| b.id)
            .collect();
    }

    pub fn marquee(&self) -> Option<&SelectionBox> {
        self.marquee.as_ref()
    }

    pub fn selected(&self) -> &HashSet<BubbleId> {
        &self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Delete all marquee-selected bubbles; returns how many went away
    pub fn remove_selected(&mut self) -> usize {
        let ids: Vec<BubbleId> = self.selected.iter().copied().collect();
        for id in &ids {
            self.close(*id);
        }
        self.selected.clear();
        ids.len()
    }

    // =====================================================================
    // Actions
    // =====================================================================

    /// Apply a bubble action by id. The bubble closes either way; dispatch
    /// values are returned for the host to route.
    pub fn apply_action(&mut self, id: BubbleId, action_id: &str) -> Option<ActionDispatch> {
        let bubble = self.get(id)?;
        let action = bubble.actions.iter().find(|a| a.id == action_id)?;
        let dispatch = action.dispatch;
        self.close(id);
        dispatch
    }

    // =====================================================================
    // Queries
    // =====================================================================

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn contains(&self, id: BubbleId) -> bool {
        self.bubbles.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: BubbleId) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: BubbleId) -> Option<&mut Bubble> {
        self.bubbles.iter_mut().find(|b| b.id == id)
    }

    /// Sentences live bubbles are anchored to, for trigger gating
    pub fn anchors(&self) -> Vec<String> {
        self.bubbles
            .iter()
            .filter_map(|b| b.anchor.clone())
            .collect()
    }

    /// Topmost bubble under the pointer (later bubbles render on top)
    pub fn bubble_at(&self, point: (u16, u16)) -> Option<BubbleId> {
        self.bubbles
            .iter()
            .rev()
            .find(|b| b.hit_bounds().contains(point))
            .map(|b| b.id)
    }
}

#[cfg(test)]
#[path = "bubble_state_tests.rs"]
mod bubble_state_tests;
