//! Layout module for tracking UI component regions
//!
//! Region tracking for position-aware mouse interactions: where the editor
//! and overlays were rendered last frame, and which component sits at a
//! given screen position.

use ratatui::layout::Rect;

/// UI components a pointer position can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Editor,
    DebugPanel,
    Modal,
}

/// Screen rectangles recorded during the last render
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegions {
    pub editor: Option<Rect>,
    pub debug_panel: Option<Rect>,
    pub modal: Option<Rect>,
}

impl LayoutRegions {
    /// Which component is at the given screen position. Overlays win over
    /// the editor surface.
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let hit = |rect: &Option<Rect>| rect.is_some_and(|r| contains(r, column, row));
        if hit(&self.modal) {
            return Some(Region::Modal);
        }
        if hit(&self.debug_panel) {
            return Some(Region::DebugPanel);
        }
        if hit(&self.editor) {
            return Some(Region::Editor);
        }
        None
    }

    /// Translate a screen position into editor-relative cells
    pub fn to_editor_cell(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let editor = self.editor?;
        if !contains(editor, column, row) {
            return None;
        }
        Some((column - editor.x, row - editor.y))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> LayoutRegions {
        LayoutRegions {
            editor: Some(Rect::new(0, 1, 80, 20)),
            debug_panel: Some(Rect::new(50, 1, 30, 20)),
            modal: None,
        }
    }

    #[test]
    fn test_region_at_editor() {
        assert_eq!(regions().region_at(5, 5), Some(Region::Editor));
    }

    #[test]
    fn test_overlay_wins_over_editor() {
        assert_eq!(regions().region_at(60, 5), Some(Region::DebugPanel));
    }

    #[test]
    fn test_region_at_nothing() {
        assert_eq!(regions().region_at(5, 0), None);
    }

    #[test]
    fn test_modal_wins_over_everything() {
        let mut layout = regions();
        layout.modal = Some(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.region_at(60, 5), Some(Region::Modal));
    }

    #[test]
    fn test_to_editor_cell_translates_origin() {
        let layout = regions();
        assert_eq!(layout.to_editor_cell(3, 4), Some((3, 3)));
        assert_eq!(layout.to_editor_cell(0, 0), None);
    }
}
