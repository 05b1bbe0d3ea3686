//! Suggestion bubbles
//!
//! The bubble store (one floating affordance per active suggestion) and its
//! interaction layer: hover expansion, focus, drag, marquee selection,
//! per-kind actions, and rendering.

mod actions;
mod bubble_render;
mod bubble_state;
mod marquee;

pub use actions::{ActionDispatch, ActionVariant, BubbleAction, actions_for};
pub use bubble_render::render_bubbles;
pub use bubble_state::{Bounds, Bubble, BubbleId, BubbleStore, DEFAULT_POSITION, Position};
pub use marquee::SelectionBox;
