//! Suggestion trigger logic
//!
//! Decides when the document's recent text warrants a suggestion request:
//! immediately after terminal punctuation, or after a typing pause backed by
//! a signal keyword. All timing is deadline-based; the caller supplies the
//! clock.

mod controller;

pub use controller::{FireKind, TriggerController, TriggerFire, TriggerPhase};
