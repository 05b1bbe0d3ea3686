use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::TriggerConfig;
use crate::context::{ends_with_terminal_punctuation, last_sentence, structured_context};

/// Observable phase of the trigger state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Idle,
    PendingSuggestion,
    Cooldown,
}

/// How a fire was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireKind {
    /// The document ended with terminal punctuation (edge-triggered)
    Punctuation,
    /// The idle deadline elapsed after a typing pause (time-triggered)
    Pause,
}

/// A request the controller has decided to fire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerFire {
    /// The sentence the resulting bubble will be anchored to
    pub sentence: String,
    pub kind: FireKind,
}

/// Per-document trigger state machine.
///
/// Activity events re-arm a single-shot idle deadline; terminal punctuation
/// fires immediately. Every fire opens a global cooldown window during which
/// no automatic fire occurs. The caller passes `now` into every method, so
/// tests drive the machine with a virtual timeline.
pub struct TriggerController {
    idle: Duration,
    cooldown: Duration,
    keywords: Vec<String>,
    deadline: Option<Instant>,
    cooldown_until: Option<Instant>,
    last_answered: Option<String>,
    answered: HashSet<String>,
}

impl TriggerController {
    pub fn new(config: &TriggerConfig) -> Self {
        Self {
            idle: Duration::from_millis(config.idle_ms),
            cooldown: Duration::from_millis(config.cooldown_ms),
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            deadline: None,
            cooldown_until: None,
            last_answered: None,
            answered: HashSet::new(),
        }
    }

    /// Current phase, derived from the armed deadlines
    pub fn phase(&self, now: Instant) -> TriggerPhase {
        if let Some(until) = self.cooldown_until
            && now < until
        {
            return TriggerPhase::Cooldown;
        }
        if self.deadline.is_some() {
            TriggerPhase::PendingSuggestion
        } else {
            TriggerPhase::Idle
        }
    }

    /// React to user activity (keystroke, pointer-down, selection change).
    ///
    /// Terminal punctuation at the end of the document fires immediately;
    /// anything else restarts the idle deadline. `anchors` lists the
    /// sentences live bubbles are currently anchored to.
    pub fn note_activity(
        &mut self,
        doc: &str,
        anchors: &[String],
        now: Instant,
    ) -> Option<TriggerFire> {
        if ends_with_terminal_punctuation(doc) {
            self.deadline = None;
            self.try_fire(doc, anchors, now, FireKind::Punctuation)
        } else {
            self.deadline = Some(now + self.idle);
            None
        }
    }

    /// Check the idle deadline; fires the time-triggered path when it has
    /// elapsed. The deadline is consumed whether or not the guards pass.
    pub fn poll(&mut self, doc: &str, anchors: &[String], now: Instant) -> Option<TriggerFire> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.try_fire(doc, anchors, now, FireKind::Pause)
            }
            _ => None,
        }
    }

    /// Open the cooldown window without firing. Used by the hotkey path,
    /// which bypasses the guards but still counts as a request.
    pub fn begin_cooldown(&mut self, now: Instant) {
        self.cooldown_until = Some(now + self.cooldown);
    }

    /// Record that a bubble was created for `sentence`
    pub fn mark_answered(&mut self, sentence: &str) {
        self.answered.insert(sentence.to_string());
        self.last_answered = Some(sentence.to_string());
    }

    /// Record inserted suggestion text so the same content is not
    /// immediately re-suggested. Does not touch the last-answered marker.
    pub fn record_inserted(&mut self, text: &str) {
        self.answered.insert(text.to_string());
    }

    /// Drop answered sentences no longer present in the document.
    ///
    /// Returns the removed sentences; the caller prunes any bubbles anchored
    /// to them. Clears the last-answered marker when its sentence vanished,
    /// which lets the same sentence trigger again if retyped.
    pub fn reconcile(&mut self, doc: &str) -> Vec<String> {
        let removed: Vec<String> = self
            .answered
            .iter()
            .filter(|sentence| !doc.contains(sentence.as_str()))
            .cloned()
            .collect();
        for sentence in &removed {
            self.answered.remove(sentence);
        }
        if let Some(last) = &self.last_answered
            && !doc.contains(last.as_str())
        {
            self.last_answered = None;
        }
        removed
    }

    pub fn last_answered(&self) -> Option<&str> {
        self.last_answered.as_deref()
    }

    pub fn is_answered(&self, sentence: &str) -> bool {
        self.answered.contains(sentence)
    }

    fn try_fire(
        &mut self,
        doc: &str,
        anchors: &[String],
        now: Instant,
        kind: FireKind,
    ) -> Option<TriggerFire> {
        if let Some(until) = self.cooldown_until
            && now < until
        {
            return None;
        }

        let sentence = last_sentence(doc);
        if sentence.is_empty() {
            return None;
        }
        if self.answered.contains(&sentence) {
            return None;
        }
        if anchors.iter().any(|anchor| anchor == &sentence) {
            return None;
        }
        // Pause fires need a signal; pure silence never fires
        if kind == FireKind::Pause && !self.has_signal(doc) {
            return None;
        }

        self.cooldown_until = Some(now + self.cooldown);
        Some(TriggerFire { sentence, kind })
    }

    /// Terminal punctuation, or a configured keyword in the current paragraph
    fn has_signal(&self, doc: &str) -> bool {
        if ends_with_terminal_punctuation(doc) {
            return true;
        }
        let paragraph = structured_context(doc).current_paragraph.to_lowercase();
        self.keywords.iter().any(|keyword| paragraph.contains(keyword))
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
