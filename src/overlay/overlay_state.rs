//! Overlay visibility and keyboard cursor

use std::time::{Duration, Instant};

use super::deferred_close::DeferredClose;

/// Suggestion overlay state
///
/// Closing the overlay keeps the last list around so that ArrowDown can
/// reopen it without retyping; only clearing the input empties the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionOverlay {
    visible: bool,
    suggestions: Vec<String>,
    /// Highlighted suggestion (None = nothing highlighted)
    active: Option<usize>,
    pending_close: DeferredClose,
}

impl SuggestionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with a freshly computed list and no highlight
    pub fn open_with(&mut self, suggestions: Vec<String>) {
        self.pending_close.cancel();
        self.suggestions = suggestions;
        self.active = None;
        self.visible = true;
    }

    /// Hide the overlay, keeping the list and highlight
    pub fn close(&mut self) {
        self.pending_close.cancel();
        self.visible = false;
    }

    /// Hide the overlay and forget the list
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The highlighted suggestion, if the highlight is on a valid entry
    pub fn active_suggestion(&self) -> Option<&str> {
        self.active.and_then(|index| self.suggestion_at(index))
    }

    pub fn suggestion_at(&self, index: usize) -> Option<&str> {
        self.suggestions.get(index).map(String::as_str)
    }

    /// Move the highlight down, wrapping to the top (ArrowDown).
    ///
    /// Always forces the overlay open, even when the list is empty.
    pub fn navigate_next(&mut self) {
        self.pending_close.cancel();
        self.visible = true;

        let count = self.suggestions.len();
        if count == 0 {
            self.active = None;
            return;
        }

        self.active = Some(match self.active {
            Some(current) => (current + 1) % count,
            None => 0,
        });
    }

    /// Move the highlight up, wrapping to the bottom (ArrowUp)
    pub fn navigate_previous(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            return;
        }

        self.active = Some(match self.active {
            Some(0) | None => count - 1,
            Some(current) => current - 1,
        });
    }

    /// The input lost focus: close after `delay` unless something reopens
    /// the overlay first
    pub fn blur(&mut self, now: Instant, delay: Duration) {
        if self.visible {
            self.pending_close.schedule(now, delay);
        }
    }

    /// The input regained focus; a pending close no longer applies
    pub fn focus(&mut self) {
        self.pending_close.cancel();
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_pending()
    }

    /// Fire the deferred close if due. Returns true if the overlay closed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending_close.fire_if_due(now) {
            log::debug!("Closing suggestion overlay after focus loss");
            self.visible = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "overlay_state_tests.rs"]
mod overlay_state_tests;
