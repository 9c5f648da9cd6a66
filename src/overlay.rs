//! Suggestion overlay shown under the symptom input
//!
//! Tracks the visible suggestion list, the keyboard cursor over it, and the
//! deferred close scheduled when the input loses focus.

mod deferred_close;
mod overlay_render;
mod overlay_state;

pub use deferred_close::{DEFAULT_BLUR_CLOSE_DELAY, DeferredClose};
pub use overlay_render::{overlay_area, render_overlay};
pub use overlay_state::SuggestionOverlay;
