//! Floating label visibility state machine.
//!
//! The label is shown while the field holds text and hidden while it is
//! empty. Only the length crossing zero matters; edits that keep the field
//! non-empty never produce a transition.

use crate::animation::{SlideAnimation, Visibility};

/// What triggered a visibility re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCause {
    /// Hint or configuration (re)applied; changes are never animated.
    Setup,
    /// The user or the program changed the text.
    ContentChange,
}

/// A visibility transition and the slide animation to play with it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub state: Visibility,
    pub animation: Option<SlideAnimation>,
}

/// Decide the transition for a new text length.
///
/// Returns `None` when `current` already matches the length.
pub fn next_visibility(
    current: Visibility,
    text_len: usize,
    cause: TransitionCause,
) -> Option<VisibilityChange> {
    let (state, animation) = match (current, text_len > 0) {
        (Visibility::Hidden, true) => (Visibility::Visible, SlideAnimation::SlideFromBottom),
        (Visibility::Visible, false) => (Visibility::Hidden, SlideAnimation::SlideToBottom),
        _ => return None,
    };
    let animation = match cause {
        TransitionCause::ContentChange => Some(animation),
        TransitionCause::Setup => None,
    };
    Some(VisibilityChange { state, animation })
}

/// Owns the label's visibility state and applies [`next_visibility`].
#[derive(Debug, Clone, Default)]
pub struct LabelVisibilityController {
    state: Visibility,
}

impl LabelVisibilityController {
    /// Starts hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn on_text_changed(&mut self, text_len: usize) -> Option<VisibilityChange> {
        self.apply(text_len, TransitionCause::ContentChange)
    }

    /// Re-derive visibility after setup without animating.
    pub fn on_setup(&mut self, text_len: usize) -> Option<VisibilityChange> {
        self.apply(text_len, TransitionCause::Setup)
    }

    fn apply(&mut self, text_len: usize, cause: TransitionCause) -> Option<VisibilityChange> {
        let change = next_visibility(self.state, text_len, cause)?;
        self.state = change.state;
        Some(change)
    }
}
