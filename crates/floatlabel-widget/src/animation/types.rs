//! Core animation types shared by the visibility and focus state machines.

use floatlabel_config::Color;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::focus::FocusDirection;

/// Unique identifier for an animator instance.
///
/// Two handles with the same id refer to the same memoized animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// Generate a new unique animation ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonically increasing id of an animation run.
///
/// Every start allocates a fresh generation; frames tagged with an older
/// generation are stale and must not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Current state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Built but never started, or superseded by a newer run.
    #[default]
    Idle,
    /// Accepting frames for its current generation.
    Running,
    /// Reached its end value.
    Finished,
}

/// Visibility of the floating label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    /// Invisible but still occupying its layout slot.
    #[default]
    Hidden,
}

/// Slide animations the label surface is asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideAnimation {
    /// Entrance: the label rises from the bottom of its slot.
    SlideFromBottom,
    /// Exit: the label sinks to the bottom of its slot.
    SlideToBottom,
}

/// A color run the host is asked to drive with frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRun {
    pub generation: Generation,
    pub animator: AnimationId,
    pub direction: FocusDirection,
    pub duration_ms: u32,
}

impl AnimationRun {
    /// Frame for this run at `elapsed_ms` after its start.
    pub fn frame(&self, elapsed_ms: f32) -> AnimationFrame {
        AnimationFrame {
            generation: self.generation,
            elapsed_ms,
        }
    }
}

/// One tick delivered by the host's frame scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub generation: Generation,
    /// Milliseconds since the run started.
    pub elapsed_ms: f32,
}

/// Result of delivering a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Intermediate color applied; more frames are wanted.
    Tick(Color),
    /// Final color applied; the run is complete.
    Finished(Color),
    /// The frame belongs to a superseded or completed run; nothing applied.
    Stale,
}

impl FrameOutcome {
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Tick(c) | Self::Finished(c) => Some(*c),
            Self::Stale => None,
        }
    }

    /// Whether the host should keep delivering frames for this run.
    pub fn wants_more(&self) -> bool {
        matches!(self, Self::Tick(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_id_uniqueness() {
        let id1 = AnimationId::new();
        let id2 = AnimationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_generation_ordering() {
        let g = Generation::default();
        assert_eq!(g, Generation(0));
        assert!(g.next() > g);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(AnimationState::default(), AnimationState::Idle);
        assert_eq!(Visibility::default(), Visibility::Hidden);
    }

    #[test]
    fn test_frame_outcome_helpers() {
        let c = Color::rgb(1, 2, 3);
        assert!(FrameOutcome::Tick(c).wants_more());
        assert!(!FrameOutcome::Finished(c).wants_more());
        assert_eq!(FrameOutcome::Finished(c).color(), Some(c));
        assert_eq!(FrameOutcome::Stale.color(), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SlideAnimation::SlideFromBottom).unwrap();
        assert_eq!(json, "\"slide_from_bottom\"");
        let v: Visibility = serde_json::from_str("\"visible\"").unwrap();
        assert_eq!(v, Visibility::Visible);
    }
}
