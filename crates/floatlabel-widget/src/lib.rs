//! Floating label text input.
//!
//! A text field whose hint floats above it as a label once text is entered,
//! with the label color animating between an unfocused and a focused color.
//! Rendering is left to the host through the traits in [`host`].

pub mod animation;
pub mod control;
pub mod focus;
pub mod host;
pub mod recording;
pub mod visibility;

pub use animation::{
    AnimationFrame, AnimationId, AnimationRun, AnimationState, ColorAnimator, FrameOutcome,
    Generation, Interpolate, SlideAnimation, Visibility,
};
pub use control::FloatLabel;
pub use floatlabel_config::{Color, FloatLabelConfig};
pub use focus::{FocusAnimationState, FocusColorAnimator, FocusDirection};
pub use host::{EditableSurface, FrameScheduler, HostContext, LabelSurface};
pub use visibility::{LabelVisibilityController, TransitionCause, VisibilityChange, next_visibility};
