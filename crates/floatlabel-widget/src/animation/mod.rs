//! Animation primitives for the float label.
//!
//! This module provides:
//! - **Interpolation**: per-channel ARGB interpolation for text colors
//! - **Color animators**: restartable, generation-tagged color runs
//! - **Slide animations**: the entrance/exit requests for the floating label
//!
//! # Architecture
//!
//! ```text
//! FocusColorAnimator
//!   ├── ColorAnimator (unfocused → focused), built on first focus gain
//!   └── ColorAnimator (focused → unfocused), built on first focus loss
//!
//! Host frame scheduler
//!   └── delivers AnimationFrame { generation, elapsed_ms } back to the control
//! ```

pub mod color_animator;
pub mod interpolate;
pub mod types;

pub use color_animator::ColorAnimator;
pub use floatlabel_config::Easing;
pub use interpolate::Interpolate;
pub use types::{
    AnimationFrame, AnimationId, AnimationRun, AnimationState, FrameOutcome, Generation,
    SlideAnimation, Visibility,
};
