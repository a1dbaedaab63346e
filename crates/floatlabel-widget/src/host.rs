//! Host framework seams.
//!
//! The control never renders anything itself. It drives two presentational
//! surfaces it owns exclusively (the editable field and the floating label)
//! and asks the host's frame scheduler for animation ticks.

use floatlabel_config::{Color, DisplayMetrics, Gravity, InputConstraints};

use crate::animation::{AnimationRun, SlideAnimation, Visibility};

/// The editable text field.
pub trait EditableSurface {
    fn set_hint(&mut self, hint: &str);
    fn set_hint_color(&mut self, color: Color);
    fn set_text(&mut self, text: &str);
    /// Current text; `None` when the host has no text value at all.
    fn text(&self) -> Option<String>;
    fn set_error(&mut self, message: Option<&str>);
    fn set_text_size(&mut self, size_sp: f32);
    /// Force the field width; `None` hands it back to the host layout.
    fn set_width(&mut self, width_px: Option<u32>);
    fn set_input_constraints(&mut self, constraints: InputConstraints);

    /// Left padding, mirrored onto the label so both texts line up.
    fn padding_left(&self) -> f32 {
        0.0
    }
}

/// The floating label drawn above the field.
pub trait LabelSurface {
    fn set_text(&mut self, text: &str);
    fn set_text_color(&mut self, color: Color);
    fn set_text_size(&mut self, size_sp: f32);
    fn set_gravity(&mut self, gravity: Gravity);
    fn set_padding_left(&mut self, padding: f32);
    fn set_visibility(&mut self, visibility: Visibility);
    fn play_animation(&mut self, animation: SlideAnimation, duration_ms: u32);
}

/// Per-frame callback scheduler of the host.
///
/// After `request_frames`, the host delivers `run.frame(elapsed_ms)` to
/// [`FloatLabel::on_animation_frame`](crate::FloatLabel::on_animation_frame)
/// on its UI thread until the outcome stops asking for more.
pub trait FrameScheduler {
    fn request_frames(&mut self, run: AnimationRun);
}

/// Ambient host state needed at setup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostContext {
    pub metrics: DisplayMetrics,
}

impl HostContext {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self { metrics }
    }
}
