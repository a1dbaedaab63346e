//! In-memory surfaces that record every request the control makes.
//!
//! Used by headless hosts and tests to observe the control without a UI
//! toolkit.

use floatlabel_config::{Color, Gravity, InputConstraints};

use crate::animation::{AnimationRun, SlideAnimation, Visibility};
use crate::host::{EditableSurface, FrameScheduler, LabelSurface};

#[derive(Debug, Clone, Default)]
pub struct RecordingEditable {
    pub hint: String,
    pub hint_color: Option<Color>,
    pub text: Option<String>,
    pub error: Option<String>,
    pub text_size_sp: Option<f32>,
    pub width_px: Option<u32>,
    pub constraints: InputConstraints,
    pub padding_left: f32,
}

impl RecordingEditable {
    pub fn with_padding(padding_left: f32) -> Self {
        Self {
            padding_left,
            ..Default::default()
        }
    }
}

impl EditableSurface for RecordingEditable {
    fn set_hint(&mut self, hint: &str) {
        self.hint = hint.to_string();
    }

    fn set_hint_color(&mut self, color: Color) {
        self.hint_color = Some(color);
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }

    fn set_text_size(&mut self, size_sp: f32) {
        self.text_size_sp = Some(size_sp);
    }

    fn set_width(&mut self, width_px: Option<u32>) {
        self.width_px = width_px;
    }

    fn set_input_constraints(&mut self, constraints: InputConstraints) {
        self.constraints = constraints;
    }

    fn padding_left(&self) -> f32 {
        self.padding_left
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingLabel {
    pub text: String,
    pub text_size_sp: Option<f32>,
    pub gravity: Option<Gravity>,
    pub padding_left: Option<f32>,
    pub visibility: Option<Visibility>,
    /// Every color applied, oldest first.
    pub colors: Vec<Color>,
    /// Every slide animation requested, oldest first.
    pub animations: Vec<(SlideAnimation, u32)>,
}

impl RecordingLabel {
    pub fn text_color(&self) -> Option<Color> {
        self.colors.last().copied()
    }
}

impl LabelSurface for RecordingLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_text_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    fn set_text_size(&mut self, size_sp: f32) {
        self.text_size_sp = Some(size_sp);
    }

    fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = Some(gravity);
    }

    fn set_padding_left(&mut self, padding: f32) {
        self.padding_left = Some(padding);
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
    }

    fn play_animation(&mut self, animation: SlideAnimation, duration_ms: u32) {
        self.animations.push((animation, duration_ms));
    }
}

/// Scheduler that queues runs for the caller to drive by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pub runs: Vec<AnimationRun>,
}

impl ManualScheduler {
    /// The most recently requested run.
    pub fn latest(&self) -> Option<AnimationRun> {
        self.runs.last().copied()
    }

    pub fn take_runs(&mut self) -> Vec<AnimationRun> {
        std::mem::take(&mut self.runs)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frames(&mut self, run: AnimationRun) {
        self.runs.push(run);
    }
}
