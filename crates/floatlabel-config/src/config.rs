//! The resolved, immutable configuration a float label control is built from.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::style::{FitWidth, Gravity, InputConstraints};
use crate::timing::AnimationTiming;

pub const DEFAULT_FOCUSED_COLOR: Color = Color::BLACK;
pub const DEFAULT_UNFOCUSED_COLOR: Color = Color::DARK_GRAY;
/// Medium text appearance size.
pub const DEFAULT_TEXT_SIZE_SP: f32 = 18.0;
/// The floating label is drawn this many times smaller than the field text.
pub const LABEL_TEXT_SCALE: f32 = 1.3;

/// Configuration bundle consumed by the control at setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatLabelConfig {
    pub hint_text: String,
    pub initial_text: Option<String>,
    pub focused_color: Color,
    pub unfocused_color: Color,
    /// Text size of the editable field in scaled points.
    pub text_size_sp: f32,
    pub gravity: Gravity,
    pub fit_width: FitWidth,
    pub input_constraints: InputConstraints,
    pub timing: AnimationTiming,
}

impl Default for FloatLabelConfig {
    fn default() -> Self {
        Self {
            hint_text: String::new(),
            initial_text: None,
            focused_color: DEFAULT_FOCUSED_COLOR,
            unfocused_color: DEFAULT_UNFOCUSED_COLOR,
            text_size_sp: DEFAULT_TEXT_SIZE_SP,
            gravity: Gravity::default(),
            fit_width: FitWidth::default(),
            input_constraints: InputConstraints::default(),
            timing: AnimationTiming::default(),
        }
    }
}

impl FloatLabelConfig {
    pub fn builder() -> FloatLabelConfigBuilder {
        FloatLabelConfigBuilder::default()
    }

    /// Text size for the floating label in scaled points.
    pub fn label_text_size_sp(&self) -> f32 {
        self.text_size_sp / LABEL_TEXT_SCALE
    }
}

/// Builder for [`FloatLabelConfig`]; unset fields keep the documented defaults.
#[derive(Debug, Clone, Default)]
pub struct FloatLabelConfigBuilder {
    config: FloatLabelConfig,
}

impl FloatLabelConfigBuilder {
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.config.hint_text = hint.into();
        self
    }

    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.config.initial_text = Some(text.into());
        self
    }

    pub fn focused_color(mut self, color: Color) -> Self {
        self.config.focused_color = color;
        self
    }

    pub fn unfocused_color(mut self, color: Color) -> Self {
        self.config.unfocused_color = color;
        self
    }

    pub fn text_size_sp(mut self, size: f32) -> Self {
        self.config.text_size_sp = size;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.config.gravity = gravity;
        self
    }

    pub fn fit_width(mut self, fit: FitWidth) -> Self {
        self.config.fit_width = fit;
        self
    }

    pub fn input_constraints(mut self, constraints: InputConstraints) -> Self {
        self.config.input_constraints = constraints;
        self
    }

    pub fn timing(mut self, timing: AnimationTiming) -> Self {
        self.config.timing = timing;
        self
    }

    pub fn build(self) -> FloatLabelConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_only_what_is_set() {
        let cfg = FloatLabelConfig::builder()
            .hint("Password")
            .focused_color(Color::rgb(0, 0, 255))
            .build();
        assert_eq!(cfg.hint_text, "Password");
        assert_eq!(cfg.focused_color, Color::rgb(0, 0, 255));
        assert_eq!(cfg.unfocused_color, DEFAULT_UNFOCUSED_COLOR);
        assert_eq!(cfg.timing.focus_duration_ms, 700);
    }

    #[test]
    fn test_label_text_size() {
        let cfg = FloatLabelConfig::builder().text_size_sp(26.0).build();
        assert!((cfg.label_text_size_sp() - 20.0).abs() < 1e-4);
    }
}
