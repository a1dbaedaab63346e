//! Float label configuration
//!
//! This crate holds everything the float label control consumes at setup:
//! colors, gravity, width fitting, text size, input constraints and animation
//! timing. Settings can be loaded from `floatlabel.toml` and overridden with
//! `FLOATLABEL_*` environment variables.

pub mod attributes;
pub mod color;
pub mod config;
pub mod error;
pub mod style;
pub mod timing;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use attributes::{DisplayMetrics, StyleAttributes};
pub use color::Color;
pub use config::{
    DEFAULT_FOCUSED_COLOR, DEFAULT_TEXT_SIZE_SP, DEFAULT_UNFOCUSED_COLOR, FloatLabelConfig,
    FloatLabelConfigBuilder, LABEL_TEXT_SCALE,
};
pub use error::{ConfigError, Result};
pub use style::{FitWidth, Gravity, InputConstraints};
pub use timing::{AnimationTiming, Easing};

/// Default settings file name, looked up in the current directory.
pub const SETTINGS_FILE: &str = "floatlabel.toml";

/// Top-level settings file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatLabelSettings {
    /// Style attributes of the control.
    pub float_label: StyleAttributes,
    /// Display properties used for size conversion and width fitting.
    pub display: DisplayMetrics,
    /// Animation durations and curves.
    pub animation: AnimationTiming,
}

impl FloatLabelSettings {
    /// Load settings from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `floatlabel.toml` from the current directory, or defaults when it
    /// is missing or unreadable.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(SETTINGS_FILE) {
            Ok(settings) => settings,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("{e}; falling back to default settings");
                Self::default()
            }
        }
    }

    /// Apply `FLOATLABEL_*` environment overrides on top of the loaded values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with(&mut self, var: impl Fn(&str) -> Option<String>) {
        let attrs = &mut self.float_label;
        if let Some(hint) = var("FLOATLABEL_HINT") {
            attrs.hint = Some(hint);
        }
        if let Some(text) = var("FLOATLABEL_TEXT") {
            attrs.text = Some(text);
        }
        if let Some(color) = var("FLOATLABEL_FOCUSED_COLOR") {
            attrs.text_color_hint_focused = Some(color);
        }
        if let Some(color) = var("FLOATLABEL_UNFOCUSED_COLOR") {
            attrs.text_color_hint_unfocused = Some(color);
        }
        if let Some(gravity) = var("FLOATLABEL_GRAVITY") {
            attrs.gravity = Some(gravity);
        }
        if let Some(fit) = var("FLOATLABEL_FIT_WIDTH") {
            attrs.fit_screen_width = Some(fit);
        }
        if let Some(size) = var("FLOATLABEL_TEXT_SIZE").and_then(|v| v.parse::<f32>().ok()) {
            attrs.text_size_sp = Some(size);
        }
        if let Some(size) = var("FLOATLABEL_TEXT_SIZE_PX").and_then(|v| v.parse::<f32>().ok()) {
            attrs.text_size_px = Some(size);
        }
        if let Some(code) = var("FLOATLABEL_INPUT_TYPE").and_then(|v| v.parse::<u32>().ok()) {
            attrs.input_type = Some(code);
        }
        if let Some(code) = var("FLOATLABEL_IME_OPTIONS").and_then(|v| v.parse::<u32>().ok()) {
            attrs.ime_options = Some(code);
        }

        if let Some(density) = var("FLOATLABEL_SCALED_DENSITY").and_then(|v| v.parse::<f32>().ok()) {
            self.display.scaled_density = density;
        }
        if let Some(width) = var("FLOATLABEL_SCREEN_WIDTH").and_then(|v| v.parse::<f32>().ok()) {
            self.display.screen_width_px = Some(width);
        }

        if let Some(ms) = var("FLOATLABEL_FOCUS_DURATION_MS").and_then(|v| v.parse::<u32>().ok()) {
            self.animation.focus_duration_ms = ms;
        }
        if let Some(ms) = var("FLOATLABEL_SLIDE_DURATION_MS").and_then(|v| v.parse::<u32>().ok()) {
            self.animation.slide_duration_ms = ms;
        }
        if let Some(easing) = var("FLOATLABEL_FOCUS_EASING") {
            match easing.parse::<Easing>() {
                Ok(easing) => self.animation.focus_easing = easing,
                Err(e) => log::warn!("{e}; keeping {:?}", self.animation.focus_easing),
            }
        }
    }

    /// Load settings file, then apply environment overrides.
    pub fn load() -> Self {
        let mut settings = Self::load_or_default();
        settings.merge_with_env();
        settings
    }

    /// Resolve the style attributes into the control configuration.
    pub fn resolve(&self) -> FloatLabelConfig {
        self.float_label.resolve(&self.display, self.animation)
    }
}
