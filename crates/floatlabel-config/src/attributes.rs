//! Raw style attributes as a host delivers them, and their resolution into a
//! [`FloatLabelConfig`].
//!
//! Every attribute is optional. Missing or malformed values fall back to the
//! builder defaults and are reported through `log::warn!`; resolution never
//! fails.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::FloatLabelConfig;
use crate::style::{FitWidth, Gravity, InputConstraints};
use crate::timing::AnimationTiming;

/// Display properties needed to turn pixel sizes into scaled points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMetrics {
    /// Pixels per scaled point (density × user font scale).
    pub scaled_density: f32,
    /// Width of the display in pixels, when known.
    pub screen_width_px: Option<f32>,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            scaled_density: 1.0,
            screen_width_px: None,
        }
    }
}

impl DisplayMetrics {
    /// Scaled density, or 1.0 when the reported value is unusable.
    pub fn effective_scaled_density(&self) -> f32 {
        if self.scaled_density.is_finite() && self.scaled_density > 0.0 {
            self.scaled_density
        } else {
            log::warn!(
                "ignoring invalid scaled density {}, using 1.0",
                self.scaled_density
            );
            1.0
        }
    }

    /// Convert a pixel size into scaled points.
    pub fn px_to_sp(&self, px: f32) -> f32 {
        px / self.effective_scaled_density()
    }
}

/// Style attributes for a float label, all optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleAttributes {
    pub hint: Option<String>,
    pub text: Option<String>,
    pub input_type: Option<u32>,
    pub ime_options: Option<u32>,
    /// `start`/`left`, `center`, `end`/`right`.
    pub gravity: Option<String>,
    /// Text size already in scaled points; used as is.
    pub text_size_sp: Option<f32>,
    /// Text size in raw pixels; divided by the scaled density.
    pub text_size_px: Option<f32>,
    /// CSS color for the label while the field has focus.
    pub text_color_hint_focused: Option<String>,
    /// CSS color for the label and hint while the field is unfocused.
    pub text_color_hint_unfocused: Option<String>,
    /// `none`, `full`, `half` (or `0`, `1`, `2`).
    pub fit_screen_width: Option<String>,
}

impl StyleAttributes {
    /// Resolve into a complete configuration.
    ///
    /// Explicit `text_size_sp` wins over `text_size_px`. Pixel sizes are
    /// converted exactly once using `metrics`.
    pub fn resolve(&self, metrics: &DisplayMetrics, timing: AnimationTiming) -> FloatLabelConfig {
        let mut builder = FloatLabelConfig::builder()
            .timing(timing)
            .input_constraints(InputConstraints {
                input_type: self.input_type,
                ime_options: self.ime_options,
            });

        if let Some(hint) = &self.hint {
            builder = builder.hint(hint.clone());
        }
        if let Some(text) = &self.text {
            builder = builder.initial_text(text.clone());
        }

        if let Some(raw) = &self.gravity {
            match raw.parse::<Gravity>() {
                Ok(gravity) => builder = builder.gravity(gravity),
                Err(e) => log::warn!("{e}; using default gravity"),
            }
        }

        if let Some(raw) = &self.fit_screen_width {
            match raw.parse::<FitWidth>() {
                Ok(fit) => builder = builder.fit_width(fit),
                Err(e) => log::warn!("{e}; not fitting to screen width"),
            }
        }

        match (self.text_size_sp, self.text_size_px) {
            (Some(sp), _) if valid_size(sp) => builder = builder.text_size_sp(sp),
            (_, Some(px)) if valid_size(px) => builder = builder.text_size_sp(metrics.px_to_sp(px)),
            (None, None) => {}
            (sp, px) => log::warn!("ignoring invalid text size (sp={sp:?}, px={px:?})"),
        }

        if let Some(color) = parse_color_attr(self.text_color_hint_focused.as_deref()) {
            builder = builder.focused_color(color);
        }
        if let Some(color) = parse_color_attr(self.text_color_hint_unfocused.as_deref()) {
            builder = builder.unfocused_color(color);
        }

        builder.build()
    }
}

fn valid_size(size: f32) -> bool {
    size.is_finite() && size > 0.0
}

fn parse_color_attr(raw: Option<&str>) -> Option<Color> {
    let raw = raw?;
    match Color::parse(raw) {
        Ok(color) => Some(color),
        Err(e) => {
            log::warn!("{e}; using default color");
            None
        }
    }
}
