//! Layout-related attribute types: gravity, width fitting, and input constraints.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Horizontal alignment of the floating label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    #[default]
    Start,
    Center,
    End,
}

impl FromStr for Gravity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(Self::Start),
            "center" | "center_horizontal" => Ok(Self::Center),
            "end" | "right" => Ok(Self::End),
            _ => Err(ConfigError::InvalidValue {
                attribute: "gravity",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether the editable field is stretched to a share of the display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitWidth {
    /// Keep the width the host layout assigns.
    #[default]
    None,
    /// Full screen width.
    Full,
    /// Half of the screen width.
    Half,
}

impl FitWidth {
    /// Width in pixels to force on the editable field, if any.
    pub fn width_for(self, screen_width_px: f32) -> Option<u32> {
        match self {
            Self::None => None,
            Self::Full => Some(screen_width_px.max(0.0).round() as u32),
            Self::Half => Some((screen_width_px.max(0.0) * 0.5).round() as u32),
        }
    }
}

impl FromStr for FitWidth {
    type Err = ConfigError;

    /// Accepts names as well as the legacy integer codes `0`, `1`, `2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(Self::None),
            "full" | "full_screen_width" | "1" => Ok(Self::Full),
            "half" | "half_screen_width" | "2" => Ok(Self::Half),
            _ => Err(ConfigError::InvalidValue {
                attribute: "fit_screen_width",
                value: s.to_string(),
            }),
        }
    }
}

/// Input type and IME flags, forwarded to the editable surface untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConstraints {
    pub input_type: Option<u32>,
    pub ime_options: Option<u32>,
}
