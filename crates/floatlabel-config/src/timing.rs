//! Animation timing: durations and easing curves for the label animations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Duration of the focus color animation, in milliseconds.
pub const DEFAULT_FOCUS_DURATION_MS: u32 = 700;
/// Duration of the label slide in/out animations, in milliseconds.
pub const DEFAULT_SLIDE_DURATION_MS: u32 = 300;

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Cosine curve: slow at both ends. Matches the platform animator default.
    AccelerateDecelerate,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    EaseOut,
    /// Quadratic in, quadratic out.
    EaseInOut,
}

impl Easing {
    /// Map progress in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Input outside the range is clamped first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

impl FromStr for Easing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Self::Linear),
            "accelerate_decelerate" => Ok(Self::AccelerateDecelerate),
            "ease_in" => Ok(Self::EaseIn),
            "ease_out" => Ok(Self::EaseOut),
            "ease_in_out" => Ok(Self::EaseInOut),
            _ => Err(ConfigError::InvalidValue {
                attribute: "focus_easing",
                value: s.to_string(),
            }),
        }
    }
}

/// Durations and curves for the control's animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    pub focus_duration_ms: u32,
    pub slide_duration_ms: u32,
    pub focus_easing: Easing,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            focus_duration_ms: DEFAULT_FOCUS_DURATION_MS,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            focus_easing: Easing::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::AccelerateDecelerate,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.evaluate(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_symmetric_curves_pass_through_midpoint() {
        assert!((Easing::Linear.evaluate(0.5) - 0.5).abs() < 1e-5);
        assert!((Easing::AccelerateDecelerate.evaluate(0.5) - 0.5).abs() < 1e-5);
        assert!((Easing::EaseInOut.evaluate(0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseIn.evaluate(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_easing_from_str() {
        assert_eq!("linear".parse::<Easing>().unwrap(), Easing::Linear);
        assert_eq!(
            "Accelerate-Decelerate".parse::<Easing>().unwrap(),
            Easing::AccelerateDecelerate
        );
        assert_eq!(" ease_in_out ".parse::<Easing>().unwrap(), Easing::EaseInOut);
        assert!("bounce".parse::<Easing>().is_err());
    }

    #[test]
    fn test_default_timing() {
        let timing = AnimationTiming::default();
        assert_eq!(timing.focus_duration_ms, 700);
        assert_eq!(timing.focus_easing, Easing::Linear);
    }
}
