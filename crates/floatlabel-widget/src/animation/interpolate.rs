//! Interpolation of animatable values.
//!
//! Colors interpolate per ARGB channel in integer `[0, 255]` space, each
//! channel linearly and independently, rounded to the nearest integer.

use floatlabel_config::Color;

/// Trait for types that can be interpolated between two values.
///
/// `t = 0.0` yields `self`, `t = 1.0` yields `to`.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

#[inline]
fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    lerp_f32(from as f32, to as f32, t).round().clamp(0.0, 255.0) as u8
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

impl Interpolate for Color {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Color::from_argb(
            lerp_channel(self.alpha(), to.alpha(), t),
            lerp_channel(self.red(), to.red(), t),
            lerp_channel(self.green(), to.green(), t),
            lerp_channel(self.blue(), to.blue(), t),
        )
    }
}
