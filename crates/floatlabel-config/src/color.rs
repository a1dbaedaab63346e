//! Packed ARGB color values used for the hint and label text.

use palette::{FromColor, LinSrgba, Srgba};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// A non-premultiplied sRGB color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Platform "darker gray" (`#AAAAAA`).
    pub const DARK_GRAY: Color = Color(0xFFAA_AAAA);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[a, r, g, b]` order.
    #[inline]
    pub const fn to_argb(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    /// Parse any CSS color syntax (`#rgb`, `#rrggbbaa`, `rgb(...)`, `hsl(...)`).
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = csscolorparser::parse(value.trim()).map_err(|e| ConfigError::InvalidColor {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::from_argb(a, r, g, b))
    }

    /// CSS hex notation; alpha is omitted when the color is opaque.
    pub fn to_css_hex(self) -> String {
        if self.alpha() == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red(),
                self.green(),
                self.blue(),
                self.alpha()
            )
        }
    }

    /// Linear premultiplied RGBA floats, the format GPU renderers consume.
    pub fn to_lin_premul(self) -> [f32; 4] {
        let s = Srgba::new(
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            self.alpha() as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        [
            lin.red * lin.alpha,
            lin.green * lin.alpha,
            lin.blue * lin.alpha,
            lin.alpha,
        ]
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}
