//! ARGB color values.
//!
//! Colors are packed `0xAARRGGBB` words, parsed from `#RRGGBB`,
//! `#AARRGGBB`, or a small table of standard names.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::StyleError;

/// A packed 32-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Build a color from its four channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
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

    /// Scale the alpha channel by `factor` (0.0 to 1.0), keeping RGB.
    ///
    /// The closer `factor` is to zero, the more transparent the result.
    pub fn adjust_alpha(self, factor: f32) -> Self {
        let alpha = (self.alpha() as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self::from_argb(alpha, self.red(), self.green(), self.blue())
    }

    /// Parse `#RRGGBB`, `#AARRGGBB`, or a standard color name.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor(text.to_string());

        if let Some(hex) = text.strip_prefix('#') {
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                6 => Ok(Self(value | 0xFF00_0000)),
                8 => Ok(Self(value)),
                _ => Err(invalid()),
            };
        }

        named_color(&text.to_ascii_lowercase()).ok_or_else(invalid)
    }

    /// Format as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }

    /// Convert to an egui color (unmultiplied alpha).
    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Convert from an egui color.
    pub fn from_color32(color: egui::Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self::from_argb(a, r, g, b)
    }

    /// Convert to a tiny-skia color.
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Argb {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn named_color(name: &str) -> Option<Argb> {
    let color = match name {
        "black" => 0xFF00_0000,
        "darkgray" | "darkgrey" => 0xFF44_4444,
        "gray" | "grey" => 0xFF88_8888,
        "lightgray" | "lightgrey" => 0xFFCC_CCCC,
        "white" => 0xFFFF_FFFF,
        "red" => 0xFFFF_0000,
        "green" => 0xFF00_FF00,
        "blue" => 0xFF00_00FF,
        "yellow" => 0xFFFF_FF00,
        "cyan" | "aqua" => 0xFF00_FFFF,
        "magenta" | "fuchsia" => 0xFFFF_00FF,
        "lime" => 0xFF00_FF00,
        "maroon" => 0xFF80_0000,
        "navy" => 0xFF00_0080,
        "olive" => 0xFF80_8000,
        "purple" => 0xFF80_0080,
        "silver" => 0xFFC0_C0C0,
        "teal" => 0xFF00_8080,
        "transparent" => 0x0000_0000,
        _ => return None,
    };
    Some(Argb(color))
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
