// File: crates/bp-core/src/theme.rs
// Summary: Light/Dark palettes for highlight colors, pulse line, and night shading.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Renderer-agnostic RGBA color; serializes as `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        match h.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(h.get(i..i + 1)?, 16).ok().map(|v| v * 17);
                Some(Self::from_argb(255, nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Self::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color '{s}'")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub bp_label: Rgba,
    pub morning: Rgba,
    pub evening: Rgba,
    pub neutral: Rgba,
    pub pulse_line: Rgba,
    pub night_shade: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 255, 255, 255),
            grid: Rgba::from_argb(128, 0xcc, 0xcc, 0xcc),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            bp_label: Rgba::from_argb(255, 0x00, 0x80, 0x00), // green, as the mmHg axis
            morning: Rgba::from_argb(255, 0xff, 0xd5, 0x2b),
            evening: Rgba::from_argb(255, 0x98, 0x9d, 0xfc),
            neutral: Rgba::from_argb(255, 0xb0, 0xb0, 0xb0),
            pulse_line: Rgba::from_argb(102, 0xff, 0x00, 0x00),
            night_shade: Rgba::from_argb(77, 0xd3, 0xd3, 0xd3), // lightgrey @ 0.3
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            bp_label: Rgba::from_argb(255, 0x66, 0xd1, 0x7a),
            morning: Rgba::from_argb(255, 0xff, 0xd5, 0x2b),
            evening: Rgba::from_argb(255, 0x98, 0x9d, 0xfc),
            neutral: Rgba::from_argb(255, 0x70, 0x70, 0x78),
            pulse_line: Rgba::from_argb(140, 0xff, 0x5a, 0x5a),
            night_shade: Rgba::from_argb(40, 0x90, 0x90, 0xa0),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
