use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Parses from named colors (`"seagreen"`, single-letter shorthands such as
/// `"c"`) and from `#rrggbb` / `#rrggbbaa` hex strings. Serializes as hex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xFFFFFF),
    ("grey", 0x808080),
    ("gray", 0x808080),
    ("darkgrey", 0xA9A9A9),
    ("darkgray", 0xA9A9A9),
    ("lightgrey", 0xD3D3D3),
    ("lightgray", 0xD3D3D3),
    ("silver", 0xC0C0C0),
    ("red", 0xFF0000),
    ("darkred", 0x8B0000),
    ("crimson", 0xDC143C),
    ("salmon", 0xFA8072),
    ("tomato", 0xFF6347),
    ("maroon", 0x800000),
    ("orange", 0xFFA500),
    ("gold", 0xFFD700),
    ("yellow", 0xFFFF00),
    ("green", 0x008000),
    ("darkgreen", 0x006400),
    ("forestgreen", 0x228B22),
    ("seagreen", 0x2E8B57),
    ("lightgreen", 0x90EE90),
    ("teal", 0x008080),
    ("cyan", 0x00FFFF),
    ("blue", 0x0000FF),
    ("navy", 0x000080),
    ("steelblue", 0x4682B4),
    ("purple", 0x800080),
    ("magenta", 0xFF00FF),
];

// Single-letter shorthands use the 0.75 intensity palette, not the CSS names.
const SHORTHAND_COLORS: &[(char, (f64, f64, f64))] = &[
    ('b', (0.0, 0.0, 1.0)),
    ('g', (0.0, 0.5, 0.0)),
    ('r', (1.0, 0.0, 0.0)),
    ('c', (0.0, 0.75, 0.75)),
    ('m', (0.75, 0.0, 0.75)),
    ('y', (0.75, 0.75, 0.0)),
    ('k', (0.0, 0.0, 0.0)),
    ('w', (1.0, 1.0, 1.0)),
];

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb(
            f64::from((rgb >> 16) & 0xFF) / 255.0,
            f64::from((rgb >> 8) & 0xFF) / 255.0,
            f64::from(rgb & 0xFF) / 255.0,
        )
    }

    /// Looks up a named color, case-insensitively.
    pub fn named(name: &str) -> ChartResult<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        let mut chars = lowered.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if let Some((_, (r, g, b))) = SHORTHAND_COLORS.iter().find(|(c, _)| *c == letter) {
                return Ok(Self::rgb(*r, *g, *b));
            }
        }
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == lowered)
            .map(|(_, rgb)| Self::from_rgb_u32(*rgb))
            .ok_or_else(|| ChartError::InvalidData(format!("unknown color name `{name}`")))
    }

    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "color `{hex}` must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |at: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|err| ChartError::InvalidData(format!("color `{hex}`: {err}")))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Returns the same color with its alpha replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha)
        )
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        if input.starts_with('#') {
            Self::from_hex(input)
        } else {
            Self::named(input)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(input: String) -> ChartResult<Self> {
        input.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
