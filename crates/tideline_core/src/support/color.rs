//! CSS color parsing and formatting.
//!
//! # Invariants
//! - Channels are stored as `f32` in `[0, 1]`.
//! - `css_string()` emits `rgba(R,G,B,A)` with integer RGB in `[0, 255]`,
//!   and parsing that string yields an equal `Color`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid hex color regex")
});

static FUNCTIONAL_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("valid functional color regex")
});

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
];

/// Rejected CSS color input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    value: String,
}

impl ColorParseError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a CSS color: `{}`", self.value)
    }
}

impl Error for ColorParseError {}

/// Structured RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    /// CSS form used in exchange snapshots.
    pub fn css_string(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            self.a
        )
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css_string())
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`,
/// `transparent` and a small set of named colors.
pub fn parse_css_color(value: &str) -> Result<Color, ColorParseError> {
    let trimmed = value.trim();
    let rejected = || ColorParseError {
        value: value.to_string(),
    };

    if HEX_COLOR_RE.is_match(trimmed) {
        return parse_hex(&trimmed[1..]).ok_or_else(rejected);
    }

    if let Some(captures) = FUNCTIONAL_COLOR_RE.captures(trimmed) {
        let channel = |index: usize| -> Option<u8> {
            captures.get(index)?.as_str().parse::<u8>().ok()
        };
        let (r, g, b) = match (channel(1), channel(2), channel(3)) {
            (Some(r), Some(g), Some(b)) => (r, g, b),
            _ => return Err(rejected()),
        };
        let a = match captures.get(4) {
            Some(alpha) => alpha.as_str().parse::<f32>().map_err(|_| rejected())?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&a) {
            return Err(rejected());
        }
        return Ok(Color::from_rgba8(r, g, b, a));
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered == "transparent" {
        return Ok(Color::TRANSPARENT);
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, [r, g, b])| Color::from_rgba8(*r, *g, *b, 1.0))
        .ok_or_else(rejected)
}

fn parse_hex(digits: &str) -> Option<Color> {
    let expand = |c: char| -> Option<u8> {
        let nibble = c.to_digit(16)? as u8;
        Some(nibble * 17)
    };
    let pair = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        3 | 4 => {
            let mut chars = digits.chars();
            let r = expand(chars.next()?)?;
            let g = expand(chars.next()?)?;
            let b = expand(chars.next()?)?;
            let a = match chars.next() {
                Some(c) => f32::from(expand(c)?) / 255.0,
                None => 1.0,
            };
            Some(Color::from_rgba8(r, g, b, a))
        }
        6 | 8 => {
            let r = pair(&digits[0..2])?;
            let g = pair(&digits[2..4])?;
            let b = pair(&digits[4..6])?;
            let a = if digits.len() == 8 {
                f32::from(pair(&digits[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Color::from_rgba8(r, g, b, a))
        }
        _ => None,
    }
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
