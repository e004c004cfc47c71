use std::sync::LazyLock;

use csscolorparser::Color as CssColor;
use regex::Regex;
use serde::Serialize;

use crate::error::{Grammar, ParseError, ParseResult};
use crate::tables::named_color;

/// RGBA color with every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        CssColor::from_rgba8(r, g, b, a).into()
    }

    fn from_rgb_u32(rgb: u32) -> Self {
        Self::from_rgba8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex_string(&self) -> String {
        CssColor::new(self.r as f64, self.g as f64, self.b as f64, self.a as f64).to_hex_string()
    }

    pub fn approx_eq(&self, other: &Rgba, tolerance: f32) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
    }
}

impl From<CssColor> for Rgba {
    fn from(color: CssColor) -> Self {
        Rgba::new(
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a as f32,
        )
    }
}

static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern"));
static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\((\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})\)$").expect("rgb color pattern")
});
static RGBA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\((\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3}),\s*(0|1|0?\.\d+)\)$")
        .expect("rgba color pattern")
});
static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\((\d{1,3}),\s*(\d{1,3})%,\s*(\d{1,3})%\)$").expect("hsl color pattern")
});

/// Parses a named color, `#rgb`, `#rrggbb`, `rgb()`, `rgba()` or `hsl()`.
///
/// The first form that matches wins.
pub fn parse_color(text: &str) -> ParseResult<Rgba> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty(Grammar::Color));
    }

    if let Some(rgb) = named_color(text) {
        return Ok(Rgba::from_rgb_u32(rgb));
    }

    if HEX.is_match(text) {
        return hex_color(&text[1..]).ok_or_else(|| ParseError::invalid(Grammar::Color, text));
    }

    if let Some(caps) = RGB.captures(text) {
        let channel = |index: usize| caps[index].parse::<u8>().ok();
        return match (channel(1), channel(2), channel(3)) {
            (Some(r), Some(g), Some(b)) => Ok(Rgba::from_rgba8(r, g, b, 255)),
            _ => Err(ParseError::invalid(Grammar::Color, text)),
        };
    }

    if let Some(caps) = RGBA.captures(text) {
        let channel = |index: usize| caps[index].parse::<u8>().ok();
        let alpha = caps[4].parse::<f32>().ok();
        return match (channel(1), channel(2), channel(3), alpha) {
            (Some(r), Some(g), Some(b), Some(a)) => {
                let mut color = Rgba::from_rgba8(r, g, b, 255);
                color.a = a;
                Ok(color)
            }
            _ => Err(ParseError::invalid(Grammar::Color, text)),
        };
    }

    if let Some(caps) = HSL.captures(text) {
        let component = |index: usize| caps[index].parse::<f64>().ok();
        return match (component(1), component(2), component(3)) {
            (Some(h), Some(s), Some(l)) => Ok(CssColor::from_hsla(
                h % 360.0,
                (s / 100.0).clamp(0.0, 1.0),
                (l / 100.0).clamp(0.0, 1.0),
                1.0,
            )
            .into()),
            _ => Err(ParseError::invalid(Grammar::Color, text)),
        };
    }

    Err(ParseError::invalid(Grammar::Color, text))
}

fn hex_color(digits: &str) -> Option<Rgba> {
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        3 => {
            let expand = |nibble: u32| ((nibble & 0xf) * 17) as u8;
            Some(Rgba::from_rgba8(
                expand(value >> 8),
                expand(value >> 4),
                expand(value),
                255,
            ))
        }
        6 => Some(Rgba::from_rgb_u32(value)),
        _ => None,
    }
}
