//! Point: a plotted (x, y) pair with its display color.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{PadError, Result};

/// Color used for points added without an explicit color.
pub const DEFAULT_POINT_COLOR: &str = "#3b82f6";

/// A single coordinate in the pad.
///
/// Points carry no id: a point is identified by its index in the
/// [`PointStore`](super::points::PointStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Hex color string as entered, e.g. `#ff0000`.
    pub color: String,
}

impl Point {
    /// Create a point. An empty or blank color falls back to [`DEFAULT_POINT_COLOR`].
    pub fn new(x: f64, y: f64, color: Option<&str>) -> Self {
        let color = match color.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_POINT_COLOR.to_string(),
        };
        Self { x, y, color }
    }

    /// Label shown in the coordinate list, e.g. `(1, 2.5)`.
    pub fn label(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}

/// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` string (leading `#` optional).
pub fn parse_hex_color(input: &str) -> Result<Color32> {
    let s = input.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PadError::invalid_color(input));
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
    let rgba = match hex.len() {
        3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
        6 => (byte(0), byte(2), byte(4), Ok(255)),
        8 => (byte(0), byte(2), byte(4), byte(6)),
        _ => return Err(PadError::invalid_color(input)),
    };
    match rgba {
        (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Color32::from_rgba_unmultiplied(r, g, b, a)),
        _ => Err(PadError::invalid_color(input)),
    }
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Resolve a point color for drawing, falling back to the default on bad input.
pub fn color_or_default(input: &str) -> Color32 {
    parse_hex_color(input)
        .or_else(|_| parse_hex_color(DEFAULT_POINT_COLOR))
        .unwrap_or(Color32::PLACEHOLDER)
}
