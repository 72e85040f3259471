//! InputForm: the text fields used to add a point.

use eframe::egui::Color32;

use super::point::color_to_hex;

/// A validated point ready to be appended.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// Form state: two free-text coordinate fields and a sticky color.
#[derive(Debug, Clone)]
pub struct InputForm {
    pub x_text: String,
    pub y_text: String,
    pub color: Color32,
}

impl InputForm {
    pub fn new(color: Color32) -> Self {
        Self {
            x_text: String::new(),
            y_text: String::new(),
            color,
        }
    }

    /// Validate both fields without changing the form.
    pub fn validate(&self) -> Option<NewPoint> {
        let x = parse_coordinate(&self.x_text)?;
        let y = parse_coordinate(&self.y_text)?;
        Some(NewPoint {
            x,
            y,
            color: color_to_hex(self.color),
        })
    }

    /// Validate and, on success, clear both text fields.
    ///
    /// On failure the form is left exactly as typed. The color is never reset.
    pub fn take_point(&mut self) -> Option<NewPoint> {
        let p = self.validate()?;
        self.x_text.clear();
        self.y_text.clear();
        Some(p)
    }
}

/// Parse a decimal coordinate. Surrounding whitespace is ignored; NaN and
/// infinities are rejected like any other non-number.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
