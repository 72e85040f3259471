//! Configuration for the pad window and chart.
//!
//! Every field has a default, so a YAML file only needs the keys it
//! changes:
//!
//! ```yaml
//! title: My points
//! default_color: "#ff0000"
//! axis:
//!   x_range: [0.0, 100.0]
//! drag_round_decimals: ~
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::point::DEFAULT_POINT_COLOR;
use crate::error::{PadError, Result};
use crate::events::EventController;

/// Static axis presentation: labels and the initial visible domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub x_label: String,
    pub y_label: String,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_label: "X Axis".to_string(),
            y_label: "Y Axis".to_string(),
            x_range: [-10.0, 10.0],
            y_range: [-10.0, 10.0],
        }
    }
}

/// Configuration for [`run_coordinate_pad`](crate::run_coordinate_pad).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Window title.
    pub title: String,
    /// Initial color of the add form.
    pub default_color: String,
    pub axis: AxisConfig,
    /// Marker radius in points.
    pub point_radius: f32,
    /// Marker radius while hovered or dragged.
    pub hover_radius: f32,
    /// How close (px) the pointer must be to a marker to grab it.
    pub hit_radius_px: f32,
    /// Decimal places drag positions are rounded to. `None` disables rounding.
    pub drag_round_decimals: Option<u32>,
    /// Initial native window size.
    pub window_size: [f32; 2],
    /// Receives pad events when set.
    #[serde(skip)]
    pub event_controller: Option<EventController>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            title: "Coordinate Pad".to_string(),
            default_color: DEFAULT_POINT_COLOR.to_string(),
            axis: AxisConfig::default(),
            point_radius: 6.0,
            hover_radius: 8.0,
            hit_radius_px: 10.0,
            drag_round_decimals: Some(2),
            window_size: [1200.0, 800.0],
            event_controller: None,
        }
    }
}

impl PadConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| PadError::config_read(path, e))?;
        Self::from_yaml_str(&s)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Attach an event controller.
    pub fn with_event_controller(mut self, ctrl: EventController) -> Self {
        self.event_controller = Some(ctrl);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let cfg = PadConfig::from_yaml_str(
            "title: Points\naxis:\n  x_range: [0.0, 100.0]\ndrag_round_decimals: ~\n",
        )
        .unwrap();
        assert_eq!(cfg.title, "Points");
        assert_eq!(cfg.axis.x_range, [0.0, 100.0]);
        assert_eq!(cfg.axis.y_range, [-10.0, 10.0]);
        assert_eq!(cfg.axis.x_label, "X Axis");
        assert_eq!(cfg.drag_round_decimals, None);
        assert_eq!(cfg.default_color, "#3b82f6");
    }

    #[test]
    fn yaml_round_trip_preserves_fields() {
        let mut cfg = PadConfig::default();
        cfg.point_radius = 4.0;
        let back = PadConfig::from_yaml_str(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back.point_radius, 4.0);
        assert_eq!(back.axis, cfg.axis);
    }

    #[test]
    fn bad_yaml_is_a_parse_error() {
        let err = PadConfig::from_yaml_str("point_radius: [1, 2").unwrap_err();
        assert!(matches!(err, PadError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = PadConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, PadError::ConfigRead { .. }));
        assert!(err.to_string().contains("not/here.yaml"));
    }
}
