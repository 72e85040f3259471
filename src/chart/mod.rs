//! Chart adapter: the bridge between the point list and the scatter renderer.
//!
//! Forward, the list is flattened into a [`SeriesData`]: one dataset whose
//! positions and per-point colors are index-aligned with the list. Back,
//! [`DragEvent`]s produced by the renderer are applied to the list by index.

pub mod drag;

use serde::Serialize;

use crate::data::point::Point;
use crate::data::points::PointStore;

pub use drag::{DragTracker, PointerInput};

/// Index of the only dataset the pad renders.
pub const PAD_DATASET: usize = 0;

/// Legend label of the pad dataset.
pub const PAD_DATASET_LABEL: &str = "Coordinates";

/// One marker position in renderer space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// One plotted set of points with per-point style arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<SeriesPoint>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
}

/// Renderer input: `{ datasets: [{ label, data, backgroundColor, borderColor }] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub datasets: Vec<Dataset>,
}

impl SeriesData {
    /// Serialize to the renderer's JSON shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Whether a drag update is still moving or is the final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    InProgress,
    Commit,
}

/// A drag update reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub dataset_index: usize,
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
}

/// What applying a [`DragEvent`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The point moved to the (rounded) position.
    Applied { x: f64, y: f64 },
    /// The index no longer exists in the list.
    StaleIndex,
    /// The event targeted a dataset the pad does not own.
    OtherDataset,
}

/// Maps the point list to renderer input and drag events back to list updates.
#[derive(Debug, Clone)]
pub struct ChartAdapter {
    pub label: String,
    /// Decimal places drag positions are rounded to; `None` keeps full precision.
    pub round_decimals: Option<u32>,
}

impl Default for ChartAdapter {
    fn default() -> Self {
        Self {
            label: PAD_DATASET_LABEL.to_string(),
            round_decimals: Some(2),
        }
    }
}

impl ChartAdapter {
    pub fn new(round_decimals: Option<u32>) -> Self {
        Self {
            round_decimals,
            ..Default::default()
        }
    }

    /// Project the list into a single dataset.
    pub fn series(&self, points: &[Point]) -> SeriesData {
        let data = points
            .iter()
            .map(|p| SeriesPoint { x: p.x, y: p.y })
            .collect();
        let colors: Vec<String> = points.iter().map(|p| p.color.clone()).collect();
        SeriesData {
            datasets: vec![Dataset {
                label: self.label.clone(),
                data,
                background_color: colors.clone(),
                border_color: colors,
            }],
        }
    }

    /// Apply a drag update. In-progress and commit updates are treated the
    /// same: the point moves immediately.
    pub fn apply_drag(&self, store: &mut PointStore, event: &DragEvent) -> DragOutcome {
        if event.dataset_index != PAD_DATASET {
            return DragOutcome::OtherDataset;
        }
        let x = self.round(event.x);
        let y = self.round(event.y);
        if store.replace_at(event.point_index, x, y) {
            DragOutcome::Applied { x, y }
        } else {
            DragOutcome::StaleIndex
        }
    }

    pub fn round(&self, v: f64) -> f64 {
        match self.round_decimals {
            Some(n) => {
                // Large counts overflow the scale to infinity; the value is then kept as is.
                let scale = 10f64.powi(i32::try_from(n).unwrap_or(i32::MAX));
                let r = (v * scale).round() / scale;
                if r.is_finite() {
                    r
                } else {
                    v
                }
            }
            None => v,
        }
    }
}
