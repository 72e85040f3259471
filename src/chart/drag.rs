//! Turns raw pointer input over the plot into index-based [`DragEvent`]s.

use eframe::egui::Pos2;
use egui_plot::PlotPoint;

use super::{DragEvent, DragPhase, PAD_DATASET};

/// Pointer state for one step of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Primary button went down (or a drag started) at this screen position.
    Pressed { screen: Pos2 },
    /// Pointer moved while the button is held, now at this plot position.
    Dragged { at: PlotPoint },
    /// Primary button released; `at` is the final plot position if known.
    Released { at: Option<PlotPoint> },
}

/// Tracks which marker, if any, is being dragged.
#[derive(Debug, Clone)]
pub struct DragTracker {
    active: Option<usize>,
    last: Option<PlotPoint>,
    /// Maximum screen distance (px) from a marker center that grabs it.
    pub hit_radius: f32,
}

impl DragTracker {
    pub fn new(hit_radius: f32) -> Self {
        Self {
            active: None,
            last: None,
            hit_radius,
        }
    }

    /// Index of the marker being dragged.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Nearest marker within `hit_radius` of `screen`.
    pub fn hit_test(&self, screen: Pos2, markers: &[Pos2]) -> Option<usize> {
        let max_d2 = self.hit_radius * self.hit_radius;
        markers
            .iter()
            .enumerate()
            .map(|(i, m)| (i, m.distance_sq(screen)))
            .filter(|(_, d2)| *d2 <= max_d2)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Feed one pointer step. `markers` are the current marker centers in
    /// screen space, index-aligned with the point list.
    pub fn update(&mut self, input: PointerInput, markers: &[Pos2]) -> Option<DragEvent> {
        match input {
            PointerInput::Pressed { screen } => {
                self.active = self.hit_test(screen, markers);
                self.last = None;
                None
            }
            PointerInput::Dragged { at } => {
                let index = self.active?;
                self.last = Some(at);
                Some(event(DragPhase::InProgress, index, at))
            }
            PointerInput::Released { at } => {
                let index = self.active.take()?;
                let last = self.last.take();
                at.or(last).map(|p| event(DragPhase::Commit, index, p))
            }
        }
    }

    /// Drop any gesture in progress without emitting a commit.
    pub fn cancel(&mut self) {
        self.active = None;
        self.last = None;
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(10.0)
    }
}

fn event(phase: DragPhase, point_index: usize, at: PlotPoint) -> DragEvent {
    DragEvent {
        phase,
        dataset_index: PAD_DATASET,
        point_index,
        x: at.x,
        y: at.y,
    }
}
