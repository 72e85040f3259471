use eframe::egui;
use egui::{Color32, PointerButton, Pos2, Ui};
use egui_phosphor::regular as icons;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotTransform, Points, Text};

use super::panel_trait::{Panel, PanelState};
use crate::chart::{DragTracker, PointerInput, PAD_DATASET};
use crate::config::{AxisConfig, PadConfig};
use crate::data::pad::PadData;
use crate::data::point::color_or_default;

/// "Graph" card: the scatter chart with draggable markers.
pub struct GraphPanel {
    pub state: PanelState,
    pub axis: AxisConfig,
    pub point_radius: f32,
    pub hover_radius: f32,
    tracker: DragTracker,
    /// Marker under the pointer in the previous frame.
    hovered: Option<usize>,
    reset_view: bool,
    last_transform: Option<PlotTransform>,
}

impl GraphPanel {
    pub const TITLE: &'static str = "Coordinate Graph (Drag points to move them)";
    pub const EMPTY_TEXT: &'static str = "Add some coordinates to see them plotted here";

    pub fn new(cfg: &PadConfig) -> Self {
        Self {
            state: PanelState::new("Graph", icons::CHART_SCATTER),
            axis: cfg.axis.clone(),
            point_radius: cfg.point_radius,
            hover_radius: cfg.hover_radius,
            tracker: DragTracker::new(cfg.hit_radius_px),
            hovered: None,
            reset_view: true,
            last_transform: None,
        }
    }

    /// Index of the marker currently being dragged.
    pub fn dragging(&self) -> Option<usize> {
        self.tracker.active()
    }

    /// Restore the configured axis domain on the next frame.
    pub fn reset_view(&mut self) {
        self.reset_view = true;
    }

    /// Plot-to-screen mapping of the last drawn frame; `None` while the list is empty.
    pub fn transform(&self) -> Option<&PlotTransform> {
        self.last_transform.as_ref()
    }
}

impl Panel for GraphPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut PadData<'_>) {
        if data.store.is_empty() {
            self.tracker.cancel();
            self.hovered = None;
            self.last_transform = None;
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.weak(Self::EMPTY_TEXT);
            });
            return;
        }

        ui.horizontal(|ui| {
            ui.strong(Self::TITLE);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button(format!("{} Reset View", icons::ARROW_COUNTER_CLOCKWISE))
                    .on_hover_text("Show the default axis range")
                    .clicked()
                {
                    self.reset_view();
                }
            });
        });

        let series = data.adapter.series(data.store.points());
        let Some(ds) = series.datasets.get(PAD_DATASET) else {
            return;
        };
        let colors: Vec<Color32> = ds
            .background_color
            .iter()
            .map(|c| color_or_default(c))
            .collect();

        let active = self.tracker.active();
        let hovered = self.hovered;
        let reset = std::mem::take(&mut self.reset_view);
        let [x0, x1] = self.axis.x_range;
        let [y0, y1] = self.axis.y_range;
        let (radius, hover_radius) = (self.point_radius, self.hover_radius);

        // Panning would fight the marker drag, so it is off while a marker is grabbed or hovered.
        let plot = Plot::new("coordpad_plot")
            .legend(Legend::default())
            .x_axis_label(self.axis.x_label.clone())
            .y_axis_label(self.axis.y_label.clone())
            .allow_drag(active.is_none() && hovered.is_none())
            .allow_double_click_reset(false);

        let plot_resp = plot.show(ui, |plot_ui| {
            if reset {
                plot_ui.set_plot_bounds_x(x0..=x1);
                plot_ui.set_plot_bounds_y(y0..=y1);
            }
            for (i, p) in ds.data.iter().enumerate() {
                let r = if active == Some(i) || hovered == Some(i) {
                    hover_radius
                } else {
                    radius
                };
                plot_ui.points(
                    Points::new(ds.label.clone(), vec![[p.x, p.y]])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(r)
                        .color(colors[i]),
                );
            }
            if let Some(p) = active.and_then(|i| ds.data.get(i)) {
                plot_ui.text(
                    Text::new("", PlotPoint::new(p.x, p.y), format!("  ({}, {})", p.x, p.y))
                        .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        });

        let transform = plot_resp.transform;
        self.last_transform = Some(transform);
        let resp = &plot_resp.response;
        let markers: Vec<Pos2> = ds
            .data
            .iter()
            .map(|p| transform.position_from_point(&PlotPoint::new(p.x, p.y)))
            .collect();

        let mut inputs = Vec::new();
        if resp.drag_started_by(PointerButton::Primary) {
            if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                inputs.push(PointerInput::Pressed { screen: origin });
            }
        }
        if resp.dragged_by(PointerButton::Primary) {
            if let Some(pos) = resp.interact_pointer_pos() {
                inputs.push(PointerInput::Dragged {
                    at: transform.value_from_position(pos),
                });
            }
        }
        if resp.drag_stopped_by(PointerButton::Primary) {
            let at = resp
                .interact_pointer_pos()
                .map(|pos| transform.value_from_position(pos));
            inputs.push(PointerInput::Released { at });
        }

        let mut moved = false;
        for input in inputs {
            if let Some(ev) = self.tracker.update(input, &markers) {
                data.apply_drag(&ev);
                moved = true;
            }
        }

        self.hovered = resp
            .hover_pos()
            .and_then(|pos| self.tracker.hit_test(pos, &markers));
        if self.tracker.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if self.hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
        if moved {
            ui.ctx().request_repaint();
        }
    }
}
