use eframe::egui;
use egui::Ui;
use egui_phosphor::regular as icons;
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use super::panel_trait::{Panel, PanelState};
use crate::data::pad::PadData;
use crate::data::point::{color_or_default, Point};

/// "Coordinate List" card: one row per point with a delete button.
pub struct ListPanel {
    pub state: PanelState,
}

impl Default for ListPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Coordinate List", icons::LIST_NUMBERS),
        }
    }
}

impl ListPanel {
    pub const EMPTY_TEXT: &'static str = "No coordinates added yet";
    pub const CLEAR_ALL_LABEL: &'static str = "Clear All";
}

struct PointsDelegate<'a> {
    points: &'a [Point],
    col_w: [f32; 4],
    remove: Option<usize>,
}

impl TableDelegate for PointsDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let text = match cell.col_range.start {
            0 => "#",
            2 => "Point",
            _ => "",
        };
        ui.add_space(4.0);
        ui.strong(text);
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let row = cell.row_nr as usize;
        let Some(p) = self.points.get(row) else {
            return;
        };
        let (rect, _resp) = ui.allocate_exact_size(
            egui::vec2(self.col_w[cell.col_nr], 20.0),
            egui::Sense::hover(),
        );
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
            |inner| match cell.col_nr {
                0 => {
                    inner.add_space(4.0);
                    inner.weak(row.to_string());
                }
                1 => {
                    let (dot, _) =
                        inner.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    inner
                        .painter()
                        .circle_filled(dot.center(), 6.0, color_or_default(&p.color));
                }
                2 => {
                    inner.add(
                        egui::Label::new(p.label())
                            .truncate()
                            .show_tooltip_when_elided(true),
                    );
                }
                3 => {
                    let del = egui::Button::new(
                        egui::RichText::new(icons::TRASH).color(egui::Color32::LIGHT_RED),
                    )
                    .frame(false);
                    if inner.add(del).on_hover_text("Delete point").clicked() {
                        self.remove = Some(row);
                    }
                }
                _ => {}
            },
        );
    }
}

impl Panel for ListPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut PadData<'_>) {
        if data.store.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.weak(Self::EMPTY_TEXT);
                ui.add_space(8.0);
            });
            return;
        }

        // Index and color columns are fixed; the label column takes the rest.
        let avail_w = ui.available_width();
        let mut w = [32.0, 24.0, 80.0, 28.0];
        w[2] = (avail_w - w[0] - w[1] - w[3]).max(w[2]);
        let cols = w.iter().map(|&cw| egui_table::Column::new(cw)).collect::<Vec<_>>();

        let row_h = 22.0_f32;
        let table_h = (24.0 + row_h * data.store.len() as f32 + 8.0).clamp(60.0, 260.0);

        let mut delegate = PointsDelegate {
            points: data.store.points(),
            col_w: w,
            remove: None,
        };
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(avail_w, table_h), egui::Sense::hover());
        let mut table_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::left_to_right(egui::Align::Min)),
        );
        Table::new()
            .id_salt(("points_table", avail_w.to_bits()))
            .num_rows(delegate.points.len() as u64)
            .columns(cols)
            .headers(vec![EgHeaderRow::new(24.0)])
            .show(&mut table_ui, &mut delegate);

        let remove = delegate.remove;
        if let Some(i) = remove {
            data.remove_at(i);
        }

        ui.add_space(4.0);
        let clear = egui::Button::new(
            egui::RichText::new(format!("{} {}", icons::BROOM, Self::CLEAR_ALL_LABEL))
                .color(egui::Color32::LIGHT_RED),
        );
        if ui.add_sized([ui.available_width(), 24.0], clear).clicked() {
            data.clear();
        }
    }
}
