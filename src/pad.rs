//! CoordinatePad: the point editor view.
//!
//! Owns the point list for as long as the view is mounted, plus the three
//! cards that read and mutate it. Dropping the pad drops its points.

use eframe::egui;

use crate::chart::ChartAdapter;
use crate::config::PadConfig;
use crate::data::input::InputForm;
use crate::data::pad::PadData;
use crate::data::point::{color_or_default, parse_hex_color, DEFAULT_POINT_COLOR};
use crate::data::points::PointStore;
use crate::events::EventController;
use crate::panels::{GraphPanel, InputPanel, ListPanel, Panel};

pub struct CoordinatePad {
    store: PointStore,
    adapter: ChartAdapter,
    events: Option<EventController>,
    pub input_panel: InputPanel,
    pub list_panel: ListPanel,
    pub graph_panel: GraphPanel,
}

impl CoordinatePad {
    pub fn new(cfg: &PadConfig) -> Self {
        let color = parse_hex_color(&cfg.default_color).unwrap_or_else(|e| {
            log::warn!("{e}; new points default to {DEFAULT_POINT_COLOR}");
            color_or_default(DEFAULT_POINT_COLOR)
        });
        Self {
            store: PointStore::new(),
            adapter: ChartAdapter::new(cfg.drag_round_decimals),
            events: cfg.event_controller.clone(),
            input_panel: InputPanel::new(InputForm::new(color)),
            list_panel: ListPanel::default(),
            graph_panel: GraphPanel::new(cfg),
        }
    }

    pub fn points(&self) -> &PointStore {
        &self.store
    }

    /// Mutation handle with logging and event emission attached.
    pub fn data(&mut self) -> PadData<'_> {
        PadData::new(&mut self.store, &self.adapter).with_events(self.events.as_ref())
    }

    /// Render the pad: form and list on the left, chart filling the rest.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut data =
            PadData::new(&mut self.store, &self.adapter).with_events(self.events.as_ref());

        egui::SidePanel::left("coordpad_side")
            .resizable(true)
            .default_width(320.0)
            .show_inside(ui, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.input_panel.show_card(ui, &mut data);
                    ui.add_space(12.0);
                    self.list_panel.show_card(ui, &mut data);
                });
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            self.graph_panel.show_card(ui, &mut data);
        });
    }
}
