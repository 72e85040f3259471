use egui::Ui;

use crate::data::pad::PadData;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self { title, icon }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;

    fn title_and_icon(&self) -> String {
        format!("{} {}", self.state().icon, self.state().title)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut PadData<'_>);

    /// Render the panel as a titled card.
    fn show_card(&mut self, ui: &mut Ui, data: &mut PadData<'_>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(self.title_and_icon());
            ui.separator();
            self.render_panel(ui, data);
        });
    }
}
