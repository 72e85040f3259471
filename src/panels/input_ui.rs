use eframe::egui;
use egui::Ui;
use egui_phosphor::regular as icons;

use super::panel_trait::{Panel, PanelState};
use crate::data::input::InputForm;
use crate::data::pad::PadData;

/// "Add Coordinates" card: X/Y text fields, a sticky color and the add button.
pub struct InputPanel {
    pub state: PanelState,
    pub form: InputForm,
    focus_x: bool,
    add_rect: Option<egui::Rect>,
}

impl InputPanel {
    pub const ADD_LABEL: &'static str = "Add Point";

    pub fn new(form: InputForm) -> Self {
        Self {
            state: PanelState::new("Add Coordinates", icons::PLUS_CIRCLE),
            form,
            focus_x: false,
            add_rect: None,
        }
    }

    pub fn x_field_id() -> egui::Id {
        egui::Id::new("coordpad_x_field")
    }

    pub fn y_field_id() -> egui::Id {
        egui::Id::new("coordpad_y_field")
    }

    /// Where the add button was laid out in the last frame.
    pub fn add_button_rect(&self) -> Option<egui::Rect> {
        self.add_rect
    }
}

impl Panel for InputPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut PadData<'_>) {
        let mut submit = false;

        ui.label("X Coordinate:");
        let x_resp = ui.add(
            egui::TextEdit::singleline(&mut self.form.x_text)
                .id(Self::x_field_id())
                .hint_text("Enter X value")
                .desired_width(f32::INFINITY),
        );
        if std::mem::take(&mut self.focus_x) {
            x_resp.request_focus();
        }
        submit |= x_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("Y Coordinate:");
        let y_resp = ui.add(
            egui::TextEdit::singleline(&mut self.form.y_text)
                .id(Self::y_field_id())
                .hint_text("Enter Y value")
                .desired_width(f32::INFINITY),
        );
        submit |= y_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.horizontal(|ui| {
            ui.label("Color:");
            ui.color_edit_button_srgba(&mut self.form.color)
                .on_hover_text("Color for new points");
        });

        ui.add_space(4.0);
        let add = egui::Button::new(format!("{} {}", icons::PLUS, Self::ADD_LABEL));
        let add_resp = ui.add_sized([ui.available_width(), 24.0], add);
        self.add_rect = Some(add_resp.rect);
        submit |= add_resp.clicked();

        if submit && data.submit(&mut self.form).is_some() {
            self.focus_x = true;
        }
    }
}
