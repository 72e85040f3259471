use eframe::egui;
use egui::Ui;
use egui_phosphor::regular as icons;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Hello,
    About,
    Graph,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Hello, Page::About, Page::Graph];

    pub fn label(self) -> &'static str {
        match self {
            Page::Hello => "Home",
            Page::About => "About",
            Page::Graph => "Graph",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Hello => icons::HOUSE,
            Page::About => icons::INFO,
            Page::Graph => icons::CHART_SCATTER,
        }
    }
}

/// Navigation bar; returns the page the user clicked, if any.
pub(super) fn nav_bar(ui: &mut Ui, current: Page) -> Option<Page> {
    let mut target = None;
    ui.horizontal(|ui| {
        ui.strong("Coordinate Pad");
        ui.separator();
        for page in Page::ALL {
            let text = format!("{} {}", page.icon(), page.label());
            if ui.selectable_label(page == current, text).clicked() {
                target = Some(page);
            }
        }
    });
    target
}

pub(super) fn hello(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(format!("{} Hello, World!", icons::HAND_WAVING));
        ui.add_space(8.0);
        ui.label("Open the Graph page to plot and drag your own points.");
    });
}

pub(super) fn about(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("About");
        ui.add_space(8.0);
        ui.label(concat!("Coordinate Pad v", env!("CARGO_PKG_VERSION")));
        ui.label(
            "Type X/Y pairs, pick a color and see them on a scatter chart. \
             Drag markers to move points; nothing is saved between sessions.",
        );
    });
}
