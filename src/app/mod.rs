//! Main application module for Coordinate Pad.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`pages`]    | Page enum, navigation bar and the static Hello/About pages |
//! | [`run`]      | Native [`run_coordinate_pad()`] and web `start_web()` entry points |

mod pages;
mod run;

pub use pages::Page;
#[cfg(not(target_arch = "wasm32"))]
pub use run::run_coordinate_pad;
#[cfg(target_arch = "wasm32")]
pub use run::start_web;

use eframe::egui;

use crate::config::PadConfig;
use crate::pad::CoordinatePad;

/// Top-level eframe application: a navigation bar over one of three pages.
///
/// The [`CoordinatePad`] exists only while the Graph page is open.
/// Navigating elsewhere drops it together with its points.
pub struct CoordinatePadApp {
    pub config: PadConfig,
    page: Page,
    pad: Option<CoordinatePad>,
}

impl CoordinatePadApp {
    pub fn new(config: PadConfig) -> Self {
        Self {
            config,
            page: Page::Hello,
            pad: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn pad(&self) -> Option<&CoordinatePad> {
        self.pad.as_ref()
    }

    pub fn pad_mut(&mut self) -> Option<&mut CoordinatePad> {
        self.pad.as_mut()
    }

    /// Switch page, mounting or unmounting the pad as needed.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        log::debug!("navigate {:?} -> {:?}", self.page, page);
        self.page = page;
        self.pad = match page {
            Page::Graph => Some(CoordinatePad::new(&self.config)),
            Page::Hello | Page::About => None,
        };
    }

    /// Render one frame into `ctx`. Used by the eframe app and by embedders.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("coordpad_nav").show(ctx, |ui| {
            if let Some(target) = pages::nav_bar(ui, self.page) {
                self.navigate(target);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Hello => pages::hello(ui),
            Page::About => pages::about(ui),
            Page::Graph => {
                let config = &self.config;
                let pad = self.pad.get_or_insert_with(|| CoordinatePad::new(config));
                pad.ui(ui);
            }
        });
    }
}

impl eframe::App for CoordinatePadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_graph_drops_points() {
        let mut app = CoordinatePadApp::new(PadConfig::default());
        assert!(app.pad().is_none());

        app.navigate(Page::Graph);
        app.pad_mut().unwrap().data().append(1.0, 1.0, None);
        assert_eq!(app.pad().unwrap().points().len(), 1);

        app.navigate(Page::About);
        assert!(app.pad().is_none());
        app.navigate(Page::Graph);
        assert!(app.pad().unwrap().points().is_empty());
    }

    #[test]
    fn navigating_to_same_page_keeps_pad() {
        let mut app = CoordinatePadApp::new(PadConfig::default());
        app.navigate(Page::Graph);
        app.pad_mut().unwrap().data().append(1.0, 1.0, None);
        app.navigate(Page::Graph);
        assert_eq!(app.pad().unwrap().points().len(), 1);
    }
}
