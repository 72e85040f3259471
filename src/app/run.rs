//! Entry points for running Coordinate Pad natively or in the browser.

use eframe::egui;

use super::CoordinatePadApp;
use crate::config::PadConfig;

/// Install the Phosphor icon font used by buttons and page tabs.
fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

/// Launch Coordinate Pad in a native window.
///
/// The call blocks until the window is closed.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_coordinate_pad(cfg: PadConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(cfg.window_size)
            .with_title(title.clone()),
        ..Default::default()
    };
    log::info!("starting {title}");

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            install_fonts(&cc.egui_ctx);
            Ok(Box::new(CoordinatePadApp::new(cfg)))
        }),
    )
}

/// Start Coordinate Pad on the `<canvas>` element with id `canvas_id`.
#[cfg(target_arch = "wasm32")]
pub async fn start_web(canvas_id: &str, cfg: PadConfig) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| wasm_bindgen::JsValue::from_str("element is not a canvas"))?;

    log::info!("starting {} in #{canvas_id}", cfg.title);
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                install_fonts(&cc.egui_ctx);
                Ok(Box::new(CoordinatePadApp::new(cfg)))
            }),
        )
        .await
}
