//! Coordinate Pad binary.
//!
//! Native: reads an optional YAML config from `$COORDPAD_CONFIG`.
//! Web: mounts on the `<canvas id="coordpad_canvas">` element.

use coordpad::PadConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Coordinate Pad v{}", env!("CARGO_PKG_VERSION"));

    let cfg = match std::env::var_os("COORDPAD_CONFIG") {
        Some(path) => PadConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            PadConfig::default()
        }),
        None => PadConfig::default(),
    };

    coordpad::run_coordinate_pad(cfg)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = coordpad::start_web("coordpad_canvas", PadConfig::default()).await {
            log::error!("failed to start: {e:?}");
        }
    });
}
