//! Coordinate Pad crate root: re-exports and module wiring.
//!
//! An interactive scatter-plot editor built on egui/eframe. Users type X/Y
//! pairs, see them as colored markers and drag the markers to move them.
//!
//! - `data`: the point list ([`PointStore`]), the add form and [`PadData`]
//! - `chart`: [`ChartAdapter`] (list <-> renderer series) and drag tracking
//! - `panels`: the input, list and graph cards
//! - `pad`: [`CoordinatePad`], the view that owns the list
//! - `app`: pages, navigation and run helpers
//! - `config`, `events`, `error`: ambient configuration, event fan-out and errors

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod pad;
pub mod panels;

#[cfg(not(target_arch = "wasm32"))]
pub use app::run_coordinate_pad;
#[cfg(target_arch = "wasm32")]
pub use app::start_web;
pub use app::{CoordinatePadApp, Page};
pub use chart::{ChartAdapter, DragEvent, DragOutcome, DragPhase, SeriesData};
pub use config::{AxisConfig, PadConfig};
pub use data::input::InputForm;
pub use data::pad::PadData;
pub use data::point::{Point, DEFAULT_POINT_COLOR};
pub use data::points::PointStore;
pub use error::{PadError, Result};
pub use events::{EventController, EventFilter, EventKind, PadEvent};
pub use pad::CoordinatePad;
