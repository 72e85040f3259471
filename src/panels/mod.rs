pub mod graph_ui;
pub mod input_ui;
pub mod list_ui;
pub mod panel_trait;

pub use graph_ui::GraphPanel;
pub use input_ui::InputPanel;
pub use list_ui::ListPanel;
pub use panel_trait::{Panel, PanelState};
