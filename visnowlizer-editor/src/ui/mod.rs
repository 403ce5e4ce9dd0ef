//! egui front end: control panel and snow viewport

mod controls_panel;
mod viewport;

pub use controls_panel::{render_controls_panel, PanelState};
pub use viewport::{paint_snow, paint_title, SUBTITLE, TITLE};
