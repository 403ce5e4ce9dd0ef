//! Paints the engine's current frame into an egui rect.

use egui::{Color32, Painter, Rect};
use visnowlizer::{Engine, Rgba};

pub const TITLE: &str = "ViSnowlizer";
pub const SUBTITLE: &str = "Welcome to the snow visualization!";

fn to_color32(color: Rgba) -> Color32 {
    let [r, g, b, a] = color.to_u8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Fill the background and draw every flake, offset to `rect`'s origin.
pub fn paint_snow(painter: &Painter, rect: Rect, engine: &Engine) {
    painter.rect_filled(rect, 0.0, to_color32(engine.background()));

    let origin = rect.min.to_vec2();
    for flake in engine.frame() {
        let center = egui::pos2(flake.position.x, flake.position.y) + origin;
        painter.circle_filled(center, flake.radius, to_color32(flake.color));
    }
}

/// Title and welcome line centered over the snow.
pub fn paint_title(painter: &Painter, rect: Rect) {
    let center = rect.center();
    painter.text(
        center - egui::vec2(0.0, 18.0),
        egui::Align2::CENTER_CENTER,
        TITLE,
        egui::FontId::proportional(48.0),
        Color32::WHITE,
    );
    painter.text(
        center + egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        SUBTITLE,
        egui::FontId::proportional(18.0),
        Color32::from_white_alpha(200),
    );
}
