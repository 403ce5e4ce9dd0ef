//! Side panel with one bound control per parameter.

use egui::Ui;
use visnowlizer::{FrameStats, Rgba};

use crate::params::{ColorParam, Direction, NumericParam, Parameters};

/// Text buffers for the controls that are edited as free text.
///
/// The count buffer is committed on every edit, a color buffer when its field
/// loses focus. Both are refreshed from the store whenever the field is not
/// being edited.
#[derive(Default)]
pub struct PanelState {
    count_text: String,
    color_text: [String; 2],
}

impl PanelState {
    fn color_text(&mut self, param: ColorParam) -> &mut String {
        match param {
            ColorParam::Particle => &mut self.color_text[0],
            ColorParam::Background => &mut self.color_text[1],
        }
    }
}

/// Render the control panel. Returns true if any parameter changed.
pub fn render_controls_panel(
    ui: &mut Ui,
    params: &mut Parameters,
    state: &mut PanelState,
    stats: &FrameStats,
    config_json: &str,
) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.heading("Snow Controls");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Hide controls").clicked() {
                params.toggle_sidebar();
                changed = true;
            }
        });
    });
    ui.label(format!(
        "{:.0} FPS · {} flakes",
        stats.fps, stats.particle_count
    ));
    ui.separator();

    changed |= count_input(ui, params, state);

    for param in NumericParam::ALL {
        if param != NumericParam::ParticleCount {
            changed |= numeric_slider(ui, params, param);
        }
    }

    ui.add_space(4.0);
    ui.separator();

    for param in ColorParam::ALL {
        changed |= color_input(ui, params, state, param);
    }

    ui.add_space(4.0);

    let mut direction = params.direction();
    egui::ComboBox::from_label("Direction")
        .selected_text(direction.label())
        .show_ui(ui, |ui| {
            for option in Direction::ALL {
                ui.selectable_value(&mut direction, option, option.label());
            }
        });
    if direction != params.direction() {
        params.set_direction(direction);
        changed = true;
    }

    ui.add_space(8.0);
    if ui.button("Reset to defaults").clicked() {
        params.reset_to_defaults();
        changed = true;
    }

    ui.add_space(4.0);
    egui::CollapsingHeader::new("Engine options")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(config_json).monospace().small());
        });

    changed
}

/// Number input for the particle count. Every edit goes through
/// parse-then-clamp straight away; the text is only replaced by the stored
/// value once the field is no longer being edited.
fn count_input(ui: &mut Ui, params: &mut Parameters, state: &mut PanelState) -> bool {
    let spec = NumericParam::ParticleCount.spec();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(spec.label);
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.count_text)
                .desired_width(60.0)
                .hint_text(format!("{}-{}", spec.min, spec.max)),
        );
        if response.changed() || response.lost_focus() {
            changed = commit_count(params, &state.count_text);
        }
        if !response.has_focus() {
            state.count_text = params.particle_count().to_string();
        }
    });

    changed
}

/// Store the count text. Returns true if the stored count moved.
fn commit_count(params: &mut Parameters, text: &str) -> bool {
    let before = params.particle_count();
    params.set_text(NumericParam::ParticleCount, text);
    params.particle_count() != before
}

fn numeric_slider(ui: &mut Ui, params: &mut Parameters, param: NumericParam) -> bool {
    let spec = param.spec();
    let mut value = params.get(param);
    let mut slider = egui::Slider::new(&mut value, spec.min..=spec.max)
        .step_by(spec.step)
        .text(spec.label);
    if spec.integer {
        slider = slider.integer();
    }
    if ui.add(slider).changed() {
        params.set(param, value);
        return true;
    }
    false
}

/// Color picker plus a text field accepting any color string.
fn color_input(
    ui: &mut Ui,
    params: &mut Parameters,
    state: &mut PanelState,
    param: ColorParam,
) -> bool {
    let mut changed = false;
    let current = params.color(param).to_string();
    let mut rgba = picker_rgba(&current);

    ui.horizontal(|ui| {
        ui.label(param.label());
        if ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed() {
            params.set_color(param, &hex_string(rgba));
            changed = true;
        }

        let text = state.color_text(param);
        let response = ui.add(egui::TextEdit::singleline(text).desired_width(90.0));
        if response.lost_focus() {
            let submitted = text.clone();
            params.set_color(param, &submitted);
            changed |= params.color(param) != current;
        }
        if !response.has_focus() {
            *state.color_text(param) = params.color(param).to_string();
        }
    });

    changed
}

/// Picker value for a stored color, alpha included.
fn picker_rgba(color: &str) -> [u8; 4] {
    Rgba::parse(color).map(Rgba::to_u8).unwrap_or([255; 4])
}

/// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
fn hex_string([r, g, b, a]: [u8; 4]) -> String {
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}
