//! ViSnowlizer - full-screen snow with a live control panel

use visnowlizer::{load_snow_preset, Engine, EngineConfig, FrameStats};
use visnowlizer_editor::project;
use visnowlizer_editor::ui::{paint_snow, paint_title, render_controls_panel, PanelState, TITLE};
use visnowlizer_editor::Parameters;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(TITLE),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(TITLE, options, Box::new(|_cc| Ok(Box::new(SnowApp::new()))))
}

struct SnowApp {
    params: Parameters,
    engine: Engine,
    panel: PanelState,
    stats: FrameStats,
    /// Last config the engine accepted.
    applied: Option<EngineConfig>,
    /// `applied`, pretty-printed for the panel.
    config_json: String,
}

impl SnowApp {
    fn new() -> Self {
        let mut engine = Engine::new();
        engine.init(load_snow_preset);

        let mut app = Self {
            params: Parameters::new(),
            engine,
            panel: PanelState::default(),
            stats: FrameStats::default(),
            applied: None,
            config_json: String::new(),
        };
        app.sync_engine();
        app
    }

    /// Project the parameters and hand the result to the engine if it
    /// differs from what it already runs. Returns true if it was applied.
    ///
    /// View-only state such as the sidebar never reaches the projection, so
    /// toggling it leaves the engine alone.
    fn sync_engine(&mut self) -> bool {
        let config = project(&self.params);
        if self.applied.as_ref() == Some(&config) {
            return false;
        }
        if let Err(e) = self.engine.apply(&config) {
            log::error!("Failed to apply engine options: {}", e);
            return false;
        }
        self.config_json = config.to_json().unwrap_or_else(|e| {
            log::warn!("Could not serialize engine options: {}", e);
            String::new()
        });
        self.applied = Some(config);
        true
    }
}

impl eframe::App for SnowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = false;

        if self.params.sidebar_open() {
            egui::SidePanel::left("controls")
                .min_width(260.0)
                .default_width(300.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        changed = render_controls_panel(
                            ui,
                            &mut self.params,
                            &mut self.panel,
                            &self.stats,
                            &self.config_json,
                        );
                    });
                });
        } else {
            egui::Area::new(egui::Id::new("show_controls"))
                .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    if ui.button("Show controls").clicked() {
                        self.params.toggle_sidebar();
                        changed = true;
                    }
                });
        }

        if changed {
            self.sync_engine();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.engine.resize(rect.width(), rect.height());
                self.stats = self.engine.tick();

                let painter = ui.painter_at(rect);
                paint_snow(&painter, rect, &self.engine);
                paint_title(&painter, rect);
            });

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> SnowApp {
        let mut app = SnowApp::new();
        app.engine.resize(1000.0, 800.0);
        app
    }

    #[test]
    fn test_starts_with_default_projection() {
        let app = app();
        assert_eq!(app.applied, Some(project(&Parameters::new())));
        assert_eq!(app.engine.particle_count(), 50);
        assert!(app.config_json.contains("\"snow\""));
    }

    #[test]
    fn test_sidebar_toggle_leaves_engine_alone() {
        let mut app = app();
        app.params.toggle_sidebar();
        assert!(!app.sync_engine());
        app.params.toggle_sidebar();
        assert!(!app.sync_engine());
    }

    #[test]
    fn test_parameter_change_is_applied_once() {
        let mut app = app();
        app.params.set_particle_count(120.0);
        assert!(app.sync_engine());
        assert_eq!(app.engine.particle_count(), 120);
        assert!(!app.sync_engine());
    }

    #[test]
    fn test_json_view_follows_applied_config() {
        let mut app = app();
        app.params.set_particle_color("#ff0000");
        app.sync_engine();
        assert!(app.config_json.contains("#ff0000"));
    }
}
