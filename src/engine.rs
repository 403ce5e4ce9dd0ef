//! Engine facade: presets in, options in, flakes out.

use crate::color::Rgba;
use crate::error::EngineError;
use crate::field::{FieldSettings, RenderedFlake, SnowField};
use crate::options::EngineConfig;
use crate::preset::PresetRegistry;
use crate::spawn::SpawnContext;
use crate::time::FrameClock;

/// Per-frame statistics returned by [`Engine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameStats {
    pub fps: f32,
    pub particle_count: usize,
    pub elapsed: f32,
    pub frame: u64,
}

/// Owns the snow field and reconfigures it from declarative options.
///
/// ```ignore
/// let mut engine = Engine::new();
/// engine.init(load_snow_preset);
/// engine.resize(1280.0, 720.0);
/// engine.apply(&config)?;
///
/// // once per frame
/// let stats = engine.tick();
/// for flake in engine.frame() {
///     draw_circle(flake.position, flake.radius, flake.color);
/// }
/// ```
pub struct Engine {
    presets: PresetRegistry,
    initialized: bool,
    config: Option<EngineConfig>,
    background: Rgba,
    field: Option<SnowField>,
    clock: FrameClock,
    width: f32,
    height: f32,
    seed: Option<u64>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            presets: PresetRegistry::new(),
            initialized: false,
            config: None,
            background: Rgba::BLACK,
            field: None,
            clock: FrameClock::new(),
            width: 0.0,
            height: 0.0,
            seed: None,
        }
    }

    /// Engine whose random draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Run the preset-loading hook. Must happen before the first `apply`.
    pub fn init<F>(&mut self, hook: F)
    where
        F: FnOnce(&mut PresetRegistry),
    {
        hook(&mut self.presets);
        self.initialized = true;
        log::info!(
            "Engine initialized with presets: [{}]",
            self.presets.names().collect::<Vec<_>>().join(", ")
        );
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Whether a configuration has been applied and flakes exist to draw.
    pub fn is_ready(&self) -> bool {
        self.field.is_some()
    }

    /// The last successfully applied config, with preset defaults filled in.
    pub fn config(&self) -> Option<&EngineConfig> {
        self.config.as_ref()
    }

    /// Apply a configuration. On error the previous state stays in effect.
    pub fn apply(&mut self, config: &EngineConfig) -> Result<(), EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        let resolved = match &config.preset {
            Some(name) => self
                .presets
                .get(name)
                .ok_or_else(|| EngineError::UnknownPreset(name.clone()))?
                .resolve(config),
            None => config.clone(),
        };

        let background =
            Rgba::parse(&resolved.background.color.value).map_err(|source| {
                EngineError::InvalidColor {
                    field: "background.color",
                    source,
                }
            })?;
        let settings = FieldSettings::from_config(&resolved)?;

        if let Some(field) = self.field.as_mut() {
            field.configure(settings);
        } else {
            let ctx = self
                .seed
                .map(SpawnContext::from_seed)
                .unwrap_or_else(SpawnContext::from_time);
            let field = SnowField::new(settings, self.width, self.height, ctx);
            log::info!("Snow field started with {} particles", field.len());
            self.field = Some(field);
            self.clock.restart();
        }

        self.background = background;
        self.config = Some(resolved);
        Ok(())
    }

    /// Set the drawing surface size in points.
    ///
    /// A surface with no area (minimized window) is ignored, so the flakes
    /// are still there when it comes back.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        if let Some(field) = &mut self.field {
            field.resize(width, height);
        }
    }

    /// Advance by the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> FrameStats {
        let tick = self.clock.tick();
        self.step(tick.delta);
        FrameStats {
            fps: self.clock.fps(),
            particle_count: self.particle_count(),
            elapsed: tick.elapsed,
            frame: tick.frame,
        }
    }

    /// Advance by exactly `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if let Some(field) = &mut self.field {
            field.step(dt);
        }
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn particle_count(&self) -> usize {
        self.field.as_ref().map_or(0, SnowField::len)
    }

    /// Flakes to draw; empty until a config has been applied.
    pub fn frame(&self) -> impl Iterator<Item = RenderedFlake> + '_ {
        self.field.iter().flat_map(|field| field.flakes())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
