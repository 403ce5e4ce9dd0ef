//! Named bundles of default particle behavior.
//!
//! Presets are registered in the engine before first use, through the hook
//! passed to [`Engine::init`](crate::Engine::init). A config that names a
//! preset inherits whatever the preset provides and the config leaves unset.

use crate::options::{
    BackgroundOptions, ColorValue, DensityOptions, DepthOptions, EngineConfig, MoveDirection,
    MoveOptions, NumberOptions, OutMode, ParticlesOptions, RangeOptions, ShapeOptions,
    ValueRange, WobbleOptions,
};

/// Name of the falling-snow preset.
pub const SNOW: &str = "snow";

pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    /// Full option set this preset stands for.
    pub defaults: fn() -> EngineConfig,
}

impl Preset {
    /// Fill options `config` leaves unset from this preset's defaults.
    pub fn resolve(&self, config: &EngineConfig) -> EngineConfig {
        let defaults = (self.defaults)();
        let mut resolved = config.clone();
        if resolved.particles.z_index.is_none() {
            resolved.particles.z_index = defaults.particles.z_index;
        }
        resolved
    }
}

/// Presets known to an engine, in registration order.
#[derive(Default)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a preset, replacing any earlier one with the same name.
    pub fn register(&mut self, preset: Preset) {
        log::debug!("Registering preset '{}'", preset.name);
        if let Some(existing) = self.presets.iter_mut().find(|p| p.name == preset.name) {
            *existing = preset;
        } else {
            self.presets.push(preset);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.iter().map(|p| p.name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Register the falling-snow preset.
pub fn load_snow_preset(registry: &mut PresetRegistry) {
    registry.register(Preset {
        name: SNOW,
        description: "Soft white flakes drifting down in layers",
        defaults: snow_defaults,
    });
}

fn snow_defaults() -> EngineConfig {
    EngineConfig {
        preset: Some(SNOW.into()),
        background: BackgroundOptions {
            color: ColorValue::new("#333333"),
        },
        particles: ParticlesOptions {
            number: NumberOptions {
                value: 400,
                density: DensityOptions {
                    enable: true,
                    area: 800,
                },
            },
            color: ColorValue::new("#ffffff"),
            shape: ShapeOptions::default(),
            opacity: RangeOptions {
                value: ValueRange::fixed(1.0),
            },
            size: RangeOptions {
                value: ValueRange::new(1.0, 10.0),
            },
            movement: MoveOptions {
                enable: true,
                speed: 2.0,
                direction: MoveDirection::Bottom,
                random: false,
                straight: true,
                out_modes: OutMode::Out,
            },
            wobble: WobbleOptions {
                enable: true,
                distance: 10.0,
                speed: 10.0,
            },
            z_index: Some(DepthOptions {
                min: 0.0,
                max: 50.0,
                opacity_rate: 1.0,
                size_rate: 1.0,
                velocity_rate: 1.0,
            }),
        },
    }
}
