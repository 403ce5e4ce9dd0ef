//! Parameters → engine options.

use crate::params::Parameters;
use visnowlizer::{
    BackgroundOptions, ColorValue, DensityOptions, EngineConfig, MoveOptions, NumberOptions,
    OutMode, ParticlesOptions, RangeOptions, ShapeKind, ShapeOptions, ValueRange, WobbleOptions,
    SNOW,
};

/// Smallest flake radius; the size control only moves the upper bound.
pub const MIN_PARTICLE_SIZE: f32 = 1.0;

/// Build the engine configuration for the current parameters.
///
/// Pure: the same parameters always give the same config, and every
/// parameter set maps to one. `sidebar_open` does not take part.
pub fn project(params: &Parameters) -> EngineConfig {
    EngineConfig {
        preset: Some(SNOW.into()),
        background: BackgroundOptions {
            color: ColorValue::new(params.background_color()),
        },
        particles: ParticlesOptions {
            number: NumberOptions {
                value: params.particle_count(),
                density: DensityOptions {
                    enable: true,
                    area: params.density_area(),
                },
            },
            color: ColorValue::new(params.particle_color()),
            shape: ShapeOptions {
                kind: ShapeKind::Circle,
            },
            opacity: RangeOptions {
                value: ValueRange::new(params.opacity_min(), params.opacity_max()),
            },
            size: RangeOptions {
                value: ValueRange::new(MIN_PARTICLE_SIZE, params.particle_size() as f32),
            },
            movement: MoveOptions {
                enable: true,
                speed: params.fall_speed(),
                direction: params.direction().to_move_direction(),
                random: true,
                straight: false,
                out_modes: OutMode::Out,
            },
            wobble: WobbleOptions {
                enable: true,
                distance: params.wobble_distance(),
                speed: params.wobble_speed(),
            },
            z_index: None,
        },
    }
}
