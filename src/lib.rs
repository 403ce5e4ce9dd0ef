//! # ViSnowlizer - falling-snow particle engine
//!
//! A small CPU particle engine configured entirely through a declarative
//! options object. Hand it an [`EngineConfig`], call [`Engine::tick`] once per
//! frame, and draw whatever [`Engine::frame`] yields.
//!
//! ## Quick Start
//!
//! ```ignore
//! use visnowlizer::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.init(load_snow_preset);
//! engine.resize(1280.0, 720.0);
//!
//! let mut config = EngineConfig {
//!     preset: Some("snow".into()),
//!     ..Default::default()
//! };
//! config.background.color = ColorValue::new("#0d1117");
//! engine.apply(&config)?;
//!
//! loop {
//!     engine.tick();
//!     for flake in engine.frame() {
//!         // draw a filled circle
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Options
//!
//! [`EngineConfig`] mirrors the options object of web particle engines:
//! background color, particle count with optional density scaling, color,
//! shape, opacity and size ranges, movement, wobble and depth layering. It
//! serializes to and from that JSON shape with `serde`.
//!
//! ### Presets
//!
//! A [`Preset`] is a named bundle of defaults registered before first use
//! through [`Engine::init`]. Options a config leaves unset (currently the
//! depth layering) come from the preset it names.
//!
//! ### Applying
//!
//! [`Engine::apply`] can be called any number of times. Flakes already on
//! screen keep their positions; their look and motion are re-derived from the
//! new options on the next frame, and the population grows or shrinks to the
//! new target count.

pub mod color;
mod engine;
pub mod error;
pub mod field;
pub mod options;
pub mod preset;
pub mod spawn;
pub mod time;

pub use color::Rgba;
pub use engine::{Engine, FrameStats};
pub use error::{ColorError, EngineError};
pub use field::{FieldSettings, RenderedFlake, SnowField};
pub use glam::Vec2;
pub use options::{
    BackgroundOptions, ColorValue, DensityOptions, DepthOptions, EngineConfig, MoveDirection,
    MoveOptions, NumberOptions, OutMode, ParticlesOptions, RangeOptions, ShapeKind, ShapeOptions,
    ValueRange, WobbleOptions,
};
pub use preset::{load_snow_preset, Preset, PresetRegistry, SNOW};

/// Convenient re-exports.
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::engine::{Engine, FrameStats};
    pub use crate::options::*;
    pub use crate::preset::{load_snow_preset, SNOW};
    pub use glam::Vec2;
}
