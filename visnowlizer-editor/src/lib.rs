//! ViSnowlizer editor - interactive controls for the snow field
//!
//! This crate provides:
//! - [`Parameters`], the validated store behind every control
//! - [`project`], the pure mapping from parameters to engine options
//! - An egui control panel and viewport (feature `egui`)

pub mod params;
pub mod projector;
#[cfg(feature = "egui")]
pub mod ui;

pub use params::{ColorParam, Direction, NumericParam, ParamSpec, Parameters};
pub use projector::project;
