//! Declarative engine options.
//!
//! An [`EngineConfig`] describes what the snow field should look like and how
//! it should move. It is plain data: building one has no side effects, and the
//! engine re-derives everything it draws from the last config it was given.
//!
//! The JSON shape mirrors the options object of web particle engines, so a
//! config can be inspected or exchanged as text:
//!
//! ```json
//! {
//!   "preset": "snow",
//!   "background": { "color": { "value": "#0d1117" } },
//!   "particles": {
//!     "number": { "value": 50, "density": { "enable": true, "area": 800 } },
//!     "color": { "value": "#ffffff" },
//!     "shape": { "type": "circle" },
//!     "opacity": { "value": { "min": 0.3, "max": 0.8 } },
//!     "size": { "value": { "min": 1.0, "max": 10.0 } },
//!     "move": {
//!       "enable": true, "speed": 3.0, "direction": "bottom",
//!       "random": true, "straight": false, "outModes": "out"
//!     },
//!     "wobble": { "enable": true, "distance": 10.0, "speed": 10.0 }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Complete engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Preset whose defaults fill in options this config leaves unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default)]
    pub background: BackgroundOptions,
    #[serde(default)]
    pub particles: ParticlesOptions,
}

impl EngineConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ColorValue {
    pub value: String,
}

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BackgroundOptions {
    pub color: ColorValue,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            color: ColorValue::new("#000000"),
        }
    }
}

/// Inclusive `min..=max` range of a per-particle value.
///
/// `min > max` is allowed; sampling interpolates from `min` towards `max`
/// either way.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Value at normalized position `t` (0 = `min`, 1 = `max`).
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticlesOptions {
    pub number: NumberOptions,
    pub color: ColorValue,
    pub shape: ShapeOptions,
    pub opacity: RangeOptions,
    pub size: RangeOptions,
    #[serde(rename = "move")]
    pub movement: MoveOptions,
    pub wobble: WobbleOptions,
    /// Depth layering. `None` inherits the preset's layering, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<DepthOptions>,
}

impl Default for ParticlesOptions {
    fn default() -> Self {
        Self {
            number: NumberOptions::default(),
            color: ColorValue::new("#ffffff"),
            shape: ShapeOptions::default(),
            opacity: RangeOptions {
                value: ValueRange::fixed(1.0),
            },
            size: RangeOptions {
                value: ValueRange::new(1.0, 5.0),
            },
            movement: MoveOptions::default(),
            wobble: WobbleOptions::default(),
            z_index: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct NumberOptions {
    pub value: u32,
    pub density: DensityOptions,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            value: 100,
            density: DensityOptions::default(),
        }
    }
}

/// Scales the particle count with the drawing surface.
///
/// When enabled the live count is `value * width * height / (area * 1000)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DensityOptions {
    pub enable: bool,
    pub area: u32,
}

impl Default for DensityOptions {
    fn default() -> Self {
        Self {
            enable: false,
            area: 800,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Filled circle.
    #[default]
    Circle,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShapeOptions {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct RangeOptions {
    pub value: ValueRange,
}

/// Direction particles travel in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
    /// No shared direction; every particle picks its own heading.
    None,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 5] = [
        MoveDirection::Bottom,
        MoveDirection::Top,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::None,
    ];

    /// The option string used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Bottom => "bottom",
            MoveDirection::Top => "top",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
            MoveDirection::None => "none",
        }
    }

    /// Heading angle in radians, screen coordinates (y grows downwards).
    /// `None` has no shared heading.
    pub fn angle(&self) -> Option<f32> {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            MoveDirection::Bottom => Some(FRAC_PI_2),
            MoveDirection::Top => Some(-FRAC_PI_2),
            MoveDirection::Left => Some(PI),
            MoveDirection::Right => Some(0.0),
            MoveDirection::None => None,
        }
    }
}

/// What happens when a particle leaves the drawing surface.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutMode {
    /// Leave through the edge and re-enter from the opposite side.
    #[default]
    Out,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveOptions {
    pub enable: bool,
    /// Pixels per frame at 60 FPS.
    pub speed: f32,
    pub direction: MoveDirection,
    /// Give each particle its own fraction of `speed`.
    pub random: bool,
    /// When false, headings fan out around `direction`.
    pub straight: bool,
    pub out_modes: OutMode,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            enable: true,
            speed: 2.0,
            direction: MoveDirection::Bottom,
            random: false,
            straight: true,
            out_modes: OutMode::Out,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WobbleOptions {
    pub enable: bool,
    pub distance: f32,
    pub speed: f32,
}

impl Default for WobbleOptions {
    fn default() -> Self {
        Self {
            enable: false,
            distance: 5.0,
            speed: 50.0,
        }
    }
}

/// Depth layering: each particle gets a layer `z` in `min..=max` out of 100,
/// and its opacity, size and speed are scaled by `(1 - z/100)^rate`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepthOptions {
    pub min: f32,
    pub max: f32,
    pub opacity_rate: f32,
    pub size_rate: f32,
    pub velocity_rate: f32,
}

impl DepthOptions {
    pub const LAYERS: f32 = 100.0;

    /// Multiplier for a particle at layer `z` with the given rate.
    #[inline]
    pub fn factor(z: f32, rate: f32) -> f32 {
        (1.0 - (z / Self::LAYERS).clamp(0.0, 1.0)).powf(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_lowercase() {
        for dir in MoveDirection::ALL {
            let json = serde_json::to_string(&dir).unwrap();
            assert_eq!(json, format!("\"{}\"", dir.as_str()));
        }
    }

    #[test]
    fn test_json_uses_engine_option_names() {
        let config = EngineConfig {
            preset: Some("snow".into()),
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(value["preset"], "snow");
        assert_eq!(value["background"]["color"]["value"], "#000000");
        assert_eq!(value["particles"]["shape"]["type"], "circle");
        assert_eq!(value["particles"]["move"]["outModes"], "out");
        assert!(value["particles"]["number"]["density"]["enable"].is_boolean());
        assert!(value["particles"].get("zIndex").is_none());
    }

    #[test]
    fn test_from_json_accepts_missing_preset_and_depth() {
        let json = r##"{
            "background": { "color": { "value": "#112233" } },
            "particles": {
                "number": { "value": 10, "density": { "enable": false, "area": 800 } },
                "color": { "value": "red" },
                "shape": { "type": "circle" },
                "opacity": { "value": { "min": 0.2, "max": 0.4 } },
                "size": { "value": { "min": 1.0, "max": 3.0 } },
                "move": { "enable": true, "speed": 1.5, "direction": "none",
                          "random": false, "straight": true, "outModes": "out" },
                "wobble": { "enable": false, "distance": 0.0, "speed": 0.0 }
            }
        }"##;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.preset, None);
        assert_eq!(config.particles.movement.direction, MoveDirection::None);
        assert_eq!(config.particles.z_index, None);
    }

    #[test]
    fn test_value_range_lerp_handles_inverted_bounds() {
        let range = ValueRange::new(0.9, 0.2);
        assert_eq!(range.lerp(0.0), 0.9);
        assert!((range.lerp(1.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_depth_factor() {
        assert_eq!(DepthOptions::factor(0.0, 1.0), 1.0);
        assert!((DepthOptions::factor(50.0, 1.0) - 0.5).abs() < 1e-6);
        assert_eq!(DepthOptions::factor(10.0, 0.0), 1.0);
    }
}
