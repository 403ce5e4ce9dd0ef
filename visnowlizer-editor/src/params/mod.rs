//! The parameter store behind the control panel.
//!
//! [`Parameters`] is a flat record of everything the user can tune. Each
//! field has a getter and a setter; setters validate and store, nothing more.
//! There are no derived values and no rules between fields: in particular
//! `opacity_min` may be larger than `opacity_max`.

mod coerce;
mod direction;
mod spec;

pub use coerce::{clamp_to, parse_number, parse_then_clamp};
pub use direction::{Direction, ParseDirectionError};
pub use spec::{NumericParam, ParamSpec};

use visnowlizer::Rgba;

pub const DEFAULT_PARTICLE_COLOR: &str = "#ffffff";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0d1117";

/// The two color parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorParam {
    Particle,
    Background,
}

impl ColorParam {
    pub const ALL: [ColorParam; 2] = [ColorParam::Particle, ColorParam::Background];

    pub fn key(&self) -> &'static str {
        match self {
            ColorParam::Particle => "particleColor",
            ColorParam::Background => "backgroundColor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorParam::Particle => "Particle color",
            ColorParam::Background => "Background",
        }
    }
}

/// User-adjustable settings of the snow view.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Indexed by [`NumericParam`]; always clamped.
    numbers: [f64; NumericParam::COUNT],
    particle_color: String,
    background_color: String,
    direction: Direction,
    sidebar_open: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            numbers: NumericParam::ALL.map(|p| p.spec().default),
            particle_color: DEFAULT_PARTICLE_COLOR.into(),
            background_color: DEFAULT_BACKGROUND_COLOR.into(),
            direction: Direction::default(),
            sidebar_open: true,
        }
    }
}

macro_rules! numeric_accessors {
    ($($get:ident / $set:ident => $param:ident as $ty:ty;)*) => {
        $(
            pub fn $get(&self) -> $ty {
                self.get(NumericParam::$param) as $ty
            }

            pub fn $set(&mut self, value: f64) {
                self.set(NumericParam::$param, value)
            }
        )*
    };
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a numeric parameter.
    pub fn get(&self, param: NumericParam) -> f64 {
        self.numbers[param.index()]
    }

    /// Store `value` clamped to the parameter's range.
    pub fn set(&mut self, param: NumericParam, value: f64) {
        let spec = param.spec();
        let stored = clamp_to(spec, value);
        log::debug!("{} = {} (requested {})", spec.key, stored, value);
        self.numbers[param.index()] = stored;
    }

    /// Store raw control text through parse-then-clamp.
    pub fn set_text(&mut self, param: NumericParam, text: &str) {
        let spec = param.spec();
        let stored = parse_then_clamp(spec, text);
        log::debug!("{} = {} (from '{}')", spec.key, stored, text);
        self.numbers[param.index()] = stored;
    }

    numeric_accessors! {
        particle_count / set_particle_count => ParticleCount as u32;
        fall_speed / set_fall_speed => FallSpeed as f32;
        particle_size / set_particle_size => ParticleSize as u32;
        opacity_min / set_opacity_min => OpacityMin as f32;
        opacity_max / set_opacity_max => OpacityMax as f32;
        wobble_distance / set_wobble_distance => WobbleDistance as f32;
        wobble_speed / set_wobble_speed => WobbleSpeed as f32;
        density_area / set_density_area => DensityArea as u32;
    }

    pub fn color(&self, param: ColorParam) -> &str {
        match param {
            ColorParam::Particle => &self.particle_color,
            ColorParam::Background => &self.background_color,
        }
    }

    /// Store `value` verbatim if it is a valid color; otherwise keep the
    /// current one.
    pub fn set_color(&mut self, param: ColorParam, value: &str) {
        if let Err(e) = Rgba::parse(value) {
            log::warn!("Ignoring {} = '{}': {}", param.key(), value, e);
            return;
        }
        log::debug!("{} = {}", param.key(), value);
        let slot = match param {
            ColorParam::Particle => &mut self.particle_color,
            ColorParam::Background => &mut self.background_color,
        };
        *slot = value.to_string();
    }

    pub fn particle_color(&self) -> &str {
        &self.particle_color
    }

    pub fn set_particle_color(&mut self, value: &str) {
        self.set_color(ColorParam::Particle, value);
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn set_background_color(&mut self, value: &str) {
        self.set_color(ColorParam::Background, value);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        log::debug!("direction = {:?}", direction);
        self.direction = direction;
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Restore every default except panel visibility.
    pub fn reset_to_defaults(&mut self) {
        *self = Self {
            sidebar_open: self.sidebar_open,
            ..Self::default()
        };
    }
}
