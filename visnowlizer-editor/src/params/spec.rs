//! Declared ranges and defaults for the numeric parameters.

/// Range, step and default of one numeric parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    /// Name used in logs and in the option JSON.
    pub key: &'static str,
    /// Control label.
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Stored values are rounded to whole numbers.
    pub integer: bool,
}

/// The numeric parameters, in panel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericParam {
    ParticleCount,
    FallSpeed,
    ParticleSize,
    OpacityMin,
    OpacityMax,
    WobbleDistance,
    WobbleSpeed,
    DensityArea,
}

const SPECS: [ParamSpec; NumericParam::COUNT] = [
    ParamSpec {
        key: "particleCount",
        label: "Particle count",
        min: 1.0,
        max: 200.0,
        step: 1.0,
        default: 50.0,
        integer: true,
    },
    ParamSpec {
        key: "fallSpeed",
        label: "Fall speed",
        min: 1.0,
        max: 50.0,
        step: 0.5,
        default: 3.0,
        integer: false,
    },
    ParamSpec {
        key: "particleSize",
        label: "Particle size",
        min: 5.0,
        max: 30.0,
        step: 1.0,
        default: 10.0,
        integer: true,
    },
    ParamSpec {
        key: "opacityMin",
        label: "Min opacity",
        min: 0.0,
        max: 1.0,
        step: 0.05,
        default: 0.3,
        integer: false,
    },
    ParamSpec {
        key: "opacityMax",
        label: "Max opacity",
        min: 0.0,
        max: 1.0,
        step: 0.05,
        default: 0.8,
        integer: false,
    },
    ParamSpec {
        key: "wobbleDistance",
        label: "Wobble distance",
        min: 0.0,
        max: 50.0,
        step: 1.0,
        default: 10.0,
        integer: false,
    },
    ParamSpec {
        key: "wobbleSpeed",
        label: "Wobble speed",
        min: 0.0,
        max: 50.0,
        step: 1.0,
        default: 10.0,
        integer: false,
    },
    ParamSpec {
        key: "densityArea",
        label: "Density area",
        min: 100.0,
        max: 2000.0,
        step: 50.0,
        default: 800.0,
        integer: true,
    },
];

impl NumericParam {
    pub const COUNT: usize = 8;

    pub const ALL: [NumericParam; Self::COUNT] = [
        NumericParam::ParticleCount,
        NumericParam::FallSpeed,
        NumericParam::ParticleSize,
        NumericParam::OpacityMin,
        NumericParam::OpacityMax,
        NumericParam::WobbleDistance,
        NumericParam::WobbleSpeed,
        NumericParam::DensityArea,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParamSpec {
        &SPECS[self.index()]
    }
}
