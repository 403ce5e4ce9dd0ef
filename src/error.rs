//! Error types for the snow engine.
//!
//! This module provides error types for color parsing and for applying
//! configurations to the engine.

use std::fmt;

/// Errors that can occur while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string was empty after trimming.
    Empty,
    /// A `#` color with the wrong number of hex digits.
    HexLength(usize),
    /// A `#` color containing a non-hex digit.
    HexDigit(String),
    /// An `rgb()`/`rgba()` color with the wrong number of components.
    ComponentCount { expected: usize, found: usize },
    /// An `rgb()`/`rgba()` component that is not a number in range.
    Component(String),
    /// Not a recognized color form or name.
    Unknown(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Empty => write!(f, "Color string is empty"),
            ColorError::HexLength(n) => {
                write!(f, "Hex color must have 3, 4, 6 or 8 digits, found {}", n)
            }
            ColorError::HexDigit(s) => write!(f, "Invalid hex digit in color '{}'", s),
            ColorError::ComponentCount { expected, found } => write!(
                f,
                "Expected {} color components, found {}",
                expected, found
            ),
            ColorError::Component(s) => write!(f, "Invalid color component '{}'", s),
            ColorError::Unknown(s) => write!(f, "Unrecognized color '{}'", s),
        }
    }
}

impl std::error::Error for ColorError {}

/// Errors that can occur when applying a configuration to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// `apply` was called before `init` registered any preset.
    NotInitialized,
    /// The configuration names a preset that was never registered.
    UnknownPreset(String),
    /// A color in the configuration could not be parsed.
    InvalidColor {
        /// Which option carried the color (e.g. `background.color`).
        field: &'static str,
        source: ColorError,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotInitialized => write!(
                f,
                "Engine has not been initialized. Call Engine::init() before applying options."
            ),
            EngineError::UnknownPreset(name) => write!(f, "Preset '{}' is not registered", name),
            EngineError::InvalidColor { field, source } => {
                write!(f, "Invalid color for {}: {}", field, source)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
