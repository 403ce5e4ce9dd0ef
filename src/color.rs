//! Color strings as accepted by the engine options.
//!
//! Supported forms (case insensitive, surrounding whitespace ignored):
//!
//! | Form | Example |
//! |------|---------|
//! | Short hex | `#fff`, `#ffff` |
//! | Long hex | `#0d1117`, `#0d1117cc` |
//! | Functional | `rgb(13, 17, 23)`, `rgba(13, 17, 23, 0.5)` |
//! | Named | `white`, `black`, `navy`, `transparent`, ... |

use crate::error::ColorError;

/// A linear RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

const NAMED: &[(&str, [u8; 4])] = &[
    ("white", [255, 255, 255, 255]),
    ("black", [0, 0, 0, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
    ("silver", [192, 192, 192, 255]),
    ("navy", [0, 0, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
];

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse a color string.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let lower = s.to_ascii_lowercase();

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, 4);
        }
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, 3);
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, [r, g, b, a])| Self::from_u8(*r, *g, *b, *a))
            .ok_or_else(|| ColorError::Unknown(s.to_string()))
    }

    /// Same color with alpha multiplied by `factor`.
    pub fn with_alpha(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Components as bytes, rounded.
    pub fn to_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::HexDigit(format!("#{}", hex)));
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let digit_err = |_| ColorError::HexDigit(format!("#{}", hex));

    let [r, g, b, a] = match hex.len() {
        3 => [nibble(0), nibble(1), nibble(2), Ok(255)],
        4 => [nibble(0), nibble(1), nibble(2), nibble(3)],
        6 => [byte(0), byte(2), byte(4), Ok(255)],
        8 => [byte(0), byte(2), byte(4), byte(6)],
        n => return Err(ColorError::HexLength(n)),
    };
    Ok(Rgba::from_u8(
        r.map_err(digit_err)?,
        g.map_err(digit_err)?,
        b.map_err(digit_err)?,
        a.map_err(digit_err)?,
    ))
}

fn parse_functional(args: &str, expected: usize) -> Result<Rgba, ColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ColorError::ComponentCount {
            expected,
            found: parts.len(),
        });
    }

    let channel = |s: &str| -> Result<f32, ColorError> {
        match s.parse::<f32>() {
            Ok(v) if (0.0..=255.0).contains(&v) => Ok(v / 255.0),
            _ => Err(ColorError::Component(s.to_string())),
        }
    };

    let alpha = match parts.get(3) {
        Some(s) => match s.parse::<f32>() {
            Ok(v) if (0.0..=1.0).contains(&v) => v,
            _ => return Err(ColorError::Component(s.to_string())),
        },
        None => 1.0,
    };

    Ok(Rgba::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let c = Rgba::parse("#0d1117").unwrap();
        assert_eq!(c.to_u8(), [13, 17, 23, 255]);
    }

    #[test]
    fn test_parse_short_hex_expands_nibbles() {
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::WHITE);
        assert_eq!(Rgba::parse("#f008").unwrap().to_u8(), [255, 0, 0, 136]);
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(
            Rgba::parse("  #FFFFFF ").unwrap(),
            Rgba::parse("#ffffff").unwrap()
        );
        assert_eq!(Rgba::parse("White").unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_parse_functional() {
        let c = Rgba::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(c, Rgba::new(1.0, 0.0, 0.0, 0.5));
        assert_eq!(Rgba::parse("rgb(0,0,0)").unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgba::parse(""), Err(ColorError::Empty));
        assert_eq!(Rgba::parse("#12345"), Err(ColorError::HexLength(5)));
        assert!(matches!(Rgba::parse("#ggg"), Err(ColorError::HexDigit(_))));
        assert!(matches!(
            Rgba::parse("rgb(1, 2)"),
            Err(ColorError::ComponentCount { expected: 3, found: 2 })
        ));
        assert!(matches!(
            Rgba::parse("rgb(300, 0, 0)"),
            Err(ColorError::Component(_))
        ));
        assert!(matches!(Rgba::parse("snow-ish"), Err(ColorError::Unknown(_))));
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha(0.25).a, 0.25);
        assert_eq!(Rgba::WHITE.with_alpha(3.0).a, 1.0);
    }
}
