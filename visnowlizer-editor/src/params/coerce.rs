//! Turning raw control input into stored values.
//!
//! Policy: non-finite numbers and unparseable text count as `0`, then the
//! value is clamped to the parameter's range and, for integer parameters,
//! rounded. Nothing here fails.

use super::spec::ParamSpec;

/// Clamp a number into `spec`'s range.
pub fn clamp_to(spec: &ParamSpec, value: f64) -> f64 {
    let value = if value.is_finite() { value } else { 0.0 };
    let clamped = value.clamp(spec.min, spec.max);
    if spec.integer {
        clamped.round()
    } else {
        clamped
    }
}

/// Parse control text as a number, falling back to `0` when it is not one.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_then_clamp(spec: &ParamSpec, text: &str) -> f64 {
    clamp_to(spec, parse_number(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNT: ParamSpec = ParamSpec {
        key: "count",
        label: "Count",
        min: 1.0,
        max: 200.0,
        step: 1.0,
        default: 50.0,
        integer: true,
    };

    const SPEED: ParamSpec = ParamSpec {
        key: "speed",
        label: "Speed",
        min: 1.0,
        max: 50.0,
        step: 0.5,
        default: 3.0,
        integer: false,
    };

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_to(&COUNT, -5.0), 1.0);
        assert_eq!(clamp_to(&COUNT, 9999.0), 200.0);
        assert_eq!(clamp_to(&SPEED, 2.75), 2.75);
    }

    #[test]
    fn test_integer_rounding() {
        assert_eq!(clamp_to(&COUNT, 12.4), 12.0);
        assert_eq!(clamp_to(&COUNT, 12.5), 13.0);
    }

    #[test]
    fn test_non_finite_treated_as_zero() {
        assert_eq!(clamp_to(&COUNT, f64::NAN), 1.0);
        assert_eq!(clamp_to(&SPEED, f64::INFINITY), 1.0);
    }

    #[test]
    fn test_parse_number_fallback() {
        assert_eq!(parse_number(" 42 "), 42.0);
        assert_eq!(parse_number("1e2"), 100.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("lots"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("-inf"), 0.0);
    }

    #[test]
    fn test_parse_then_clamp() {
        assert_eq!(parse_then_clamp(&COUNT, "abc"), 1.0);
        assert_eq!(parse_then_clamp(&COUNT, "150"), 150.0);
        assert_eq!(parse_then_clamp(&SPEED, "  7.5"), 7.5);
    }
}
