//! Solid colour parsing for fill, stroke and shadow styles

use crate::error::{RasterError, RasterResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a CSS name
    pub fn parse(value: &str) -> RasterResult<Self> {
        let value = value.trim();
        let invalid = || RasterError::InvalidColor(value.to_string());

        if let Some(hex) = value.strip_prefix('#') {
            return hex_to_rgba(hex).ok_or_else(invalid);
        }
        if let Some(args) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return functional(args).ok_or_else(invalid);
        }
        named(&value.to_lowercase()).ok_or_else(invalid)
    }
}

fn hex_to_rgba(hex: &str) -> Option<Rgba> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| f64::from(v) / 255.0);
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let mut next = || digits.next().flatten().map(|d| f64::from(d * 17) / 255.0);
            Some(Rgba::rgb(next()?, next()?, next()?))
        }
        6 => Some(Rgba::rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        8 => Some(Rgba::rgba(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
            channel(hex.get(6..8)?)?,
        )),
        _ => None,
    }
}

fn functional(args: &str) -> Option<Rgba> {
    let parts: Vec<f64> = args
        .split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let byte = |v: f64| (v / 255.0).clamp(0.0, 1.0);
    match parts.as_slice() {
        [r, g, b] => Some(Rgba::rgb(byte(*r), byte(*g), byte(*b))),
        [r, g, b, a] => Some(Rgba::rgba(byte(*r), byte(*g), byte(*b), a.clamp(0.0, 1.0))),
        _ => None,
    }
}

fn named(name: &str) -> Option<Rgba> {
    let color = match name {
        "black" => Rgba::rgb(0.0, 0.0, 0.0),
        "white" => Rgba::rgb(1.0, 1.0, 1.0),
        "red" => Rgba::rgb(1.0, 0.0, 0.0),
        "green" => Rgba::rgb(0.0, 128.0 / 255.0, 0.0),
        "lime" => Rgba::rgb(0.0, 1.0, 0.0),
        "blue" => Rgba::rgb(0.0, 0.0, 1.0),
        "yellow" => Rgba::rgb(1.0, 1.0, 0.0),
        "cyan" | "aqua" => Rgba::rgb(0.0, 1.0, 1.0),
        "magenta" | "fuchsia" => Rgba::rgb(1.0, 0.0, 1.0),
        "gray" | "grey" => Rgba::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0),
        "orange" => Rgba::rgb(1.0, 165.0 / 255.0, 0.0),
        "transparent" => Rgba::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Rgba::parse("#000000").unwrap(), Rgba::rgb(0.0, 0.0, 0.0));
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::rgb(1.0, 1.0, 1.0));
        assert_eq!(Rgba::parse("#ff000000").unwrap(), Rgba::rgba(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_named_and_functional() {
        assert_eq!(Rgba::parse("Black").unwrap(), Rgba::rgb(0.0, 0.0, 0.0));
        assert_eq!(Rgba::parse("rgb(255, 0, 255)").unwrap(), Rgba::rgb(1.0, 0.0, 1.0));
        assert_eq!(Rgba::parse("rgba(0,0,0,0.5)").unwrap().a, 0.5);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(Rgba::parse("#12"), Err(RasterError::InvalidColor(_))));
        assert!(Rgba::parse("chartreuse-ish").is_err());
        assert!(Rgba::parse("rgb(1,2)").is_err());
        assert!(Rgba::parse("#gggggg").is_err());
    }
}
