use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// 8-bit sRGB color as used by chart configuration.
///
/// Serialized as `#rrggbb`; `#rgb` shorthand is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb8 {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Scales every channel by `(100 + percent) / 100`, clamped to `[0, 255]`.
    ///
    /// Negative `percent` darkens, positive lightens.
    #[must_use]
    pub fn shade(self, percent: f64) -> Self {
        let factor = (100.0 + percent) / 100.0;
        let channel = |value: u8| -> u8 {
            let scaled = (f64::from(value) * factor).round();
            if scaled.is_nan() {
                return 0;
            }
            scaled.clamp(0.0, 255.0) as u8
        };
        Self {
            red: channel(self.red),
            green: channel(self.green),
            blue: channel(self.blue),
        }
    }

    #[must_use]
    pub fn darken(self, percent: f64) -> Self {
        self.shade(-percent.abs())
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        Color::rgb(
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Channel-wise linear interpolation, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        let mix = |from: u8, to: u8| -> u8 {
            let from = f64::from(from);
            (from + (f64::from(to) - from) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            red: mix(self.red, target.red),
            green: mix(self.green, target.green),
            blue: mix(self.blue, target.blue),
        }
    }

    pub fn parse_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("color `{input}` must start with `#`"))
        })?;
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` must have 3 or 6 hex digits"
                )));
            }
        };
        let channel = |range: std::ops::Range<usize>| -> ChartResult<u8> {
            expanded
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| {
                    ChartError::InvalidData(format!("color `{input}` contains non-hex digits"))
                })
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb8 {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb8;

    #[test]
    fn shade_clamps_each_channel() {
        let color = Rgb8::new(200, 100, 0);
        assert_eq!(color.shade(50.0), Rgb8::new(255, 150, 0));
        assert_eq!(color.shade(-100.0), Rgb8::new(0, 0, 0));
        assert_eq!(color.shade(-250.0), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn darken_ignores_sign_of_amount() {
        let color = Rgb8::new(100, 100, 100);
        assert_eq!(color.darken(20.0), Rgb8::new(80, 80, 80));
        assert_eq!(color.darken(-20.0), Rgb8::new(80, 80, 80));
    }

    #[test]
    fn hex_parsing_accepts_short_and_long_forms() {
        assert_eq!(Rgb8::parse_hex("#fff").expect("short"), Rgb8::new(255, 255, 255));
        assert_eq!(Rgb8::parse_hex("#4f46e5").expect("long"), Rgb8::new(79, 70, 229));
        assert!(Rgb8::parse_hex("4f46e5").is_err());
        assert!(Rgb8::parse_hex("#12345").is_err());
        assert!(Rgb8::parse_hex("#zzzzzz").is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb8::new(79, 70, 229).to_string(), "#4f46e5");
    }

    #[test]
    fn lerp_reaches_endpoints() {
        let from = Rgb8::new(0, 0, 0);
        let to = Rgb8::new(200, 100, 50);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 0.5), Rgb8::new(100, 50, 25));
    }
}
