use std::fmt;
use std::str::FromStr;

use crate::error::{ColorParseError, InvalidColorError};

/// One of the four components of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] =
        [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Straight (non-premultiplied) RGBA color with every channel normalized to
/// `[0.0, 1.0]`.
///
/// Fields are public so literals stay cheap to write; anything that stores a
/// color (the mix engine, deserialization) runs [`Color::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawColor"))]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Checked constructor.
    pub fn new(
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) -> Result<Self, InvalidColorError> {
        let color = Self {
            red,
            green,
            blue,
            alpha,
        };
        color.validate()?;
        Ok(color)
    }

    /// Opaque color from three channels.
    pub fn rgb(
        red: f64,
        green: f64,
        blue: f64,
    ) -> Result<Self, InvalidColorError> {
        Self::new(red, green, blue, 1.0)
    }

    /// Build from 8-bit channels. Always in range.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let norm = |v: u8| f64::from(v) / 255.0;
        Self {
            red: norm(red),
            green: norm(green),
            blue: norm(blue),
            alpha: norm(alpha),
        }
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Channels in `[red, green, blue, alpha]` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Reject NaN and anything outside `[0.0, 1.0]`, reporting the first
    /// offending channel.
    pub fn validate(&self) -> Result<(), InvalidColorError> {
        for channel in Channel::ALL {
            let value = self.channel(channel);
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidColorError { channel, value });
            }
        }
        Ok(())
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }

    /// Uppercase `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    fn parse_hex(raw: &str) -> Result<Self, ColorParseError> {
        let digits = raw.strip_prefix('#').unwrap_or(raw);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(raw.to_string()));
        }

        let bytes: Option<Vec<u8>> = match digits.len() {
            3 => digits
                .chars()
                .map(|c| c.to_digit(16).map(|v| v as u8 * 17))
                .collect(),
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
                .collect(),
            _ => None,
        };

        match bytes.as_deref() {
            Some(&[r, g, b]) => Ok(Self::from_rgba8(r, g, b, 255)),
            Some(&[r, g, b, a]) => Ok(Self::from_rgba8(r, g, b, a)),
            _ => Err(ColorParseError::InvalidHex(raw.to_string())),
        }
    }

    fn parse_components(raw: &str) -> Result<Self, ColorParseError> {
        let values = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ColorParseError::InvalidComponents(raw.to_string()))?;

        match values.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)?),
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)?),
            _ => Err(ColorParseError::InvalidComponents(raw.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional) or a comma
/// separated `r,g,b[,a]` list of normalized floats.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if trimmed.contains(',') {
            Self::parse_components(trimmed)
        } else {
            Self::parse_hex(trimmed)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColor {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl TryFrom<RawColor> for Color {
    type Error = InvalidColorError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        Color::new(raw.red, raw.green, raw.blue, raw.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_channel() {
        let err = Color::new(1.5, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.channel, Channel::Red);
        assert_eq!(err.value, 1.5);

        let err = Color::new(0.0, 0.0, 0.0, -0.1).unwrap_err();
        assert_eq!(err.channel, Channel::Alpha);
    }

    #[test]
    fn new_rejects_nan() {
        let err = Color::new(0.0, f64::NAN, 0.0, 1.0).unwrap_err();
        assert_eq!(err.channel, Channel::Green);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Color::new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(Color::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn parses_hex_forms() {
        let red: Color = "#FF0000".parse().unwrap();
        assert_eq!(red, Color::from_rgba8(255, 0, 0, 255));

        let short: Color = "0f0".parse().unwrap();
        assert_eq!(short, Color::from_rgba8(0, 255, 0, 255));

        let translucent: Color = "#0000ff80".parse().unwrap();
        assert_eq!(translucent.to_rgba8(), [0, 0, 255, 128]);
    }

    #[test]
    fn parses_component_lists() {
        let c: Color = "0.5, 0.25, 0, 1".parse().unwrap();
        assert_eq!(c, Color::new(0.5, 0.25, 0.0, 1.0).unwrap());

        let opaque: Color = "1,0,0".parse().unwrap();
        assert_eq!(opaque.alpha, 1.0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "1,0".parse::<Color>(),
            Err(ColorParseError::InvalidComponents(_))
        ));
        assert!(matches!(
            "1.5,0,0".parse::<Color>(),
            Err(ColorParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn hex_output_is_uppercase_with_alpha() {
        let c = Color::new(0.5, 0.0, 0.5, 1.0).unwrap();
        assert_eq!(c.to_hex(), "#800080FF");
        assert_eq!(c.to_string(), "#800080FF");
    }

    #[test]
    fn eight_bit_values_survive_hex_formatting() {
        for v in [0u8, 1, 17, 128, 200, 254, 255] {
            let c = Color::from_rgba8(v, 255 - v, v / 2, 255);
            let back: Color = c.to_hex().parse().unwrap();
            assert_eq!(back.to_rgba8(), c.to_rgba8());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_channels() {
        let ok: Color =
            serde_json::from_str(r#"{"red":1.0,"green":0.0,"blue":0.0}"#)
                .unwrap();
        assert_eq!(ok.alpha, 1.0);

        let bad = serde_json::from_str::<Color>(
            r#"{"red":2.0,"green":0.0,"blue":0.0,"alpha":1.0}"#,
        );
        assert!(bad.is_err());
    }
}
