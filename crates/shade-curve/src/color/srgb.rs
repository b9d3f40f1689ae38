//! Gamma-encoded sRGB, the space hex and `rgb()` output is written in.

use std::str::FromStr;

use super::linear_rgb::{linear_to_srgb, LinearRgb};
use crate::error::ParseColorError;

/// Encoded sRGB with channels nominally in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// ```
    /// use shade_curve::Srgb;
    /// assert_eq!(Srgb::from_u8(255, 0, 0).r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = [r, g, b].map(|v| f64::from(v) / 255.0);
        Self { r, g, b }
    }

    /// 8-bit channels, rounded and saturated at 0 and 255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// ```
    /// use shade_curve::Srgb;
    /// assert_eq!(Srgb::from_u8(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<LinearRgb> for Srgb {
    fn from(linear: LinearRgb) -> Self {
        Self::new(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Accepts `rgb` or `rrggbb` hex digits in any case, with or without a
    /// leading `#`. Surrounding whitespace is ignored.
    ///
    /// ```
    /// use shade_curve::Srgb;
    /// let orange: Srgb = "#F80".parse().unwrap();
    /// assert_eq!(orange.to_hex(), "#ff8800");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        // width of one channel in hex digits
        let width = match digits.len() {
            3 => 1,
            6 => 2,
            _ => return Err(ParseColorError::InvalidLength),
        };
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let v = u8::from_str_radix(&digits[i * width..(i + 1) * width], 16)?;
            // 0xf -> 0xff
            *channel = if width == 1 { v * 17 } else { v };
        }
        let [r, g, b] = channels;
        Ok(Self::from_u8(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_byte_survives_linearization() {
        for v in 0..=255u8 {
            let encoded = Srgb::from_u8(v, 255 - v, v / 2);
            let back = Srgb::from(LinearRgb::from(encoded));
            assert_eq!(back.to_bytes(), encoded.to_bytes(), "byte {v}");
        }
    }

    #[test]
    fn test_to_hex_is_lowercase_and_saturates() {
        assert_eq!(Srgb::from_u8(0xde, 0xad, 0x0b).to_hex(), "#dead0b");
        assert_eq!(Srgb::new(2.0, -1.0, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn test_parse_forms() {
        let cases = [
            ("#3366cc", [0x33, 0x66, 0xcc]),
            ("3366CC", [0x33, 0x66, 0xcc]),
            ("#36c", [0x33, 0x66, 0xcc]),
            ("\t#36C \n", [0x33, 0x66, 0xcc]),
            ("000", [0, 0, 0]),
        ];
        for (input, bytes) in cases {
            let parsed: Srgb = input.parse().unwrap();
            assert_eq!(parsed.to_bytes(), bytes, "{input:?}");
        }
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["", "#", "#12345", "#1234567", "#ééé"] {
            assert!(
                matches!(bad.parse::<Srgb>(), Err(ParseColorError::InvalidLength)),
                "{bad:?}"
            );
        }
        assert!(matches!(
            "#12z".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
    }
}
