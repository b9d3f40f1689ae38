//! Color channels, their sampling bounds and curve endpoints.

use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// One of the three independently curved channels of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Lightness, Channel::Saturation, Channel::Hue];

    pub fn key(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
        }
    }

    /// Valid output range for sampled values (native OKLCH units).
    pub fn bounds(self) -> ChannelBounds {
        match self {
            // Past 360 so a ramp can sweep across red without wrapping
            Channel::Hue => ChannelBounds::new(0.0, 480.0),
            Channel::Saturation => ChannelBounds::new(0.0, 0.5),
            Channel::Lightness => ChannelBounds::new(0.0, 1.0),
        }
    }
}

impl FromStr for Channel {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hue" | "h" => Ok(Channel::Hue),
            "saturation" | "chroma" | "s" | "c" => Ok(Channel::Saturation),
            "lightness" | "l" => Ok(Channel::Lightness),
            _ => Err(CurveError::UnknownChannel(s.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive output range of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelBounds {
    pub min: f64,
    pub max: f64,
}

impl ChannelBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Which on-curve point an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Endpoint {
    Start,
    End,
}

impl FromStr for Endpoint {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(Endpoint::Start),
            "end" => Ok(Endpoint::End),
            _ => Err(CurveError::UnknownEndpoint(s.to_string())),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_table() {
        assert_eq!(Channel::Hue.bounds(), ChannelBounds::new(0.0, 480.0));
        assert_eq!(Channel::Saturation.bounds(), ChannelBounds::new(0.0, 0.5));
        assert_eq!(Channel::Lightness.bounds(), ChannelBounds::new(0.0, 1.0));
    }

    #[test]
    fn test_clamp() {
        let b = Channel::Saturation.bounds();
        assert_eq!(b.clamp(-0.1), 0.0);
        assert_eq!(b.clamp(0.7), 0.5);
        assert_eq!(b.clamp(0.25), 0.25);
        // Hue is not wrapped when sampled
        assert_eq!(Channel::Hue.bounds().clamp(400.0), 400.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Hue".parse::<Channel>().unwrap(), Channel::Hue);
        assert_eq!("chroma".parse::<Channel>().unwrap(), Channel::Saturation);
        assert_eq!("l".parse::<Channel>().unwrap(), Channel::Lightness);
        assert!("alpha".parse::<Channel>().is_err());

        assert_eq!("END".parse::<Endpoint>().unwrap(), Endpoint::End);
        assert!(matches!(
            "middle".parse::<Endpoint>(),
            Err(CurveError::UnknownEndpoint(_))
        ));
    }
}
