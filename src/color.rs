//! Stroke colours.
//!
//! Host colour pickers hand colours over as a signed 32-bit integer packing
//! `R·256³ + G·256² + B·256 + A`. Everything downstream wants `#RRGGBB`.

use crate::errors::ConeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default stroke colour of the cut pattern (host value 896839168).
    pub const BLUE: Rgb = Rgb::new(0x35, 0x74, 0xae);
    /// Dimension lines and radius labels.
    pub const MARKER_DIM: Rgb = Rgb::new(0x70, 0x3c, 0xd6);
    /// Chord lines and chord labels.
    pub const MARKER_CHORDS: Rgb = Rgb::new(0x9d, 0x22, 0x22);
    /// Side view of the frustum.
    pub const MARKER_BASE: Rgb = Rgb::new(0x36, 0xba, 0x36);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a host RGBA integer. Negative values are the signed view of
    /// the same 32 bits; the alpha byte is dropped.
    pub const fn from_host_long(value: i64) -> Self {
        let rgba = (value & 0xFFFF_FFFF) as u32;
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
        }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 17);
                Some(Self::new(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            },
            _ => None,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLUE
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConeError;

    /// Accepts `#RRGGBB`, `#RGB`, or a decimal host RGBA integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => trimmed.parse::<i64>().ok().map(Self::from_host_long),
        };
        parsed.ok_or_else(|| ConeError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Host(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Host(value) => Ok(Rgb::from_host_long(value)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_colour_is_blue() {
        assert_eq!(Rgb::from_host_long(896839168), Rgb::BLUE);
        assert_eq!(Rgb::BLUE.to_string(), "#3574AE");
    }

    #[test]
    fn negative_host_long_is_reinterpreted() {
        // 0xFF0000FF as a signed 32-bit integer
        assert_eq!(Rgb::from_host_long(-16776961), Rgb::new(0xff, 0x00, 0x00));
    }

    #[test]
    fn alpha_byte_is_ignored() {
        assert_eq!(Rgb::from_host_long(0x9d22_2200), Rgb::MARKER_CHORDS);
        assert_eq!(Rgb::from_host_long(0x9d22_22ff), Rgb::MARKER_CHORDS);
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!("#703cd6".parse::<Rgb>().unwrap(), Rgb::MARKER_DIM);
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("896839168".parse::<Rgb>().unwrap(), Rgb::BLUE);
        assert!(matches!("#12345".parse::<Rgb>(), Err(ConeError::InvalidColor(_))));
        assert!(matches!("blue".parse::<Rgb>(), Err(ConeError::InvalidColor(_))));
    }

    #[test]
    fn serde_accepts_string_or_integer() {
        let from_int: Rgb = serde_json::from_str("896839168").unwrap();
        let from_str: Rgb = serde_json::from_str("\"#3574AE\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(serde_json::to_string(&from_int).unwrap(), "\"#3574AE\"");
    }
}
