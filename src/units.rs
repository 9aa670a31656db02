//! Linear units of the cone dimensions and their conversion into drawing units.

use crate::errors::ConeError;
use crate::float_types::{INCH, PX_PER_INCH, Real};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The unit the user measures the cone in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "mm", alias = "millimetre", alias = "millimeter")]
    Millimetre,
    #[serde(rename = "in", alias = "inch")]
    Inch,
}

impl LengthUnit {
    /// Drawing units (CSS px at 96 per inch) per one of `self`.
    pub const fn factor(self) -> Real {
        match self {
            LengthUnit::Millimetre => PX_PER_INCH / INCH,
            LengthUnit::Inch => PX_PER_INCH,
        }
    }

    /// Convert a length in `self` into drawing units.
    #[inline]
    pub const fn to_drawing(self, value: Real) -> Real {
        value * self.factor()
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            LengthUnit::Millimetre => "mm",
            LengthUnit::Inch => "in",
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for LengthUnit {
    type Err = ConeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimetre" | "millimeter" => Ok(LengthUnit::Millimetre),
            "in" | "inch" => Ok(LengthUnit::Inch),
            _ => Err(ConeError::UnknownUnit(s.to_string())),
        }
    }
}
