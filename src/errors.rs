//! Errors raised while building a cone layout

use crate::float_types::Real;

/// The geometric constraint a [`ConeSpec`](crate::cone::ConeSpec) violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryConstraint {
    /// (BaseNotPositive) The base diameter must be greater than zero
    BaseNotPositive(Real),
    /// (CutNegative) The cut diameter must not be negative
    CutNegative(Real),
    /// (HeightNotPositive) The cone height must be greater than zero
    HeightNotPositive(Real),
    /// (CutNotBelowBase) The base diameter must exceed the cut diameter
    CutNotBelowBase { base: Real, cut: Real },
    /// (NonFinite) An input is NaN or infinite
    NonFinite,
    /// (IllConditioned) The inputs are valid but the unfold overflows
    IllConditioned { base: Real, cut: Real },
}

impl std::fmt::Display for GeometryConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GeometryConstraint::*;

        match self {
            BaseNotPositive(base) => write!(f, "base diameter must be greater than zero (got {base})"),
            CutNegative(cut) => write!(f, "cut diameter must not be negative (got {cut})"),
            HeightNotPositive(height) => write!(f, "cone height must be greater than zero (got {height})"),
            CutNotBelowBase { base, cut } => write!(
                f,
                "base diameter must exceed cut diameter (base {base}, cut {cut})"
            ),
            NonFinite => write!(f, "all dimensions must be finite numbers"),
            IllConditioned { base, cut } => write!(
                f,
                "cut diameter {cut} is too close to base diameter {base} to unfold"
            ),
        }
    }
}

/// All the possible errors of the calculator and of its input parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConeError {
    /// The three primary dimensions do not describe a cone or frustum
    #[error("invalid geometry: {0}")]
    InvalidGeometry(GeometryConstraint),
    /// A linear unit other than `mm` or `in`
    #[error("unknown unit '{0}', expected 'mm' or 'in'")]
    UnknownUnit(String),
    /// A colour that is neither `#RRGGBB` nor a host RGBA integer
    #[error("invalid colour '{0}'")]
    InvalidColor(String),
    /// A configuration file that could not be read or understood
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<GeometryConstraint> for ConeError {
    fn from(constraint: GeometryConstraint) -> Self {
        Self::InvalidGeometry(constraint)
    }
}
