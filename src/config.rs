//! Run configuration: the cone dimensions plus how to draw them.
//!
//! A configuration can be read from JSON; every field is optional and falls
//! back to the defaults (a 300 / 100 / 200 mm frustum drawn in blue at 0.3 mm).
//!
//! ```json
//! {
//!   "cone":   { "base_diameter": 12, "cut_diameter": 4, "height": 8 },
//!   "render": { "unit": "in", "stroke_width": 0.01, "stroke": "#000000", "verbose": true }
//! }
//! ```

use crate::cone::{ConeLayout, ConeSpec};
use crate::errors::ConeError;
use crate::pattern::{Pattern, RenderConfig, render};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConeConfig {
    pub cone: ConeSpec,
    pub render: RenderConfig,
}

impl ConeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConeError> {
        serde_json::from_str(json).map_err(|e| ConeError::InvalidConfig(e.to_string()))
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConeError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Check both the geometry and the presentation settings.
    pub fn validate(&self) -> Result<(), ConeError> {
        self.cone.validate()?;
        let width = self.render.stroke_width;
        if !(width.is_finite() && width > 0.0) {
            return Err(ConeError::InvalidConfig(format!(
                "stroke width must be greater than zero (got {width})"
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> Result<ConeLayout, ConeError> {
        self.cone.layout()
    }

    /// Validate, unfold and draw.
    pub fn pattern(&self) -> Result<Pattern, ConeError> {
        self.validate()?;
        Ok(render(&self.layout()?, &self.render))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::units::LengthUnit;

    #[test]
    fn empty_json_gives_defaults() {
        let config = ConeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ConeConfig::default());
        assert_eq!(config.cone, ConeSpec::new(300.0, 100.0, 200.0));
        assert_eq!(config.render.unit, LengthUnit::Millimetre);
        assert_eq!(config.render.stroke, Rgb::BLUE);
        assert!(!config.render.verbose);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = ConeConfig::from_json_str(
            r#"{"cone": {"cut_diameter": 0}, "render": {"unit": "in", "stroke": -16776961}}"#,
        )
        .unwrap();
        assert_eq!(config.cone.cut_diameter, 0.0);
        assert_eq!(config.cone.base_diameter, 300.0);
        assert_eq!(config.render.unit, LengthUnit::Inch);
        assert_eq!(config.render.stroke, Rgb::new(0xff, 0, 0));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ConeConfig::from_json_str(r#"{"kerf": 0.2}"#).unwrap_err();
        assert!(matches!(err, ConeError::InvalidConfig(_)));
    }

    #[test]
    fn zero_stroke_width_is_invalid() {
        let mut config = ConeConfig::default();
        config.render.stroke_width = 0.0;
        assert!(matches!(config.validate(), Err(ConeError::InvalidConfig(_))));
    }
}
