//! Immutable drawing styles.
//!
//! Every drawing call receives the style it draws with; nothing is toggled
//! on shared state between calls.

use crate::color::Rgb;
use crate::float_types::Real;
use std::fmt::Write;

/// Stroke of a line, arc or polyline. Widths are in drawing units.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub stroke: Rgb,
    pub stroke_width: Real,
    /// `stroke-dasharray` pattern, empty for a solid line
    pub dash_array: Vec<Real>,
}

impl LineStyle {
    pub const fn solid(stroke: Rgb, stroke_width: Real) -> Self {
        Self {
            stroke,
            stroke_width,
            dash_array: Vec::new(),
        }
    }

    pub fn dashed(stroke: Rgb, stroke_width: Real, dash_array: &[Real]) -> Self {
        Self {
            stroke,
            stroke_width,
            dash_array: dash_array.to_vec(),
        }
    }

    /// CSS `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "stroke:{};stroke-width:{};fill:none",
            self.stroke, self.stroke_width
        );
        if !self.dash_array.is_empty() {
            let dashes: Vec<String> = self.dash_array.iter().map(|d| d.to_string()).collect();
            let _ = write!(
                css,
                ";stroke-miterlimit:4;stroke-dasharray:{};stroke-dashoffset:0",
                dashes.join(", ")
            );
        }
        css
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub fill: Rgb,
    /// Font height in drawing units.
    pub font_size: Real,
    pub font_family: String,
}

impl TextStyle {
    pub fn new(fill: Rgb, font_size: Real) -> Self {
        Self {
            fill,
            font_size,
            font_family: "arial".to_string(),
        }
    }

    pub fn with_fill(&self, fill: Rgb) -> Self {
        Self {
            fill,
            ..self.clone()
        }
    }

    /// Labels are always centred on their anchor point.
    pub fn to_css(&self) -> String {
        format!(
            "font-size:{};font-family:{};text-anchor:middle;text-align:center;fill:{}",
            self.font_size, self.font_family, self.fill
        )
    }
}

/// The styles of the dimension markup, derived once from the pattern stroke
/// width and the cone height.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupStyle {
    pub dimension: LineStyle,
    pub chord: LineStyle,
    pub side_view: LineStyle,
    pub label: TextStyle,
}

impl MarkupStyle {
    /// `stroke_width` is the pattern stroke in drawing units, `cone_height`
    /// the cone height in drawing units.
    pub fn new(stroke_width: Real, cone_height: Real) -> Self {
        let width = (stroke_width / 2.0).max(0.1);
        let font_size = Self::font_size_for(cone_height);
        Self {
            dimension: LineStyle::solid(Rgb::MARKER_DIM, width),
            chord: LineStyle::dashed(Rgb::MARKER_CHORDS, width * 2.0, &[4.0, 2.0, 1.0, 2.0]),
            side_view: LineStyle::solid(Rgb::MARKER_BASE, width),
            label: TextStyle::new(Rgb::MARKER_DIM, font_size),
        }
    }

    /// One sixteenth of the cone height, whole units, between 10 and 32.
    pub fn font_size_for(cone_height: Real) -> Real {
        (cone_height / 16.0).trunc().clamp(10.0, 32.0)
    }
}
