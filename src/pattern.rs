//! The flat pattern as a list of vector primitives in drawing units.
//!
//! [`render`] turns a [`ConeLayout`] into a [`Pattern`]; the emitters in
//! [`crate::io`] turn a [`Pattern`] into files.

use crate::annotate;
use crate::color::Rgb;
use crate::cone::ConeLayout;
use crate::float_types::{PI, Real};
use crate::style::{LineStyle, TextStyle};
use crate::units::LengthUnit;
use geo::{Rect, coord};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Presentation settings of a single rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub unit: LengthUnit,
    /// Line thickness in `unit`. Lasercutters want this small.
    pub stroke_width: Real,
    pub stroke: Rgb,
    /// Add dimension lines and labels for every derived value.
    pub verbose: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Millimetre,
            stroke_width: 0.3,
            stroke: Rgb::BLUE,
            verbose: false,
        }
    }
}

impl RenderConfig {
    /// Drawing units per unit of the cone dimensions.
    pub const fn factor(&self) -> Real {
        self.unit.factor()
    }

    /// The style of the cut lines.
    pub fn line_style(&self) -> LineStyle {
        LineStyle::solid(self.stroke, self.unit.to_drawing(self.stroke_width))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Point2<Real>,
        to: Point2<Real>,
        style: LineStyle,
        label: Option<String>,
    },
    /// Circular arc swept counter-clockwise (in math orientation) from
    /// `start_angle` to `end_angle`, both in radians.
    Arc {
        center: Point2<Real>,
        radius: Real,
        start_angle: Real,
        end_angle: Real,
        style: LineStyle,
        label: Option<String>,
    },
    Polyline {
        points: Vec<Point2<Real>>,
        closed: bool,
        style: LineStyle,
        label: Option<String>,
    },
    /// Text anchored at `position`, rotated by `rotation` degrees around it.
    Text {
        position: Point2<Real>,
        content: String,
        rotation: Real,
        style: TextStyle,
    },
    /// Children shifted by `offset`.
    Group {
        label: String,
        offset: Vector2<Real>,
        children: Vec<Primitive>,
    },
}

impl Primitive {
    pub fn line(from: Point2<Real>, to: Point2<Real>, style: &LineStyle) -> Self {
        Primitive::Line {
            from,
            to,
            style: style.clone(),
            label: None,
        }
    }

    pub fn text(position: Point2<Real>, content: impl Into<String>, style: &TextStyle) -> Self {
        Primitive::Text {
            position,
            content: content.into(),
            rotation: 0.0,
            style: style.clone(),
        }
    }

    /// Attach an editor label to a line, arc or polyline. No-op for text and groups.
    pub fn labeled(mut self, name: &str) -> Self {
        match &mut self {
            Primitive::Line { label, .. }
            | Primitive::Arc { label, .. }
            | Primitive::Polyline { label, .. } => *label = Some(name.to_string()),
            Primitive::Text { .. } | Primitive::Group { .. } => {},
        }
        self
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Primitive::Line { label, .. }
            | Primitive::Arc { label, .. }
            | Primitive::Polyline { label, .. } => label.as_deref(),
            Primitive::Group { label, .. } => Some(label),
            Primitive::Text { .. } => None,
        }
    }

    /// Points whose hull bounds this primitive, shifted by `offset`.
    /// Text contributes its anchor only.
    fn extent_points(&self, offset: Vector2<Real>, out: &mut Vec<Point2<Real>>) {
        match self {
            Primitive::Line { from, to, .. } => {
                out.push(from + offset);
                out.push(to + offset);
            },
            Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                let at = |angle: Real| {
                    let (sin, cos) = angle.sin_cos();
                    center + offset + Vector2::new(radius * cos, radius * sin)
                };
                out.push(at(*start_angle));
                out.push(at(*end_angle));
                // axis extremes inside the sweep
                let first_quarter = (start_angle / (PI / 2.0)).floor() as i64 + 1;
                let mut quarter = first_quarter;
                while (quarter as Real) * PI / 2.0 < *end_angle {
                    out.push(at(quarter as Real * PI / 2.0));
                    quarter += 1;
                }
            },
            Primitive::Polyline { points, .. } => {
                out.extend(points.iter().map(|p| p + offset));
            },
            Primitive::Text { position, .. } => out.push(position + offset),
            Primitive::Group {
                offset: inner,
                children,
                ..
            } => {
                for child in children {
                    child.extent_points(offset + inner, out);
                }
            },
        }
    }
}

/// A labelled, ordered set of primitives in drawing units, origin at the cone apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub label: String,
    pub primitives: Vec<Primitive>,
}

impl Pattern {
    pub const GROUP_LABEL: &'static str = "Sheet Metal Conus Group";

    /// Axis-aligned bounds of every primitive, `None` for an empty pattern.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        let mut points = Vec::new();
        for primitive in &self.primitives {
            primitive.extent_points(Vector2::zeros(), &mut points);
        }
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::new(
            coord! { x: min.x, y: min.y },
            coord! { x: max.x, y: max.y },
        ))
    }

    /// Iterate the primitives, descending into groups.
    pub fn flatten(&self) -> Vec<&Primitive> {
        fn walk<'a>(primitives: &'a [Primitive], out: &mut Vec<&'a Primitive>) {
            for p in primitives {
                match p {
                    Primitive::Group { children, .. } => walk(children, out),
                    other => out.push(other),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.primitives, &mut out);
        out
    }

    /// Find a top-level or nested primitive by its label.
    pub fn find(&self, name: &str) -> Option<&Primitive> {
        fn search<'a>(primitives: &'a [Primitive], name: &str) -> Option<&'a Primitive> {
            for p in primitives {
                if p.label() == Some(name) {
                    return Some(p);
                }
                if let Primitive::Group { children, .. } = p {
                    if let Some(found) = search(children, name) {
                        return Some(found);
                    }
                }
            }
            None
        }
        search(&self.primitives, name)
    }
}

/// Draw the flat pattern of `layout`: edges A–B and C–D, arcs A–D and B–C
/// centered on the apex, plus the dimension markup when `config.verbose`.
///
/// All coordinates are multiplied by the unit factor of `config`.
/// The short arc is left out for a full cone.
pub fn render(layout: &ConeLayout, config: &RenderConfig) -> Pattern {
    let factor = config.factor();
    let style = config.line_style();
    let scale = |p: Point2<Real>| p * factor;

    let mut primitives = vec![
        Primitive::line(scale(layout.a()), scale(layout.b()), &style).labeled("lineAB"),
        Primitive::line(scale(layout.c()), scale(layout.d()), &style).labeled("lineCD"),
    ];

    let arc = |radius: Real, name: &str| Primitive::Arc {
        center: Point2::origin(),
        radius: radius * factor,
        start_angle: 0.0,
        end_angle: layout.sector_angle(),
        style: style.clone(),
        label: Some(name.to_string()),
    };
    if layout.short_radius() > 0.0 {
        primitives.push(arc(layout.short_radius(), "arcAD"));
    }
    primitives.push(arc(layout.long_radius(), "arcBC"));

    if config.verbose {
        primitives.push(annotate::dimension_markup(layout, config));
    }

    trace!(count = primitives.len(), verbose = config.verbose, "rendered pattern");

    Pattern {
        label: Pattern::GROUP_LABEL.to_string(),
        primitives,
    }
}
