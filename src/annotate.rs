//! Dimension markup drawn next to the flat pattern when verbose output is on:
//! radius ticks and labels, the sector angle, both chords, and a side view of
//! the frustum with its height and diameters.

use crate::color::Rgb;
use crate::cone::ConeLayout;
use crate::float_types::Real;
use crate::pattern::{Primitive, RenderConfig};
use crate::style::MarkupStyle;
use nalgebra::{Point2, Vector2};

/// Cut diameters below this are drawn as a full cone (no cut labels).
const MIN_LABELED_CUT: Real = 0.001;

/// Build the "markup" group for `layout`. Coordinates are in drawing units,
/// the apex at the origin.
pub fn dimension_markup(layout: &ConeLayout, config: &RenderConfig) -> Primitive {
    let factor = config.factor();
    let spec = layout.spec();
    let markup = MarkupStyle::new(
        config.unit.to_drawing(config.stroke_width),
        spec.height * factor,
    );

    let mut children = Vec::new();
    children.extend(radius_markup(layout, factor, &markup));
    children.extend(chord_markup(layout, factor, &markup));
    children.push(side_view(layout, factor, &markup));

    Primitive::Group {
        label: "markup".to_string(),
        offset: Vector2::zeros(),
        children,
    }
}

/// Apex cross, radius ticks, span line and radius/angle labels.
fn radius_markup(layout: &ConeLayout, factor: Real, markup: &MarkupStyle) -> Vec<Primitive> {
    let style = &markup.dimension;
    let short = layout.short_radius() * factor;
    let long = layout.long_radius() * factor;
    let is_cut = layout.spec().cut_diameter != 0.0;

    let arm = (long / 100.0).max(5.0);
    let mut out = vec![
        Primitive::line(Point2::new(-arm, -arm), Point2::new(arm, arm), style).labeled("center"),
        Primitive::line(Point2::new(-arm, arm), Point2::new(arm, -arm), style).labeled("center"),
        Primitive::line(Point2::new(0.0, 0.0), Point2::new(0.0, -30.0), style),
    ];
    if is_cut {
        out.push(Primitive::line(Point2::new(short, -3.0), Point2::new(short, -30.0), style));
    }
    out.push(Primitive::line(Point2::new(long, -3.0), Point2::new(long, -30.0), style));
    out.push(Primitive::line(Point2::new(0.0, -10.0), Point2::new(long, -10.0), style));

    if layout.spec().cut_diameter >= MIN_LABELED_CUT {
        out.push(Primitive::text(
            Point2::new(short / 2.0, -15.0),
            format!("{:4.3}", layout.short_radius()),
            &markup.label,
        ));
    }
    out.push(Primitive::text(
        Point2::new(short + (long - short) / 2.0, -15.0),
        format!("{:4.3}", layout.long_radius()),
        &markup.label,
    ));
    out.push(Primitive::text(
        Point2::new(0.0, 30.0),
        format!("Angle {:4.2}", layout.sector_angle_degrees()),
        &markup.label,
    ));
    out
}

/// Dashed chords A–D and B–C with their lengths written along B–C.
fn chord_markup(layout: &ConeLayout, factor: Real, markup: &MarkupStyle) -> Vec<Primitive> {
    let (a, b, c, d) = (
        layout.a() * factor,
        layout.b() * factor,
        layout.c() * factor,
        layout.d() * factor,
    );
    let mut out = vec![
        Primitive::line(a, d, &markup.chord),
        Primitive::line(b, c, &markup.chord),
    ];

    let text_style = markup.label.with_fill(Rgb::MARKER_CHORDS);
    let font = text_style.font_size;
    let center = Point2::from((b.coords + c.coords) / 2.0);
    let direction = layout.b() - layout.c();
    let line_angle = direction.y.atan2(direction.x).to_degrees();

    let ypos = if line_angle < 0.0 {
        center.y + font + 2.0
    } else {
        center.y - 2.0
    };
    out.push(Primitive::Text {
        position: Point2::new(center.x, ypos),
        content: format!("{:4.2}", layout.chord_base()),
        rotation: line_angle,
        style: text_style.clone(),
    });

    if layout.spec().cut_diameter >= MIN_LABELED_CUT {
        let xpos = center.x - font * line_angle.abs().to_radians().sin();
        let ypos = if line_angle < 0.0 {
            center.y - 2.0
        } else {
            center.y + font + 2.0
        };
        out.push(Primitive::Text {
            position: Point2::new(xpos, ypos),
            content: format!("{:4.2}", layout.chord_cut()),
            rotation: line_angle,
            style: text_style,
        });
    }
    out
}

/// Cross-section of the frustum, placed below the apex so that its cut edge
/// sits where the cut circle would be.
fn side_view(layout: &ConeLayout, factor: Real, markup: &MarkupStyle) -> Primitive {
    let spec = layout.spec();
    let half_cut = spec.cut_diameter / 2.0 * factor;
    let half_base = spec.base_diameter / 2.0 * factor;
    let height = spec.height * factor;
    let short = layout.short_radius() * factor;

    let style = &markup.side_view;
    let text_style = markup.label.with_fill(Rgb::MARKER_BASE);
    let font = text_style.font_size;

    let mut children = vec![
        Primitive::Polyline {
            points: vec![
                Point2::new(-half_cut, 0.0),
                Point2::new(half_cut, 0.0),
                Point2::new(half_base, height),
                Point2::new(-half_base, height),
            ],
            closed: true,
            style: style.clone(),
            label: Some("frustum".to_string()),
        },
        Primitive::line(
            Point2::new(-(5.0 + half_cut), 0.0),
            Point2::new(-(5.0 + half_base), 0.0),
            style,
        ),
        Primitive::line(
            Point2::new(-half_base, 0.0),
            Point2::new(-half_base, height - 5.0),
            style,
        ),
        Primitive::text(
            Point2::new(-(18.0 + half_base), height / 2.0),
            format!("{:4.3}", spec.height),
            &text_style,
        ),
    ];
    if spec.cut_diameter >= MIN_LABELED_CUT {
        children.push(Primitive::text(
            Point2::new(0.0, font),
            format!("{:4.3}", spec.cut_diameter),
            &text_style,
        ));
    }
    children.push(Primitive::text(
        Point2::new(0.0, height + font),
        format!("{:4.3}", spec.base_diameter),
        &text_style,
    ));

    // apex-to-cut height; rounding can push the radicand just below zero
    let drop = (short * short - half_cut * half_cut).max(0.0).sqrt();
    Primitive::Group {
        label: "side view".to_string(),
        offset: Vector2::new(1.0, drop),
        children,
    }
}
