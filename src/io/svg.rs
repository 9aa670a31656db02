//! SVG output of a [`Pattern`].
//!
//! Arcs carry `sodipodi:*` attributes next to their path data so that
//! Inkscape keeps them editable as arcs rather than as plain paths.

use crate::float_types::{PI, Real};
use crate::io::IoError;
use crate::pattern::{Pattern, Primitive};
use crate::style::LineStyle;
use std::path::Path as FsPath;
use svg::Document;
use svg::Node;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text};

const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";
const SODIPODI_NS: &str = "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd";

/// Blank space around the drawing, in drawing units.
pub const MARGIN: Real = 10.0;

impl Pattern {
    /// Build an SVG document. The pattern group is shifted so that the whole
    /// drawing, markup included, lies inside the page with [`MARGIN`] to spare.
    pub fn to_svg(&self) -> Document {
        let (min_x, min_y, width, height) = match self.bounding_rect() {
            Some(rect) => (rect.min().x, rect.min().y, rect.width(), rect.height()),
            None => (0.0, 0.0, 0.0, 0.0),
        };
        let page_width = width + 2.0 * MARGIN;
        let page_height = height + 2.0 * MARGIN;

        let mut group = Group::new()
            .set("inkscape:label", self.label.as_str())
            .set(
                "transform",
                format!(
                    "translate({},{})",
                    (MARGIN - min_x) as f32,
                    (MARGIN - min_y) as f32
                ),
            );
        for primitive in &self.primitives {
            group.append(to_node(primitive));
        }

        Document::new()
            .set("xmlns:inkscape", INKSCAPE_NS)
            .set("xmlns:sodipodi", SODIPODI_NS)
            .set("width", page_width as f32)
            .set("height", page_height as f32)
            .set(
                "viewBox",
                format!("0 0 {} {}", page_width as f32, page_height as f32),
            )
            .add(group)
    }

    pub fn to_svg_string(&self) -> String {
        self.to_svg().to_string()
    }

    pub fn write_svg(&self, path: impl AsRef<FsPath>) -> Result<(), IoError> {
        svg::save(path, &self.to_svg())?;
        Ok(())
    }
}

fn styled_path(data: Data, style: &LineStyle, label: &Option<String>) -> Path {
    let mut path = Path::new().set("style", style.to_css()).set("d", data);
    if let Some(label) = label {
        path.assign("inkscape:label", label.as_str());
    }
    path
}

fn to_node(primitive: &Primitive) -> Box<dyn Node> {
    match primitive {
        Primitive::Line {
            from,
            to,
            style,
            label,
        } => {
            let data = Data::new()
                .move_to((from.x as f32, from.y as f32))
                .line_to((to.x as f32, to.y as f32));
            Box::new(styled_path(data, style, label))
        },
        Primitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            style,
            label,
        } => {
            let sweep = end_angle - start_angle;
            let large_arc = if sweep > PI { 1.0 } else { 0.0 };
            let (start_sin, start_cos) = start_angle.sin_cos();
            let (end_sin, end_cos) = end_angle.sin_cos();
            let data = Data::new()
                .move_to((
                    (center.x + radius * start_cos) as f32,
                    (center.y + radius * start_sin) as f32,
                ))
                .elliptical_arc_to(vec![
                    *radius as f32,
                    *radius as f32,
                    0.0,
                    large_arc,
                    1.0,
                    (center.x + radius * end_cos) as f32,
                    (center.y + radius * end_sin) as f32,
                ]);
            let path = styled_path(data, style, label)
                .set("sodipodi:type", "arc")
                .set("sodipodi:cx", center.x as f32)
                .set("sodipodi:cy", center.y as f32)
                .set("sodipodi:rx", *radius as f32)
                .set("sodipodi:ry", *radius as f32)
                .set("sodipodi:start", *start_angle as f32)
                .set("sodipodi:end", *end_angle as f32)
                .set("sodipodi:open", "true");
            Box::new(path)
        },
        Primitive::Polyline {
            points,
            closed,
            style,
            label,
        } => {
            let mut data = Data::new();
            for (i, p) in points.iter().enumerate() {
                let xy = (p.x as f32, p.y as f32);
                data = if i == 0 { data.move_to(xy) } else { data.line_to(xy) };
            }
            if *closed {
                data = data.close();
            }
            Box::new(styled_path(data, style, label))
        },
        Primitive::Text {
            position,
            content,
            rotation,
            style,
        } => {
            let mut text = Text::new(content.as_str())
                .set("style", style.to_css())
                .set("x", position.x as f32)
                .set("y", position.y as f32);
            if *rotation != 0.0 {
                text.assign(
                    "transform",
                    format!(
                        "rotate({} {} {})",
                        *rotation as f32, position.x as f32, position.y as f32
                    ),
                );
            }
            Box::new(text)
        },
        Primitive::Group {
            label,
            offset,
            children,
        } => {
            let mut group = Group::new().set("inkscape:label", label.as_str());
            if offset.x != 0.0 || offset.y != 0.0 {
                group.assign(
                    "transform",
                    format!("translate({},{})", offset.x as f32, offset.y as f32),
                );
            }
            for child in children {
                group.append(to_node(child));
            }
            Box::new(group)
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::cone::ConeLayout;
    use crate::pattern::{RenderConfig, render};

    #[test]
    fn full_cone_has_single_arc() {
        let layout = ConeLayout::new(200.0, 0.0, 300.0).unwrap();
        let svg = render(&layout, &RenderConfig::default()).to_svg_string();
        assert_eq!(svg.matches("sodipodi:type=\"arc\"").count(), 1);
        assert!(svg.contains("arcBC"));
        assert!(!svg.contains("arcAD"));
    }

    #[test]
    fn frustum_edges_and_arcs_are_labelled() {
        let layout = ConeLayout::new(300.0, 100.0, 200.0).unwrap();
        let svg = render(&layout, &RenderConfig::default()).to_svg_string();
        for label in ["lineAB", "lineCD", "arcAD", "arcBC", "Sheet Metal Conus Group"] {
            assert!(svg.contains(label), "missing {label}");
        }
        assert!(svg.contains("stroke:#3574AE"));
        assert!(!svg.contains("markup"));
    }
}
