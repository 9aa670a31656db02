use crate::cone::ConeLayout;
use crate::io::IoError;
use crate::units::LengthUnit;
use std::path::Path;

use dxf::entities::{Arc, Entity, EntityType, Line};
use dxf::enums::{AcadVersion, Units};
use dxf::{Drawing, Point};

impl ConeLayout {
    #[doc = " Export the cut outline (edges A–B, C–D and arcs A–D, B–C) to DXF."]
    #[doc = ""]
    #[doc = " Coordinates stay in the linear unit of the cone; `unit` only sets the"]
    #[doc = " drawing's `$INSUNITS` so CAM software imports the blank at true size."]
    #[doc = ""]
    #[doc = " # Returns"]
    #[doc = " A `Result` containing the DXF file as a byte vector or an error if exporting fails."]
    pub fn to_dxf(&self, unit: LengthUnit) -> Result<Vec<u8>, IoError> {
        let mut drawing = Drawing::new();
        // $INSUNITS is only written from R2000 on
        drawing.header.version = AcadVersion::R2000;
        drawing.header.default_drawing_units = match unit {
            LengthUnit::Millimetre => Units::Millimeters,
            LengthUnit::Inch => Units::Inches,
        };

        #[allow(clippy::unnecessary_cast)]
        let point = |p: nalgebra::Point2<crate::float_types::Real>| Point::new(p.x as f64, p.y as f64, 0.0);

        for (from, to) in [(self.a(), self.b()), (self.c(), self.d())] {
            let line = Line::new(point(from), point(to));
            drawing.add_entity(Entity::new(EntityType::Line(line)));
        }

        let end_angle = self.sector_angle_degrees() as f64;
        let mut radii = vec![self.long_radius()];
        if self.short_radius() > 0.0 {
            radii.push(self.short_radius());
        }
        for radius in radii {
            // DXF arcs run counter-clockwise, in degrees
            let arc = Arc::new(Point::new(0.0, 0.0, 0.0), radius as f64, 0.0, end_angle);
            drawing.add_entity(Entity::new(EntityType::Arc(arc)));
        }

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }

    pub fn write_dxf(&self, unit: LengthUnit, path: impl AsRef<Path>) -> Result<(), IoError> {
        std::fs::write(path, self.to_dxf(unit)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_count(dxf: &str, kind: &str) -> usize {
        // group code 0 introduces every entity
        let lines: Vec<&str> = dxf.lines().map(str::trim).collect();
        lines
            .windows(2)
            .filter(|w| w[0] == "0" && w[1] == kind)
            .count()
    }

    #[test]
    fn frustum_exports_two_lines_and_two_arcs() {
        let layout = ConeLayout::new(300.0, 100.0, 200.0).unwrap();
        let bytes = layout.to_dxf(LengthUnit::Millimetre).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(entity_count(&text, "LINE"), 2);
        assert_eq!(entity_count(&text, "ARC"), 2);
    }

    /// Value of a header variable: the group code line after `$NAME`, then the value.
    fn header_value<'a>(dxf: &'a str, name: &str) -> Option<(&'a str, &'a str)> {
        let mut lines = dxf.lines().map(str::trim).skip_while(|l| *l != name).skip(1);
        Some((lines.next()?, lines.next()?))
    }

    #[test]
    fn header_records_drawing_units() {
        let layout = ConeLayout::new(12.0, 4.0, 8.0).unwrap();

        let inch = String::from_utf8(layout.to_dxf(LengthUnit::Inch).unwrap()).unwrap();
        assert_eq!(header_value(&inch, "$INSUNITS"), Some(("70", "1")));
        assert_eq!(header_value(&inch, "$ACADVER"), Some(("1", "AC1015")));

        let mm = String::from_utf8(layout.to_dxf(LengthUnit::Millimetre).unwrap()).unwrap();
        assert_eq!(header_value(&mm, "$INSUNITS"), Some(("70", "4")));
    }

    #[test]
    fn write_dxf_to_file() {
        let layout = ConeLayout::new(300.0, 100.0, 200.0).unwrap();
        let path = std::env::temp_dir().join(format!("conus-{}.dxf", std::process::id()));
        layout.write_dxf(LengthUnit::Millimetre, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(entity_count(&text, "LINE"), 2);
        assert_eq!(entity_count(&text, "ARC"), 2);
        assert_eq!(header_value(&text, "$INSUNITS"), Some(("70", "4")));
    }

    #[test]
    fn full_cone_exports_one_arc() {
        let layout = ConeLayout::new(200.0, 0.0, 300.0).unwrap();
        let text = String::from_utf8(layout.to_dxf(LengthUnit::Inch).unwrap()).unwrap();
        assert_eq!(entity_count(&text, "ARC"), 1);
    }
}
