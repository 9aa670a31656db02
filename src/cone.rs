//! Unfolding a right circular cone or frustum into its flat pattern.
//!
//! The lateral surface of a frustum, cut along one slant line and laid flat,
//! is an annular sector centered on the (virtual) cone apex:
//!
//! ```text
//!            C
//!          .´|
//!        .´  |      A, B on the x-axis (angle 0)
//!      D´    |      C, D at angle θ
//!      |     |
//!   M  A-----B      M = apex, |MA| = short radius, |MB| = long radius
//! ```

use crate::errors::{ConeError, GeometryConstraint};
use crate::float_types::{NEAR_DEGENERATE_RATIO, PI, Real, TAU};
use geo::{Coord, LineString, Polygon as GeoPolygon, Rect, coord};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Largest sector angle below a full turn. A very flat cone unfolds to a
/// sector that rounds to exactly 2π and is pinned here instead.
const MAX_SECTOR_ANGLE: Real = TAU * (1.0 - Real::EPSILON);

/// The three physical dimensions of a cone or frustum, in any linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeSpec {
    pub base_diameter: Real,
    /// `0.0` for a full (un-cut) cone.
    pub cut_diameter: Real,
    pub height: Real,
}

impl Default for ConeSpec {
    fn default() -> Self {
        Self {
            base_diameter: 300.0,
            cut_diameter: 100.0,
            height: 200.0,
        }
    }
}

impl ConeSpec {
    pub const fn new(base_diameter: Real, cut_diameter: Real, height: Real) -> Self {
        Self {
            base_diameter,
            cut_diameter,
            height,
        }
    }

    /// A full cone, apex included.
    pub const fn full(base_diameter: Real, height: Real) -> Self {
        Self::new(base_diameter, 0.0, height)
    }

    /// Check the dimensions describe a cone or frustum, returning the violated
    /// constraint otherwise.
    pub fn validate(&self) -> Result<(), ConeError> {
        let ConeSpec {
            base_diameter: base,
            cut_diameter: cut,
            height,
        } = *self;

        if !(base.is_finite() && cut.is_finite() && height.is_finite()) {
            return Err(GeometryConstraint::NonFinite.into());
        }
        if base <= 0.0 {
            return Err(GeometryConstraint::BaseNotPositive(base).into());
        }
        if cut < 0.0 {
            return Err(GeometryConstraint::CutNegative(cut).into());
        }
        if height <= 0.0 {
            return Err(GeometryConstraint::HeightNotPositive(height).into());
        }
        if base <= cut {
            return Err(GeometryConstraint::CutNotBelowBase { base, cut }.into());
        }
        Ok(())
    }

    /// `true` when the gap between base and cut is so small relative to the
    /// base that the unfold radii become huge and imprecise.
    pub fn is_near_degenerate(&self) -> bool {
        (self.base_diameter - self.cut_diameter) / self.base_diameter < NEAR_DEGENERATE_RATIO
    }

    /// Same as [`compute_layout`].
    pub fn layout(&self) -> Result<ConeLayout, ConeError> {
        compute_layout(*self)
    }

    /// Multiply all three dimensions by `k`.
    pub fn scaled(&self, k: Real) -> Self {
        Self::new(self.base_diameter * k, self.cut_diameter * k, self.height * k)
    }
}

/// The flat pattern of a [`ConeSpec`]: radii, sector angle, chords and the
/// four corner points, all in the unit of the [`ConeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConeLayout {
    spec: ConeSpec,
    short_radius: Real,
    long_radius: Real,
    sector_angle: Real,
    chord_base: Real,
    chord_cut: Real,
    a: Point2<Real>,
    b: Point2<Real>,
    c: Point2<Real>,
    d: Point2<Real>,
}

/// Unfold a cone or frustum.
///
/// ## Mathematics
/// With `base = D - d` (base minus cut diameter) the apex-to-rim distances of
/// the flattened surface are
/// ```text
/// R = √((D/2)² + (D·h/base)²)      long radius
/// r = √((d/2)² + (d·h/base)²)      short radius, 0 when d = 0
/// θ = π·D / R                      sector angle, kept just below 2π
/// chord(ρ) = ρ·√(2·(1 - cos θ)) = 2ρ·sin(θ/2)
/// ```
///
/// # Errors
/// [`ConeError::InvalidGeometry`] naming the violated constraint when the
/// dimensions do not describe a cone (non-positive base or height, negative
/// cut, cut not smaller than base) or a radius exceeds the range of
/// [`Real`], e.g. a base diameter near `Real::MAX`.
///
/// # Example
/// ```
/// use conus::cone::{ConeSpec, compute_layout};
/// let layout = compute_layout(ConeSpec::new(300.0, 100.0, 200.0)).unwrap();
/// assert!((layout.long_radius() - 335.41).abs() < 0.01);
/// ```
pub fn compute_layout(spec: ConeSpec) -> Result<ConeLayout, ConeError> {
    spec.validate()?;

    let ConeSpec {
        base_diameter: dia_base,
        cut_diameter: dia_cut,
        height,
    } = spec;

    if spec.is_near_degenerate() {
        warn!(
            base = dia_base,
            cut = dia_cut,
            "cut diameter is nearly equal to base diameter, unfold radii are ill-conditioned"
        );
    }

    let base = dia_base - dia_cut;
    let rise = height / base;
    // hypot keeps the radii finite across the whole exponent range
    let apex_distance = |diameter: Real| (diameter / 2.0).hypot(diameter * rise);

    let short_radius = if dia_cut > 0.0 { apex_distance(dia_cut) } else { 0.0 };
    let long_radius = apex_distance(dia_base);
    let mut sector_angle = PI * dia_base / long_radius;
    if sector_angle >= MAX_SECTOR_ANGLE {
        debug!(height, sector_angle, "nearly flat cone, sector angle rounded to a full turn");
        sector_angle = MAX_SECTOR_ANGLE;
    }

    // √(2·(1 - cos θ)) written as 2·sin(θ/2): no cancellation for slender cones
    let chord_factor = 2.0 * (sector_angle / 2.0).sin();
    let chord_base = long_radius * chord_factor;
    let chord_cut = short_radius * chord_factor;

    let (sin, cos) = sector_angle.sin_cos();
    let layout = ConeLayout {
        spec,
        short_radius,
        long_radius,
        sector_angle,
        chord_base,
        chord_cut,
        a: Point2::new(short_radius, 0.0),
        b: Point2::new(long_radius, 0.0),
        c: Point2::new(long_radius * cos, long_radius * sin),
        d: Point2::new(short_radius * cos, short_radius * sin),
    };

    if !layout.is_finite() {
        return Err(GeometryConstraint::IllConditioned {
            base: dia_base,
            cut: dia_cut,
        }
        .into());
    }

    debug!(
        base_diameter = dia_base,
        cut_diameter = dia_cut,
        height,
        short_radius,
        long_radius,
        angle_rad = sector_angle,
        angle_deg = sector_angle.to_degrees(),
        chord_base,
        chord_cut,
        "computed cone layout"
    );

    Ok(layout)
}

impl ConeLayout {
    /// Unfold a cone given its base diameter, cut diameter and height.
    pub fn new(base_diameter: Real, cut_diameter: Real, height: Real) -> Result<Self, ConeError> {
        compute_layout(ConeSpec::new(base_diameter, cut_diameter, height))
    }

    pub const fn spec(&self) -> &ConeSpec {
        &self.spec
    }

    /// Distance from the apex to the cut circle. `0.0` for a full cone.
    pub const fn short_radius(&self) -> Real {
        self.short_radius
    }

    /// Distance from the apex to the base circle (the full slant height).
    pub const fn long_radius(&self) -> Real {
        self.long_radius
    }

    /// Angle of the circle sector in radians, in `(0, 2π)`.
    pub const fn sector_angle(&self) -> Real {
        self.sector_angle
    }

    pub fn sector_angle_degrees(&self) -> Real {
        self.sector_angle.to_degrees()
    }

    /// Straight distance between B and C.
    pub const fn chord_base(&self) -> Real {
        self.chord_base
    }

    /// Straight distance between A and D.
    pub const fn chord_cut(&self) -> Real {
        self.chord_cut
    }

    /// Start of the short arc, on the x-axis.
    pub const fn a(&self) -> Point2<Real> {
        self.a
    }

    /// Start of the long arc, on the x-axis.
    pub const fn b(&self) -> Point2<Real> {
        self.b
    }

    /// End of the long arc.
    pub const fn c(&self) -> Point2<Real> {
        self.c
    }

    /// End of the short arc.
    pub const fn d(&self) -> Point2<Real> {
        self.d
    }

    pub fn is_full_cone(&self) -> bool {
        self.spec.cut_diameter == 0.0
    }

    /// Length of a radial edge (A–B or D–C).
    pub fn slant_height(&self) -> Real {
        self.long_radius - self.short_radius
    }

    /// Arc length of the base arc, equal to the base circumference.
    pub fn developed_base_arc(&self) -> Real {
        self.long_radius * self.sector_angle
    }

    /// Arc length of the cut arc, equal to the cut circumference.
    pub fn developed_cut_arc(&self) -> Real {
        self.short_radius * self.sector_angle
    }

    /// Area of the flat blank, i.e. the lateral surface of the frustum.
    pub fn lateral_area(&self) -> Real {
        0.5 * self.sector_angle
            * (self.long_radius * self.long_radius - self.short_radius * self.short_radius)
    }

    /// Polygonal approximation of the flat blank, `segments` per arc:
    /// long arc B→C, edge C→D, short arc D→A, edge A→B.
    /// For a full cone the short arc collapses to the apex.
    pub fn outline(&self, segments: usize) -> GeoPolygon<Real> {
        let segments = segments.max(1);
        let arc = |radius: Real, reverse: bool| -> Vec<Coord<Real>> {
            (0..=segments)
                .map(|i| {
                    let i = if reverse { segments - i } else { i };
                    let t = self.sector_angle * i as Real / segments as Real;
                    coord! { x: radius * t.cos(), y: radius * t.sin() }
                })
                .collect()
        };

        let mut coords = arc(self.long_radius, false);
        if self.is_full_cone() {
            coords.push(coord! { x: 0.0, y: 0.0 });
        } else {
            coords.extend(arc(self.short_radius, true));
        }
        coords.push(coords[0]);

        GeoPolygon::new(LineString::new(coords), vec![])
    }

    /// Exact axis-aligned bounds of the flat blank.
    pub fn bounding_rect(&self) -> Rect<Real> {
        let mut candidates = vec![self.a, self.b, self.c, self.d];
        // the arcs reach their extreme along every axis direction they sweep over
        for quarter in 1..4 {
            let angle = quarter as Real * PI / 2.0;
            if angle < self.sector_angle {
                let (sin, cos) = angle.sin_cos();
                candidates.push(Point2::new(self.long_radius * cos, self.long_radius * sin));
            }
        }

        let (mut min_x, mut min_y) = (Real::MAX, Real::MAX);
        let (mut max_x, mut max_y) = (Real::MIN, Real::MIN);
        for p in candidates {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y })
    }

    fn is_finite(&self) -> bool {
        [
            self.short_radius,
            self.long_radius,
            self.sector_angle,
            self.chord_base,
            self.chord_cut,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.sector_angle > 0.0
            && self.sector_angle < TAU
    }
}

impl std::fmt::Display for ConeLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Base diameter: {}", self.spec.base_diameter)?;
        writeln!(f, "Cut diameter: {}", self.spec.cut_diameter)?;
        writeln!(f, "Cone height: {}", self.spec.height)?;
        writeln!(f, "Short radius: {}", self.short_radius)?;
        writeln!(f, "Long radius: {}", self.long_radius)?;
        writeln!(
            f,
            "Angle of circle sector: {} radians (= {} degrees)",
            self.sector_angle,
            self.sector_angle_degrees()
        )?;
        writeln!(f, "Chord length of base arc: {}", self.chord_base)?;
        write!(f, "Chord length of cut arc: {}", self.chord_cut)
    }
}
