//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use conus::{
    float_types::Real,
    pattern::{Pattern, Primitive},
};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison for values spanning many orders of magnitude.
pub fn rel_eq(a: Real, b: Real, rel: Real) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

pub fn point_eq(p: Point2<Real>, q: Point2<Real>, eps: Real) -> bool {
    approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps)
}

/// Count primitives of each kind, descending into groups: `[lines, arcs, polylines, texts]`.
pub fn count_kinds(pattern: &Pattern) -> [usize; 4] {
    let mut counts = [0; 4];
    for p in pattern.flatten() {
        match p {
            Primitive::Line { .. } => counts[0] += 1,
            Primitive::Arc { .. } => counts[1] += 1,
            Primitive::Polyline { .. } => counts[2] += 1,
            Primitive::Text { .. } => counts[3] += 1,
            Primitive::Group { .. } => {},
        }
    }
    counts
}
