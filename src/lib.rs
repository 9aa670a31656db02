//! Flat patterns of **cones and cone frustums** for sheet metal and lasercut work.
//!
//! Given the base diameter, the cut (top) diameter and the height of a frustum,
//! [`cone::compute_layout`] unrolls its lateral surface into an annular sector:
//! two radial edges and two concentric arcs around the (virtual) apex.
//! [`pattern::render`] turns the layout into vector primitives in drawing
//! units, optionally with dimension markup, and the [`io`] module writes
//! them out.
//!
//! ```
//! use conus::{ConeLayout, RenderConfig, render};
//! let layout = ConeLayout::new(300.0, 100.0, 200.0).unwrap();
//! let pattern = render(&layout, &RenderConfig::default());
//! assert_eq!(pattern.primitives.len(), 4);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: write patterns as SVG (Inkscape-editable arcs)
//! - **dxf-io**: write cut outlines as [DXF](https://en.wikipedia.org/wiki/AutoCAD_DXF)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod annotate;
pub mod color;
pub mod cone;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod pattern;
pub mod style;
pub mod units;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use color::Rgb;
pub use cone::{ConeLayout, ConeSpec, compute_layout};
pub use config::ConeConfig;
pub use errors::{ConeError, GeometryConstraint};
pub use pattern::{Pattern, Primitive, RenderConfig, render};
pub use units::LengthUnit;
