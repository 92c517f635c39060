//! coursegeo - Resolve golf course hole geometry into per-hole coordinates

pub mod config;
pub mod domain;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod resolve;

pub use domain::{Course, GeoFeature, Hazard, HazardKind, Hole, HoleCoordinates, Point2D};
pub use resolve::{resolve_course, resolve_course_parallel, resolve_hole};
