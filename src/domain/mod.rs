pub mod coords;
pub mod course;
pub mod feature;

pub use coords::{Hazard, HoleCoordinates, Point2D};
pub use course::{Course, Hole};
pub use feature::{FeatureRole, GeoFeature, HazardKind};
