pub mod axis;
pub mod distance;
pub mod reduce;

pub use axis::{GreenEdges, front_back};
pub use distance::{distance_meters, distance_yards};
pub use reduce::{feature_point, is_area, to_point};
