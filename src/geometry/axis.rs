//! Front/back-of-green projection along the line of play
//!
//! The axis runs from the tee to the green centroid in (lng, lat) space. Every
//! vertex of the green (exterior and interior rings, all polygon parts) is
//! projected onto that axis; the nearest vertex is the front of the green and
//! the farthest is the back.
//!
//! Flat-earth approximation: no geodesic correction is applied, which is fine
//! over the few hundred meters a hole spans.

use geo::{CoordsIter, Geometry};
use tracing::debug;

use super::reduce::{is_area, to_point};
use crate::domain::Point2D;

/// Nearest and farthest green vertices along the tee-to-green axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreenEdges {
    pub front: Point2D,
    pub back: Point2D,
}

/// Compute front and back of green for a tee position.
///
/// Returns `None` when the green is not an area, its centroid cannot be
/// computed, or the tee sits exactly on the centroid (no forward direction).
///
/// Ties keep the first vertex in traversal order. Interior rings are included
/// in the vertex set.
pub fn front_back(tee: Point2D, green: &Geometry<f64>) -> Option<GreenEdges> {
    if !is_area(green) {
        return None;
    }

    let centroid = to_point(green)?;
    let axis = (centroid.lng - tee.lng, centroid.lat - tee.lat);
    let length_sq = axis.0 * axis.0 + axis.1 * axis.1;
    if length_sq == 0.0 {
        debug!(?tee, "tee coincides with green centroid, no front/back");
        return None;
    }
    let length = length_sq.sqrt();

    let mut front: Option<(f64, Point2D)> = None;
    let mut back: Option<(f64, Point2D)> = None;

    for coord in green.coords_iter() {
        let vertex = Point2D::new(coord.y, coord.x);
        let t = scalar_projection(tee, axis, length, vertex);

        if front.is_none_or(|(best, _)| t < best) {
            front = Some((t, vertex));
        }
        if back.is_none_or(|(best, _)| t > best) {
            back = Some((t, vertex));
        }
    }

    Some(GreenEdges {
        front: front?.1,
        back: back?.1,
    })
}

/// Signed distance of `point`'s foot on the axis, in axis units (degrees)
fn scalar_projection(origin: Point2D, axis: (f64, f64), length: f64, point: Point2D) -> f64 {
    let dx = point.lng - origin.lng;
    let dy = point.lat - origin.lat;
    (dx * axis.0 + dy * axis.1) / length
}
