use geo::{Area, Centroid, CoordsIter, Geometry};
use tracing::debug;

use crate::domain::{GeoFeature, Point2D};

/// Reduce a geometry to a single representative lat/lng point.
///
/// - Point: the point itself, swapped from (lng, lat) storage to (lat, lng)
/// - Polygon / MultiPolygon: area-weighted centroid of the combined area
/// - Anything else: `None`
///
/// Polygons with zero area or non-finite coordinates also yield `None`.
pub fn to_point(geometry: &Geometry<f64>) -> Option<Point2D> {
    match geometry {
        Geometry::Point(p) => finite_point(p.y(), p.x()),
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => area_centroid(geometry),
        _ => None,
    }
}

/// Reduce a feature's geometry, if it has one
pub fn feature_point(feature: &GeoFeature) -> Option<Point2D> {
    let point = feature.geometry.as_ref().and_then(to_point);
    if point.is_none() {
        debug!(tag = ?feature.tag, "feature geometry did not reduce to a point");
    }
    point
}

/// True for Polygon and MultiPolygon geometries
pub fn is_area(geometry: &Geometry<f64>) -> bool {
    matches!(geometry, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
}

fn area_centroid(geometry: &Geometry<f64>) -> Option<Point2D> {
    if geometry
        .coords_iter()
        .any(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        return None;
    }

    // geo falls back to a perimeter centroid for zero-area rings; reject those
    if geometry.unsigned_area() <= 0.0 {
        return None;
    }

    let centroid = geometry.centroid()?;
    finite_point(centroid.y(), centroid.x())
}

fn finite_point(lat: f64, lng: f64) -> Option<Point2D> {
    (lat.is_finite() && lng.is_finite()).then(|| Point2D::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{LineString, MultiPolygon, Polygon, line_string, point, polygon};

    #[test]
    fn test_point_swaps_to_lat_lng() {
        let geometry = Geometry::Point(point! { x: -118.0, y: 34.0 });
        assert_eq!(to_point(&geometry), Some(Point2D::new(34.0, -118.0)));
    }

    #[test]
    fn test_polygon_centroid_is_area_weighted() {
        // Extra vertices along the bottom edge must not drag the centroid down
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.5, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.5, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ];
        let centroid = to_point(&Geometry::Polygon(square)).unwrap();
        assert_relative_eq!(centroid.lat, 1.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.lng, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multipolygon_centroid_combines_parts() {
        let left = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let right = polygon![
            (x: 3.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 1.0),
            (x: 3.0, y: 1.0),
            (x: 3.0, y: 0.0),
        ];
        let geometry = Geometry::MultiPolygon(MultiPolygon::new(vec![left, right]));
        let centroid = to_point(&geometry).unwrap();
        assert_relative_eq!(centroid.lng, 2.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.lat, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_polygon_is_absent() {
        let flat = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 0.0, y: 0.0),
        ];
        assert_eq!(to_point(&Geometry::Polygon(flat)), None);

        let empty = Polygon::new(LineString::new(vec![]), vec![]);
        assert_eq!(to_point(&Geometry::Polygon(empty)), None);
    }

    #[test]
    fn test_non_finite_is_absent() {
        let geometry = Geometry::Point(point! { x: f64::NAN, y: 34.0 });
        assert_eq!(to_point(&geometry), None);
    }

    #[test]
    fn test_unsupported_geometry_is_absent() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        assert_eq!(to_point(&Geometry::LineString(line)), None);
    }

    #[test]
    fn test_feature_without_geometry_is_absent() {
        let feature = GeoFeature {
            tag: Some("green".to_string()),
            tee_set: None,
            geometry: None,
        };
        assert_eq!(feature_point(&feature), None);
    }
}
