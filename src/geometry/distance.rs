use crate::domain::Point2D;

/// Mean Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

const YARDS_PER_METER: f64 = 1.09361;

/// Great-circle distance between two points in meters (haversine)
pub fn distance_meters(a: Point2D, b: Point2D) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

pub fn distance_yards(a: Point2D, b: Point2D) -> f64 {
    distance_meters(a, b) * YARDS_PER_METER
}
