use serde::Serialize;

use super::HazardKind;

/// A lat/lng pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2D {
    pub lat: f64,
    pub lng: f64,
}

impl Point2D {
    /// Placeholder for "no resolvable location". Not a real position.
    pub const SENTINEL: Point2D = Point2D { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// A hazard reduced to a single representative point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hazard {
    #[serde(rename = "type")]
    pub kind: HazardKind,
    pub lat: f64,
    pub lng: f64,
}

impl Hazard {
    pub fn new(kind: HazardKind, point: Point2D) -> Self {
        Self {
            kind,
            lat: point.lat,
            lng: point.lng,
        }
    }
}

/// Resolved coordinates for one hole
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleCoordinates {
    pub hole_number: u32,
    /// Always present: green centroid, else pin, else [`Point2D::SENTINEL`]
    pub green: Point2D,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<Point2D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tee: Option<Point2D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<Point2D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<Point2D>,
    pub hazards: Vec<Hazard>,
}

impl HoleCoordinates {
    /// Record for a hole with no usable geometry
    pub fn unresolved(hole_number: u32) -> Self {
        Self {
            hole_number,
            green: Point2D::SENTINEL,
            pin: None,
            tee: None,
            front: None,
            back: None,
            hazards: Vec::new(),
        }
    }

    pub fn is_unresolved(&self) -> bool {
        self.green.is_sentinel()
    }
}
