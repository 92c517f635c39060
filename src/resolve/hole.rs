use tracing::{debug, warn};

use super::classify::{classify, select_tee};
use crate::domain::{FeatureRole, GeoFeature, Hazard, Hole, HoleCoordinates, Point2D};
use crate::geometry::{feature_point, front_back};

/// Resolve one hole's features into its coordinate record
///
/// # Algorithm
/// 1. Classify every feature; the first green and first pin win
/// 2. Pick the tee (by tee-set name if given, else the first tee)
/// 3. Reduce tee, green and pin to points
/// 4. green falls back to pin, then to [`Point2D::SENTINEL`]
/// 5. Project the green outline onto the tee-to-green axis for front/back
/// 6. Reduce each hazard to a point, keeping feature order
///
/// Never fails; missing or degenerate geometry only leaves fields absent.
pub fn resolve_hole(hole: &Hole, tee_set: Option<&str>) -> HoleCoordinates {
    let mut green_feature: Option<&GeoFeature> = None;
    let mut pin_feature: Option<&GeoFeature> = None;
    let mut hazards = Vec::new();

    for feature in &hole.features {
        match classify(feature) {
            FeatureRole::Green => {
                green_feature.get_or_insert(feature);
            }
            FeatureRole::Pin => {
                pin_feature.get_or_insert(feature);
            }
            FeatureRole::Hazard(kind) => {
                if let Some(point) = feature_point(feature) {
                    hazards.push(Hazard::new(kind, point));
                }
            }
            FeatureRole::Tee => {}
            FeatureRole::Unclassified => {
                debug!(hole = hole.number, tag = ?feature.tag, "skipping unclassified feature");
            }
        }
    }

    let tee = select_tee(&hole.features, tee_set).and_then(feature_point);
    let pin = pin_feature.and_then(feature_point);
    let green_point = green_feature.and_then(feature_point);

    let edges = match (tee, green_feature.and_then(|f| f.geometry.as_ref())) {
        (Some(tee), Some(green)) => front_back(tee, green),
        _ => None,
    };

    let green = green_point.or(pin).unwrap_or_else(|| {
        warn!(hole = hole.number, "no green or pin geometry, using sentinel");
        Point2D::SENTINEL
    });

    HoleCoordinates {
        hole_number: hole.number,
        green,
        pin,
        tee,
        front: edges.map(|e| e.front),
        back: edges.map(|e| e.back),
        hazards,
    }
}
