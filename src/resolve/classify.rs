use crate::domain::{FeatureRole, GeoFeature};

/// Classify a feature by its role tag. Missing or unknown tags are Unclassified.
pub fn classify(feature: &GeoFeature) -> FeatureRole {
    match feature.tag.as_deref() {
        Some(tag) => FeatureRole::from_tag(&tag.trim().to_ascii_lowercase()),
        None => FeatureRole::Unclassified,
    }
}

/// Pick the tee for a hole.
///
/// With a tee-set name, the first tee whose tee-set matches it; without one,
/// the first tee. No match gives `None`: a named set never falls back to
/// another set's tee.
pub fn select_tee<'a>(features: &'a [GeoFeature], tee_set: Option<&str>) -> Option<&'a GeoFeature> {
    let mut tees = features
        .iter()
        .filter(|f| classify(f) == FeatureRole::Tee);

    match tee_set {
        Some(name) => tees.find(|f| f.tee_set.as_deref() == Some(name)),
        None => tees.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HazardKind;
    use geo::{Geometry, point};

    fn feature(tag: &str, x: f64, y: f64) -> GeoFeature {
        GeoFeature::new(tag, Geometry::Point(point! { x: x, y: y }))
    }

    #[test]
    fn test_classify_normalizes_tag() {
        assert_eq!(classify(&feature(" Bunker ", 0.0, 0.0)), FeatureRole::Hazard(HazardKind::Bunker));
        assert_eq!(classify(&feature("GREEN", 0.0, 0.0)), FeatureRole::Green);
    }

    #[test]
    fn test_classify_untagged_and_unknown() {
        let untagged = GeoFeature::untagged(Geometry::Point(point! { x: 0.0, y: 0.0 }));
        assert_eq!(classify(&untagged), FeatureRole::Unclassified);
        assert_eq!(classify(&feature("fairway", 0.0, 0.0)), FeatureRole::Unclassified);
        assert_eq!(classify(&feature("lateral_water_hazard", 0.0, 0.0)), FeatureRole::Unclassified);
    }

    #[test]
    fn test_select_tee_first_without_set() {
        let features = vec![
            feature("green", 5.0, 5.0),
            feature("tee", 1.0, 1.0).with_tee_set("white"),
            feature("tee", 2.0, 2.0).with_tee_set("blue"),
        ];
        let tee = select_tee(&features, None).unwrap();
        assert_eq!(tee.tee_set.as_deref(), Some("white"));
    }

    #[test]
    fn test_select_tee_by_set() {
        let features = vec![
            feature("tee", 1.0, 1.0).with_tee_set("white"),
            feature("tee", 2.0, 2.0).with_tee_set("blue"),
        ];
        let tee = select_tee(&features, Some("blue")).unwrap();
        assert_eq!(tee.tee_set.as_deref(), Some("blue"));
        assert!(select_tee(&features, Some("red")).is_none());
    }

    #[test]
    fn test_select_tee_ignores_tee_set_on_other_roles() {
        let features = vec![feature("pin", 1.0, 1.0).with_tee_set("blue")];
        assert!(select_tee(&features, Some("blue")).is_none());
    }
}
