use geo::Geometry;
use serde::Serialize;

/// Hazard kinds recognised on a hole. Closed set: any other tag is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Bunker,
    Water,
    Ob,
    Target,
}

impl HazardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardKind::Bunker => "bunker",
            HazardKind::Water => "water",
            HazardKind::Ob => "ob",
            HazardKind::Target => "target",
        }
    }
}

/// Role of a feature within its hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureRole {
    Tee,
    Green,
    Pin,
    Hazard(HazardKind),
    Unclassified,
}

impl FeatureRole {
    /// Classify a role tag into a FeatureRole
    ///
    /// Matching is exact on the normalized (trimmed, lowercase) tag. Hazard-like
    /// tags outside the known set ("water_hazard", "sand") are Unclassified.
    pub fn from_tag(tag: &str) -> FeatureRole {
        match tag {
            "tee" => FeatureRole::Tee,
            "green" => FeatureRole::Green,
            "pin" => FeatureRole::Pin,
            "bunker" => FeatureRole::Hazard(HazardKind::Bunker),
            "water" => FeatureRole::Hazard(HazardKind::Water),
            "ob" => FeatureRole::Hazard(HazardKind::Ob),
            "target" => FeatureRole::Hazard(HazardKind::Target),
            _ => FeatureRole::Unclassified,
        }
    }
}

/// A tagged geometry belonging to a hole
///
/// Coordinates are stored GeoJSON-style: `x` is longitude, `y` is latitude.
/// `geometry` is `None` when the source coordinates could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub tag: Option<String>,
    pub tee_set: Option<String>,
    pub geometry: Option<Geometry<f64>>,
}

impl GeoFeature {
    pub fn new(tag: impl Into<String>, geometry: Geometry<f64>) -> Self {
        Self {
            tag: Some(tag.into()),
            tee_set: None,
            geometry: Some(geometry),
        }
    }

    pub fn untagged(geometry: Geometry<f64>) -> Self {
        Self {
            tag: None,
            tee_set: None,
            geometry: Some(geometry),
        }
    }

    pub fn with_tee_set(mut self, tee_set: impl Into<String>) -> Self {
        self.tee_set = Some(tee_set.into());
        self
    }
}
