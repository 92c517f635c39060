use super::GeoFeature;

/// One hole of a course with its tagged features, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub number: u32,
    pub par: Option<u8>,
    pub yards: Option<u32>,
    pub features: Vec<GeoFeature>,
}

impl Hole {
    pub fn new(number: u32, features: Vec<GeoFeature>) -> Self {
        Self {
            number,
            par: None,
            yards: None,
            features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Course {
    pub name: Option<String>,
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn new(holes: Vec<Hole>) -> Self {
        Self { name: None, holes }
    }

    /// Distinct tee-set names across all holes, in first-seen order
    pub fn tee_sets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for feature in self.holes.iter().flat_map(|h| &h.features) {
            if let Some(name) = feature.tee_set.as_deref()
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }
}
