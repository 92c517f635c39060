use geo::{Coord, Geometry, LineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Course, GeoFeature, Hole};

/// Property keys holding the role tag, in lookup order
const TAG_KEYS: [&str; 3] = ["golf", "type", "role"];
/// Property keys holding the tee-set name, in lookup order
const TEE_SET_KEYS: [&str; 2] = ["teeSet", "tee_set"];

#[derive(Debug, Error)]
pub enum CourseFileError {
    #[error("failed to read course file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid course JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw course document
#[derive(Debug, Deserialize)]
pub struct CourseFile {
    #[serde(default)]
    pub name: Option<String>,
    pub holes: Vec<HoleEntry>,
}

/// A hole entry. Only `number` is structural; everything else is read leniently.
#[derive(Debug, Deserialize)]
pub struct HoleEntry {
    pub number: u32,
    #[serde(default)]
    pub par: Value,
    #[serde(default)]
    pub yards: Value,
    /// A GeoJSON FeatureCollection or a bare array of Feature objects
    #[serde(default)]
    pub features: Value,
}

/// Parse a course document from a JSON string
pub fn parse_course(json: &str) -> Result<Course, CourseFileError> {
    let file: CourseFile = serde_json::from_str(json)?;
    Ok(course_from_file(file))
}

/// Read and parse a course document from disk
pub fn read_course(path: &Path) -> Result<Course, CourseFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CourseFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_course(&contents)
}

/// Convert a raw course document into domain types
///
/// # Algorithm
/// 1. Holes keep their document order and numbers
/// 2. Features come from a FeatureCollection's `features` or a bare array;
///    anything else gives the hole no features
/// 3. Role tag: first string among `golf`, `type`, `role` properties
/// 4. Tee-set: first string among `teeSet`, `tee_set` properties
/// 5. Geometry: GeoJSON (lon, lat) positions; unreadable geometry leaves it `None`
pub fn course_from_file(file: CourseFile) -> Course {
    let holes = file
        .holes
        .into_iter()
        .map(|entry| Hole {
            number: entry.number,
            par: entry.par.as_u64().and_then(|v| u8::try_from(v).ok()),
            yards: entry.yards.as_u64().and_then(|v| u32::try_from(v).ok()),
            features: feature_values(&entry.features)
                .iter()
                .map(feature_from_value)
                .collect(),
        })
        .collect();

    Course {
        name: file.name,
        holes,
    }
}

fn feature_values(features: &Value) -> &[Value] {
    let list = match features {
        Value::Object(collection) => collection.get("features").and_then(Value::as_array),
        Value::Array(items) => Some(items),
        _ => None,
    };
    list.map(Vec::as_slice).unwrap_or(&[])
}

/// Read one Feature object. Non-object properties leave the feature untagged.
fn feature_from_value(value: &Value) -> GeoFeature {
    let properties = value.get("properties").and_then(Value::as_object);

    GeoFeature {
        tag: properties.and_then(|p| first_string(p, &TAG_KEYS)),
        tee_set: properties.and_then(|p| first_string(p, &TEE_SET_KEYS)),
        geometry: value.get("geometry").and_then(parse_geometry),
    }
}

fn first_string(properties: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| properties.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn parse_geometry(geometry: &Value) -> Option<Geometry<f64>> {
    if geometry.is_null() {
        return None;
    }

    let type_ = geometry.get("type").and_then(Value::as_str).unwrap_or("");
    let parsed = geometry
        .get("coordinates")
        .and_then(|coordinates| parse_typed(type_, coordinates));

    if parsed.is_none() {
        debug!(geometry_type = %type_, "unreadable or unsupported geometry");
    }
    parsed
}

fn parse_typed(type_: &str, c: &Value) -> Option<Geometry<f64>> {
    match type_ {
        "Point" => parse_position(c).map(|coord| Geometry::Point(Point::from(coord))),
        "MultiPoint" => parse_positions(c).map(|coords| {
            Geometry::MultiPoint(MultiPoint::new(
                coords.into_iter().map(Point::from).collect(),
            ))
        }),
        "LineString" => {
            parse_positions(c).map(|coords| Geometry::LineString(LineString::new(coords)))
        }
        "Polygon" => parse_polygon(c).map(Geometry::Polygon),
        "MultiPolygon" => c
            .as_array()
            .and_then(|parts| parts.iter().map(parse_polygon).collect::<Option<Vec<_>>>())
            .map(|parts| Geometry::MultiPolygon(MultiPolygon::new(parts))),
        _ => None,
    }
}

fn parse_position(value: &Value) -> Option<Coord<f64>> {
    let items = value.as_array()?;
    if items.len() < 2 {
        return None;
    }
    let x = items[0].as_f64()?;
    let y = items[1].as_f64()?;
    (x.is_finite() && y.is_finite()).then_some(Coord { x, y })
}

fn parse_positions(value: &Value) -> Option<Vec<Coord<f64>>> {
    value.as_array()?.iter().map(parse_position).collect()
}

fn parse_polygon(value: &Value) -> Option<Polygon<f64>> {
    let mut rings = value
        .as_array()?
        .iter()
        .map(|ring| parse_positions(ring).map(LineString::new))
        .collect::<Option<Vec<_>>>()?
        .into_iter();

    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}
