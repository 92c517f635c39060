use rayon::prelude::*;

use super::hole::resolve_hole;
use crate::domain::{Course, HoleCoordinates};

/// Resolve every hole of a course, in input order.
///
/// The same tee-set name (if any) applies to every hole. Output has exactly
/// one record per input hole.
pub fn resolve_course(course: &Course, tee_set: Option<&str>) -> Vec<HoleCoordinates> {
    course
        .holes
        .iter()
        .map(|hole| resolve_hole(hole, tee_set))
        .collect()
}

/// Same as [`resolve_course`], with holes resolved on the rayon pool
pub fn resolve_course_parallel(course: &Course, tee_set: Option<&str>) -> Vec<HoleCoordinates> {
    course
        .holes
        .par_iter()
        .map(|hole| resolve_hole(hole, tee_set))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoFeature, Hole};
    use geo::{Geometry, point};

    fn course() -> Course {
        let pin = |lat: f64| GeoFeature::new("pin", Geometry::Point(point! { x: -118.0, y: lat }));
        Course::new(vec![
            Hole::new(10, vec![pin(34.0)]),
            Hole::new(3, vec![]),
            Hole::new(7, vec![pin(34.2)]),
        ])
    }

    #[test]
    fn test_order_and_numbers_preserved() {
        let course = course();
        let resolved = resolve_course(&course, None);

        assert_eq!(resolved.len(), course.holes.len());
        for (coords, hole) in resolved.iter().zip(&course.holes) {
            assert_eq!(coords.hole_number, hole.number);
        }
        assert!(resolved[1].is_unresolved());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let course = course();
        assert_eq!(
            resolve_course_parallel(&course, Some("blue")),
            resolve_course(&course, Some("blue"))
        );
    }

    #[test]
    fn test_empty_course() {
        assert!(resolve_course(&Course::default(), None).is_empty());
    }
}
