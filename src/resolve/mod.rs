pub mod classify;
pub mod course;
pub mod hole;

pub use classify::{classify, select_tee};
pub use course::{resolve_course, resolve_course_parallel};
pub use hole::resolve_hole;
