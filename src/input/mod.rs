pub mod parser;

pub use parser::{CourseFileError, parse_course, read_course};
