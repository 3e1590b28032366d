pub mod course;
pub mod location;
pub mod prelude;
pub mod student;
pub mod student_course;
