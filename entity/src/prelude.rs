pub use super::course::Entity as Course;
pub use super::location::Entity as Location;
pub use super::student::Entity as Student;
pub use super::student_course::Entity as StudentCourse;
