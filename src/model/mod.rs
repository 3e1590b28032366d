//! API data transfer objects.
//!
//! Serializable request and response shapes for the HTTP surface. Conversion to
//! and from domain models happens at the controller and service boundaries.

pub mod api;
pub mod course;
pub mod student;
pub mod student_course;
