//! HTTP request handlers.
//!
//! Controllers validate request input, convert DTOs to parameter types, call
//! the matching service, and map the outcome to a status code and JSON body.

pub mod course;
pub mod student;
pub mod student_course;
